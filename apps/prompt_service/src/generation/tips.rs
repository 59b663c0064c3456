/// Maximum number of tips returned with any prompt.
pub const MAX_TIPS: usize = 3;

const GENRE_TIPS: &[(&str, &str)] = &[
    ("Fantasy", "Build a consistent magic system with clear rules and limitations."),
    ("Science Fiction", "Ground your technology in real scientific concepts, even if extrapolated."),
    ("Mystery", "Plant clues fairly throughout the story - readers should be able to solve it."),
    ("Horror", "Build tension through atmosphere and pacing, not just jump scares."),
    ("Romance", "Develop both characters fully - they should be interesting apart and together."),
    ("Thriller", "Keep the pacing tight and end chapters with hooks."),
    ("Historical Fiction", "Research the period thoroughly but don't let facts overwhelm the story."),
    ("Literary Fiction", "Focus on character development and thematic depth."),
    ("Young Adult", "Address serious themes while maintaining an authentic teen voice."),
    ("Crime", "Make your detective's process logical and methodical."),
    ("Adventure", "Balance action sequences with character moments."),
    ("Dystopian", "Create a believable path from our world to yours."),
    ("Magical Realism", "Treat magical elements as mundane parts of the world."),
    ("Western", "Focus on themes of justice, freedom, and survival."),
    ("Biography", "Find the narrative arc in real events."),
    ("Self-Help", "Provide actionable advice with real-world examples."),
    ("Philosophy", "Make abstract concepts concrete through examples."),
    ("Poetry", "Show rather than tell - use vivid imagery."),
];

const GENERAL_TIPS: [&str; 2] = [
    "Start with a strong opening line that immediately engages the reader.",
    "Show character growth through actions and decisions, not just description.",
];

/// Genre tips in selection order, then the general tips, capped at `MAX_TIPS`.
pub fn select_tips(genres: &[String]) -> Vec<String> {
    genres
        .iter()
        .filter_map(|genre| {
            GENRE_TIPS
                .iter()
                .find(|(name, _)| name == genre)
                .map(|(_, tip)| *tip)
        })
        .chain(GENERAL_TIPS)
        .take(MAX_TIPS)
        .map(str::to_string)
        .collect()
}
