// Prompt constants for the writing-exercise path.
// The shared tips-section wording lives in llm_client::prompts.

use crate::llm_client::prompts::{tips_section_instruction, WRITING_TIPS_HEADING};

/// System prompt for every writing exercise.
pub const WRITING_SYSTEM: &str = "You are a creative writing instructor teaching techniques and skills. \
    Create exercises that are instructional and teach craft, not story prompts. \
    Avoid character names and specific scenarios. \
    Focus on teaching HOW to write. \
    Always include 3 specific writing tips tailored to the exercise.";

/// One framing of a writing exercise. Replace `{genres}` in `template` before sending.
#[derive(Debug)]
pub struct ExerciseProfile {
    pub name: &'static str,
    template: &'static str,
    tips_topic: &'static str,
    closing: &'static str,
}

impl ExerciseProfile {
    /// Full user instruction for the given comma-joined genre list.
    pub fn instruction(&self, genre_string: &str) -> String {
        format!(
            "{}\n\n{}\n\n{}",
            self.template.replace("{genres}", genre_string),
            tips_section_instruction(WRITING_TIPS_HEADING, self.tips_topic),
            self.closing
        )
    }
}

pub static EXERCISE_PROFILES: &[ExerciseProfile] = &[
    ExerciseProfile {
        name: "Idea Generation Drill",
        template: r#"Create an idea generation exercise for {genres} writing.

Format:
**Exercise Name**: [Creative name]
**Goal**: [One sentence - what skill this develops]
**Exercise**: [Clear instructions explaining the drill]
**Example Progression**: [Show 3 examples from simple to unusual]
**Pro Tip**: [One sentence advice]"#,
        tips_topic: "generating ideas",
        closing: "NO character names. Focus on the TECHNIQUE of generating ideas.",
    },
    ExerciseProfile {
        name: "World-Building Technique",
        template: r#"Create a world-building exercise for {genres}.

Format:
**Technique Name**: [Name]
**Goal**: [What this teaches]
**Exercise**: [Instructions for the technique, 200-250 words]
**Rules**:
- [What to do]
- [What to avoid]
**Example Approach**: [2-3 sentences showing the METHOD]"#,
        tips_topic: "world-building technique",
        closing: "NO character names. Teach the CRAFT.",
    },
    ExerciseProfile {
        name: "Structural Exercise",
        template: r#"Create a structural writing exercise for {genres}.

Format:
**Structure Technique**: [Name]
**Goal**: [What this teaches about story structure]
**The Exercise**: [Explain the structural technique]
**Rules**: [Structural constraints and what they teach]
**Application**: [How to apply in 500 words]"#,
        tips_topic: "story structure",
        closing: "Focus on STRUCTURE and TECHNIQUE.",
    },
    ExerciseProfile {
        name: "Description Technique",
        template: r#"Create a descriptive writing exercise for {genres}.

Format:
**Description Technique**: [Name]
**Goal**: [What skill this builds]
**The Challenge**: [Explain the descriptive technique]
**Requirements**:
- [Technical requirement 1]
- [Technical requirement 2]
- [Word count: 300-400 words]
**Forbidden**: [Generic words/habits to avoid]"#,
        tips_topic: "descriptive writing",
        closing: "Teach CRAFT of description.",
    },
    ExerciseProfile {
        name: "Dialogue Craft",
        template: r#"Create a dialogue craft exercise for {genres}.

Format:
**Dialogue Technique**: [Name]
**Goal**: [What this teaches about dialogue]
**The Exercise**: [Instructions on HOW to write dialogue]
**What Dialogue Should Reveal**: [3 elements]
**Technical Rules**: [2 dialogue rules]"#,
        tips_topic: "dialogue craft",
        closing: "Focus on dialogue CRAFT.",
    },
    ExerciseProfile {
        name: "Theme & Subtext",
        template: r#"Create a theme/subtext exercise for {genres}.

Format:
**Exercise Name**: [Name]
**Goal**: [What this teaches about theme]
**The Challenge**: [How to embed theme without preaching]
**Approach**: [2-3 techniques for showing theme]
**Practice**: [How to practice this skill in 300-500 words]"#,
        tips_topic: "theme and subtext",
        closing: "Teach TECHNIQUE of thematic writing.",
    },
    ExerciseProfile {
        name: "Genre Convention Study",
        template: r#"Create a genre study exercise for {genres}.

Format:
**Genre Exercise**: [Name]
**Goal**: [What this teaches about genre craft]
**The Exercise**: [Instructions for working with genre conventions]
**Genre Mashup Option**: [How to combine {genres} with another genre]
**What You'll Learn**: [2 skills]"#,
        tips_topic: "genre conventions",
        closing: "Focus on GENRE as craft tool.",
    },
    ExerciseProfile {
        name: "Reverse Engineering",
        template: r#"Create a reverse engineering exercise for {genres}.

Format:
**Analysis Exercise**: [Name]
**Goal**: [What this teaches about story construction]
**The Exercise**: Pick a {genres} story you admire. Analyze:
- [Element 1 to outline]
- [Element 2 to outline]
- [Element 3 to outline]
- [Element 4 to outline]
**Then**: [What to do with this analysis]
**What You'll Learn**: [The technique this reveals]"#,
        tips_topic: "analyzing stories",
        closing: "Teach ANALYTICAL skills.",
    },
    ExerciseProfile {
        name: "Constraint Creativity",
        template: r#"Create a constraint-based exercise for {genres}.

Format:
**Constraint Exercise**: [Name]
**Goal**: [What this constraint teaches]
**The Constraint**: [Specific limitation and why it's useful]
**How to Apply It**: [Instructions for using this constraint in 500-750 words]
**What This Teaches**: [The craft skill forced by this constraint]"#,
        tips_topic: "working with constraints",
        closing: "Focus on constraints as LEARNING TOOLS.",
    },
    ExerciseProfile {
        name: "Revision Technique",
        template: r#"Create a revision exercise for {genres}.

Format:
**Revision Technique**: [Name]
**Goal**: [What editing skill this builds]
**The Exercise**: Take any draft and apply this technique:
[Specific revision approach step-by-step]
**What to Look For**: [3 red flags]
**The Fix**: [How to revise each issue]"#,
        tips_topic: "revision and editing",
        closing: "Teach REVISION as craft skill.",
    },
];
