// Prompt text for the sound-design path.
// Technical exercises emulate a reference artist; creative ones follow an archetype.

use crate::llm_client::prompts::{tips_section_instruction, SOUND_DESIGN_TIPS_HEADING};
use crate::sound_design::synth::{SoundExercise, Synthesizer};

fn characteristics(synthesizer: Synthesizer) -> &'static str {
    match synthesizer {
        Synthesizer::Serum2 => "Serum 2 is a wavetable synthesizer with wavetable, multisample, \
            granular and spectral oscillators, a visual wavetable editor, a drag-and-drop \
            modulation matrix and a reorderable effects rack.",
        Synthesizer::PhasePlant => "Phase Plant is a modular synthesizer built from generators \
            (analog, wavetable, sample, granular, noise) arranged in up to three lanes, with \
            Snapin effects, flexible routing and a large library of modulators.",
        Synthesizer::Vital => "Vital is a spectral-warping wavetable synthesizer with \
            text-to-wavetable and audio-to-wavetable import, drawable LFO shapes, animated \
            modulation feedback and a built-in effects chain.",
    }
}

/// Artists whose signature sounds technical exercises may target.
fn reference_artists(synthesizer: Synthesizer) -> &'static [&'static str] {
    match synthesizer {
        Synthesizer::Serum2 => &["Skrillex", "Virtual Riot", "Seven Lions", "Deadmau5", "Illenium"],
        Synthesizer::PhasePlant => &["Mr. Bill", "Au5", "Noisia", "Tipper", "Culprate"],
        Synthesizer::Vital => &["Flume", "Porter Robinson", "Madeon", "San Holo", "Virtual Riot"],
    }
}

/// The nine creative exercise archetypes with a one-line framing each.
pub const CREATIVE_ARCHETYPES: [(&str, &str); 9] = [
    ("Seed", "grow a whole patch from one tiny starting sound"),
    ("Translation", "turn something non-musical (an image, a place, a feeling) into sound"),
    ("Limitation", "work within a strict restriction on sources, modules or time"),
    ("Accident", "start from randomness or a mistake and follow where it leads"),
    ("Awareness", "listen closely to one parameter or detail and notice how it behaves"),
    ("Context Shift", "take a familiar sound and move it into an unfamiliar role"),
    ("Play", "treat the synthesizer like a toy and explore without a goal"),
    ("Synesthesia", "design from colour, texture, temperature or movement"),
    ("Discovery", "find a feature or interaction you have never used before"),
];

const CREATIVE_STYLE_RULES: &str = "Style rules:\n\
    - No evaluative language: never call a result good, bad, correct or wrong.\n\
    - Favor open questions over instructions wherever you can.\n\
    - Suggest a duration for the exercise, and vary it between 5 and 45 minutes.\n\
    - Keep the exercise to a short paragraph plus the tips.";

/// System instruction for the given synthesizer and exercise type.
pub fn system_prompt(synthesizer: Synthesizer, exercise: SoundExercise) -> String {
    match exercise {
        SoundExercise::Technical => format!(
            "You are a sound design instructor and an expert in {synth}. {traits}\n\n\
             Write hands-on technical exercises that teach the user to recreate a signature \
             element of one of these artists' sound: {artists}. Name the artist and the \
             target sound, then give concrete step-by-step instructions that use {synth}'s \
             real modules, controls and routing.",
            synth = synthesizer.name(),
            traits = characteristics(synthesizer),
            artists = reference_artists(synthesizer).join(", "),
        ),
        SoundExercise::Creative => {
            let archetypes = CREATIVE_ARCHETYPES
                .iter()
                .map(|(name, framing)| format!("- {name}: {framing}"))
                .collect::<Vec<_>>()
                .join("\n");
            format!(
                "You are a sound design mentor who uses {synth} to build creative habits. \
                 {traits}\n\n\
                 Every exercise follows exactly one of these archetypes:\n{archetypes}\n\n\
                 {CREATIVE_STYLE_RULES}",
                synth = synthesizer.name(),
                traits = characteristics(synthesizer),
            )
        }
    }
}

/// User instruction. `archetype` is only used for creative exercises; `genre` is an optional style hint.
pub fn user_prompt(
    synthesizer: Synthesizer,
    exercise: SoundExercise,
    archetype: &str,
    genre: Option<&str>,
) -> String {
    let genre_hint = genre
        .map(|g| format!(" The user is working in {g}, so aim the sound at that style."))
        .unwrap_or_default();

    let body = match exercise {
        SoundExercise::Technical => format!(
            "Create a technical sound design exercise for {synth}.{genre_hint}\n\n\
             Format:\n\
             **[Short exercise title]**\n\
             **Target Sound**: [Artist and the signature sound being recreated]\n\
             **Steps**: [Numbered steps using {synth}'s controls]\n\
             **Listen For**: [What tells you the sound is getting close]",
            synth = synthesizer.name(),
        ),
        SoundExercise::Creative => format!(
            "Create a creative sound design exercise for {synth} using the {archetype} \
             archetype.{genre_hint}\n\n\
             Format:\n\
             **[Short evocative title]**\n\
             [One paragraph describing the exercise, ending with an open question]",
            synth = synthesizer.name(),
        ),
    };

    let topic = match exercise {
        SoundExercise::Technical => "synthesis technique",
        SoundExercise::Creative => "creative exploration",
    };

    format!(
        "{body}\n\n{}",
        tips_section_instruction(SOUND_DESIGN_TIPS_HEADING, topic)
    )
}
