// Shared prompt fragments. Each generation path keeps its own prompts next to it;
// this file only holds what both the writing and sound-design paths send.

/// Heading the writing path asks the model to put above its tips.
pub const WRITING_TIPS_HEADING: &str = "Writing Tips for This Exercise";

/// Heading the sound-design path asks the model to put above its tips.
pub const SOUND_DESIGN_TIPS_HEADING: &str = "Sound Design Tips";

/// Closing instruction that asks for exactly three bullet tips under `heading`.
///
/// The postprocessor locates tips by this heading, so the wording here and the
/// matcher in `generation::postprocess` must agree.
pub fn tips_section_instruction(heading: &str, topic: &str) -> String {
    format!(
        "At the end, add a section:\n\
         **{heading}**:\n\
         - [Tip 1 about {topic}]\n\
         - [Tip 2 about {topic}]\n\
         - [Tip 3 about {topic}]"
    )
}
