// Writing-prompt generation.
// Remote completions go through llm_client; templates are the offline fallback.

pub mod generator;
pub mod handlers;
pub mod postprocess;
pub mod prompts;
pub mod renderer;
pub mod templates;
pub mod tips;
pub mod word_count;
