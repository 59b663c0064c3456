//! Writing-prompt generation: the completion API when configured, templates otherwise.
//!
//! With a completer: pick an exercise profile, complete, postprocess, then
//! draw a word count. Any completion error drops to the template path for the
//! same genres, so callers never see a remote failure.

use rand::Rng;
use tracing::{error, info};

use crate::generation::postprocess::postprocess;
use crate::generation::prompts::{ExerciseProfile, EXERCISE_PROFILES, WRITING_SYSTEM};
use crate::generation::renderer::{generate_from_template, RenderError};
use crate::generation::word_count::pick_word_count;
use crate::llm_client::{CompletionRequest, TextCompleter};
use crate::models::prompt::{utc_timestamp, WritingPrompt};
use crate::random::SharedRng;

// Sampling tuned for varied output; the penalties discourage repeated phrasing.
const TEMPERATURE: f32 = 0.85;
const MAX_TOKENS: u32 = 800;
const PRESENCE_PENALTY: f32 = 0.7;
const FREQUENCY_PENALTY: f32 = 0.7;

/// Generates a writing prompt for `genres` (already checked to be non-empty).
///
/// `completer` is `None` when no API credential is configured.
pub async fn generate_writing_prompt(
    completer: Option<&dyn TextCompleter>,
    rng: &SharedRng,
    genres: &[String],
) -> Result<WritingPrompt, RenderError> {
    if let Some(completer) = completer {
        let profile = rng.with(|r| pick_profile(r));
        if let Some(prompt) = generate_with_ai(completer, rng, profile, genres).await {
            return Ok(prompt);
        }
    }

    rng.with(|r| generate_from_template(genres, r))
}

fn pick_profile<R: Rng + ?Sized>(rng: &mut R) -> &'static ExerciseProfile {
    &EXERCISE_PROFILES[rng.gen_range(0..EXERCISE_PROFILES.len())]
}

fn completion_request(profile: &ExerciseProfile, genre_string: &str) -> CompletionRequest {
    CompletionRequest {
        system: WRITING_SYSTEM.to_string(),
        user: profile.instruction(genre_string),
        temperature: TEMPERATURE,
        max_tokens: MAX_TOKENS,
        presence_penalty: PRESENCE_PENALTY,
        frequency_penalty: FREQUENCY_PENALTY,
    }
}

/// `None` means the completion failed and the caller should use templates.
async fn generate_with_ai(
    completer: &dyn TextCompleter,
    rng: &SharedRng,
    profile: &ExerciseProfile,
    genres: &[String],
) -> Option<WritingPrompt> {
    let genre_string = genres.join(", ");
    let request = completion_request(profile, &genre_string);

    let text = match completer.complete(&request).await {
        Ok(text) => text,
        Err(e) => {
            error!("AI generation failed: {e}");
            return None;
        }
    };

    let processed = postprocess(&text, profile.name, &genre_string);
    let (word_count, difficulty) = rng.with(|r| pick_word_count(r));
    info!(
        "AI exercise '{}' generated with {} tips",
        profile.name,
        processed.tips.len()
    );

    Some(WritingPrompt {
        title: processed.title,
        content: processed.content,
        genres: genres.to_vec(),
        difficulty,
        word_count,
        tips: processed.tips,
        timestamp: utc_timestamp(),
        exercise_type: Some(profile.name.to_string()),
        ai_generated: true,
    })
}
