//! Axum route handler for writing prompts.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::Deserialize;
use tracing::{error, field::Empty, info, instrument, Span};

use crate::errors::AppError;
use crate::generation::generator::generate_writing_prompt;
use crate::models::prompt::WritingPrompt;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    #[serde(default)]
    pub genres: Vec<String>,
    pub user_id: Option<String>,
}

/// POST /generate
///
/// Returns a writing prompt for the selected genres. Remote completion
/// failures are absorbed by the template fallback; only internal errors
/// produce a 500.
#[instrument(
    name = "generate-prompt",
    skip_all,
    fields(
        user.id = Empty,
        ai.enabled = Empty,
        genres.count = Empty,
        genres.list = Empty,
        prompt.title = Empty,
        prompt.difficulty = Empty,
        prompt.word_count = Empty
    )
)]
pub async fn handle_generate(
    State(state): State<AppState>,
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<Json<WritingPrompt>, AppError> {
    let Json(request) = payload?;
    let user_id = request.user_id.as_deref().unwrap_or("anonymous");

    let span = Span::current();
    span.record("user.id", user_id);
    span.record("ai.enabled", state.config.ai_enabled());
    span.record("genres.count", request.genres.len());
    span.record("genres.list", request.genres.join(",").as_str());

    if request.genres.is_empty() {
        return Err(AppError::Validation(
            "At least one genre must be selected".to_string(),
        ));
    }

    info!("generating-new-prompt");
    let prompt = generate_writing_prompt(state.completer(), &state.rng, &request.genres)
        .await
        .map_err(|e| {
            error!("Prompt generation failed: {e}");
            AppError::from(e)
        })?;

    span.record("prompt.title", prompt.title.as_str());
    span.record("prompt.difficulty", prompt.difficulty.as_str());
    span.record("prompt.word_count", prompt.word_count);

    Ok(Json(prompt))
}
