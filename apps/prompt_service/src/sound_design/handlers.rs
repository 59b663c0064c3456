use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::Deserialize;
use tracing::{field::Empty, info, instrument, Span};

use crate::errors::AppError;
use crate::models::prompt::SoundDesignPrompt;
use crate::sound_design::generator::generate_sound_design_prompt;
use crate::sound_design::synth::{SoundExercise, Synthesizer};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SoundDesignRequest {
    #[serde(default = "default_synthesizer")]
    pub synthesizer: String,
    #[serde(default = "default_exercise_type")]
    pub exercise_type: String,
    pub user_id: Option<String>,
    /// Style hint; `"all"` and blank mean no preference.
    pub genre: Option<String>,
}

fn default_synthesizer() -> String {
    Synthesizer::Serum2.name().to_string()
}

fn default_exercise_type() -> String {
    SoundExercise::Technical.as_str().to_string()
}

impl SoundDesignRequest {
    fn genre_hint(&self) -> Option<&str> {
        self.genre
            .as_deref()
            .map(str::trim)
            .filter(|g| !g.is_empty() && !g.eq_ignore_ascii_case("all"))
    }
}

/// POST /generate-sound-design
#[instrument(
    name = "generate-sound-design",
    skip_all,
    fields(
        user.id = Empty,
        ai.enabled = Empty,
        synthesizer = Empty,
        exercise.type = Empty,
        prompt.title = Empty,
        prompt.difficulty = Empty
    )
)]
pub async fn handle_generate_sound_design(
    State(state): State<AppState>,
    payload: Result<Json<SoundDesignRequest>, JsonRejection>,
) -> Result<Json<SoundDesignPrompt>, AppError> {
    let Json(request) = payload?;

    let span = Span::current();
    span.record("user.id", request.user_id.as_deref().unwrap_or("anonymous"));
    span.record("ai.enabled", state.config.ai_enabled());
    span.record("synthesizer", request.synthesizer.as_str());
    span.record("exercise.type", request.exercise_type.as_str());

    let synthesizer = Synthesizer::parse(&request.synthesizer).ok_or_else(|| {
        AppError::Validation(format!(
            "Invalid synthesizer. Must be one of: {}",
            Synthesizer::valid_names()
        ))
    })?;
    let exercise = SoundExercise::parse(&request.exercise_type).ok_or_else(|| {
        AppError::Validation(format!(
            "Invalid exercise type. Must be one of: {}",
            SoundExercise::valid_values()
        ))
    })?;

    info!("generating-sound-design-prompt");
    let prompt = generate_sound_design_prompt(
        state.completer(),
        &state.rng,
        synthesizer,
        exercise,
        request.genre_hint(),
    )
    .await;

    span.record("prompt.title", prompt.title.as_str());
    span.record("prompt.difficulty", prompt.difficulty.as_str());

    Ok(Json(prompt))
}
