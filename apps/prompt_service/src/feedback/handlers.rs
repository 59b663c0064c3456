use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{error, field::Empty, info, instrument, Span};

use crate::errors::AppError;
use crate::models::feedback::{feedback_key, FeedbackRecord, FEEDBACK_TTL_SECS};
use crate::models::prompt::utc_timestamp;
use crate::state::AppState;
use crate::store::StoreError;

/// Neither field is validated; missing values are stored as `null`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackRequest {
    #[serde(default)]
    pub prompt_id: Value,
    #[serde(default)]
    pub rating: Value,
    pub user_id: Option<String>,
}

/// POST /feedback
///
/// Stores the rating under `feedback:{promptId}:{userId}` for 30 days.
/// A second submission for the same pair overwrites the first.
#[instrument(
    name = "prompt-feedback",
    skip_all,
    fields(user.id = Empty, prompt.id = Empty, feedback.rating = Empty)
)]
pub async fn handle_feedback(
    State(state): State<AppState>,
    payload: Result<Json<FeedbackRequest>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    let Json(request) = payload?;
    let user_id = request.user_id.as_deref().unwrap_or("anonymous");

    let span = Span::current();
    span.record("user.id", user_id);
    span.record("prompt.id", request.prompt_id.to_string().as_str());
    span.record("feedback.rating", request.rating.to_string().as_str());

    let key = feedback_key(&request.prompt_id, user_id);
    let record = FeedbackRecord {
        rating: request.rating,
        timestamp: utc_timestamp(),
    };
    let stored = match serde_json::to_string(&record) {
        Ok(value) => state.store.set_ex(&key, &value, FEEDBACK_TTL_SECS).await,
        Err(e) => Err(StoreError::from(e)),
    };
    if let Err(e) = stored {
        error!("Feedback submission failed: {e}");
        return Err(AppError::Feedback(e));
    }

    info!("feedback-stored");
    Ok(Json(json!({ "status": "success" })))
}
