use axum::{extract::State, Json};
use serde_json::{json, Value};
use tracing::{error, instrument};

use crate::errors::AppError;
use crate::state::AppState;

/// GET /health
/// Healthy only while the store answers a ping.
#[instrument(name = "health-check", skip_all)]
pub async fn health_handler(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    state.store.ping().await.map_err(|e| {
        error!("Health check failed: {e}");
        AppError::Unhealthy(e)
    })?;
    Ok(Json(json!({
        "status": "healthy",
        "service": "prompt-generator"
    })))
}
