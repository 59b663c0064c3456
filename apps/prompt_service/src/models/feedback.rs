use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Seconds a feedback record lives in the store: 30 days.
pub const FEEDBACK_TTL_SECS: u64 = 86_400 * 30;

/// Value written to `feedback:{promptId}:{userId}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackRecord {
    /// Stored exactly as the client sent it.
    pub rating: Value,
    pub timestamp: String,
}

/// Store key for one user's feedback on one prompt.
///
/// String ids are used verbatim; any other JSON value is keyed by its JSON text.
pub fn feedback_key(prompt_id: &Value, user_id: &str) -> String {
    let prompt_id = match prompt_id {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    };
    format!("feedback:{prompt_id}:{user_id}")
}
