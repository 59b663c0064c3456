pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::feedback::handlers::handle_feedback;
use crate::generation::handlers::handle_generate;
use crate::sound_design::handlers::handle_generate_sound_design;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/generate", post(handle_generate))
        .route("/generate-sound-design", post(handle_generate_sound_design))
        .route("/feedback", post(handle_feedback))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;
    use tracing::{Event, Level, Subscriber};
    use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
    use tracing_subscriber::registry::{LookupSpan, Registry};

    use super::*;
    use crate::config::Config;
    use crate::llm_client::testing::{CannedCompleter, FailingCompleter};
    use crate::llm_client::TextCompleter;
    use crate::random::SharedRng;
    use crate::store::MemoryStore;

    fn state(store: Arc<MemoryStore>, completer: Option<Arc<dyn TextCompleter>>) -> AppState {
        AppState {
            config: Arc::new(Config::from_lookup(|_| None).unwrap()),
            store,
            completer,
            rng: SharedRng::new(Some(17)),
        }
    }

    fn post_json(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_health_reports_healthy_store() {
        let app = build_router(state(Arc::new(MemoryStore::default()), None));
        let request = Request::get("/health").body(Body::empty()).unwrap();
        let (status, body) = send(app, request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "status": "healthy", "service": "prompt-generator" }));
    }

    #[tokio::test]
    async fn test_health_reports_unreachable_store() {
        let app = build_router(state(Arc::new(MemoryStore::unreachable()), None));
        let request = Request::get("/health").body(Body::empty()).unwrap();
        let (status, body) = send(app, request).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["status"], "unhealthy");
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn test_generate_requires_a_genre() {
        let app = build_router(state(Arc::new(MemoryStore::default()), None));
        let (status, body) = send(app, post_json("/generate", r#"{"genres": []}"#)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "At least one genre must be selected" }));
    }

    #[tokio::test]
    async fn test_generate_missing_genres_field_is_rejected() {
        let app = build_router(state(Arc::new(MemoryStore::default()), None));
        let (status, _) = send(app, post_json("/generate", r#"{"userId": "u1"}"#)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_generate_from_templates() {
        let app = build_router(state(Arc::new(MemoryStore::default()), None));
        let (status, body) =
            send(app, post_json("/generate", r#"{"genres": ["Horror"]}"#)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["title"], "The Inheritance");
        assert_eq!(body["genres"], json!(["Horror"]));
        assert!(body["wordCount"].is_u64());
        assert!(body.get("ai_generated").is_none());
    }

    #[tokio::test]
    async fn test_generate_survives_completion_failure() {
        let completer: Arc<dyn TextCompleter> = Arc::new(FailingCompleter);
        let app = build_router(state(Arc::new(MemoryStore::default()), Some(completer)));
        let (status, body) =
            send(app, post_json("/generate", r#"{"genres": ["Romance"]}"#)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["title"], "Second Chances");
        assert!(body.get("ai_generated").is_none());
    }

    #[tokio::test]
    async fn test_generate_with_completion_marks_ai_output() {
        let completer: Arc<dyn TextCompleter> = Arc::new(CannedCompleter::new(
            "**Exercise Name**: Mirror Scenes\nWrite the same scene twice.",
        ));
        let app = build_router(state(Arc::new(MemoryStore::default()), Some(completer)));
        let (status, body) =
            send(app, post_json("/generate", r#"{"genres": ["Mystery"]}"#)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["ai_generated"], true);
        assert!(body["exerciseType"].is_string());
        assert_eq!(body["tips"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_malformed_json_is_400() {
        let app = build_router(state(Arc::new(MemoryStore::default()), None));
        let (status, body) = send(app, post_json("/generate", "{not json")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn test_sound_design_rejects_unknown_synthesizer() {
        let app = build_router(state(Arc::new(MemoryStore::default()), None));
        let (status, body) = send(
            app,
            post_json("/generate-sound-design", r#"{"synthesizer": "Massive"}"#),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body["error"],
            "Invalid synthesizer. Must be one of: Serum 2, Phase Plant, Vital"
        );
    }

    #[tokio::test]
    async fn test_sound_design_rejects_unknown_exercise_type() {
        let app = build_router(state(Arc::new(MemoryStore::default()), None));
        let (status, body) = send(
            app,
            post_json("/generate-sound-design", r#"{"exerciseType": "mixing"}"#),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body["error"],
            "Invalid exercise type. Must be one of: technical, creative"
        );
    }

    #[tokio::test]
    async fn test_sound_design_defaults() {
        let app = build_router(state(Arc::new(MemoryStore::default()), None));
        let (status, body) = send(app, post_json("/generate-sound-design", "{}")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["synthesizer"], "Serum 2");
        assert_eq!(body["exerciseType"], "technical");
        assert_eq!(body["title"], "Serum 2 - Technical Exercise");
        assert!(body["estimatedTime"].is_string());
    }

    #[tokio::test]
    async fn test_feedback_is_stored_with_ttl() {
        let store = Arc::new(MemoryStore::default());
        let app = build_router(state(store.clone(), None));
        let (status, body) = send(
            app,
            post_json("/feedback", r#"{"promptId": "abc", "rating": 5, "userId": "u1"}"#),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "status": "success" }));

        let stored: Value = serde_json::from_str(&store.get("feedback:abc:u1").unwrap()).unwrap();
        assert_eq!(stored["rating"], 5);
        assert!(stored["timestamp"].is_string());
        assert_eq!(store.ttl("feedback:abc:u1"), Some(2_592_000));
    }

    #[tokio::test]
    async fn test_feedback_defaults_to_anonymous() {
        let store = Arc::new(MemoryStore::default());
        let app = build_router(state(store.clone(), None));
        let (status, _) = send(app, post_json("/feedback", r#"{"promptId": 7}"#)).await;
        assert_eq!(status, StatusCode::OK);
        let stored: Value =
            serde_json::from_str(&store.get("feedback:7:anonymous").unwrap()).unwrap();
        assert_eq!(stored["rating"], Value::Null);
    }

    #[tokio::test]
    async fn test_feedback_store_failure_is_500() {
        let app = build_router(state(Arc::new(MemoryStore::unreachable()), None));
        let (status, body) = send(
            app,
            post_json("/feedback", r#"{"promptId": "abc", "rating": 1}"#),
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": "Failed to submit feedback" }));
    }

    /// Records, for each error event, the names of the spans it was emitted in.
    #[derive(Clone, Default)]
    struct ErrorScopes(Arc<Mutex<Vec<Vec<String>>>>);

    impl<S> Layer<S> for ErrorScopes
    where
        S: Subscriber + for<'a> LookupSpan<'a>,
    {
        fn on_event(&self, event: &Event<'_>, ctx: Context<'_, S>) {
            if *event.metadata().level() != Level::ERROR {
                return;
            }
            let names: Vec<String> = ctx
                .event_scope(event)
                .map(|scope| scope.map(|span| span.name().to_string()).collect())
                .unwrap_or_default();
            self.0.lock().unwrap().push(names);
        }
    }

    impl ErrorScopes {
        fn logged_within(&self, span_name: &str) -> bool {
            self.0
                .lock()
                .unwrap()
                .iter()
                .any(|names| names.iter().any(|n| n == span_name))
        }
    }

    #[tokio::test]
    async fn test_store_failures_are_logged_inside_endpoint_spans() {
        let scopes = ErrorScopes::default();
        let _guard = tracing::subscriber::set_default(Registry::default().with(scopes.clone()));

        let app = build_router(state(Arc::new(MemoryStore::unreachable()), None));
        let request = Request::get("/health").body(Body::empty()).unwrap();
        let (status, _) = send(app.clone(), request).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);

        let (status, _) = send(app, post_json("/feedback", r#"{"promptId": "abc"}"#)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

        assert!(scopes.logged_within("health-check"));
        assert!(scopes.logged_within("prompt-feedback"));
    }
}
