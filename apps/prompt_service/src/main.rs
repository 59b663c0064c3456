mod config;
mod errors;
mod feedback;
mod generation;
mod llm_client;
mod models;
mod random;
mod routes;
mod sound_design;
mod state;
mod store;
mod telemetry;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::generation::templates::template_categories;
use crate::llm_client::{OpenAiClient, TextCompleter};
use crate::random::SharedRng;
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::RedisStore;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;
    init_tracing(&config)?;

    info!("Starting prompt generator v{}", env!("CARGO_PKG_VERSION"));
    info!("Exporting trace spans to {}", config.traces_endpoint());

    // Connections are opened lazily; an unreachable Redis shows up in /health.
    let store = RedisStore::open(&config.redis_url)?;
    info!("Redis client initialized ({})", config.redis_url);

    let completer: Option<Arc<dyn TextCompleter>> = match &config.openai_api_key {
        Some(key) => {
            let client = OpenAiClient::new(key.clone(), config.openai_model.clone());
            info!("Completion client initialized (model: {})", client.model());
            Some(Arc::new(client))
        }
        None => {
            warn!("OPENAI_API_KEY not set, serving template prompts only");
            None
        }
    };

    info!(
        "AI generation enabled: {}; template categories: {}",
        config.ai_enabled(),
        template_categories().collect::<Vec<_>>().join(", ")
    );

    if let Some(seed) = config.rng_seed {
        info!("Random source seeded with {seed}");
    }

    let state = AppState {
        config: Arc::new(config.clone()),
        store: Arc::new(store),
        completer,
        rng: SharedRng::new(config.rng_seed),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    let served = axum::serve(listener, app).await;
    telemetry::shutdown();
    served?;

    Ok(())
}

/// Pretty output in development, JSON lines everywhere else. Spans are also
/// exported to the OTLP collector.
fn init_tracing(config: &Config) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "{}={},tower_http={}",
            env!("CARGO_CRATE_NAME"),
            config.rust_log,
            config.rust_log
        ))
    });

    let tracer = telemetry::otlp_tracer(&config.traces_endpoint())
        .context("failed to build the OTLP trace exporter")?;

    let registry = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_opentelemetry::layer().with_tracer(tracer));
    if config.development {
        registry.with(tracing_subscriber::fmt::layer().pretty()).init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_current_span(true))
            .init();
    }
    Ok(())
}
