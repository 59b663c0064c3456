use anyhow::{Context, Result};

use crate::llm_client::DEFAULT_MODEL;

/// Application configuration loaded from environment variables.
/// Built once at startup and shared through `AppState`.
#[derive(Debug, Clone)]
pub struct Config {
    /// Completion API key. `None` switches the service to template-only mode.
    pub openai_api_key: Option<String>,
    pub openai_model: String,
    pub redis_url: String,
    pub otel_endpoint: String,
    pub port: u16,
    pub development: bool,
    pub rust_log: String,
    /// Fixed seed for the shared random source, for reproducible output.
    pub rng_seed: Option<u64>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let non_empty = |key: &str| get(key).filter(|v| !v.trim().is_empty());

        Ok(Config {
            openai_api_key: non_empty("OPENAI_API_KEY"),
            openai_model: non_empty("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            redis_url: non_empty("REDIS_URL")
                .unwrap_or_else(|| "redis://localhost:6379".to_string()),
            otel_endpoint: non_empty("OTEL_EXPORTER_OTLP_ENDPOINT")
                .unwrap_or_else(|| "http://localhost:4318".to_string()),
            port: non_empty("PORT")
                .unwrap_or_else(|| "5001".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            development: non_empty("APP_ENV").is_some_and(|v| v == "development"),
            rust_log: non_empty("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            rng_seed: non_empty("PROMPT_RNG_SEED")
                .map(|v| v.parse::<u64>())
                .transpose()
                .context("PROMPT_RNG_SEED must be an unsigned integer")?,
        })
    }

    pub fn ai_enabled(&self) -> bool {
        self.openai_api_key.is_some()
    }

    /// Trace export URL on the configured collector.
    pub fn traces_endpoint(&self) -> String {
        format!("{}/v1/traces", self.otel_endpoint.trim_end_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config> {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert!(!config.ai_enabled());
        assert_eq!(config.openai_model, "gpt-3.5-turbo");
        assert_eq!(config.redis_url, "redis://localhost:6379");
        assert_eq!(config.port, 5001);
        assert!(!config.development);
        assert_eq!(config.rng_seed, None);
        assert_eq!(config.traces_endpoint(), "http://localhost:4318/v1/traces");
    }

    #[test]
    fn test_empty_api_key_means_template_mode() {
        let config = config_from(&[("OPENAI_API_KEY", "  ")]).unwrap();
        assert!(!config.ai_enabled());
        let config = config_from(&[("OPENAI_API_KEY", "sk-test")]).unwrap();
        assert!(config.ai_enabled());
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("PORT", "8080"),
            ("APP_ENV", "development"),
            ("PROMPT_RNG_SEED", "42"),
            ("OTEL_EXPORTER_OTLP_ENDPOINT", "http://collector:4318/"),
        ])
        .unwrap();
        assert_eq!(config.port, 8080);
        assert!(config.development);
        assert_eq!(config.rng_seed, Some(42));
        assert_eq!(config.traces_endpoint(), "http://collector:4318/v1/traces");
    }

    #[test]
    fn test_invalid_port_is_an_error() {
        assert!(config_from(&[("PORT", "not-a-port")]).is_err());
        assert!(config_from(&[("PROMPT_RNG_SEED", "-1")]).is_err());
    }
}
