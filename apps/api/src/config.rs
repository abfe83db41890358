use anyhow::{Context, Result};

/// Currency label used in salary questions when the form author gives none.
pub const FALLBACK_CURRENCY: &str = "руб.";

/// Language assumed when detection fails or no localizer is configured.
pub const FALLBACK_LANGUAGE: &str = "en";

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    /// Redirect target for candidates who pass every must-have.
    pub success_url: String,
    /// Redirect target for candidates rejected by the must-have check.
    pub fail_url: String,
    /// Enables the Claude-backed localizer. Without it questions stay in the baseline language.
    pub anthropic_api_key: Option<String>,
    pub default_currency: String,
    pub baseline_language: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            success_url: require_env("SUCCESS_URL")?,
            fail_url: require_env("FAIL_URL")?,
            anthropic_api_key: optional_env("ANTHROPIC_API_KEY"),
            default_currency: optional_env("DEFAULT_CURRENCY")
                .unwrap_or_else(|| FALLBACK_CURRENCY.to_string()),
            baseline_language: optional_env("BASELINE_LANGUAGE")
                .map(|lang| lang.to_lowercase())
                .unwrap_or_else(|| FALLBACK_LANGUAGE.to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

/// Reads an optional variable, treating blank values as unset.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
