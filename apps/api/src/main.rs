mod config;
mod errors;
mod llm_client;
mod localization;
mod questionnaire;
mod routes;
mod screening;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::localization::{LlmLocalizer, Localizer, PassthroughLocalizer};
use crate::questionnaire::phrases::PhraseBook;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting screening API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize localizer (LLM-backed when an API key is configured)
    let localizer: Arc<dyn Localizer> = match &config.anthropic_api_key {
        Some(api_key) => {
            let llm = LlmClient::new(api_key.clone())?;
            info!("LLM localizer initialized (model: {})", llm_client::MODEL);
            Arc::new(LlmLocalizer(llm))
        }
        None => {
            warn!(
                "ANTHROPIC_API_KEY not set, questions stay in '{}'",
                config.baseline_language
            );
            Arc::new(PassthroughLocalizer)
        }
    };

    let phrases = PhraseBook::builtin();
    info!("Loaded built-in phrases for {} languages", phrases.len());

    // Build app state
    let state = AppState {
        config: config.clone(),
        localizer,
        phrases: Arc::new(phrases),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
