use std::sync::Arc;

use crate::config::Config;
use crate::localization::Localizer;
use crate::questionnaire::phrases::PhraseBook;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable localizer. `LlmLocalizer` when an API key is configured, passthrough otherwise.
    pub localizer: Arc<dyn Localizer>,
    /// Built-in question templates per language, loaded once at startup.
    pub phrases: Arc<PhraseBook>,
}
