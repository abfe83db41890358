//! Localization — pluggable, trait-based service for language detection,
//! translation and question paraphrasing.
//!
//! `LlmLocalizer` asks Claude through `llm_client`. `PassthroughLocalizer`
//! leaves text untouched and is used when no API key is configured.
//! `AppState` holds an `Arc<dyn Localizer>`, chosen at startup.
//!
//! Callers treat every error as recoverable and fall back to the original text.

pub mod prompts;

use async_trait::async_trait;
use thiserror::Error;
use tracing::debug;

use crate::llm_client::prompts::{CREATIVE_TEMPERATURE, DETERMINISTIC_TEMPERATURE};
use crate::llm_client::{LlmClient, LlmError};
use prompts::{
    paraphrase_prompt, paraphrase_system, translate_system, DETECTION_SAMPLE_CHARS,
    DETECT_LANGUAGE_SYSTEM,
};

#[derive(Debug, Error)]
pub enum LocalizationError {
    #[error("localization backend unavailable")]
    Unavailable,

    #[error("unrecognised language code: {0:?}")]
    UnrecognisedLanguage(String),

    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),
}

/// The localization trait. Implement this to swap backends without touching
/// the questionnaire generator or its handler.
#[async_trait]
pub trait Localizer: Send + Sync {
    /// Returns a lower-case ISO 639-1 code for the language of `text`.
    async fn detect_language(&self, text: &str) -> Result<String, LocalizationError>;

    async fn translate(&self, text: &str, target_language: &str)
        -> Result<String, LocalizationError>;

    /// Rewrites a templated yes/no question so it reads naturally in `target_language`.
    async fn paraphrase(
        &self,
        question: &str,
        target_language: &str,
    ) -> Result<String, LocalizationError>;
}

// ────────────────────────────────────────────────────────────────────────────
// LlmLocalizer
// ────────────────────────────────────────────────────────────────────────────

pub struct LlmLocalizer(pub LlmClient);

#[async_trait]
impl Localizer for LlmLocalizer {
    async fn detect_language(&self, text: &str) -> Result<String, LocalizationError> {
        let sample: String = text.chars().take(DETECTION_SAMPLE_CHARS).collect();
        let reply = self
            .0
            .call_text(&sample, DETECT_LANGUAGE_SYSTEM, DETERMINISTIC_TEMPERATURE)
            .await?;
        let code = normalize_language_code(&reply)?;
        debug!("Detected language: {code}");
        Ok(code)
    }

    async fn translate(
        &self,
        text: &str,
        target_language: &str,
    ) -> Result<String, LocalizationError> {
        if text.is_empty() || target_language.is_empty() {
            return Ok(text.to_string());
        }
        let system = translate_system(target_language);
        Ok(self
            .0
            .call_text(text, &system, DETERMINISTIC_TEMPERATURE)
            .await?)
    }

    async fn paraphrase(
        &self,
        question: &str,
        target_language: &str,
    ) -> Result<String, LocalizationError> {
        let prompt = paraphrase_prompt(question, target_language);
        Ok(self
            .0
            .call_text(
                &prompt,
                paraphrase_system(target_language),
                CREATIVE_TEMPERATURE,
            )
            .await?)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// PassthroughLocalizer
// ────────────────────────────────────────────────────────────────────────────

/// Offline localizer: detection is unavailable, text passes through unchanged.
pub struct PassthroughLocalizer;

#[async_trait]
impl Localizer for PassthroughLocalizer {
    async fn detect_language(&self, _text: &str) -> Result<String, LocalizationError> {
        Err(LocalizationError::Unavailable)
    }

    async fn translate(
        &self,
        text: &str,
        _target_language: &str,
    ) -> Result<String, LocalizationError> {
        Ok(text.to_string())
    }

    async fn paraphrase(
        &self,
        question: &str,
        _target_language: &str,
    ) -> Result<String, LocalizationError> {
        Ok(question.to_string())
    }
}

/// Accepts replies like `"ru"`, `RU.` or `en-US` and reduces them to a bare code.
fn normalize_language_code(reply: &str) -> Result<String, LocalizationError> {
    let mut words = reply.split_whitespace();
    let (Some(word), None) = (words.next(), words.next()) else {
        return Err(LocalizationError::UnrecognisedLanguage(reply.to_string()));
    };

    let code: String = word
        .split(|c: char| c == '-' || c == '_')
        .next()
        .unwrap_or_default()
        .trim_matches(|c: char| !c.is_ascii_alphabetic())
        .to_ascii_lowercase();

    if (2..=3).contains(&code.len()) && code.chars().all(|c| c.is_ascii_lowercase()) {
        Ok(code)
    } else {
        Err(LocalizationError::UnrecognisedLanguage(reply.to_string()))
    }
}
