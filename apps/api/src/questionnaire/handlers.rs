//! Axum route handlers for the Questionnaire API.

use axum::{extract::State, Json};

use crate::errors::AppError;
use crate::questionnaire::generator::{
    generate_questionnaire, GenerationDefaults, Questionnaire, QuestionnaireRequest,
};
use crate::state::AppState;

/// POST /api/v1/forms/must-haves
///
/// Builds the must-have question fields and salary jump logic for a form.
/// An empty requirement list yields an empty questionnaire, not an error.
pub async fn handle_generate_questionnaire(
    State(state): State<AppState>,
    Json(request): Json<QuestionnaireRequest>,
) -> Result<Json<Questionnaire>, AppError> {
    let defaults = GenerationDefaults {
        baseline_language: state.config.baseline_language.clone(),
        currency: state.config.default_currency.clone(),
    };

    let questionnaire = generate_questionnaire(
        &request,
        state.localizer.as_ref(),
        &state.phrases,
        &defaults,
    )
    .await;

    Ok(Json(questionnaire))
}
