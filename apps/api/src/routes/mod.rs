pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::questionnaire::handlers as questionnaire;
use crate::screening::handlers as screening;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Hosted form redirect target
        .route(
            "/process-submission",
            get(screening::handle_process_submission),
        )
        // Screening API
        .route(
            "/api/v1/submissions/validate",
            post(screening::handle_validate),
        )
        // Questionnaire API
        .route(
            "/api/v1/forms/must-haves",
            post(questionnaire::handle_generate_questionnaire),
        )
        .with_state(state)
}
