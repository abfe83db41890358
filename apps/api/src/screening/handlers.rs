//! Axum route handlers for submission screening.

use anyhow::Context;
use axum::{
    extract::{Query, State},
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, info_span, warn};
use uuid::Uuid;

use crate::config::Config;
use crate::errors::AppError;
use crate::screening::answers::{extract_form_data, SubmittedAnswers};
use crate::screening::matcher::{evaluate_must_haves, validate_must_haves, Rejection};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// Body returned when the form's own pre-screen already failed the candidate.
#[derive(Debug, Serialize)]
pub struct PreScreenRejection {
    pub status: &'static str,
    pub message: &'static str,
    pub submission_id: Uuid,
    pub evaluated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct ValidateRequest {
    pub must_haves: String,
    pub answers: SubmittedAnswers,
}

#[derive(Debug, Serialize)]
pub struct ValidateResponse {
    pub eligible: bool,
    pub rejection: Option<Rejection>,
    pub submission_id: Uuid,
    pub evaluated_at: DateTime<Utc>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /process-submission
///
/// Redirect target of the hosted form. Answers arrive as query parameters
/// (`field:<ref>=value`); the candidate is sent on to the success or failure page.
pub async fn handle_process_submission(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Response, AppError> {
    let submission_id = Uuid::new_v4();
    info_span!("process_submission", %submission_id)
        .in_scope(|| process_submission(&state.config, &params, submission_id))
}

/// POST /api/v1/submissions/validate
///
/// Runs the must-have check on a JSON payload and reports the verdict instead of redirecting.
pub async fn handle_validate(
    Json(request): Json<ValidateRequest>,
) -> Result<Json<ValidateResponse>, AppError> {
    if request.must_haves.trim().is_empty() {
        return Err(AppError::Validation(
            "must_haves cannot be empty".to_string(),
        ));
    }

    let submission_id = Uuid::new_v4();
    let verdict = info_span!("validate_submission", %submission_id).in_scope(|| {
        if request.answers.is_empty() {
            warn!("Validating a submission with no answers");
        } else {
            info!("Validating {} submitted answers", request.answers.len());
        }
        evaluate_must_haves(&request.must_haves, &request.answers)
    });

    Ok(Json(ValidateResponse {
        eligible: verdict.is_eligible(),
        rejection: verdict.rejection().cloned(),
        submission_id,
        evaluated_at: Utc::now(),
    }))
}

fn process_submission(
    config: &Config,
    params: &[(String, String)],
    submission_id: Uuid,
) -> Result<Response, AppError> {
    info!("Received form submission with {} parameters", params.len());

    let pass = first_param(params, "pass")
        .ok_or_else(|| AppError::Validation("Missing 'pass' parameter".to_string()))?;

    if pass != "true" {
        info!("Candidate failed the form pre-screen");
        let body = PreScreenRejection {
            status: "rejected",
            message: "Candidate does not meet the requirements",
            submission_id,
            evaluated_at: Utc::now(),
        };
        return Ok((StatusCode::OK, Json(body)).into_response());
    }

    let answers = extract_form_data(params);

    let must_haves = first_param(params, "must_haves").unwrap_or_default();
    if must_haves.trim().is_empty() {
        return Err(AppError::Validation(
            "Missing 'must_haves' parameter".to_string(),
        ));
    }

    let target = if validate_must_haves(must_haves, &answers) {
        info!("Candidate passed must-have validation");
        first_param(params, "success_url").unwrap_or(&config.success_url)
    } else {
        info!("Candidate failed must-have validation");
        first_param(params, "fail_url").unwrap_or(&config.fail_url)
    };

    found_redirect(target)
}

fn first_param<'a>(params: &'a [(String, String)], name: &str) -> Option<&'a str> {
    params
        .iter()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.as_str())
}

/// 302 to `target`, as the hosted form expects.
fn found_redirect(target: &str) -> Result<Response, AppError> {
    let location = HeaderValue::from_str(target)
        .with_context(|| format!("redirect target {target:?} is not a valid Location header"))?;
    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::Request;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::localization::PassthroughLocalizer;
    use crate::questionnaire::phrases::PhraseBook;
    use crate::routes::build_router;

    fn test_state() -> AppState {
        AppState {
            config: Config {
                success_url: "https://jobs.example.com/welcome".to_string(),
                fail_url: "https://jobs.example.com/sorry".to_string(),
                anthropic_api_key: None,
                default_currency: "USD".to_string(),
                baseline_language: "en".to_string(),
                port: 0,
                rust_log: "info".to_string(),
            },
            localizer: Arc::new(PassthroughLocalizer),
            phrases: Arc::new(PhraseBook::builtin()),
        }
    }

    async fn get(uri: &str) -> axum::response::Response {
        build_router(test_state())
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn location(response: &axum::response::Response) -> &str {
        response.headers()["location"].to_str().unwrap()
    }

    #[tokio::test]
    async fn test_missing_pass_is_bad_request() {
        let response = get("/process-submission?must_haves=Rust").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_failed_pre_screen_returns_rejected_json() {
        let response = get("/process-submission?pass=false&must_haves=Rust").await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["status"], "rejected");
    }

    #[tokio::test]
    async fn test_missing_must_haves_is_bad_request() {
        let response = get("/process-submission?pass=true&field:musthave_1=yes").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_eligible_candidate_redirects_to_configured_success() {
        let response =
            get("/process-submission?pass=true&must_haves=-%20Rust&field:musthave_1=Yes").await;
        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(location(&response), "https://jobs.example.com/welcome");
    }

    #[tokio::test]
    async fn test_rejected_candidate_redirects_to_fail_url_param() {
        let response = get(
            "/process-submission?pass=true&must_haves=Budget%20200k&field:budget_accept=no\
             &fail_url=https%3A%2F%2Fother.example.com%2Fno",
        )
        .await;
        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(location(&response), "https://other.example.com/no");
    }

    #[tokio::test]
    async fn test_missing_budget_confirmation_redirects_to_fail() {
        let response =
            get("/process-submission?pass=true&must_haves=Budget%20200k&field:musthave_1=yes").await;
        assert_eq!(location(&response), "https://jobs.example.com/sorry");
    }

    #[tokio::test]
    async fn test_invalid_redirect_target_is_internal_error() {
        let response = get(
            "/process-submission?pass=true&must_haves=Rust&field:musthave_1=yes\
             &success_url=bad%0Aurl",
        )
        .await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_validate_endpoint_reports_rejection() {
        let payload = json!({
            "must_haves": "Rust\nSQL",
            "answers": [["musthave_1", "yes"], ["musthave_2", "no"]]
        });
        let response = build_router(test_state())
            .oneshot(
                Request::post("/api/v1/submissions/validate")
                    .header("content-type", "application/json")
                    .body(Body::from(serde_json::to_vec(&payload).unwrap()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["eligible"], true);
        assert!(body["rejection"].is_null());
    }

    #[tokio::test]
    async fn test_validate_endpoint_rejects_empty_must_haves() {
        let payload = json!({"must_haves": " ", "answers": {}});
        let response = build_router(test_state())
            .oneshot(
                Request::post("/api/v1/submissions/validate")
                    .header("content-type", "application/json")
                    .body(Body::from(serde_json::to_vec(&payload).unwrap()))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

}
