//! Requirement matcher — decides whether a submission satisfies every must-have.
//!
//! Algorithm, per requirement line in order:
//! 1. Budget lines are settled by the reserved `budget_accept` answer alone.
//!    A missing answer is a failure, never "not applicable".
//! 2. Any other line is settled by the first `musthave*` answer in submission
//!    order: affirmative satisfies it, anything else rejects the whole batch.
//!    No must-have answer at all also rejects.
//!
//! Lines are not aligned to specific `musthave_<n>` answers. The generator
//! numbers questions and the form enforces that each one is answered, so one
//! negative must-have answer is disqualifying on its own.

use serde::Serialize;
use tracing::{info, warn};

use super::answers::SubmittedAnswers;
use super::requirements::{
    is_affirmative, is_budget_requirement, is_must_have_key, parse_requirements,
    BUDGET_ACCEPT_KEY,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum RejectionReason {
    MissingBudgetConfirmation,
    BudgetDeclined { answer: String },
    NegativeAnswer { field_ref: String, answer: String },
    Unanswered,
}

/// The requirement line that failed and why.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rejection {
    pub requirement: String,
    #[serde(flatten)]
    pub reason: RejectionReason,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Verdict {
    Eligible,
    Rejected(Rejection),
}

impl Verdict {
    pub fn is_eligible(&self) -> bool {
        matches!(self, Verdict::Eligible)
    }

    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            Verdict::Eligible => None,
            Verdict::Rejected(rejection) => Some(rejection),
        }
    }
}

/// Returns true iff every requirement in `requirements_block` is satisfied.
pub fn validate_must_haves(requirements_block: &str, answers: &SubmittedAnswers) -> bool {
    evaluate_must_haves(requirements_block, answers).is_eligible()
}

/// Evaluates the requirements in order and stops at the first failure.
pub fn evaluate_must_haves(requirements_block: &str, answers: &SubmittedAnswers) -> Verdict {
    for requirement in parse_requirements(requirements_block) {
        let outcome = if is_budget_requirement(&requirement) {
            check_budget(&requirement, answers)
        } else {
            check_must_have(&requirement, answers)
        };

        if let Err(reason) = outcome {
            warn!("✗ Requirement '{requirement}' not met: {reason:?}");
            return Verdict::Rejected(Rejection {
                requirement,
                reason,
            });
        }
    }

    Verdict::Eligible
}

fn check_budget(requirement: &str, answers: &SubmittedAnswers) -> Result<(), RejectionReason> {
    let answer = answers
        .get(BUDGET_ACCEPT_KEY)
        .ok_or(RejectionReason::MissingBudgetConfirmation)?;

    if is_affirmative(answer) {
        info!("✓ Budget requirement '{requirement}' confirmed ({BUDGET_ACCEPT_KEY}: {answer})");
        Ok(())
    } else {
        Err(RejectionReason::BudgetDeclined {
            answer: answer.to_string(),
        })
    }
}

fn check_must_have(requirement: &str, answers: &SubmittedAnswers) -> Result<(), RejectionReason> {
    let (field_ref, answer) = answers
        .iter()
        .find(|(field_ref, _)| is_must_have_key(field_ref))
        .ok_or(RejectionReason::Unanswered)?;

    if is_affirmative(answer) {
        info!("✓ Requirement '{requirement}' met ({field_ref}: {answer})");
        Ok(())
    } else {
        Err(RejectionReason::NegativeAnswer {
            field_ref: field_ref.to_string(),
            answer: answer.to_string(),
        })
    }
}
