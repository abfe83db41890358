// Submission screening: must-have requirement matching against form answers.
// Runs at submission time on the answers produced by the questionnaire schema.

pub mod answers;
pub mod handlers;
pub mod matcher;
pub mod requirements;
