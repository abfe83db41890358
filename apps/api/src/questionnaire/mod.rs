// Questionnaire generation: must-have questions, salary question and the
// budget-flexibility jump, emitted as form field/logic JSON.
// All LLM calls go through the Localizer — no direct client calls here.

pub mod budget;
pub mod generator;
pub mod handlers;
pub mod phrases;
pub mod schema;
