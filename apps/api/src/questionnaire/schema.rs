//! Form schema types, serialized in the field/logic shape the hosted form product imports.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormField {
    pub title: String,
    #[serde(rename = "ref")]
    pub reference: String,
    #[serde(flatten)]
    pub kind: FieldKind,
    pub validations: Validations,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FieldKind {
    MultipleChoice { properties: ChoiceProperties },
    Number,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChoiceProperties {
    pub choices: Vec<Choice>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Choice {
    pub label: String,
    #[serde(rename = "ref")]
    pub reference: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Validations {
    pub required: bool,
}

impl FormField {
    /// A required yes/no question. Choices are ordered yes first.
    pub fn yes_no(
        title: String,
        reference: String,
        yes: (&str, String),
        no: (&str, String),
    ) -> Self {
        Self {
            title,
            reference,
            kind: FieldKind::MultipleChoice {
                properties: ChoiceProperties {
                    choices: vec![
                        Choice {
                            label: yes.0.to_string(),
                            reference: yes.1,
                        },
                        Choice {
                            label: no.0.to_string(),
                            reference: no.1,
                        },
                    ],
                },
            },
            validations: Validations { required: true },
        }
    }

    pub fn number(title: String, reference: String) -> Self {
        Self {
            title,
            reference,
            kind: FieldKind::Number,
            validations: Validations { required: true },
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Branching logic
// ────────────────────────────────────────────────────────────────────────────

/// Logic attached to one source field: a list of conditional jumps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BranchRule {
    #[serde(rename = "type")]
    pub scope: LogicScope,
    #[serde(rename = "ref")]
    pub reference: String,
    pub actions: Vec<LogicAction>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogicScope {
    Field,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogicAction {
    pub action: ActionKind,
    pub details: JumpDetails,
    pub condition: Condition,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    Jump,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JumpDetails {
    pub to: LogicVar,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    pub op: ComparisonOp,
    pub vars: Vec<LogicVar>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComparisonOp {
    GreaterThan,
}

/// Operand of a condition or jump target: a field reference or a literal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum LogicVar {
    Field(String),
    Constant(f64),
}

impl BranchRule {
    /// Jump from `source` to `target` when the numeric answer at `source` exceeds `threshold`.
    pub fn jump_if_greater(source: &str, threshold: f64, target: &str) -> Self {
        Self {
            scope: LogicScope::Field,
            reference: source.to_string(),
            actions: vec![LogicAction {
                action: ActionKind::Jump,
                details: JumpDetails {
                    to: LogicVar::Field(target.to_string()),
                },
                condition: Condition {
                    op: ComparisonOp::GreaterThan,
                    vars: vec![
                        LogicVar::Field(source.to_string()),
                        LogicVar::Constant(threshold),
                    ],
                },
            }],
        }
    }
}
