//! Budget input as authors type it: a JSON number or text such as "150 000".

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BudgetInput {
    Number(serde_json::Number),
    Text(String),
}

#[derive(Debug, Error, PartialEq)]
#[error("budget {input:?} is not a number")]
pub struct BudgetParseError {
    pub input: String,
}

impl fmt::Display for BudgetInput {
    /// Renders the budget exactly as supplied; used in the confirmation question.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BudgetInput::Number(number) => write!(f, "{number}"),
            BudgetInput::Text(text) => f.write_str(text),
        }
    }
}

impl BudgetInput {
    /// Parses the budget after removing whitespace, commas and periods.
    /// Infinite or overflowing amounts are rejected.
    ///
    /// Periods are removed too, so a decimal amount loses its separator:
    /// "1500.50" parses as 150050.
    pub fn parse(&self) -> Result<f64, BudgetParseError> {
        let raw = self.to_string();
        let digits: String = raw
            .chars()
            .filter(|c| !c.is_whitespace() && *c != ',' && *c != '.')
            .collect();

        match digits.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(value),
            _ => Err(BudgetParseError { input: raw }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(value: &str) -> BudgetInput {
        BudgetInput::Text(value.to_string())
    }

    #[test]
    fn test_parses_integer_number() {
        let budget: BudgetInput = serde_json::from_str("100000").unwrap();
        assert_eq!(budget.parse().unwrap(), 100000.0);
        assert_eq!(budget.to_string(), "100000");
    }

    #[test]
    fn test_strips_thousands_separators() {
        assert_eq!(text("150 000").parse().unwrap(), 150000.0);
        assert_eq!(text("150,000").parse().unwrap(), 150000.0);
        assert_eq!(text("150\u{a0}000").parse().unwrap(), 150000.0);
    }

    #[test]
    fn test_decimal_point_is_dropped() {
        assert_eq!(text("1500.50").parse().unwrap(), 150050.0);
        let budget: BudgetInput = serde_json::from_str("1500.5").unwrap();
        assert_eq!(budget.parse().unwrap(), 15005.0);
    }

    #[test]
    fn test_non_numeric_text_is_an_error() {
        assert_eq!(
            text("negotiable").parse(),
            Err(BudgetParseError {
                input: "negotiable".to_string()
            })
        );
        assert!(text("").parse().is_err());
    }

    #[test]
    fn test_non_finite_budget_is_an_error() {
        for input in ["inf", "Infinity", "NaN", "1e400"] {
            assert_eq!(
                text(input).parse(),
                Err(BudgetParseError {
                    input: input.to_string()
                }),
                "{input}"
            );
        }
    }

    #[test]
    fn test_negative_budget_parses_as_negative() {
        assert_eq!(text("-5000").parse().unwrap(), -5000.0);
    }

    #[test]
    fn test_deserializes_text() {
        let budget: BudgetInput = serde_json::from_str("\"200 000\"").unwrap();
        assert_eq!(budget, text("200 000"));
    }
}
