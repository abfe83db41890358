//! Requirement parsing and the shared vocabulary both the matcher and the
//! questionnaire generator key on.

/// Bullet markup stripped from both ends of a requirement line.
const BULLET_CHARS: &[char] = &['-', '•', ':', '.'];

/// Substrings marking a requirement as the budget must-have.
const BUDGET_MARKERS: &[&str] = &["budget", "бюджет"];

/// Substrings marking a requirement as salary-related for question generation.
const SALARY_MARKERS: &[&str] = &["зарплат", "salary", "budget"];

/// Answer values accepted as "yes", compared after lower-casing.
const AFFIRMATIVE_VALUES: &[&str] = &["yes", "да", "true", "1"];

/// Answer key carrying the candidate's budget confirmation.
pub const BUDGET_ACCEPT_KEY: &str = "budget_accept";

/// Substring identifying answers to ordinary must-have questions.
pub const MUST_HAVE_KEY_MARKER: &str = "musthave";

/// Splits a requirements block into trimmed, non-empty requirement lines.
/// Order is preserved and duplicates are kept.
pub fn parse_requirements(block: &str) -> Vec<String> {
    block.lines().filter_map(clean_requirement).collect()
}

/// Strips bullet markup and whitespace; `None` if nothing remains.
pub fn clean_requirement(line: &str) -> Option<String> {
    let cleaned = line.trim_matches(|c: char| c.is_whitespace() || BULLET_CHARS.contains(&c));
    (!cleaned.is_empty()).then(|| cleaned.to_string())
}

pub fn is_budget_requirement(requirement: &str) -> bool {
    contains_any(requirement, BUDGET_MARKERS)
}

pub fn is_salary_requirement(requirement: &str) -> bool {
    contains_any(requirement, SALARY_MARKERS)
}

pub fn is_affirmative(value: &str) -> bool {
    let lower = value.to_lowercase();
    AFFIRMATIVE_VALUES.contains(&lower.as_str())
}

pub fn is_must_have_key(field_ref: &str) -> bool {
    field_ref.to_lowercase().contains(MUST_HAVE_KEY_MARKER)
}

fn contains_any(text: &str, markers: &[&str]) -> bool {
    let lower = text.to_lowercase();
    markers.iter().any(|marker| lower.contains(marker))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_strips_bullets_and_blank_lines() {
        let block = "- Rust 3+ years\n\n• English B2.\n   \n: Budget up to 300k\n";
        assert_eq!(
            parse_requirements(block),
            vec!["Rust 3+ years", "English B2", "Budget up to 300k"]
        );
    }

    #[test]
    fn test_parse_handles_crlf_and_keeps_duplicates() {
        let block = "SQL\r\nSQL\r\n";
        assert_eq!(parse_requirements(block), vec!["SQL", "SQL"]);
    }

    #[test]
    fn test_markup_only_lines_are_dropped() {
        assert!(parse_requirements("- \n...\n•").is_empty());
    }

    #[test]
    fn test_budget_marker_is_case_insensitive_and_localized() {
        assert!(is_budget_requirement("BUDGET: 200k"));
        assert!(is_budget_requirement("Бюджет до 200 000"));
        assert!(!is_budget_requirement("Salary expectations"));
    }

    #[test]
    fn test_salary_markers_cover_budget_and_russian_stem() {
        assert!(is_salary_requirement("Зарплатные ожидания до 250к"));
        assert!(is_salary_requirement("Salary up to 5k"));
        assert!(is_salary_requirement("Within budget"));
        assert!(!is_salary_requirement("Kubernetes"));
    }

    #[test]
    fn test_affirmative_values() {
        for value in ["yes", "YES", "Да", "true", "True", "1"] {
            assert!(is_affirmative(value), "{value} should be affirmative");
        }
        for value in ["no", "нет", "false", "0", "", " yes"] {
            assert!(!is_affirmative(value), "{value:?} should not be affirmative");
        }
    }

    #[test]
    fn test_must_have_key_detection() {
        assert!(is_must_have_key("musthave_1"));
        assert!(is_must_have_key("MustHave_Rust"));
        assert!(!is_must_have_key("budget_accept"));
    }
}
