use std::collections::{BTreeMap, HashSet};

use serde::Deserialize;

/// Submitted form answers keyed by field ref, in submission order.
///
/// Order matters: the matcher stops at the first must-have answer it finds.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "AnswersPayload")]
pub struct SubmittedAnswers {
    entries: Vec<(String, String)>,
}

impl SubmittedAnswers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `field_ref`. An existing ref keeps its position and takes the new value.
    pub fn insert(&mut self, field_ref: impl Into<String>, value: impl Into<String>) {
        let field_ref = field_ref.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(key, _)| *key == field_ref) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((field_ref, value)),
        }
    }

    pub fn get(&self, field_ref: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key == field_ref)
            .map(|(_, value)| value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for SubmittedAnswers {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut answers = Self::new();
        for (key, value) in iter {
            answers.insert(key, value);
        }
        answers
    }
}

/// JSON clients may send answers as ordered `[ref, value]` pairs or as an object.
/// Objects carry no order guarantee on the wire, so they are read in key order.
#[derive(Deserialize)]
#[serde(untagged)]
enum AnswersPayload {
    Pairs(Vec<(String, String)>),
    Map(BTreeMap<String, String>),
}

impl From<AnswersPayload> for SubmittedAnswers {
    fn from(payload: AnswersPayload) -> Self {
        match payload {
            AnswersPayload::Pairs(pairs) => pairs.into_iter().collect(),
            AnswersPayload::Map(map) => map.into_iter().collect(),
        }
    }
}

/// Builds answers from raw query pairs sent by the form's redirect.
///
/// Only the first value of a repeated parameter counts. Keys shaped
/// `<field type>:<ref>` are stored under `<ref>`; everything else is kept as is,
/// so transport parameters such as `pass` also land in the map.
pub fn extract_form_data(pairs: &[(String, String)]) -> SubmittedAnswers {
    let mut seen = HashSet::new();
    let mut answers = SubmittedAnswers::new();

    for (key, value) in pairs {
        if !seen.insert(key.as_str()) {
            continue;
        }
        let field_ref = key
            .split_once(':')
            .map(|(_, field_ref)| field_ref)
            .unwrap_or(key.as_str());
        answers.insert(field_ref, value.as_str());
    }

    answers
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let mut answers = SubmittedAnswers::new();
        answers.insert("musthave_1", "yes");
        answers.insert("musthave_2", "no");
        answers.insert("musthave_1", "no");

        let order: Vec<_> = answers.iter().collect();
        assert_eq!(order, vec![("musthave_1", "no"), ("musthave_2", "no")]);
    }

    #[test]
    fn test_extract_strips_field_type_prefix() {
        let answers = extract_form_data(&pairs(&[
            ("pass", "true"),
            ("field:musthave_1", "Yes"),
            ("hidden:budget_accept", "да"),
        ]));
        assert_eq!(answers.get("musthave_1"), Some("Yes"));
        assert_eq!(answers.get("budget_accept"), Some("да"));
        assert_eq!(answers.get("pass"), Some("true"));
    }

    #[test]
    fn test_extract_keeps_first_value_of_repeated_key() {
        let answers = extract_form_data(&pairs(&[
            ("field:musthave_1", "yes"),
            ("field:musthave_1", "no"),
        ]));
        assert_eq!(answers.get("musthave_1"), Some("yes"));
        assert_eq!(answers.len(), 1);
    }

    #[test]
    fn test_extract_splits_on_first_colon_only() {
        let answers = extract_form_data(&pairs(&[("field:a:b", "1")]));
        assert_eq!(answers.get("a:b"), Some("1"));
    }

    #[test]
    fn test_prefixed_and_bare_key_collapse_to_one_ref() {
        let answers = extract_form_data(&pairs(&[("musthave_1", "no"), ("field:musthave_1", "yes")]));
        let order: Vec<_> = answers.iter().collect();
        assert_eq!(order, vec![("musthave_1", "yes")]);
    }

    #[test]
    fn test_deserialize_pairs_preserves_order() {
        let answers: SubmittedAnswers =
            serde_json::from_str(r#"[["musthave_2", "no"], ["musthave_1", "yes"]]"#).unwrap();
        let keys: Vec<_> = answers.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["musthave_2", "musthave_1"]);
    }

    #[test]
    fn test_deserialize_object() {
        let answers: SubmittedAnswers =
            serde_json::from_str(r#"{"budget_accept": "yes", "musthave_1": "yes"}"#).unwrap();
        assert_eq!(answers.get("budget_accept"), Some("yes"));
        assert_eq!(answers.len(), 2);
    }
}
