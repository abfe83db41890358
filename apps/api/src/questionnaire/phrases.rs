//! Fixed question vocabulary per language.
//!
//! Languages in the built-in table need no remote calls; anything else is
//! translated from the baseline language at generation time.

use std::collections::HashMap;

pub const REQUIREMENT_PLACEHOLDER: &str = "{requirement}";
pub const CURRENCY_PLACEHOLDER: &str = "{currency}";
pub const BUDGET_PLACEHOLDER: &str = "{budget}";

/// Labels and question templates for one language.
#[derive(Debug, Clone, PartialEq)]
pub struct Phrases {
    pub yes: String,
    pub no: String,
    /// Contains `{requirement}`.
    pub experience_template: String,
    /// Contains `{currency}`.
    pub salary_template: String,
    /// Contains `{budget}`.
    pub budget_template: String,
}

impl Phrases {
    fn new(yes: &str, no: &str, experience: &str, salary: &str, budget: &str) -> Self {
        Self {
            yes: yes.to_string(),
            no: no.to_string(),
            experience_template: experience.to_string(),
            salary_template: salary.to_string(),
            budget_template: budget.to_string(),
        }
    }

    pub fn english() -> Self {
        Self::new(
            "Yes",
            "No",
            "Do you have experience: {requirement}?",
            "What are your salary expectations ({currency})?",
            "Our budget is {budget}. Are you comfortable with it?",
        )
    }

    pub fn experience_question(&self, requirement: &str) -> String {
        self.experience_template
            .replace(REQUIREMENT_PLACEHOLDER, requirement)
    }

    pub fn salary_question(&self, currency: &str) -> String {
        self.salary_template.replace(CURRENCY_PLACEHOLDER, currency)
    }

    pub fn budget_question(&self, budget_display: &str) -> String {
        self.budget_template.replace(BUDGET_PLACEHOLDER, budget_display)
    }
}

/// Language code → phrases. Built once at startup and shared read-only.
#[derive(Debug, Clone)]
pub struct PhraseBook {
    by_language: HashMap<String, Phrases>,
}

impl PhraseBook {
    pub fn builtin() -> Self {
        let entries = [
            ("en", Phrases::english()),
            (
                "ru",
                Phrases::new(
                    "Да",
                    "Нет",
                    "У вас есть опыт: {requirement}?",
                    "Каковы ваши ожидания по зарплате ({currency})?",
                    "Наш бюджет {budget}. Вы готовы к нему?",
                ),
            ),
            (
                "es",
                Phrases::new(
                    "Sí",
                    "No",
                    "¿Tiene experiencia en: {requirement}?",
                    "¿Cuáles son sus expectativas salariales ({currency})?",
                    "Nuestro presupuesto es de {budget}. ¿Está de acuerdo con él?",
                ),
            ),
            (
                "de",
                Phrases::new(
                    "Ja",
                    "Nein",
                    "Haben Sie Erfahrung mit: {requirement}?",
                    "Wie hoch sind Ihre Gehaltsvorstellungen ({currency})?",
                    "Unser Budget beträgt {budget}. Sind Sie damit einverstanden?",
                ),
            ),
            (
                "fr",
                Phrases::new(
                    "Oui",
                    "Non",
                    "Avez-vous de l'expérience : {requirement} ?",
                    "Quelles sont vos prétentions salariales ({currency}) ?",
                    "Notre budget est de {budget}. Cela vous convient-il ?",
                ),
            ),
            (
                "it",
                Phrases::new(
                    "Sì",
                    "No",
                    "Hai esperienza in: {requirement}?",
                    "Quali sono le tue aspettative salariali ({currency})?",
                    "Il nostro budget è di {budget}. Ti va bene?",
                ),
            ),
        ];

        Self {
            by_language: entries
                .into_iter()
                .map(|(code, phrases)| (code.to_string(), phrases))
                .collect(),
        }
    }

    pub fn get(&self, language: &str) -> Option<&Phrases> {
        self.by_language.get(language)
    }

    /// Phrases for `language`, or English if the table has no entry for it.
    pub fn baseline(&self, language: &str) -> Phrases {
        self.get(language).cloned().unwrap_or_else(Phrases::english)
    }

    pub fn len(&self) -> usize {
        self.by_language.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_builtin_template_keeps_its_placeholder() {
        let book = PhraseBook::builtin();
        for (code, phrases) in &book.by_language {
            assert!(
                phrases.experience_template.contains(REQUIREMENT_PLACEHOLDER),
                "{code} experience template"
            );
            assert!(
                phrases.salary_template.contains(CURRENCY_PLACEHOLDER),
                "{code} salary template"
            );
            assert!(
                phrases.budget_template.contains(BUDGET_PLACEHOLDER),
                "{code} budget template"
            );
        }
    }

    #[test]
    fn test_builtin_covers_six_languages() {
        let book = PhraseBook::builtin();
        assert_eq!(book.len(), 6);
        for code in ["en", "ru", "es", "de", "fr", "it"] {
            assert!(book.get(code).is_some(), "missing {code}");
        }
        assert!(book.get("pt").is_none());
    }

    #[test]
    fn test_questions_fill_placeholders() {
        let ru = PhraseBook::builtin().baseline("ru");
        assert_eq!(ru.experience_question("Rust"), "У вас есть опыт: Rust?");
        assert_eq!(
            ru.salary_question("руб."),
            "Каковы ваши ожидания по зарплате (руб.)?"
        );
        assert_eq!(
            ru.budget_question("200000 руб."),
            "Наш бюджет 200000 руб.. Вы готовы к нему?"
        );
    }

    #[test]
    fn test_unknown_baseline_falls_back_to_english() {
        assert_eq!(PhraseBook::builtin().baseline("xx"), Phrases::english());
    }
}
