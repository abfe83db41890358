//! Questionnaire generation — turns must-have lines into form fields and salary logic.
//!
//! Flow: detect language → resolve phrases → split salary lines →
//!       one yes/no field per requirement → salary field → flexibility field
//!       (inserted right after the salary field) → jump rule.
//!
//! Field refs are shared with the screening matcher: every requirement
//! question is `musthave_<n>` so its answer is recognised at submission time.

use serde::{Deserialize, Deserializer, Serialize};
use tracing::{info, warn};

use crate::localization::Localizer;
use crate::questionnaire::budget::BudgetInput;
use crate::questionnaire::phrases::{
    PhraseBook, Phrases, BUDGET_PLACEHOLDER, CURRENCY_PLACEHOLDER, REQUIREMENT_PLACEHOLDER,
};
use crate::questionnaire::schema::{BranchRule, FormField};
use crate::screening::requirements::{clean_requirement, is_salary_requirement};

pub const SALARY_FLEXIBILITY_REF: &str = "salary_flexibility";
const FLEX_YES_CHOICE_REF: &str = "flex_yes_choice";
const FLEX_NO_CHOICE_REF: &str = "flex_no_choice";

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
pub struct QuestionnaireRequest {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub must_haves: Vec<String>,
    #[serde(default)]
    pub job_description: String,
    pub budget: Option<BudgetInput>,
    pub currency: Option<String>,
}

/// Absent and `null` requirement lists both mean "no requirements".
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Questionnaire {
    pub fields: Vec<FormField>,
    pub logic: Vec<BranchRule>,
    /// Language the questions were written in; `None` when nothing was generated.
    pub language: Option<String>,
}

/// Fallbacks applied when detection fails or the author leaves a value out.
#[derive(Debug, Clone)]
pub struct GenerationDefaults {
    pub baseline_language: String,
    pub currency: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Generation pipeline
// ────────────────────────────────────────────────────────────────────────────

/// Builds the must-have questions and salary logic for a form.
///
/// Never fails: localization errors fall back to untranslated text and an
/// unusable budget only suppresses the flexibility question.
pub async fn generate_questionnaire(
    request: &QuestionnaireRequest,
    localizer: &dyn Localizer,
    phrases: &PhraseBook,
    defaults: &GenerationDefaults,
) -> Questionnaire {
    let requirements: Vec<String> = request
        .must_haves
        .iter()
        .filter_map(|line| clean_requirement(line))
        .collect();

    if requirements.is_empty() {
        return Questionnaire {
            fields: Vec::new(),
            logic: Vec::new(),
            language: None,
        };
    }

    let language = match localizer.detect_language(&request.job_description).await {
        Ok(code) => code,
        Err(e) => {
            warn!(
                "Language detection failed, using {}: {e}",
                defaults.baseline_language
            );
            defaults.baseline_language.clone()
        }
    };

    let vocabulary = resolve_phrases(&language, localizer, phrases, defaults).await;
    let currency = request
        .currency
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .unwrap_or(&defaults.currency);

    let (salary_lines, other_lines): (Vec<String>, Vec<String>) = requirements
        .into_iter()
        .partition(|line| is_salary_requirement(line));

    let mut fields = Vec::with_capacity(other_lines.len() + 2);
    for (idx, requirement) in other_lines.iter().enumerate() {
        let position = idx + 1;
        let raw_question = vocabulary.experience_question(requirement);
        let title = match localizer.paraphrase(&raw_question, &language).await {
            Ok(text) => text,
            Err(e) => {
                warn!("Paraphrase failed for musthave_{position}: {e}");
                raw_question
            }
        };
        fields.push(FormField::yes_no(
            title,
            format!("musthave_{position}"),
            (vocabulary.yes.as_str(), format!("yes_choice_{position}")),
            (vocabulary.no.as_str(), format!("no_choice_{position}")),
        ));
    }

    let mut logic = Vec::new();
    if salary_lines.is_empty() {
        info!("Generated {} must-have fields, no salary question", fields.len());
        return Questionnaire {
            fields,
            logic,
            language: Some(language),
        };
    }

    let salary_index = fields.len();
    let salary_ref = format!("musthave_{}", salary_index + 1);
    fields.push(FormField::number(
        vocabulary.salary_question(currency),
        salary_ref.clone(),
    ));

    if let Some(budget) = &request.budget {
        let budget_value = budget.parse().unwrap_or_else(|e| {
            warn!("Ignoring budget: {e}");
            0.0
        });

        if budget_value > 0.0 {
            let display = format!("{budget} {currency}");
            fields.insert(
                salary_index + 1,
                FormField::yes_no(
                    vocabulary.budget_question(&display),
                    SALARY_FLEXIBILITY_REF.to_string(),
                    (vocabulary.yes.as_str(), FLEX_YES_CHOICE_REF.to_string()),
                    (vocabulary.no.as_str(), FLEX_NO_CHOICE_REF.to_string()),
                ),
            );
            logic.push(BranchRule::jump_if_greater(
                &salary_ref,
                budget_value,
                SALARY_FLEXIBILITY_REF,
            ));
        } else {
            warn!("Budget {budget} is not positive, skipping flexibility question");
        }
    }

    info!(
        "Generated {} fields and {} logic rules in '{language}'",
        fields.len(),
        logic.len()
    );

    Questionnaire {
        fields,
        logic,
        language: Some(language),
    }
}

/// Built-in phrases when the table knows `language`; otherwise each baseline
/// phrase is translated, keeping the baseline wherever translation fails.
async fn resolve_phrases(
    language: &str,
    localizer: &dyn Localizer,
    phrases: &PhraseBook,
    defaults: &GenerationDefaults,
) -> Phrases {
    if let Some(known) = phrases.get(language) {
        return known.clone();
    }

    let baseline = phrases.baseline(&defaults.baseline_language);
    info!("No built-in phrases for '{language}', translating");

    Phrases {
        yes: translate_or_keep(localizer, &baseline.yes, language, None).await,
        no: translate_or_keep(localizer, &baseline.no, language, None).await,
        experience_template: translate_or_keep(
            localizer,
            &baseline.experience_template,
            language,
            Some(REQUIREMENT_PLACEHOLDER),
        )
        .await,
        salary_template: translate_or_keep(
            localizer,
            &baseline.salary_template,
            language,
            Some(CURRENCY_PLACEHOLDER),
        )
        .await,
        budget_template: translate_or_keep(
            localizer,
            &baseline.budget_template,
            language,
            Some(BUDGET_PLACEHOLDER),
        )
        .await,
    }
}

/// A translated template that lost its placeholder is unusable, so the original is kept.
async fn translate_or_keep(
    localizer: &dyn Localizer,
    text: &str,
    language: &str,
    placeholder: Option<&str>,
) -> String {
    match localizer.translate(text, language).await {
        Ok(translated) if placeholder.map_or(true, |p| translated.contains(p)) => translated,
        Ok(translated) => {
            warn!("Translation {translated:?} dropped its placeholder, keeping {text:?}");
            text.to_string()
        }
        Err(e) => {
            warn!("Translation to '{language}' failed, keeping {text:?}: {e}");
            text.to_string()
        }
    }
}
