// All LLM prompt constants for the localization service.
// Reuses cross-cutting fragments from llm_client::prompts.

use crate::llm_client::prompts::PLAIN_TEXT_ONLY;

/// Characters of the job description sent for language detection.
pub const DETECTION_SAMPLE_CHARS: usize = 500;

pub const DETECT_LANGUAGE_SYSTEM: &str = "Determine the language of the given text. \
    Respond with only the ISO 639-1 language code (en, ru, es, it, de, fr, etc.).";

/// Replace `{target_language}` before sending.
const TRANSLATE_SYSTEM_TEMPLATE: &str = "Translate the following text to {target_language}. \
    Keep any placeholder in curly braces, such as {budget}, exactly as it is.";

pub fn translate_system(target_language: &str) -> String {
    format!(
        "{} {PLAIN_TEXT_ONLY}",
        TRANSLATE_SYSTEM_TEMPLATE.replace("{target_language}", target_language)
    )
}

/// System prompt for paraphrasing interview questions, in the target language where known.
pub fn paraphrase_system(target_language: &str) -> &'static str {
    match target_language {
        "ru" => "Ты — помощник по формулировке вопросов для собеседования на русском языке.",
        "en" => "You are an assistant for phrasing interview questions in English.",
        "es" => "Eres un asistente para formular preguntas de entrevista en español.",
        "de" => "Du bist ein Assistent für die Formulierung von Interviewfragen auf Deutsch.",
        "fr" => "Tu es un assistant pour formuler des questions d'entretien en français.",
        "it" => "Sei un assistente per formulare domande di colloquio in italiano.",
        _ => "You are an assistant for phrasing interview questions.",
    }
}

/// User prompt asking for a natural yes/no interview question.
pub fn paraphrase_prompt(question: &str, target_language: &str) -> String {
    match target_language {
        "ru" => format!(
            "Сделай из вопроса '{question}' естественный, грамотный вопрос для собеседования на русском языке. \
             Вопрос должен сохранить формат ответов Да/нет. Верни только сам вопрос, без пояснений."
        ),
        "en" => format!(
            "Make the question '{question}' sound like a natural, well-phrased interview question in English. \
             The question should keep the Yes/No answer format. Return only the question, no explanations."
        ),
        "es" => format!(
            "Haz que la pregunta '{question}' suene como una pregunta de entrevista natural y bien formulada en español. \
             La pregunta debe mantener el formato de respuesta Sí/No. Devuelve solo la pregunta, sin explicaciones."
        ),
        "de" => format!(
            "Formuliere die Frage '{question}' als eine natürlich klingende, gut formulierte Interviewfrage auf Deutsch. \
             Die Frage soll das Ja/Nein-Antwortformat beibehalten. Gib nur die Frage zurück, keine Erklärungen."
        ),
        "fr" => format!(
            "Formule la question '{question}' comme une question d'entretien naturelle et bien formulée en français. \
             La question doit conserver le format de réponse Oui/Non. Retourne uniquement la question, sans explications."
        ),
        "it" => format!(
            "Rendi la domanda '{question}' una domanda di colloquio naturale e ben formulata in italiano. \
             La domanda deve mantenere il formato di risposta Sì/No. Restituisci solo la domanda, senza spiegazioni."
        ),
        other => format!(
            "Make the question '{question}' sound like a natural, well-phrased interview question in {other}. \
             The question should keep the Yes/No answer format. {PLAIN_TEXT_ONLY}"
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate_system_names_target() {
        let system = translate_system("de");
        assert!(system.contains("to de."));
        assert!(system.contains("{budget}"));
    }

    #[test]
    fn test_paraphrase_prompt_embeds_question() {
        let prompt = paraphrase_prompt("Do you have experience: Rust?", "en");
        assert!(prompt.contains("'Do you have experience: Rust?'"));
    }

    #[test]
    fn test_unknown_language_uses_generic_prompts() {
        assert_eq!(
            paraphrase_system("pt"),
            "You are an assistant for phrasing interview questions."
        );
        assert!(paraphrase_prompt("Q?", "pt").contains("interview question in pt"));
    }
}
