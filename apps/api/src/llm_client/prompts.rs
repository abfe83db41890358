// Shared prompt fragments.
// Each service that needs LLM calls defines its own prompts.rs alongside it.

/// Appended to every localization prompt so replies can be used verbatim as form text.
pub const PLAIN_TEXT_ONLY: &str = "Return only the requested text. \
    Do NOT add explanations, quotes, markdown or a trailing note.";

/// Temperature for calls whose output must be reproducible (detection, translation).
pub const DETERMINISTIC_TEMPERATURE: f32 = 0.0;

/// Temperature for paraphrasing, where some variety reads more naturally.
pub const CREATIVE_TEMPERATURE: f32 = 0.7;
