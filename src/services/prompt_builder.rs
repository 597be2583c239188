use crate::constants::{prompts::PERSONA_PROMPT, quiz_prompt::QUIZ_PROMPT};

/// Persona prompt with the user's question appended verbatim. No escaping is
/// applied; the caller guarantees `message` is non-empty.
pub fn chat_prompt(message: &str) -> String {
    format!("{}\n\nCâu hỏi: {}\n\nTrả lời:", PERSONA_PROMPT, message)
}

pub fn quiz_prompt() -> String {
    QUIZ_PROMPT.to_string()
}
