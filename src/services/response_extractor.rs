use once_cell::sync::Lazy;
use regex::Regex;
use validator::Validate;

use crate::{
    constants::quiz_prompt::fallback_question,
    errors::{AppError, AppResult},
    models::domain::QuizQuestion,
};

static JSON_FENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"```json\s*").expect("JSON_FENCE is a valid regex pattern"));
static FENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"```\s*").expect("FENCE is a valid regex pattern"));
static JSON_OBJECT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{[\s\S]*\}").expect("JSON_OBJECT is a valid regex pattern"));

/// Chat replies are passed through trimmed; nothing left means failure.
pub fn extract_chat_reply(raw: &str) -> AppResult<String> {
    let text = raw.trim();
    if text.is_empty() {
        return Err(AppError::EmptyResponse(
            "Empty response from Gemini API".to_string(),
        ));
    }
    Ok(text.to_string())
}

/// Recovers a quiz question from model output that may wrap the JSON in
/// prose or code fences.
pub fn try_extract_quiz(raw: &str) -> AppResult<QuizQuestion> {
    let unfenced = JSON_FENCE.replace_all(raw.trim(), "");
    let unfenced = FENCE.replace_all(&unfenced, "");

    let span = JSON_OBJECT
        .find(&unfenced)
        .ok_or_else(|| AppError::ExtractionError("No JSON found in response".to_string()))?;

    let question: QuizQuestion = serde_json::from_str(span.as_str())?;
    question
        .validate()
        .map_err(|e| AppError::ExtractionError(format!("Invalid quiz data structure: {}", e)))?;
    Ok(question)
}

/// Like [`try_extract_quiz`] but never fails: unusable output is replaced by
/// the fixed fallback question.
pub fn extract_quiz(raw: &str) -> QuizQuestion {
    match try_extract_quiz(raw) {
        Ok(question) => question,
        Err(err) => {
            log::warn!("Serving fallback quiz question: {}", err);
            fallback_question()
        }
    }
}
