use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::errors::{AppError, AppResult};
use crate::models::domain::{OptionLetter, QuizQuestion};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<String>,
}

impl ChatRequest {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
        }
    }

    /// The message to answer, rejected when absent or blank.
    pub fn required_message(&self) -> AppResult<&str> {
        self.message
            .as_deref()
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .ok_or_else(|| AppError::ValidationError("Message is required".to_string()))
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizRequest {
    #[serde(default)]
    pub action: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_answer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question: Option<QuizQuestion>,
}

impl QuizRequest {
    pub fn generate() -> Self {
        Self {
            action: Some("generate".to_string()),
            ..Self::default()
        }
    }

    pub fn check(question: QuizQuestion, selected: OptionLetter) -> Self {
        Self {
            action: Some("check".to_string()),
            selected_answer: Some(selected.to_string()),
            question: Some(question),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizAction {
    Generate,
    Check {
        question: QuizQuestion,
        selected: String,
    },
}

impl TryFrom<QuizRequest> for QuizAction {
    type Error = AppError;

    fn try_from(request: QuizRequest) -> Result<Self, Self::Error> {
        let action = request
            .action
            .filter(|a| !a.is_empty())
            .ok_or_else(|| AppError::ValidationError("Action is required".to_string()))?;

        match action.as_str() {
            "generate" => Ok(QuizAction::Generate),
            "check" => {
                let (Some(question), Some(selected)) = (
                    request.question,
                    request.selected_answer.filter(|s| !s.is_empty()),
                ) else {
                    return Err(AppError::ValidationError(
                        "Missing question or answer".to_string(),
                    ));
                };
                question.validate()?;
                Ok(QuizAction::Check { question, selected })
            }
            _ => Err(AppError::ValidationError("Invalid action".to_string())),
        }
    }
}
