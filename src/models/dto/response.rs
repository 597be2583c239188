use serde::{Deserialize, Serialize};

use crate::models::domain::{OptionLetter, QuizQuestion};
use crate::services::quiz_grader::GradeResult;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ChatResponse {
    pub message: String,
    pub success: bool,
}

impl ChatResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct QuizGenerateResponse {
    pub success: bool,
    pub quiz: QuizQuestion,
}

impl From<QuizQuestion> for QuizGenerateResponse {
    fn from(quiz: QuizQuestion) -> Self {
        Self {
            success: true,
            quiz,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizCheckResponse {
    pub success: bool,
    pub is_correct: bool,
    pub correct_answer: OptionLetter,
    pub explanation: String,
}

impl From<GradeResult> for QuizCheckResponse {
    fn from(result: GradeResult) -> Self {
        Self {
            success: true,
            is_correct: result.is_correct,
            correct_answer: result.correct_answer,
            explanation: result.explanation,
        }
    }
}
