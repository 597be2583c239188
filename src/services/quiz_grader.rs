use crate::models::domain::{OptionLetter, QuizQuestion};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradeResult {
    pub is_correct: bool,
    pub correct_answer: OptionLetter,
    pub explanation: String,
}

/// Grades `selected` as sent by the client. Only the exact option key of
/// the correct answer counts; anything else, including unknown keys, is wrong.
pub fn grade(question: &QuizQuestion, selected: &str) -> GradeResult {
    GradeResult {
        is_correct: selected.parse::<OptionLetter>().ok() == Some(question.correct_answer),
        correct_answer: question.correct_answer,
        explanation: question.explanation.clone(),
    }
}
