use std::{sync::Arc, time::Duration};

use crate::{
    errors::AppResult,
    models::domain::{GenerationConfig, QuizQuestion},
    services::{
        model_invoker::ModelInvoker,
        prompt_builder,
        quiz_grader::{self, GradeResult},
        response_extractor,
    },
};

pub struct QuizService {
    invoker: Arc<ModelInvoker>,
    attempt_timeout: Duration,
}

impl QuizService {
    pub fn new(invoker: Arc<ModelInvoker>, attempt_timeout: Duration) -> Self {
        Self {
            invoker,
            attempt_timeout,
        }
    }

    /// Generates a new question. Upstream failures are returned; unusable
    /// output resolves to the fallback question.
    pub async fn generate_question(&self) -> AppResult<QuizQuestion> {
        let prompt = prompt_builder::quiz_prompt();
        let raw = self
            .invoker
            .invoke(&prompt, &GenerationConfig::QUIZ, self.attempt_timeout)
            .await?;
        Ok(response_extractor::extract_quiz(&raw))
    }

    pub fn check_answer(&self, question: &QuizQuestion, selected: &str) -> GradeResult {
        quiz_grader::grade(question, selected)
    }
}
