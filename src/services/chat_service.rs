use std::{sync::Arc, time::Duration};

use crate::{
    errors::AppResult,
    models::domain::GenerationConfig,
    services::{model_invoker::ModelInvoker, prompt_builder, response_extractor},
};

pub struct ChatService {
    invoker: Arc<ModelInvoker>,
    attempt_timeout: Duration,
}

impl ChatService {
    pub fn new(invoker: Arc<ModelInvoker>, attempt_timeout: Duration) -> Self {
        Self {
            invoker,
            attempt_timeout,
        }
    }

    /// Answers `message` in the persona's voice.
    pub async fn reply(&self, message: &str) -> AppResult<String> {
        let prompt = prompt_builder::chat_prompt(message);
        let raw = self
            .invoker
            .invoke(&prompt, &GenerationConfig::CHAT, self.attempt_timeout)
            .await?;
        response_extractor::extract_chat_reply(&raw)
    }
}
