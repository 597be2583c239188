use std::{sync::Arc, time::Duration};

use thiserror::Error;

use crate::{
    errors::AppError,
    models::domain::GenerationConfig,
    services::model_service::{ModelClient, UpstreamError},
};

pub const TIMEOUT_MESSAGE: &str = "Request timeout";
pub const EXHAUSTED_MESSAGE: &str = "All models failed";

/// Substrings that mark a failure no other model will recover from.
const FATAL_MARKERS: [&str; 4] = ["API key", "quota", "Quota", "timeout"];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvokeError {
    /// Credential, quota or timeout failure; remaining models were skipped.
    #[error("{0}")]
    Fatal(String),

    /// Every model failed with a transient error; holds the last one.
    #[error("{0}")]
    Exhausted(String),
}

impl InvokeError {
    pub fn message(&self) -> &str {
        match self {
            InvokeError::Fatal(message) | InvokeError::Exhausted(message) => message,
        }
    }
}

impl From<InvokeError> for AppError {
    fn from(err: InvokeError) -> Self {
        AppError::from_upstream_message(err.message())
    }
}

pub fn is_fatal(message: &str) -> bool {
    FATAL_MARKERS.iter().any(|marker| message.contains(marker))
}

/// Tries an ordered list of models until one answers.
pub struct ModelInvoker {
    client: Arc<dyn ModelClient>,
    models: Vec<String>,
}

impl ModelInvoker {
    pub fn new(client: Arc<dyn ModelClient>, models: Vec<String>) -> Self {
        Self { client, models }
    }

    pub async fn invoke(
        &self,
        prompt: &str,
        config: &GenerationConfig,
        attempt_timeout: Duration,
    ) -> Result<String, InvokeError> {
        let mut last_error: Option<String> = None;

        for model in &self.models {
            log::debug!("Requesting completion from model {}", model);

            // Dropping the pending call on timeout aborts the HTTP request.
            let attempt = tokio::time::timeout(
                attempt_timeout,
                self.client.generate_content(model, prompt, config),
            )
            .await;

            let err = match attempt {
                Ok(Ok(text)) => {
                    log::info!("Model {} answered", model);
                    return Ok(text);
                }
                Ok(Err(err)) => err,
                Err(_) => UpstreamError::new(TIMEOUT_MESSAGE),
            };

            if is_fatal(&err.message) {
                log::error!("Model {} failed fatally: {}", model, err.describe());
                return Err(InvokeError::Fatal(err.message));
            }

            log::warn!("Model {} failed, trying next model: {}", model, err.describe());
            last_error = Some(err.message);
        }

        Err(InvokeError::Exhausted(
            last_error.unwrap_or_else(|| EXHAUSTED_MESSAGE.to_string()),
        ))
    }
}
