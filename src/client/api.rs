use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

use crate::models::{
    domain::{OptionLetter, QuizQuestion},
    dto::{
        request::{ChatRequest, QuizRequest},
        response::{ChatResponse, QuizCheckResponse, QuizGenerateResponse},
    },
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    #[error("{0}")]
    Transport(String),

    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("Invalid response format")]
    InvalidResponse,
}

#[async_trait]
pub trait ChatApi: Send + Sync {
    async fn send_chat(&self, message: &str) -> Result<String, ClientError>;

    async fn generate_quiz(&self) -> Result<QuizQuestion, ClientError>;

    async fn check_answer(
        &self,
        question: &QuizQuestion,
        selected: OptionLetter,
    ) -> Result<QuizCheckResponse, ClientError>;
}

/// Talks to a running server over HTTP.
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    async fn post<B, T>(&self, path: &str, body: &B, fallback: &str) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url.trim_end_matches('/'), path);
        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;
        let value = serde_json::from_str::<serde_json::Value>(&text).unwrap_or_default();

        if !status.is_success() {
            return Err(ClientError::Api {
                status: status.as_u16(),
                message: error_message(&value, status, fallback),
            });
        }
        if value.get("success").and_then(|s| s.as_bool()) != Some(true) {
            return Err(ClientError::InvalidResponse);
        }

        serde_json::from_value(value).map_err(|_| ClientError::InvalidResponse)
    }
}

#[async_trait]
impl ChatApi for ApiClient {
    async fn send_chat(&self, message: &str) -> Result<String, ClientError> {
        let response: ChatResponse = self
            .post("/chat", &ChatRequest::new(message), "")
            .await?;
        Ok(response.message)
    }

    async fn generate_quiz(&self) -> Result<QuizQuestion, ClientError> {
        let response: QuizGenerateResponse = self
            .post("/quiz", &QuizRequest::generate(), "Failed to generate question")
            .await?;
        Ok(response.quiz)
    }

    async fn check_answer(
        &self,
        question: &QuizQuestion,
        selected: OptionLetter,
    ) -> Result<QuizCheckResponse, ClientError> {
        let request = QuizRequest::check(question.clone(), selected);
        self.post("/quiz", &request, "Failed to check answer").await
    }
}

/// Picks the message to show for a failed call: the envelope's `error`,
/// then `details`, then `fallback`, then the bare status.
fn error_message(body: &serde_json::Value, status: StatusCode, fallback: &str) -> String {
    ["error", "details"]
        .iter()
        .filter_map(|key| body.get(*key).and_then(|v| v.as_str()))
        .find(|s| !s.is_empty())
        .map(String::from)
        .or_else(|| (!fallback.is_empty()).then(|| fallback.to_string()))
        .unwrap_or_else(|| format!("HTTP {}", status.as_u16()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_error_message_prefers_error_field() {
        let body = json!({ "error": "Failed to get response from AI", "details": "boom" });
        assert_eq!(
            error_message(&body, StatusCode::INTERNAL_SERVER_ERROR, ""),
            "Failed to get response from AI"
        );
    }

    #[test]
    fn test_error_message_uses_details_when_error_missing() {
        let body = json!({ "details": "Request timeout. Please try again." });
        assert_eq!(
            error_message(&body, StatusCode::REQUEST_TIMEOUT, ""),
            "Request timeout. Please try again."
        );
    }

    #[test]
    fn test_error_message_falls_back_to_status() {
        let body = serde_json::Value::Null;
        assert_eq!(error_message(&body, StatusCode::BAD_GATEWAY, ""), "HTTP 502");
        assert_eq!(
            error_message(&body, StatusCode::BAD_GATEWAY, "Failed to check answer"),
            "Failed to check answer"
        );
    }
}
