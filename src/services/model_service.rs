use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{config::Config, models::domain::GenerationConfig};

const BAD_FINISH_REASONS: [&str; 3] = ["SAFETY", "RECITATION", "LANGUAGE"];

/// Failure reported by the completion provider. Only the message text is
/// used for classification further up; the HTTP status is kept for logs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct UpstreamError {
    pub status: Option<u16>,
    pub message: String,
}

impl UpstreamError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: None,
            message: message.into(),
        }
    }

    pub fn with_status(status: u16, message: impl Into<String>) -> Self {
        Self {
            status: Some(status),
            message: message.into(),
        }
    }

    /// Message prefixed with the HTTP status when the provider sent one.
    pub fn describe(&self) -> String {
        match self.status {
            Some(status) => format!("HTTP {}: {}", status, self.message),
            None => self.message.clone(),
        }
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ModelClient: Send + Sync {
    /// Runs one completion against the named model and returns its raw text.
    async fn generate_content(
        &self,
        model: &str,
        prompt: &str,
        config: &GenerationConfig,
    ) -> Result<String, UpstreamError>;
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<RequestContent<'a>>,
    generation_config: &'a GenerationConfig,
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<CandidateContent>,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
    status: Option<String>,
}

/// Client for the Gemini `generateContent` REST endpoint.
pub struct GeminiClient {
    client: Client,
    base_url: String,
    api_key: SecretString,
}

impl GeminiClient {
    pub fn new(base_url: impl Into<String>, api_key: SecretString) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            api_key,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.gemini_base_url.clone(), config.gemini_api_key.clone())
    }

    fn endpoint(&self, model: &str) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            model
        )
    }
}

#[async_trait]
impl ModelClient for GeminiClient {
    async fn generate_content(
        &self,
        model: &str,
        prompt: &str,
        config: &GenerationConfig,
    ) -> Result<String, UpstreamError> {
        let body = GenerateContentRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: prompt }],
            }],
            generation_config: config,
        };

        let response = self
            .client
            .post(self.endpoint(model))
            .header("x-goog-api-key", self.api_key.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(|e| UpstreamError::new(e.without_url().to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| UpstreamError::new(e.without_url().to_string()))?;

        if !status.is_success() {
            return Err(UpstreamError::with_status(
                status.as_u16(),
                error_message(status, &text),
            ));
        }

        let parsed: GenerateContentResponse = serde_json::from_str(&text)
            .map_err(|e| UpstreamError::new(format!("Failed to parse response: {}", e)))?;
        response_text(parsed)
    }
}

fn error_message(status: StatusCode, body: &str) -> String {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) => {
            let reason = envelope
                .error
                .status
                .unwrap_or_else(|| status.canonical_reason().unwrap_or_default().to_string());
            format!("[{} {}] {}", status.as_u16(), reason, envelope.error.message)
        }
        Err(_) => format!("[{}] {}", status.as_u16(), body.trim()),
    }
}

fn response_text(response: GenerateContentResponse) -> Result<String, UpstreamError> {
    if let Some(reason) = response.prompt_feedback.and_then(|f| f.block_reason) {
        return Err(UpstreamError::new(format!(
            "Response was blocked due to {}",
            reason
        )));
    }

    let Some(candidate) = response.candidates.into_iter().next() else {
        return Ok(String::new());
    };

    if let Some(reason) = candidate
        .finish_reason
        .as_deref()
        .filter(|r| BAD_FINISH_REASONS.contains(r))
    {
        return Err(UpstreamError::new(format!(
            "Candidate was blocked due to {}",
            reason
        )));
    }

    Ok(candidate
        .content
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|part| part.text)
                .collect::<String>()
        })
        .unwrap_or_default())
}
