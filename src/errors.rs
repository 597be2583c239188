use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Timeout: {0}")]
    Timeout(String),

    #[error("Quota exceeded: {0}")]
    QuotaExceeded(String),

    #[error("Model error: {0}")]
    ModelError(String),

    #[error("Extraction error: {0}")]
    ExtractionError(String),

    #[error("Empty response: {0}")]
    EmptyResponse(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// Maps a raw upstream error message onto the error taxonomy by the
    /// substrings the provider is known to use.
    pub fn from_upstream_message(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.contains("API key") {
            AppError::Unauthorized(message)
        } else if message.contains("timeout") {
            AppError::Timeout(message)
        } else if message.contains("quota") || message.contains("Quota") {
            AppError::QuotaExceeded(message)
        } else if message.contains("model") || message.contains("Model") {
            AppError::ModelError(message)
        } else {
            AppError::InternalError(message)
        }
    }

    /// User-facing detail line placed in the error envelope.
    pub fn details(&self) -> String {
        match self {
            AppError::Unauthorized(_) => {
                "Invalid or missing API key. Please check your GEMINI_API_KEY configuration."
                    .to_string()
            }
            AppError::Timeout(_) => "Request timeout. Please try again.".to_string(),
            AppError::QuotaExceeded(_) => {
                "API quota exceeded. Please check your Gemini API quota.".to_string()
            }
            AppError::ModelError(message) => format!("Model error: {}", message),
            AppError::ValidationError(message)
            | AppError::ExtractionError(message)
            | AppError::EmptyResponse(message)
            | AppError::InternalError(message) => message.clone(),
        }
    }

    pub fn in_context(self, summary: &'static str) -> ApiError {
        ApiError {
            summary,
            source: self,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    pub success: bool,
}

/// An [`AppError`] paired with the endpoint-level summary shown in the
/// envelope's `error` field.
#[derive(Debug, Error)]
#[error("{summary}: {source}")]
pub struct ApiError {
    summary: &'static str,
    source: AppError,
}

impl ApiError {
    pub fn kind(&self) -> &AppError {
        &self.source
    }
}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        err.in_context("Request failed")
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        self.source.status_code()
    }

    fn error_response(&self) -> HttpResponse {
        let body = match &self.source {
            AppError::ValidationError(message) => ErrorResponse {
                error: message.clone(),
                details: None,
                success: false,
            },
            other => ErrorResponse {
                error: self.summary.to_string(),
                details: Some(other.details()),
                success: false,
            },
        };
        HttpResponse::build(self.status_code()).json(body)
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Timeout(_) => StatusCode::REQUEST_TIMEOUT,
            AppError::QuotaExceeded(_) => StatusCode::TOO_MANY_REQUESTS,
            AppError::ModelError(_) => StatusCode::BAD_REQUEST,
            AppError::ExtractionError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::EmptyResponse(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        ApiError::from(self.clone()).error_response()
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::ValidationError(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::ExtractionError(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::InternalError(format!("storage error: {}", err))
    }
}

pub type AppResult<T> = Result<T, AppError>;
