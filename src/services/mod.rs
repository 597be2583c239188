pub mod chat_service;
pub mod http_helpers;
pub mod model_invoker;
pub mod model_service;
pub mod prompt_builder;
pub mod quiz_grader;
pub mod quiz_service;
pub mod response_extractor;

pub use chat_service::ChatService;
pub use model_invoker::{InvokeError, ModelInvoker};
pub use model_service::{GeminiClient, ModelClient, UpstreamError};
pub use quiz_service::QuizService;
