pub mod chat_message;
pub mod generation_config;
pub mod quiz_question;
pub use chat_message::{ChatMessage, Role};
pub use generation_config::GenerationConfig;
pub use quiz_question::{OptionLetter, QuizOptions, QuizQuestion};
