//! Client-side view model for the chat and quiz screens: conversation
//! history persisted under a fixed key, quiz selection state and the HTTP
//! client for the two endpoints.

pub mod api;
pub mod format;
pub mod session;
pub mod state;
pub mod storage;

pub use api::{ApiClient, ChatApi, ClientError};
pub use session::ClientSession;
pub use state::{AnswerResult, ClientState, Tab};
pub use storage::{FileHistoryStore, HistoryRepository, HistoryStore, MemoryHistoryStore};
