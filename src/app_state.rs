use std::sync::Arc;

use crate::{
    config::Config,
    services::{ChatService, GeminiClient, ModelClient, ModelInvoker, QuizService},
};

#[derive(Clone)]
pub struct AppState {
    pub chat_service: Arc<ChatService>,
    pub quiz_service: Arc<QuizService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let client = Arc::new(GeminiClient::from_config(&config));
        Self::with_client(config, client)
    }

    /// Builds the state around any completion backend.
    pub fn with_client(config: Config, client: Arc<dyn ModelClient>) -> Self {
        let invoker = Arc::new(ModelInvoker::new(client, config.model_names.clone()));

        let chat_service = Arc::new(ChatService::new(invoker.clone(), config.chat_timeout()));
        let quiz_service = Arc::new(QuizService::new(invoker, config.quiz_timeout()));

        Self {
            chat_service,
            quiz_service,
            config: Arc::new(config),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_cloneable() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_new_keeps_config() {
        let state = AppState::new(Config::with_api_key("key"));
        assert_eq!(state.config.model_names.len(), 2);
    }
}
