use crate::{
    client::{
        api::ChatApi,
        state::{AnswerResult, ClientState, Tab},
        storage::HistoryRepository,
    },
    models::domain::OptionLetter,
};

/// One client tab: view state, its persisted history and the API it calls.
pub struct ClientSession<A: ChatApi> {
    api: A,
    history: HistoryRepository,
    state: ClientState,
}

impl<A: ChatApi> ClientSession<A> {
    /// Opens a session, rehydrating any stored conversation.
    pub fn open(api: A, history: HistoryRepository) -> Self {
        let messages = history.load().unwrap_or_else(|err| {
            log::error!("Error loading chat history: {}", err);
            Vec::new()
        });
        Self {
            api,
            history,
            state: ClientState::with_messages(messages),
        }
    }

    pub fn state(&self) -> &ClientState {
        &self.state
    }

    pub fn select_tab(&mut self, tab: Tab) {
        self.state.active_tab = tab;
    }

    pub fn dismiss_alert(&mut self) {
        self.state.dismiss_alert();
    }

    /// Sends `input` and records the reply (or the failure) in the
    /// conversation. Returns false when nothing was sent.
    pub async fn send_message(&mut self, input: &str) -> bool {
        let Some(message) = self.state.begin_send(input) else {
            return false;
        };
        self.persist();

        let outcome = self
            .api
            .send_chat(&message)
            .await
            .map_err(|e| e.to_string());
        self.state.finish_send(outcome);
        self.persist();
        true
    }

    pub async fn generate_question(&mut self) {
        if !self.state.begin_generate() {
            return;
        }
        let outcome = self.api.generate_quiz().await.map_err(|e| e.to_string());
        self.state.finish_generate(outcome);
    }

    pub async fn check_answer(&mut self, answer: OptionLetter) {
        let Some(question) = self.state.begin_check(answer) else {
            return;
        };
        let outcome = self
            .api
            .check_answer(&question, answer)
            .await
            .map(|response| AnswerResult {
                is_correct: response.is_correct,
                explanation: response.explanation,
            })
            .map_err(|e| e.to_string());
        self.state.finish_check(outcome);
    }

    pub fn clear_chat(&mut self) {
        self.state.clear_messages();
        if let Err(err) = self.history.clear() {
            log::error!("Error clearing chat history: {}", err);
        }
    }

    fn persist(&self) {
        if self.state.messages.is_empty() {
            return;
        }
        if let Err(err) = self.history.save(&self.state.messages) {
            log::error!("Error saving chat history: {}", err);
        }
    }
}
