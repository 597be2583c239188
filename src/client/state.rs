use serde::{Deserialize, Serialize};

use crate::models::domain::{ChatMessage, OptionLetter, QuizQuestion};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Chat,
    Game,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnswerResult {
    pub is_correct: bool,
    pub explanation: String,
}

/// Everything one client screen shows. Transitions are plain methods; the
/// busy flags make each action single-flight.
#[derive(Clone, Debug, Default)]
pub struct ClientState {
    pub active_tab: Tab,
    pub messages: Vec<ChatMessage>,
    pub current_question: Option<QuizQuestion>,
    pub selected_answer: Option<OptionLetter>,
    pub result: Option<AnswerResult>,
    pub alert: Option<String>,
    pub is_loading: bool,
    pub is_generating: bool,
    pub is_checking: bool,
}

impl ClientState {
    pub fn with_messages(messages: Vec<ChatMessage>) -> Self {
        Self {
            messages,
            ..Self::default()
        }
    }

    /// Appends the user's turn and marks the chat busy. Returns the text to
    /// send, or `None` when the input is blank or a reply is pending.
    pub fn begin_send(&mut self, input: &str) -> Option<String> {
        let message = input.trim();
        if message.is_empty() || self.is_loading {
            return None;
        }
        self.messages.push(ChatMessage::user(message));
        self.is_loading = true;
        Some(message.to_string())
    }

    /// Failures are shown in the conversation as an assistant turn.
    pub fn finish_send(&mut self, outcome: Result<String, String>) {
        let content = match outcome {
            Ok(reply) => reply,
            Err(error) => format!(
                "Xin lỗi, đã có lỗi xảy ra: {}. Vui lòng thử lại.",
                error
            ),
        };
        self.messages.push(ChatMessage::assistant(content));
        self.is_loading = false;
    }

    pub fn clear_messages(&mut self) {
        self.messages.clear();
    }

    pub fn begin_generate(&mut self) -> bool {
        if self.is_generating {
            return false;
        }
        self.is_generating = true;
        self.current_question = None;
        self.selected_answer = None;
        self.result = None;
        self.alert = None;
        true
    }

    pub fn finish_generate(&mut self, outcome: Result<QuizQuestion, String>) {
        match outcome {
            Ok(question) => self.current_question = Some(question),
            Err(error) => self.alert = Some(format!("Lỗi: {}", error)),
        }
        self.is_generating = false;
    }

    /// Locks in `answer` for the current question. Only the first selection
    /// per question counts.
    pub fn begin_check(&mut self, answer: OptionLetter) -> Option<QuizQuestion> {
        if self.is_checking || self.selected_answer.is_some() {
            return None;
        }
        let question = self.current_question.clone()?;
        self.selected_answer = Some(answer);
        self.is_checking = true;
        Some(question)
    }

    pub fn finish_check(&mut self, outcome: Result<AnswerResult, String>) {
        match outcome {
            Ok(result) => self.result = Some(result),
            Err(error) => self.alert = Some(format!("Lỗi: {}", error)),
        }
        self.is_checking = false;
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }
}
