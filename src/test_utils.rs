use std::sync::Arc;

use actix_web::web;

use crate::{
    app_state::AppState,
    config::Config,
    models::domain::{OptionLetter, QuizOptions, QuizQuestion},
    services::model_service::MockModelClient,
};

#[cfg(test)]
pub mod fixtures {
    use super::*;

    /// A well-formed question whose correct answer is `correct`.
    pub fn question_with_answer(correct: OptionLetter) -> QuizQuestion {
        QuizQuestion {
            question: "Chiến thắng Điện Biên Phủ diễn ra năm nào?".to_string(),
            options: QuizOptions {
                a: "1945".to_string(),
                b: "1954".to_string(),
                c: "1975".to_string(),
                d: "1930".to_string(),
            },
            correct_answer: correct,
            explanation: "Chiến dịch Điện Biên Phủ kết thúc ngày 7/5/1954.".to_string(),
        }
    }

    /// Application state wired to a mocked model client.
    pub fn state_with(mock: MockModelClient) -> web::Data<AppState> {
        web::Data::new(AppState::with_client(
            Config::with_api_key("test-key"),
            Arc::new(mock),
        ))
    }
}

#[cfg(test)]
pub mod test_helpers {
    use actix_web::http::StatusCode;

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }

    /// Asserts that a status code represents success (2xx)
    pub fn assert_success_status(status: StatusCode) {
        assert!(
            status.is_success(),
            "Expected success status, got: {}",
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use crate::models::domain::OptionLetter;
    use validator::Validate;

    #[test]
    fn test_fixture_question_is_valid() {
        let question = question_with_answer(OptionLetter::B);
        assert!(question.validate().is_ok());
        assert_eq!(question.options.get(OptionLetter::B), "1954");
    }
}
