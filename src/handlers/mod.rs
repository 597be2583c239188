pub mod chat_handler;
pub mod health_handler;
pub mod quiz_handler;

use actix_web::web;

pub use chat_handler::chat;
pub use health_handler::health_check;
pub use quiz_handler::quiz;

use crate::services::http_helpers::json_config;

/// Registers every route together with the JSON extractor settings.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .service(chat)
        .service(quiz)
        .service(health_check);
}
