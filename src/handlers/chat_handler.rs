use actix_web::{post, web, HttpRequest, HttpResponse};

use crate::{
    app_state::AppState,
    errors::ApiError,
    middleware::get_request_id,
    models::dto::{request::ChatRequest, response::ChatResponse},
    services::http_helpers::success_json,
};

pub const CHAT_FAILURE: &str = "Failed to get response from AI";

#[post("/chat")]
pub async fn chat(
    req: HttpRequest,
    state: web::Data<AppState>,
    request: web::Json<ChatRequest>,
) -> Result<HttpResponse, ApiError> {
    let message = request.required_message()?;

    let reply = state.chat_service.reply(message).await.map_err(|e| {
        log::error!(
            "Chat request failed [{}]: {}",
            get_request_id(&req).unwrap_or_default(),
            e
        );
        e.in_context(CHAT_FAILURE)
    })?;

    Ok(success_json(ChatResponse::new(reply)))
}
