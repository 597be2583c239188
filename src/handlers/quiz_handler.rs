use actix_web::{post, web, HttpRequest, HttpResponse};

use crate::{
    app_state::AppState,
    errors::ApiError,
    middleware::get_request_id,
    models::dto::{
        request::{QuizAction, QuizRequest},
        response::{QuizCheckResponse, QuizGenerateResponse},
    },
    services::http_helpers::success_json,
};

pub const QUIZ_FAILURE: &str = "Failed to process quiz request";

#[post("/quiz")]
pub async fn quiz(
    req: HttpRequest,
    state: web::Data<AppState>,
    request: web::Json<QuizRequest>,
) -> Result<HttpResponse, ApiError> {
    match QuizAction::try_from(request.into_inner())? {
        QuizAction::Generate => {
            let question = state.quiz_service.generate_question().await.map_err(|e| {
                log::error!(
                    "Quiz generation failed [{}]: {}",
                    get_request_id(&req).unwrap_or_default(),
                    e
                );
                e.in_context(QUIZ_FAILURE)
            })?;
            Ok(success_json(QuizGenerateResponse::from(question)))
        }
        QuizAction::Check { question, selected } => {
            let result = state.quiz_service.check_answer(&question, &selected);
            Ok(success_json(QuizCheckResponse::from(result)))
        }
    }
}
