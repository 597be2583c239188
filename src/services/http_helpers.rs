use actix_web::{error::InternalError, web, HttpResponse, ResponseError};

use crate::errors::AppError;

/// Creates a success JSON response
pub fn success_json<T: serde::Serialize>(data: T) -> HttpResponse {
    HttpResponse::Ok().json(data)
}

/// JSON extractor settings that report unreadable bodies in the standard
/// error envelope instead of actix's plain-text default.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        log::warn!("Rejected request body: {}", err);
        let response =
            AppError::ValidationError(format!("Invalid request body: {}", err)).error_response();
        InternalError::from_response(err, response).into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Payload {
        #[allow(dead_code)]
        value: String,
    }

    async fn echo(_payload: web::Json<Payload>) -> HttpResponse {
        success_json(serde_json::json!({ "ok": true }))
    }

    #[actix_web::test]
    async fn test_success_json() {
        let response = success_json(serde_json::json!({ "a": 1 }));
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_malformed_body_uses_error_envelope() {
        let app = test::init_service(
            App::new()
                .app_data(json_config())
                .route("/echo", web::post().to(echo)),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/echo")
            .insert_header(("content-type", "application/json"))
            .set_payload("{not json")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], false);
        assert!(body["error"]
            .as_str()
            .unwrap()
            .starts_with("Invalid request body"));
    }
}
