use actix_web::{get, web, HttpResponse};

use crate::app_state::AppState;

#[get("/health")]
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "models": state.config.model_names,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use actix_web::{test, App};

    #[actix_web::test]
    async fn test_health_check() {
        let state = web::Data::new(AppState::new(Config::with_api_key("key")));
        let app = test::init_service(App::new().app_data(state).service(health_check)).await;

        let req = test::TestRequest::get().uri("/health").to_request();

        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["models"][0], "gemini-2.0-flash");
    }
}
