use std::sync::Arc;

use actix_web::{dev::ServerHandle, web, App, HttpServer};
use async_trait::async_trait;

use vnr_chat_server::{
    app_state::AppState,
    client::{format::format_message, ApiClient, ClientSession, HistoryRepository, Tab},
    config::Config,
    handlers,
    models::domain::{ChatMessage, GenerationConfig, OptionLetter, Role},
    services::{ModelClient, UpstreamError},
};

struct PersonaClient;

#[async_trait]
impl ModelClient for PersonaClient {
    async fn generate_content(
        &self,
        _model: &str,
        _prompt: &str,
        config: &GenerationConfig,
    ) -> Result<String, UpstreamError> {
        if *config == GenerationConfig::QUIZ {
            Ok("Xin lỗi, hôm nay không có câu hỏi.".to_string())
        } else {
            Ok("**Bác** xin chào các cháu.".to_string())
        }
    }
}

struct RejectingClient;

#[async_trait]
impl ModelClient for RejectingClient {
    async fn generate_content(
        &self,
        _model: &str,
        _prompt: &str,
        _config: &GenerationConfig,
    ) -> Result<String, UpstreamError> {
        Err(UpstreamError::with_status(
            400,
            "[400 INVALID_ARGUMENT] API key not valid. Please pass a valid API key.",
        ))
    }
}

fn start_server(client: Arc<dyn ModelClient>) -> (String, ServerHandle) {
    let state = web::Data::new(AppState::with_client(Config::with_api_key("test-key"), client));
    let server = HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .configure(handlers::configure)
    })
    .workers(1)
    .bind(("127.0.0.1", 0))
    .unwrap();

    let addr = server.addrs()[0];
    let server = server.run();
    let handle = server.handle();
    actix_web::rt::spawn(server);
    (format!("http://{}", addr), handle)
}

#[actix_web::test]
async fn test_session_chats_and_plays_quiz_against_server() {
    let (base_url, handle) = start_server(Arc::new(PersonaClient));
    let dir = tempfile::tempdir().unwrap();

    let mut session = ClientSession::open(
        ApiClient::new(base_url.clone()),
        HistoryRepository::in_dir(dir.path()),
    );
    assert!(session.send_message("Chào Bác").await);

    let reply = session.state().messages.last().unwrap().clone();
    assert_eq!(reply.role, Role::Assistant);
    assert_eq!(format_message(&reply.content), "Bác xin chào các cháu.");

    session.select_tab(Tab::Game);
    session.generate_question().await;
    let question = session.state().current_question.clone().unwrap();
    assert_eq!(question.options.a, "3/2/1930");

    session.check_answer(OptionLetter::A).await;
    assert!(session.state().result.as_ref().unwrap().is_correct);

    let reopened = ClientSession::open(
        ApiClient::new(base_url),
        HistoryRepository::in_dir(dir.path()),
    );
    assert_eq!(
        reopened.state().messages,
        vec![
            ChatMessage::user("Chào Bác"),
            ChatMessage::assistant("**Bác** xin chào các cháu."),
        ]
    );

    handle.stop(true).await;
}

#[actix_web::test]
async fn test_session_surfaces_server_errors() {
    let (base_url, handle) = start_server(Arc::new(RejectingClient));
    let dir = tempfile::tempdir().unwrap();

    let mut session = ClientSession::open(
        ApiClient::new(base_url),
        HistoryRepository::in_dir(dir.path()),
    );
    session.send_message("Chào Bác").await;
    assert_eq!(
        session.state().messages.last().unwrap().content,
        "Xin lỗi, đã có lỗi xảy ra: Failed to get response from AI. Vui lòng thử lại."
    );

    session.generate_question().await;
    assert_eq!(
        session.state().alert.as_deref(),
        Some("Lỗi: Failed to process quiz request")
    );
    assert!(session.state().current_question.is_none());

    handle.stop(true).await;
}
