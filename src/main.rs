use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};

use vnr_chat_server::{
    app_state::AppState, config::Config, handlers, middleware::RequestIdMiddleware,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = Config::from_env().map_err(|e| {
        log::error!("FATAL: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e)
    })?;

    let bind_addr = (config.web_server_host.clone(), config.web_server_port);
    log::info!(
        "starting HTTP server on {}:{} (models: {})",
        bind_addr.0,
        bind_addr.1,
        config.model_names.join(", ")
    );

    let state = web::Data::new(AppState::new(config));

    HttpServer::new(move || {
        let cors = match &state.config.cors_allowed_origin {
            Some(origin) => Cors::default()
                .allowed_origin(origin)
                .allowed_methods(vec!["GET", "POST"])
                .allow_any_header(),
            None => Cors::permissive(),
        };

        App::new()
            .app_data(state.clone())
            .wrap(cors)
            .wrap(Logger::default())
            .wrap(RequestIdMiddleware)
            .configure(handlers::configure)
    })
    .bind(bind_addr)?
    .run()
    .await
}
