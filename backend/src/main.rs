use actix_web::{web, App, HttpServer};
use env_logger::Env;
use log::{info, warn};
use qrhook::board::MondayClient;
use qrhook::{imaging, services, AppState, Settings};
use std::io;
use std::sync::Arc;

/// Largest webhook body accepted, in bytes.
const MAX_PAYLOAD: usize = 1024 * 1024;

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let settings = Settings::load().map_err(io::Error::other)?;
    let board = MondayClient::new(&settings).map_err(io::Error::other)?;

    info!("Using board {}", settings.board_id);
    if !imaging::background_is_usable(&settings.background_path) {
        warn!(
            "Background {} cannot be loaded, cards will use the gradient. Set QRHOOK_BACKGROUND_PATH to the artwork",
            settings.background_path.display()
        );
    }

    let state = AppState::new(settings, Arc::new(board));
    let (host, port) = state.settings.bind_address();
    let (host, port) = (host.to_string(), port);

    info!("Server running at http://{}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .app_data(web::PayloadConfig::new(MAX_PAYLOAD))
            .app_data(web::Data::new(state.clone()))
            .service(services::configure_routes())
    })
        .bind((host.as_str(), port))?
        .run()
        .await
}
