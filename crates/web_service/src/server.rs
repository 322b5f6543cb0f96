use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use log::{error, info};
use session_store::{MemorySessionStorage, SessionManager};

use crate::controllers::{list_controller, todo_controller};

pub struct AppState {
    pub sessions: SessionManager<MemorySessionStorage>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            sessions: SessionManager::new(MemorySessionStorage::new()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

const DEFAULT_WORKER_COUNT: usize = 4;

pub fn app_config(cfg: &mut web::ServiceConfig) {
    cfg.configure(list_controller::config)
        .configure(todo_controller::config);
}

pub async fn run(port: u16) -> Result<(), String> {
    info!("Starting web service...");

    // Shared across workers so every request sees the same sessions.
    let app_state = web::Data::new(AppState::new());

    let server = HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(Cors::permissive())
            .configure(app_config)
    })
    .workers(DEFAULT_WORKER_COUNT)
    .bind(format!("127.0.0.1:{port}"))
    .map_err(|e| format!("Failed to bind server: {e}"))?
    .run();

    info!("Serving on http://127.0.0.1:{port}");

    if let Err(e) = server.await {
        error!("Web server error: {}", e);
        return Err(format!("Web server error: {e}"));
    }

    Ok(())
}
