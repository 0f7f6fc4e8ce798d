//! Shared, read-only application state.
//!
//! `AppState` is built once in `main.rs` and handed to every Actix worker as
//! `web::Data`. Nothing inside it changes after startup, so handlers read it without
//! any locking.

use crate::board::BoardClient;
use crate::config::Settings;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    /// Settings resolved at startup (endpoints, token, background path, ...).
    pub settings: Arc<Settings>,

    /// Board API used by the webhook pipeline. Behind a trait object so tests can
    /// substitute a mock.
    pub board: Arc<dyn BoardClient + Send + Sync>,
}

impl AppState {
    pub fn new(settings: Settings, board: Arc<dyn BoardClient + Send + Sync>) -> Self {
        Self {
            settings: Arc::new(settings),
            board,
        }
    }
}
