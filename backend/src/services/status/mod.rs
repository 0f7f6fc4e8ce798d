//! Liveness and discovery routes. Neither touches the board API.

mod health;
mod index;

use actix_web::web::get;
use actix_web::Scope;

/// Adds `GET /health` and `GET /` to `scope`.
pub fn register(scope: Scope) -> Scope {
    scope
        .route("/health", get().to(health::process))
        .route("/", get().to(index::process))
}
