//! # HTTP Services
//!
//! Every route of the service lives at the root, so both sub-modules add their
//! routes to a single scope with an empty base path.
//!
//! ## Sub-modules:
//! - `webhooks`: `POST /qrguias`, `POST /qrclientes`, `POST /qrfornecedores`.
//! - `status`: `GET /health` and `GET /`.

pub mod status;
pub mod webhooks;

use actix_web::web::scope;
use actix_web::Scope;

/// The base path for all routes.
const API_PATH: &str = "";

/// Configures and returns the Actix `Scope` holding every route, webhooks first.
pub fn configure_routes() -> Scope {
    status::register(webhooks::register(scope(API_PATH)))
}
