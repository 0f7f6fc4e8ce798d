//! # Webhook Service Module
//!
//! Receives board webhooks and answers them with a freshly rendered QR card.
//!
//! The three webhook routes share one handler, parametrized by `EndpointType`. Each
//! route only differs in the columns it reads and writes and in the overlay tint.
//!
//! ## Sub-modules:
//! - `process`: HTTP handler; payload parsing, handshake echo, response mapping.
//! - `pipeline`: lookup, render and upload for one item.

mod pipeline;
mod process;

use actix_web::web::{self, post};
use actix_web::Scope;
use common::model::endpoint::EndpointType;

use crate::state::AppState;

/// Adds one `POST` route per `EndpointType` to `scope`.
///
/// # Registered Routes:
///
/// *   **`POST /qrguias`**, **`POST /qrclientes`**, **`POST /qrfornecedores`**:
///     - **Handler**: `process::process`
///     - **Description**: Accepts either a `{"challenge": ...}` handshake, echoed back
///       verbatim, or a `{"event": {"pulseId": ...}}` notification. For the latter the
///       URL column of the item is read, encoded as a QR card and attached to the file
///       column of the same item. Answers `{status, message}` with 200, 400 or 500.
pub fn register(scope: Scope) -> Scope {
    EndpointType::ALL.into_iter().fold(scope, |scope, kind| {
        scope.route(
            kind.path(),
            post().to(move |state: web::Data<AppState>, body: web::Bytes| {
                process::process(kind, state, body)
            }),
        )
    })
}
