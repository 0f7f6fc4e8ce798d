use super::pipeline;
use crate::error::{PipelineError, Result};
use crate::state::AppState;
use actix_web::{web, HttpResponse};
use common::model::endpoint::EndpointType;
use common::requests::WebhookPayload;
use common::responses::{Challenge, StatusMessage};
use log::{debug, error, info};
use serde_json::Value;
use uuid::Uuid;

const SUCCESS_MESSAGE: &str = "QR code generated and uploaded successfully";

enum Outcome {
    Challenge(Value),
    Uploaded,
}

/// Actix handler shared by every webhook route.
///
/// # Arguments
/// * `kind` - Endpoint the route is bound to; selects columns and overlay.
/// * `state` - Shared `AppState` with settings and the board client.
/// * `body` - Raw request body, decoded here so malformed JSON gets our own answer.
///
/// # Returns
/// - `200 OK` with `{"challenge": ...}` for a handshake.
/// - `200 OK` with `{"status": "success", ...}` once the card is uploaded.
/// - `400 Bad Request` or `500 Internal Server Error` with `{"status": "error", ...}`.
pub(super) async fn process(
    kind: EndpointType,
    state: web::Data<AppState>,
    body: web::Bytes,
) -> HttpResponse {
    let delivery = Uuid::new_v4();
    match handle_delivery(kind, &state, &body, delivery).await {
        Ok(Outcome::Challenge(challenge)) => {
            info!("[{}] Responding to challenge for {}: {}", delivery, kind, challenge);
            HttpResponse::Ok().json(Challenge { challenge })
        }
        Ok(Outcome::Uploaded) => {
            info!("[{}] Successfully processed webhook for {}", delivery, kind);
            HttpResponse::Ok().json(StatusMessage::success(SUCCESS_MESSAGE))
        }
        Err(e) => {
            error!("[{}] Webhook for {} failed: {}", delivery, kind, e);
            HttpResponse::build(e.status_code()).json(StatusMessage::error(e.to_string()))
        }
    }
}

async fn handle_delivery(
    kind: EndpointType,
    state: &AppState,
    body: &[u8],
    delivery: Uuid,
) -> Result<Outcome> {
    let value: Value = serde_json::from_slice(body)
        .map_err(|e| PipelineError::InvalidPayload(e.to_string()))?;
    let Value::Object(fields) = value else {
        return Err(PipelineError::InvalidPayload(
            "expected a JSON object".to_string(),
        ));
    };

    match WebhookPayload::interpret(&fields) {
        WebhookPayload::Challenge(challenge) => Ok(Outcome::Challenge(challenge)),
        WebhookPayload::Event(None) => Err(PipelineError::MissingItemId),
        WebhookPayload::Event(Some(item_id)) => {
            debug!(
                "[{}] Received webhook for {}: {}",
                delivery,
                kind,
                String::from_utf8_lossy(body)
            );
            // a panic anywhere in the pipeline ends the task, not the worker
            let state = state.clone();
            tokio::spawn(async move { pipeline::run(kind, &state, item_id, delivery).await })
                .await
                .map_err(|e| PipelineError::Internal(e.to_string()))??;
            Ok(Outcome::Uploaded)
        }
    }
}
