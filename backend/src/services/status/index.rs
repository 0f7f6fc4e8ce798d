use actix_web::{HttpResponse, Responder};
use common::model::endpoint::EndpointType;
use common::responses::ServiceIndex;

/// Describes the service and the webhook routes it serves.
pub async fn process() -> impl Responder {
    HttpResponse::Ok().json(ServiceIndex {
        message: "QR Code Generator API".to_string(),
        endpoints: EndpointType::ALL
            .iter()
            .map(|kind| kind.path().to_string())
            .collect(),
        status: "running".to_string(),
    })
}
