use actix_web::{HttpResponse, Responder};
use common::responses::Health;

pub async fn process() -> impl Responder {
    HttpResponse::Ok().json(Health {
        status: "healthy".to_string(),
    })
}
