use actix_web::{HttpResponse, Responder};

/// Liveness probe for the hosting platform.
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().finish()
}
