use actix_web::{get, HttpResponse};

use crate::constants::dialogue_prompts::INSTRUCTOR_NAME;

#[get("/health")]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "instructor": INSTRUCTOR_NAME,
        "version": env!("CARGO_PKG_VERSION")
    }))
}
