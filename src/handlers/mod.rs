pub mod dialogue_handler;
pub mod health_handler;
pub mod legacy_handler;
pub mod quiz_handler;

use actix_web::{error::InternalError, web, HttpResponse};

use crate::{errors::AppError, models::dto::response::QuizResponse};

pub use dialogue_handler::generate_dialogue;
pub use health_handler::health_check;
pub use legacy_handler::{generate_praise, generate_rage};
pub use quiz_handler::generate_quizzes;

/// Registers every route. Shared by `main` and the integration tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .service(health_check)
        .service(
            web::resource(["/generate-dialogue", "/api/ai/rage-dialogue"])
                .route(web::post().to(generate_dialogue)),
        )
        .service(
            web::resource(["/generate-quizzes", "/api/ai/generate-quizzes"])
                .app_data(quiz_json_config())
                .route(web::post().to(generate_quizzes)),
        )
        .service(web::resource("/generate-rage").route(web::post().to(generate_rage)))
        .service(web::resource("/generate-praise").route(web::post().to(generate_praise)));
}

/// Malformed bodies become a JSON validation error instead of actix's plain-text default.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| AppError::ValidationError(err.to_string()).into())
}

fn quiz_json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let message = AppError::ValidationError(err.to_string()).to_string();
        InternalError::from_response(err, HttpResponse::BadRequest().json(QuizResponse::failure(message)))
            .into()
    })
}
