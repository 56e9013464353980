use actix_web::{web, HttpRequest, HttpResponse, ResponseError};

use crate::{
    app_state::AppState,
    middleware::get_request_id,
    models::dto::{request::QuizRequest, response::QuizResponse},
};

/// Always answers with the quiz envelope, including on failure.
pub async fn generate_quizzes(
    req: HttpRequest,
    state: web::Data<AppState>,
    request: web::Json<QuizRequest>,
) -> HttpResponse {
    let request_id = get_request_id(&req).unwrap_or_default();

    match state.quiz_service.generate_quizzes(request.into_inner()).await {
        Ok(response) => {
            log::info!(
                "[{}] generated {} quizzes",
                request_id,
                response.count.unwrap_or_default()
            );
            HttpResponse::Ok().json(response)
        }
        Err(err) => {
            log::error!("[{}] quiz generation failed: {}", request_id, err);
            HttpResponse::build(err.status_code()).json(QuizResponse::failure(err.to_string()))
        }
    }
}
