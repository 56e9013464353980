use actix_web::{web, HttpRequest, HttpResponse};

use crate::{
    app_state::AppState, errors::AppError, middleware::get_request_id,
    models::dto::request::DialogueRequest,
};

pub async fn generate_dialogue(
    req: HttpRequest,
    state: web::Data<AppState>,
    request: web::Json<DialogueRequest>,
) -> Result<HttpResponse, AppError> {
    let response = state
        .dialogue_service
        .generate_dialogue(request.into_inner())
        .await?;

    log::info!(
        "[{}] dialogue {} generated (ai: {})",
        get_request_id(&req).unwrap_or_default(),
        response.dialogue_type,
        response.is_ai
    );

    Ok(HttpResponse::Ok().json(response))
}
