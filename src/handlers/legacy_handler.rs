use actix_web::{web, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::{
        request::{DialogueRequest, PraiseRequest, RageRequest},
        response::LegacyMessageResponse,
    },
};

pub async fn generate_rage(
    state: web::Data<AppState>,
    request: web::Json<RageRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    let intensity = if request.combo_broken {
        "extreme"
    } else {
        "normal"
    };

    let response = state
        .dialogue_service
        .generate_dialogue(DialogueRequest::from(request))
        .await?;

    Ok(HttpResponse::Ok().json(LegacyMessageResponse {
        success: true,
        message: response.dialogue,
        intensity: Some(intensity.to_string()),
    }))
}

pub async fn generate_praise(
    state: web::Data<AppState>,
    request: Option<web::Json<PraiseRequest>>,
) -> Result<HttpResponse, AppError> {
    let request = request.map(web::Json::into_inner).unwrap_or_default();

    let response = state
        .dialogue_service
        .generate_dialogue(DialogueRequest::from(request))
        .await?;

    Ok(HttpResponse::Ok().json(LegacyMessageResponse {
        success: true,
        message: response.dialogue,
        intensity: None,
    }))
}
