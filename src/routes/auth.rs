use axum::{extract::State, http::StatusCode, response::IntoResponse};

use crate::{
    dto::auth_dto::{LoginPayload, RegisterPayload},
    error::Result,
    routes::extract::Json,
    utils::validation::validate,
    AppState,
};

pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterPayload>,
) -> Result<impl IntoResponse> {
    let payload = payload.normalized();
    validate(&payload)?;
    let response = state.auth_service.register(payload).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginPayload>,
) -> Result<impl IntoResponse> {
    let payload = payload.normalized();
    validate(&payload)?;
    let response = state.auth_service.login(payload).await?;
    Ok(Json(response))
}
