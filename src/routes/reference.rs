use axum::{extract::State, response::IntoResponse};

use crate::{
    error::Result,
    routes::extract::{Json, Path},
    AppState,
};

pub async fn list_professions(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let items = state.reference_service.list_professions().await?;
    Ok(Json(items))
}

pub async fn list_positions(
    State(state): State<AppState>,
    Path(profession_id): Path<i32>,
) -> Result<impl IntoResponse> {
    let items = state.reference_service.list_positions(profession_id).await?;
    Ok(Json(items))
}

pub async fn list_skills(
    State(state): State<AppState>,
    Path(profession_id): Path<i32>,
) -> Result<impl IntoResponse> {
    let items = state.reference_service.list_skills(profession_id).await?;
    Ok(Json(items))
}
