use axum::{extract::State, http::StatusCode, response::IntoResponse, Extension};

use crate::{
    dto::like_dto::{EmployerLikePayload, JobSeekerLikePayload},
    error::Result,
    middleware::auth::AuthUser,
    routes::extract::Json,
    AppState,
};

pub async fn employer_like(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Json(payload): Json<EmployerLikePayload>,
) -> Result<impl IntoResponse> {
    let outcome = state.like_service.employer_like(auth.user_id, payload).await?;
    Ok((StatusCode::CREATED, Json(outcome)))
}

pub async fn job_seeker_like(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Json(payload): Json<JobSeekerLikePayload>,
) -> Result<impl IntoResponse> {
    let outcome = state.like_service.job_seeker_like(auth.user_id, payload).await?;
    Ok((StatusCode::CREATED, Json(outcome)))
}
