use axum::{extract::State, http::StatusCode, response::IntoResponse, Extension};

use crate::{
    dto::profile_dto::{EmployerProfileForm, JobSeekerProfileForm},
    error::Result,
    middleware::auth::AuthUser,
    routes::extract::{Json, MultipartForm},
    services::profile_service::Upserted,
    utils::validation::validate,
    AppState,
};

/// `null` body when the user has not filled a profile yet.
pub async fn get_job_seeker_profile(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
) -> Result<impl IntoResponse> {
    let profile = state.profile_service.get_job_seeker(auth.user_id).await?;
    Ok(Json(profile))
}

pub async fn upsert_job_seeker_profile(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    MultipartForm(multipart): MultipartForm,
) -> Result<impl IntoResponse> {
    let form = JobSeekerProfileForm::from_multipart(multipart).await?;
    let result = state
        .profile_service
        .upsert_job_seeker(auth.user_id, form)
        .await?;
    Ok(upserted_response(result))
}

pub async fn get_employer_profile(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
) -> Result<impl IntoResponse> {
    let profile = state.profile_service.get_employer(auth.user_id).await?;
    Ok(Json(profile))
}

pub async fn upsert_employer_profile(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    MultipartForm(multipart): MultipartForm,
) -> Result<impl IntoResponse> {
    let form = EmployerProfileForm::from_multipart(multipart).await?;
    validate(&form)?;
    let result = state
        .profile_service
        .upsert_employer(auth.user_id, form)
        .await?;
    Ok(upserted_response(result))
}

pub async fn list_candidates(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let candidates = state.profile_service.list_candidates().await?;
    Ok(Json(candidates))
}

fn upserted_response<T: serde::Serialize>(result: Upserted<T>) -> impl IntoResponse {
    let status = if result.created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };
    (status, Json(result.profile))
}
