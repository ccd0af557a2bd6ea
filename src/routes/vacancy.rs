use axum::{extract::State, http::StatusCode, response::IntoResponse, Extension};
use serde_json::json;
use uuid::Uuid;

use crate::{
    dto::vacancy_dto::{CreateVacancyForm, UpdateVacancyPayload},
    error::Result,
    middleware::auth::AuthUser,
    routes::extract::{Json, MultipartForm, Path},
    utils::validation::validate,
    AppState,
};

pub async fn create_vacancy(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    MultipartForm(multipart): MultipartForm,
) -> Result<impl IntoResponse> {
    let form = CreateVacancyForm::from_multipart(multipart).await?;
    validate(&form)?;
    let vacancy = state.vacancy_service.create(auth.user_id, form).await?;
    Ok((StatusCode::CREATED, Json(vacancy)))
}

pub async fn list_vacancies(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
) -> Result<impl IntoResponse> {
    let items = state.vacancy_service.list_own(auth.user_id).await?;
    Ok(Json(items))
}

pub async fn get_vacancy(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let vacancy = state.vacancy_service.get_own(auth.user_id, id).await?;
    Ok(Json(vacancy))
}

pub async fn update_vacancy(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateVacancyPayload>,
) -> Result<impl IntoResponse> {
    validate(&payload)?;
    let vacancy = state.vacancy_service.update(auth.user_id, id, payload).await?;
    Ok(Json(vacancy))
}

pub async fn delete_vacancy(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    state.vacancy_service.delete(auth.user_id, id).await?;
    Ok(Json(json!({ "message": "Vacancy deleted" })))
}

pub async fn list_for_job_seeker(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let items = state.vacancy_service.list_for_job_seekers().await?;
    Ok(Json(items))
}

pub async fn list_recommendations(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
) -> Result<impl IntoResponse> {
    let items = state.vacancy_service.recommend_for(auth.user_id).await?;
    Ok(Json(items))
}
