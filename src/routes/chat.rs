use axum::{extract::State, http::StatusCode, response::IntoResponse, Extension};
use uuid::Uuid;

use crate::{
    dto::chat_dto::PostMessagePayload,
    error::Result,
    middleware::auth::AuthUser,
    routes::extract::{Json, Path},
    utils::validation::validate,
    AppState,
};

/// Chats of the caller, looked up by the participant column of their role.
pub async fn list_chats(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
) -> Result<impl IntoResponse> {
    let chats = state.chat_service.list_for_user(auth.user_id, auth.role).await?;
    Ok(Json(chats))
}

pub async fn list_messages(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(chat_id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let messages = state.chat_service.list_messages(chat_id, auth.user_id).await?;
    Ok(Json(messages))
}

pub async fn post_message(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(chat_id): Path<Uuid>,
    Json(payload): Json<PostMessagePayload>,
) -> Result<impl IntoResponse> {
    let payload = payload.normalized();
    validate(&payload)?;
    let message = state
        .chat_service
        .post_message(chat_id, auth.user_id, &payload.message)
        .await?;
    Ok((StatusCode::CREATED, Json(message)))
}
