use axum::{
    extract::{Multipart, State},
    response::IntoResponse,
};

use crate::{
    dto::{
        profile_dto::{ensure_document, ensure_image},
        upload_dto::UploadResponse,
    },
    error::{Error, Result},
    models::blob::Blob,
    routes::extract::{Json, MultipartForm},
    AppState,
};

/// Pulls the single file part named `wanted` out of the form.
async fn take_file(mut multipart: Multipart, wanted: &str) -> Result<(String, Blob)> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(wanted) {
            continue;
        }
        let original = field.file_name().unwrap_or(wanted).to_string();
        let data = field.bytes().await?;
        if data.is_empty() {
            break;
        }
        return Ok((original, Blob::from(data)));
    }
    Err(Error::BadRequest(format!("No file uploaded in field \"{}\"", wanted)))
}

pub async fn upload_resume(
    State(state): State<AppState>,
    MultipartForm(multipart): MultipartForm,
) -> Result<impl IntoResponse> {
    let (original, blob) = take_file(multipart, "resume").await?;
    ensure_document(Some(&blob))?;
    let file = state.upload_service.store("resume", &original, &blob).await?;
    Ok(Json(UploadResponse {
        message: "Resume uploaded".to_string(),
        file,
    }))
}

pub async fn upload_photo(
    State(state): State<AppState>,
    MultipartForm(multipart): MultipartForm,
) -> Result<impl IntoResponse> {
    let (original, blob) = take_file(multipart, "photo").await?;
    ensure_image(Some(&blob))?;
    let file = state.upload_service.store("photo", &original, &blob).await?;
    Ok(Json(UploadResponse {
        message: "Photo uploaded".to_string(),
        file,
    }))
}
