pub mod auth_dto;
pub mod chat_dto;
pub mod like_dto;
pub mod profile_dto;
pub mod upload_dto;
pub mod vacancy_dto;

use axum::extract::multipart::Field;

use crate::error::Result;
use crate::models::blob::Blob;

pub(crate) async fn read_text(field: Field<'_>) -> Result<String> {
    Ok(field.text().await?)
}

/// File part contents; an empty part (no file chosen in the browser) is `None`.
pub(crate) async fn read_file(field: Field<'_>) -> Result<Option<Blob>> {
    let data = field.bytes().await?;
    if data.is_empty() {
        return Ok(None);
    }
    Ok(Some(Blob::from(data)))
}
