use std::path::{Path, PathBuf};

use tokio::fs;

use crate::dto::upload_dto::StoredFile;
use crate::error::{Error, Result};
use crate::models::blob::Blob;

/// Writes standalone uploads to a local directory served under `/uploads`.
#[derive(Clone)]
pub struct UploadService {
    dir: PathBuf,
}

impl UploadService {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub async fn store(&self, fieldname: &str, original_name: &str, data: &Blob) -> Result<StoredFile> {
        fs::create_dir_all(&self.dir).await?;

        let filename = format!(
            "{}-{}",
            chrono::Utc::now().timestamp_millis(),
            sanitize_filename(original_name)
        );
        let path = self.dir.join(&filename);

        fs::write(&path, data.as_bytes()).await.map_err(|e| {
            tracing::error!("Failed to write upload {}: {}", path.display(), e);
            Error::Internal(format!("Failed to save file: {}", e))
        })?;

        tracing::info!(file = %filename, size = data.len(), "upload stored");

        Ok(StoredFile {
            fieldname: fieldname.to_string(),
            originalname: original_name.to_string(),
            filename,
            path: path.to_string_lossy().into_owned(),
            size: data.len(),
            mimetype: data.mime_type().to_string(),
        })
    }
}

/// Keeps the final path component and replaces anything outside
/// `[A-Za-z0-9._-]`, so the name can never escape the upload directory.
pub fn sanitize_filename(name: &str) -> String {
    let base = name.rsplit(['/', '\\']).next().unwrap_or_default();
    let cleaned: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect();
    let cleaned = cleaned.trim_start_matches('.');
    if cleaned.is_empty() {
        "file".to_string()
    } else {
        cleaned.chars().take(120).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_strips_directories_and_odd_characters() {
        assert_eq!(sanitize_filename("../../etc/passwd"), "passwd");
        assert_eq!(sanitize_filename("C:\\Users\\me\\cv final.pdf"), "cv_final.pdf");
        assert_eq!(sanitize_filename(".env"), "env");
        assert_eq!(sanitize_filename(""), "file");
        assert_eq!(sanitize_filename("резюме.pdf"), "______.pdf");
    }

    #[tokio::test]
    async fn store_writes_into_upload_dir() {
        let dir = std::env::temp_dir().join(format!("jobmatch-upload-{}", uuid::Uuid::new_v4()));
        let service = UploadService::new(dir.clone());
        let blob = Blob::new(b"%PDF-1.4 test".to_vec());

        let stored = service.store("resume", "my cv.pdf", &blob).await.unwrap();

        assert!(stored.filename.ends_with("-my_cv.pdf"));
        assert_eq!(stored.size, blob.len());
        assert_eq!(stored.mimetype, "application/pdf");
        let written = tokio::fs::read(dir.join(&stored.filename)).await.unwrap();
        assert_eq!(written, blob.as_bytes());

        let _ = tokio::fs::remove_dir_all(dir).await;
    }
}
