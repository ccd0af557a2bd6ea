use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct StoredFile {
    pub fieldname: String,
    pub originalname: String,
    pub filename: String,
    pub path: String,
    pub size: usize,
    pub mimetype: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct UploadResponse {
    pub message: String,
    pub file: StoredFile,
}
