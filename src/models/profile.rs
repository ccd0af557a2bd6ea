use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

use super::blob::Blob;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct JobSeekerProfile {
    pub user_id: Uuid,
    pub last_name: Option<String>,
    pub first_name: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub city: Option<String>,
    pub education: Option<String>,
    pub about: Option<String>,
    pub profession: Option<String>,
    pub job_position: Option<String>,
    pub skills: Vec<String>,
    pub experience: Option<String>,
    pub resume: Option<Blob>,
    pub photo: Option<Blob>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct EmployerProfile {
    pub user_id: Uuid,
    pub company_name: String,
    pub website: Option<String>,
    pub photo: Option<Blob>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
