use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct EmployerLike {
    pub id: Uuid,
    pub employer_id: Uuid,
    pub job_seeker_id: Uuid,
    pub vacancy_id: Uuid,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct JobSeekerLike {
    pub id: Uuid,
    pub job_seeker_id: Uuid,
    pub vacancy_id: Uuid,
    pub created_at: DateTime<Utc>,
}
