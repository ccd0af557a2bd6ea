use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

use super::blob::Blob;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Vacancy {
    pub id: Uuid,
    pub employer_id: Uuid,
    pub position_name: String,
    pub profession_id: Option<i32>,
    pub position_id: Option<i32>,
    pub salary: Option<Decimal>,
    pub description: Option<String>,
    pub requirements: Option<String>,
    pub photo: Option<Blob>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Vacancy as shown to job seekers, joined with reference names and the
/// owning employer's public details.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct VacancyCard {
    pub id: Uuid,
    pub employer_id: Uuid,
    pub position_name: String,
    pub salary: Option<Decimal>,
    pub description: Option<String>,
    pub requirements: Option<String>,
    pub photo: Option<Blob>,
    pub profession_id: Option<i32>,
    pub position_id: Option<i32>,
    pub profession_name: Option<String>,
    pub position_title: Option<String>,
    pub company_name: Option<String>,
    pub website: Option<String>,
    pub created_at: DateTime<Utc>,
}
