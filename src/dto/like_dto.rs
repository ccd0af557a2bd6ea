use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::chat::Chat;

#[derive(Debug, Clone, Deserialize)]
pub struct EmployerLikePayload {
    pub job_seeker_id: Uuid,
    pub vacancy_id: Uuid,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JobSeekerLikePayload {
    pub vacancy_id: Uuid,
}

/// The stored like plus the chat it opened, when it completed a match.
#[derive(Debug, Clone, Serialize)]
pub struct LikeResponse<T: Serialize> {
    #[serde(flatten)]
    pub like: T,
    pub chat: Option<Chat>,
}
