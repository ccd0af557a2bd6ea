use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Chat {
    pub id: Uuid,
    pub job_seeker_id: Uuid,
    pub employer_id: Uuid,
    pub vacancy_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl Chat {
    pub fn has_participant(&self, user_id: Uuid) -> bool {
        self.job_seeker_id == user_id || self.employer_id == user_id
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Message {
    pub id: Uuid,
    pub chat_id: Uuid,
    pub sender_id: Uuid,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_two_participants_belong_to_a_chat() {
        let chat = Chat {
            id: Uuid::new_v4(),
            job_seeker_id: Uuid::new_v4(),
            employer_id: Uuid::new_v4(),
            vacancy_id: None,
            created_at: Utc::now(),
        };
        assert!(chat.has_participant(chat.job_seeker_id));
        assert!(chat.has_participant(chat.employer_id));
        assert!(!chat.has_participant(Uuid::new_v4()));
    }
}
