use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::models::chat::{Chat, Message};
use crate::models::user::Role;

#[derive(Clone)]
pub struct ChatService {
    pool: PgPool,
}

impl ChatService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_for_user(&self, user_id: Uuid, role: Role) -> Result<Vec<Chat>> {
        let query = match role {
            Role::JobSeeker => {
                "SELECT * FROM chats WHERE job_seeker_id = $1 ORDER BY created_at DESC"
            }
            Role::Employer => "SELECT * FROM chats WHERE employer_id = $1 ORDER BY created_at DESC",
        };
        let chats = sqlx::query_as::<_, Chat>(query)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(chats)
    }

    /// Chat by id, provided `user_id` is one of its two participants.
    pub async fn get_for_participant(&self, chat_id: Uuid, user_id: Uuid) -> Result<Chat> {
        let chat = sqlx::query_as::<_, Chat>("SELECT * FROM chats WHERE id = $1")
            .bind(chat_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| Error::NotFound("Chat not found".into()))?;

        if !chat.has_participant(user_id) {
            return Err(Error::Forbidden("No access to this chat".into()));
        }
        Ok(chat)
    }

    pub async fn list_messages(&self, chat_id: Uuid, user_id: Uuid) -> Result<Vec<Message>> {
        let chat = self.get_for_participant(chat_id, user_id).await?;
        let messages = sqlx::query_as::<_, Message>(
            r#"
            SELECT * FROM messages
            WHERE chat_id = $1
            ORDER BY created_at ASC, id ASC
            "#,
        )
        .bind(chat.id)
        .fetch_all(&self.pool)
        .await?;
        Ok(messages)
    }

    pub async fn post_message(&self, chat_id: Uuid, sender_id: Uuid, text: &str) -> Result<Message> {
        let chat = self.get_for_participant(chat_id, sender_id).await?;
        let message = sqlx::query_as::<_, Message>(
            r#"
            INSERT INTO messages (chat_id, sender_id, message)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(chat.id)
        .bind(sender_id)
        .bind(text.trim())
        .fetch_one(&self.pool)
        .await?;
        Ok(message)
    }
}

/// Chat for the pair, creating it on first match. Runs on the caller's
/// connection so it commits together with the like that completed the match.
pub(crate) async fn open_chat(
    conn: &mut PgConnection,
    job_seeker_id: Uuid,
    employer_id: Uuid,
    vacancy_id: Uuid,
) -> Result<Chat> {
    let created = sqlx::query_as::<_, Chat>(
        r#"
        INSERT INTO chats (job_seeker_id, employer_id, vacancy_id)
        VALUES ($1, $2, $3)
        ON CONFLICT (job_seeker_id, employer_id) DO NOTHING
        RETURNING *
        "#,
    )
    .bind(job_seeker_id)
    .bind(employer_id)
    .bind(vacancy_id)
    .fetch_optional(&mut *conn)
    .await?;

    if let Some(chat) = created {
        tracing::info!(
            chat_id = %chat.id,
            job_seeker_id = %job_seeker_id,
            employer_id = %employer_id,
            vacancy_id = %vacancy_id,
            "mutual like, chat opened"
        );
        return Ok(chat);
    }

    let existing = sqlx::query_as::<_, Chat>(
        "SELECT * FROM chats WHERE job_seeker_id = $1 AND employer_id = $2",
    )
    .bind(job_seeker_id)
    .bind(employer_id)
    .fetch_one(&mut *conn)
    .await?;
    Ok(existing)
}
