use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use crate::dto::like_dto::{EmployerLikePayload, JobSeekerLikePayload, LikeResponse};
use crate::error::{Error, Result};
use crate::models::like::{EmployerLike, JobSeekerLike};
use crate::models::user::Role;
use crate::services::chat_service::open_chat;

/// Records likes from both sides. A like whose opposite-side counterpart
/// already exists for the same (job seeker, vacancy) pair opens the chat
/// between the job seeker and the vacancy's employer.
#[derive(Clone)]
pub struct LikeService {
    pool: PgPool,
}

impl LikeService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn employer_like(
        &self,
        employer_id: Uuid,
        payload: EmployerLikePayload,
    ) -> Result<LikeResponse<EmployerLike>> {
        let mut tx = self.pool.begin().await?;

        let owned = sqlx::query_scalar::<_, Uuid>(
            "SELECT id FROM vacancies WHERE id = $1 AND employer_id = $2",
        )
        .bind(payload.vacancy_id)
        .bind(employer_id)
        .fetch_optional(&mut *tx)
        .await?;
        if owned.is_none() {
            return Err(Error::Forbidden("Vacancy does not belong to employer".into()));
        }

        let seeker_role = sqlx::query_scalar::<_, Role>("SELECT role FROM users WHERE id = $1")
            .bind(payload.job_seeker_id)
            .fetch_optional(&mut *tx)
            .await?;
        if seeker_role != Some(Role::JobSeeker) {
            return Err(Error::NotFound("Job seeker not found".into()));
        }

        lock_pair(&mut tx, payload.job_seeker_id, payload.vacancy_id).await?;

        let like = sqlx::query_as::<_, EmployerLike>(
            r#"
            INSERT INTO employer_likes (employer_id, job_seeker_id, vacancy_id)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(employer_id)
        .bind(payload.job_seeker_id)
        .bind(payload.vacancy_id)
        .fetch_one(&mut *tx)
        .await?;

        let mutual = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS (
                SELECT 1 FROM job_seeker_likes
                WHERE job_seeker_id = $1 AND vacancy_id = $2
            )
            "#,
        )
        .bind(like.job_seeker_id)
        .bind(like.vacancy_id)
        .fetch_one(&mut *tx)
        .await?;

        let chat = if mutual {
            Some(open_chat(&mut tx, like.job_seeker_id, employer_id, like.vacancy_id).await?)
        } else {
            None
        };

        tx.commit().await?;
        Ok(LikeResponse { like, chat })
    }

    pub async fn job_seeker_like(
        &self,
        job_seeker_id: Uuid,
        payload: JobSeekerLikePayload,
    ) -> Result<LikeResponse<JobSeekerLike>> {
        let mut tx = self.pool.begin().await?;

        let employer_id =
            sqlx::query_scalar::<_, Uuid>("SELECT employer_id FROM vacancies WHERE id = $1")
                .bind(payload.vacancy_id)
                .fetch_optional(&mut *tx)
                .await?
                .ok_or_else(|| Error::NotFound("Vacancy not found".into()))?;

        lock_pair(&mut tx, job_seeker_id, payload.vacancy_id).await?;

        let like = sqlx::query_as::<_, JobSeekerLike>(
            r#"
            INSERT INTO job_seeker_likes (job_seeker_id, vacancy_id)
            VALUES ($1, $2)
            RETURNING *
            "#,
        )
        .bind(job_seeker_id)
        .bind(payload.vacancy_id)
        .fetch_one(&mut *tx)
        .await?;

        let mutual = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS (
                SELECT 1 FROM employer_likes
                WHERE job_seeker_id = $1 AND vacancy_id = $2 AND employer_id = $3
            )
            "#,
        )
        .bind(job_seeker_id)
        .bind(payload.vacancy_id)
        .bind(employer_id)
        .fetch_one(&mut *tx)
        .await?;

        let chat = if mutual {
            Some(open_chat(&mut tx, job_seeker_id, employer_id, payload.vacancy_id).await?)
        } else {
            None
        };

        tx.commit().await?;
        Ok(LikeResponse { like, chat })
    }
}

/// Serializes the like-and-check sequence for one (job seeker, vacancy)
/// pair so two opposite-side likes cannot both miss each other.
async fn lock_pair(conn: &mut PgConnection, job_seeker_id: Uuid, vacancy_id: Uuid) -> Result<()> {
    sqlx::query("SELECT pg_advisory_xact_lock(hashtextextended($1, 0))")
        .bind(format!("like:{}:{}", job_seeker_id, vacancy_id))
        .execute(&mut *conn)
        .await?;
    Ok(())
}
