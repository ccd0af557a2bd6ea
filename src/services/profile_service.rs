use sqlx::{FromRow, PgPool, Row};
use uuid::Uuid;

use crate::dto::profile_dto::{EmployerProfileForm, JobSeekerProfileForm};
use crate::error::Result;
use crate::models::profile::{EmployerProfile, JobSeekerProfile};

/// Result of an upsert: the stored row and whether this call created it.
#[derive(Debug)]
pub struct Upserted<T> {
    pub profile: T,
    pub created: bool,
}

#[derive(Clone)]
pub struct ProfileService {
    pool: PgPool,
}

impl ProfileService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn get_job_seeker(&self, user_id: Uuid) -> Result<Option<JobSeekerProfile>> {
        let profile =
            sqlx::query_as::<_, JobSeekerProfile>("SELECT * FROM job_seeker_profiles WHERE user_id = $1")
                .bind(user_id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(profile)
    }

    /// Single-statement upsert keyed on `user_id`. Every field, files
    /// included, is overwritten with what was submitted.
    pub async fn upsert_job_seeker(
        &self,
        user_id: Uuid,
        form: JobSeekerProfileForm,
    ) -> Result<Upserted<JobSeekerProfile>> {
        let row = sqlx::query(
            r#"
            INSERT INTO job_seeker_profiles (
                user_id, last_name, first_name, birth_date, city, education,
                about, profession, job_position, skills, experience, resume, photo
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            ON CONFLICT (user_id) DO UPDATE SET
                last_name = EXCLUDED.last_name,
                first_name = EXCLUDED.first_name,
                birth_date = EXCLUDED.birth_date,
                city = EXCLUDED.city,
                education = EXCLUDED.education,
                about = EXCLUDED.about,
                profession = EXCLUDED.profession,
                job_position = EXCLUDED.job_position,
                skills = EXCLUDED.skills,
                experience = EXCLUDED.experience,
                resume = EXCLUDED.resume,
                photo = EXCLUDED.photo,
                updated_at = NOW()
            RETURNING *, (xmax = 0) AS created
            "#,
        )
        .bind(user_id)
        .bind(&form.last_name)
        .bind(&form.first_name)
        .bind(form.birth_date)
        .bind(&form.city)
        .bind(&form.education)
        .bind(&form.about)
        .bind(&form.profession)
        .bind(&form.job_position)
        .bind(&form.skills)
        .bind(&form.experience)
        .bind(&form.resume)
        .bind(&form.photo)
        .fetch_one(&self.pool)
        .await?;

        Ok(Upserted {
            profile: JobSeekerProfile::from_row(&row)?,
            created: row.try_get("created")?,
        })
    }

    pub async fn get_employer(&self, user_id: Uuid) -> Result<Option<EmployerProfile>> {
        let profile =
            sqlx::query_as::<_, EmployerProfile>("SELECT * FROM employer_profiles WHERE user_id = $1")
                .bind(user_id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(profile)
    }

    /// Callers validate the form first; `company_name` is never blank here.
    pub async fn upsert_employer(
        &self,
        user_id: Uuid,
        form: EmployerProfileForm,
    ) -> Result<Upserted<EmployerProfile>> {
        let row = sqlx::query(
            r#"
            INSERT INTO employer_profiles (user_id, company_name, website, photo)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (user_id) DO UPDATE SET
                company_name = EXCLUDED.company_name,
                website = EXCLUDED.website,
                photo = EXCLUDED.photo,
                updated_at = NOW()
            RETURNING *, (xmax = 0) AS created
            "#,
        )
        .bind(user_id)
        .bind(&form.company_name)
        .bind(&form.website)
        .bind(&form.photo)
        .fetch_one(&self.pool)
        .await?;

        Ok(Upserted {
            profile: EmployerProfile::from_row(&row)?,
            created: row.try_get("created")?,
        })
    }

    /// Employer-side swipe feed: every job seeker who has filled a profile.
    pub async fn list_candidates(&self) -> Result<Vec<JobSeekerProfile>> {
        let items = sqlx::query_as::<_, JobSeekerProfile>(
            "SELECT * FROM job_seeker_profiles ORDER BY updated_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(items)
    }
}
