use crate::dto::vacancy_dto::{CreateVacancyForm, UpdateVacancyPayload};
use crate::error::{db_error_code, Error, Result, FOREIGN_KEY_VIOLATION};
use crate::models::vacancy::{Vacancy, VacancyCard};
use sqlx::PgPool;
use uuid::Uuid;

const NOT_FOUND: &str = "Vacancy not found";

/// Shared projection for the job-seeker feeds. Left joins keep vacancies
/// whose profession, position or employer profile is unset.
const CARD_SELECT: &str = r#"
    SELECT
        v.id,
        v.employer_id,
        v.position_name,
        v.salary,
        v.description,
        v.requirements,
        v.photo,
        v.profession_id,
        v.position_id,
        pf.name AS profession_name,
        ps.name AS position_title,
        ep.company_name,
        ep.website,
        v.created_at
    FROM vacancies v
    LEFT JOIN professions pf ON v.profession_id = pf.id
    LEFT JOIN positions ps ON v.position_id = ps.id
    LEFT JOIN employer_profiles ep ON v.employer_id = ep.user_id
"#;

#[derive(Clone)]
pub struct VacancyService {
    pool: PgPool,
}

impl VacancyService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, employer_id: Uuid, form: CreateVacancyForm) -> Result<Vacancy> {
        let vacancy = sqlx::query_as::<_, Vacancy>(
            r#"
            INSERT INTO vacancies (
                employer_id, position_name, profession_id, position_id,
                salary, description, requirements, photo
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(employer_id)
        .bind(&form.position_name)
        .bind(form.profession_id)
        .bind(form.position_id)
        .bind(form.salary)
        .bind(&form.description)
        .bind(&form.requirements)
        .bind(&form.photo)
        .fetch_one(&self.pool)
        .await
        .map_err(reference_error)?;

        tracing::info!(vacancy_id = %vacancy.id, employer_id = %employer_id, "vacancy created");
        Ok(vacancy)
    }

    pub async fn list_own(&self, employer_id: Uuid) -> Result<Vec<Vacancy>> {
        let items = sqlx::query_as::<_, Vacancy>(
            "SELECT * FROM vacancies WHERE employer_id = $1 ORDER BY created_at DESC",
        )
        .bind(employer_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(items)
    }

    /// Missing and foreign-owned vacancies are both reported as not found.
    pub async fn get_own(&self, employer_id: Uuid, id: Uuid) -> Result<Vacancy> {
        sqlx::query_as::<_, Vacancy>("SELECT * FROM vacancies WHERE id = $1 AND employer_id = $2")
            .bind(id)
            .bind(employer_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| Error::NotFound(NOT_FOUND.into()))
    }

    pub async fn update(
        &self,
        employer_id: Uuid,
        id: Uuid,
        payload: UpdateVacancyPayload,
    ) -> Result<Vacancy> {
        sqlx::query_as::<_, Vacancy>(
            r#"
            UPDATE vacancies
            SET position_name = $3,
                profession_id = $4,
                position_id = $5,
                salary = $6,
                description = $7,
                requirements = $8,
                updated_at = NOW()
            WHERE id = $1 AND employer_id = $2
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(employer_id)
        .bind(payload.position_name.trim())
        .bind(payload.profession_id)
        .bind(payload.position_id)
        .bind(payload.salary)
        .bind(&payload.description)
        .bind(&payload.requirements)
        .fetch_optional(&self.pool)
        .await
        .map_err(reference_error)?
        .ok_or_else(|| Error::NotFound(NOT_FOUND.into()))
    }

    pub async fn delete(&self, employer_id: Uuid, id: Uuid) -> Result<()> {
        let res = sqlx::query("DELETE FROM vacancies WHERE id = $1 AND employer_id = $2")
            .bind(id)
            .bind(employer_id)
            .execute(&self.pool)
            .await?;

        if res.rows_affected() == 0 {
            return Err(Error::NotFound(NOT_FOUND.into()));
        }
        tracing::info!(vacancy_id = %id, employer_id = %employer_id, "vacancy deleted");
        Ok(())
    }

    pub async fn list_for_job_seekers(&self) -> Result<Vec<VacancyCard>> {
        let query = format!("{CARD_SELECT} ORDER BY v.created_at DESC");
        let items = sqlx::query_as::<_, VacancyCard>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(items)
    }

    /// Vacancies the job seeker has not liked yet, those matching the
    /// profession on their profile first.
    pub async fn recommend_for(&self, job_seeker_id: Uuid) -> Result<Vec<VacancyCard>> {
        let query = format!(
            r#"{CARD_SELECT}
            LEFT JOIN job_seeker_profiles jp ON jp.user_id = $1
            WHERE NOT EXISTS (
                SELECT 1 FROM job_seeker_likes l
                WHERE l.job_seeker_id = $1 AND l.vacancy_id = v.id
            )
            ORDER BY
                COALESCE(lower(pf.name) = lower(jp.profession), FALSE) DESC,
                v.created_at DESC"#
        );
        let items = sqlx::query_as::<_, VacancyCard>(&query)
            .bind(job_seeker_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(items)
    }
}

fn reference_error(err: sqlx::Error) -> Error {
    match db_error_code(&err).as_deref() {
        Some(FOREIGN_KEY_VIOLATION) => {
            Error::BadRequest("Unknown profession_id or position_id".into())
        }
        _ => Error::from(err),
    }
}
