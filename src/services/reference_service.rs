use sqlx::PgPool;

use crate::error::Result;
use crate::models::reference::{Position, Profession, Skill};

#[derive(Clone)]
pub struct ReferenceService {
    pool: PgPool,
}

impl ReferenceService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_professions(&self) -> Result<Vec<Profession>> {
        let items = sqlx::query_as::<_, Profession>("SELECT id, name FROM professions ORDER BY name ASC")
            .fetch_all(&self.pool)
            .await?;
        Ok(items)
    }

    pub async fn list_positions(&self, profession_id: i32) -> Result<Vec<Position>> {
        let items = sqlx::query_as::<_, Position>(
            "SELECT id, profession_id, name FROM positions WHERE profession_id = $1 ORDER BY name ASC",
        )
        .bind(profession_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(items)
    }

    pub async fn list_skills(&self, profession_id: i32) -> Result<Vec<Skill>> {
        let items = sqlx::query_as::<_, Skill>(
            "SELECT id, profession_id, name FROM skills WHERE profession_id = $1 ORDER BY name ASC",
        )
        .bind(profession_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(items)
    }
}
