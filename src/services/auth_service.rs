use sqlx::PgPool;

use crate::dto::auth_dto::{AuthResponse, LoginPayload, RegisterPayload};
use crate::error::{db_error_code, Error, Result, UNIQUE_VIOLATION};
use crate::models::user::User;
use crate::utils::crypto::{hash_password, verify_password};
use crate::utils::token::{Claims, JwtKeys};

const INVALID_CREDENTIALS: &str = "Invalid login or password";

#[derive(Clone)]
pub struct AuthService {
    pool: PgPool,
    keys: JwtKeys,
}

impl AuthService {
    pub fn new(pool: PgPool, keys: JwtKeys) -> Self {
        Self { pool, keys }
    }

    pub async fn register(&self, payload: RegisterPayload) -> Result<AuthResponse> {
        let login = payload.login.trim().to_string();
        let password_hash = hash_password(&payload.password)?;

        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (login, password_hash, role)
            VALUES ($1, $2, $3)
            RETURNING id, login, password_hash, role, created_at
            "#,
        )
        .bind(&login)
        .bind(&password_hash)
        .bind(payload.role)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match db_error_code(&e).as_deref() {
            Some(UNIQUE_VIOLATION) => Error::Conflict("Login is already taken".into()),
            _ => Error::from(e),
        })?;

        tracing::info!(user_id = %user.id, role = %user.role, "user registered");

        let token = self.keys.issue(user.id, user.role)?;
        Ok(AuthResponse {
            token,
            role: None,
            user: user.into(),
        })
    }

    pub async fn login(&self, payload: LoginPayload) -> Result<AuthResponse> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, login, password_hash, role, created_at
            FROM users
            WHERE login = $1
            "#,
        )
        .bind(payload.login.trim())
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| Error::Unauthorized(INVALID_CREDENTIALS.into()))?;

        if !verify_password(&payload.password, &user.password_hash)? {
            tracing::debug!(user_id = %user.id, "login rejected: wrong password");
            return Err(Error::Unauthorized(INVALID_CREDENTIALS.into()));
        }

        let token = self.keys.issue(user.id, user.role)?;
        Ok(AuthResponse {
            token,
            role: Some(user.role),
            user: user.into(),
        })
    }

    pub fn verify_token(&self, token: &str) -> Result<Claims> {
        self.keys.verify(token).map_err(|e| {
            tracing::debug!(error = %e, "bearer token rejected");
            Error::Forbidden("Invalid token".into())
        })
    }
}
