use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::models::user::Role;
use crate::AppState;

/// Identity of the caller, produced once by [`require_auth`] and read by
/// handlers through `Extension<AuthUser>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthUser {
    pub user_id: Uuid,
    pub role: Role,
}

/// Missing credentials are 401; a token that fails verification is 403.
pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response> {
    let token = bearer_token(&req)?;
    let claims = state.auth_service.verify_token(token)?;

    req.extensions_mut().insert(AuthUser {
        user_id: claims.user_id,
        role: claims.role,
    });
    Ok(next.run(req).await)
}

fn bearer_token(req: &Request) -> Result<&str> {
    let header = req
        .headers()
        .get(axum::http::header::AUTHORIZATION)
        .ok_or_else(|| Error::Unauthorized("Token not provided".into()))?;
    let value = header
        .to_str()
        .map_err(|_| Error::Unauthorized("Malformed authorization header".into()))?;
    let token = value
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| Error::Unauthorized("Token not provided".into()))?;
    Ok(token)
}

pub async fn require_role(req: Request, next: Next, required: Role) -> Result<Response> {
    let user = req
        .extensions()
        .get::<AuthUser>()
        .copied()
        .ok_or_else(|| Error::Unauthorized("Token not provided".into()))?;

    if user.role != required {
        tracing::debug!(user_id = %user.user_id, role = %user.role, required = %required, "role guard rejected request");
        return Err(Error::Forbidden(format!("Access denied: {} role required", required)));
    }
    Ok(next.run(req).await)
}

pub async fn require_job_seeker(req: Request, next: Next) -> Result<Response> {
    require_role(req, next, Role::JobSeeker).await
}

pub async fn require_employer(req: Request, next: Next) -> Result<Response> {
    require_role(req, next, Role::Employer).await
}
