use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::user::{Role, User};

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterPayload {
    #[serde(alias = "email")]
    #[validate(length(min = 3, max = 255, message = "login must be between 3 and 255 characters"))]
    pub login: String,
    #[validate(length(min = 6, max = 128, message = "password must be between 6 and 128 characters"))]
    pub password: String,
    pub role: Role,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginPayload {
    #[serde(alias = "email")]
    #[validate(length(min = 1, message = "login is required"))]
    pub login: String,
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

impl RegisterPayload {
    pub fn normalized(self) -> Self {
        Self {
            login: self.login.trim().to_string(),
            ..self
        }
    }
}

impl LoginPayload {
    pub fn normalized(self) -> Self {
        Self {
            login: self.login.trim().to_string(),
            ..self
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub login: String,
    pub role: Role,
}

impl From<User> for UserResponse {
    fn from(value: User) -> Self {
        Self {
            id: value.id,
            login: value.login,
            role: value.role,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    pub user: UserResponse,
}
