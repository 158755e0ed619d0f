//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entity::user::User;

// ============================================================================
// Register
// ============================================================================

/// Register request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

// ============================================================================
// Login
// ============================================================================

/// Login request (user and admin portals share this shape)
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Token + user payload returned by login/register
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthData {
    pub token: String,
    pub user: UserDto,
}

// ============================================================================
// Current user
// ============================================================================

/// Payload returned by the `me` endpoint
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MeData {
    pub user: UserDto,
}

// ============================================================================
// User
// ============================================================================

/// Public user representation
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: String,
    pub status: String,
    pub balance: f64,
    pub plan_id: Option<Uuid>,
    pub last_login_at: Option<i64>,
}

impl From<&User> for UserDto {
    fn from(user: &User) -> Self {
        Self {
            id: *user.user_id.as_uuid(),
            name: user.display_name.clone(),
            email: user.email.as_str().to_string(),
            role: user.user_role.code().to_string(),
            status: user.user_status.code().to_string(),
            balance: user.balance,
            plan_id: user.plan_id.map(|p| p.into_uuid()),
            last_login_at: user.last_login_at.map(|t| t.timestamp_millis()),
        }
    }
}
