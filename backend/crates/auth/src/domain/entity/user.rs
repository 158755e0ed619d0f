//! User Entity

use chrono::{DateTime, Utc};
use kernel::id::PlanId;

use crate::domain::value_object::{
    email::Email, user_id::UserId, user_role::UserRole, user_status::UserStatus,
};

/// User account entity
///
/// One row per account: identity, credential hash, role, status, and the
/// running earnings balance.
#[derive(Debug, Clone)]
pub struct User {
    /// Internal UUID identifier
    pub user_id: UserId,
    /// Login identity (unique, canonicalized)
    pub email: Email,
    /// Display name
    pub display_name: String,
    /// Argon2id password hash (PHC string)
    pub password_hash: String,
    /// Role (User, Admin)
    pub user_role: UserRole,
    /// Status (Active, Suspended)
    pub user_status: UserStatus,
    /// Collected earnings balance
    pub balance: f64,
    /// Purchased mining plan, if any
    pub plan_id: Option<PlanId>,
    /// Last successful login time
    pub last_login_at: Option<DateTime<Utc>>,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user with default role/status and a zero balance
    pub fn new(email: Email, display_name: String, password_hash: String) -> Self {
        let now = Utc::now();

        Self {
            user_id: UserId::new(),
            email,
            display_name,
            password_hash,
            user_role: UserRole::default(),
            user_status: UserStatus::default(),
            balance: 0.0,
            plan_id: None,
            last_login_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check if user can login
    pub fn can_login(&self) -> bool {
        self.user_status.can_login()
    }

    /// Check if user has the admin role
    pub fn is_admin(&self) -> bool {
        self.user_role.is_admin()
    }

    /// Record successful login
    pub fn record_login(&mut self) {
        let now = Utc::now();
        self.last_login_at = Some(now);
        self.updated_at = now;
    }
}
