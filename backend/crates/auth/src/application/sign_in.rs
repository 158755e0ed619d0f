//! Sign In Use Case
//!
//! Authenticates a user and issues a bearer token.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::email::Email;
use crate::error::{AuthError, AuthResult};

/// Sign in input
pub struct SignInInput {
    pub email: String,
    pub password: String,
    /// Admin portal login: a valid non-admin credential is rejected with the
    /// same error as a bad credential, so the portal reveals nothing.
    pub require_admin: bool,
}

/// Sign in output
#[derive(Debug)]
pub struct SignInOutput {
    pub token: String,
    pub user: User,
}

/// Sign in use case
pub struct SignInUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
    config: Arc<AuthConfig>,
}

impl<R> SignInUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self, input: SignInInput) -> AuthResult<SignInOutput> {
        let email = Email::new(&input.email).map_err(|_| AuthError::InvalidCredentials)?;

        let user = self
            .repo
            .find_by_email(&email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let password_valid =
            platform::password::verify_password(&input.password, &user.password_hash)?;
        if !password_valid {
            return Err(AuthError::InvalidCredentials);
        }

        if input.require_admin && !user.is_admin() {
            return Err(AuthError::InvalidCredentials);
        }

        if !user.can_login() {
            return Err(AuthError::AccountSuspended);
        }

        self.repo.record_login(&user.user_id).await?;

        let token = self
            .config
            .codec()
            .encode(*user.user_id.as_uuid(), user.user_role);

        tracing::info!(
            user_id = %user.user_id,
            admin_portal = input.require_admin,
            "User signed in"
        );

        Ok(SignInOutput { token, user })
    }
}
