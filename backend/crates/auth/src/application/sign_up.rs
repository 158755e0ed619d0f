//! Sign Up Use Case
//!
//! Registers a new account and issues its first token.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::email::Email;
use crate::error::{AuthError, AuthResult};

const MIN_PASSWORD_LEN: usize = 8;
const MAX_NAME_LEN: usize = 64;

/// Sign up input
pub struct SignUpInput {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Sign up output
#[derive(Debug)]
pub struct SignUpOutput {
    /// Bearer token for the new account
    pub token: String,
    pub user: User,
}

/// Sign up use case
pub struct SignUpUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
    config: Arc<AuthConfig>,
}

impl<R> SignUpUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self, input: SignUpInput) -> AuthResult<SignUpOutput> {
        let (name, email) = validate(&input)?;

        if self.repo.exists_by_email(&email).await? {
            return Err(AuthError::EmailTaken);
        }

        let password_hash = platform::password::hash_password(&input.password)?;
        let user = User::new(email, name, password_hash);

        self.repo.create(&user).await?;

        let token = self
            .config
            .codec()
            .encode(*user.user_id.as_uuid(), user.user_role);

        tracing::info!(user_id = %user.user_id, "User registered");

        Ok(SignUpOutput { token, user })
    }
}

/// Collect field-level validation errors; all fields are reported at once
fn validate(input: &SignUpInput) -> AuthResult<(String, Email)> {
    let mut errors = BTreeMap::new();

    let name = input.name.trim();
    if name.is_empty() {
        errors.insert("name".to_string(), "Name is required".to_string());
    } else if name.len() > MAX_NAME_LEN {
        errors.insert("name".to_string(), "Name is too long".to_string());
    }

    let email = match Email::new(&input.email) {
        Ok(email) => Some(email),
        Err(e) => {
            errors.insert("email".to_string(), e.to_string());
            None
        }
    };

    if input.password.len() < MIN_PASSWORD_LEN {
        errors.insert(
            "password".to_string(),
            format!("Password must be at least {} characters", MIN_PASSWORD_LEN),
        );
    }

    if !errors.is_empty() {
        return Err(AuthError::Validation(errors));
    }

    // Both are present when no errors were recorded
    Ok((name.to_string(), email.expect("validated above")))
}
