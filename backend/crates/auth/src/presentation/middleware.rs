//! Auth Middleware
//!
//! Bearer-token guards for protected routes. The guard functions fail fast:
//! on any failure the request terminates with the corresponding status and
//! handler code never runs.

use axum::body::Body;
use axum::http::{HeaderMap, Request, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::user_id::UserId;
use crate::error::{AuthError, AuthResult};

/// Middleware state
#[derive(Clone)]
pub struct AuthMiddlewareState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

/// Authenticated user stored in request extensions
#[derive(Clone)]
pub struct CurrentUser(pub User);

/// Extract the bearer token from the authorization header
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

/// Resolve the bearer token to an active account
///
/// Fails with 401 when the header is absent (storage is never touched),
/// the token is invalid or expired, the subject no longer exists, or the
/// account is not active.
pub async fn authenticate<R>(
    repo: &R,
    config: &AuthConfig,
    headers: &HeaderMap,
) -> AuthResult<User>
where
    R: UserRepository,
{
    let token = bearer_token(headers).ok_or(AuthError::MissingToken)?;

    let claims = config.codec().decode(token)?;

    let user = repo
        .find_by_id(&UserId::from_uuid(claims.sub))
        .await?
        .ok_or(AuthError::SubjectNotFound)?;

    if !user.can_login() {
        return Err(AuthError::AccountSuspended);
    }

    Ok(user)
}

/// [`authenticate`], then require the admin role (403 on mismatch)
pub async fn authenticate_admin<R>(
    repo: &R,
    config: &AuthConfig,
    headers: &HeaderMap,
) -> AuthResult<User>
where
    R: UserRepository,
{
    let user = authenticate(repo, config, headers).await?;

    if !user.is_admin() {
        return Err(AuthError::AdminRequired);
    }

    Ok(user)
}

/// Middleware that requires a valid bearer token
pub async fn require_auth<R>(
    state: AuthMiddlewareState<R>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, Response>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let user = authenticate(state.repo.as_ref(), &state.config, req.headers())
        .await
        .map_err(|e| e.into_response())?;

    req.extensions_mut().insert(CurrentUser(user));

    Ok(next.run(req).await)
}

/// Middleware that requires a valid bearer token with the admin role
pub async fn require_admin<R>(
    state: AuthMiddlewareState<R>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, Response>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let user = authenticate_admin(state.repo.as_ref(), &state.config, req.headers())
        .await
        .map_err(|e| e.into_response())?;

    req.extensions_mut().insert(CurrentUser(user));

    Ok(next.run(req).await)
}
