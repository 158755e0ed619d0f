//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::Extension;
use kernel::response::ApiResponse;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::{SignInInput, SignInUseCase, SignUpInput, SignUpUseCase};
use crate::domain::repository::UserRepository;
use crate::error::AuthResult;
use crate::presentation::dto::{AuthData, LoginRequest, MeData, RegisterRequest, UserDto};
use crate::presentation::middleware::CurrentUser;

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

// ============================================================================
// Register
// ============================================================================

/// POST /api/auth/register
pub async fn register<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<RegisterRequest>,
) -> AuthResult<Json<ApiResponse<AuthData>>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = SignUpUseCase::new(state.repo.clone(), state.config.clone());

    let output = use_case
        .execute(SignUpInput {
            name: req.name,
            email: req.email,
            password: req.password,
        })
        .await?;

    Ok(Json(
        ApiResponse::ok(AuthData {
            token: output.token,
            user: UserDto::from(&output.user),
        })
        .with_message("Registration successful"),
    ))
}

// ============================================================================
// Login
// ============================================================================

/// POST /api/auth/login
pub async fn login<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<LoginRequest>,
) -> AuthResult<Json<ApiResponse<AuthData>>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    sign_in(state, req, false).await
}

/// POST /api/auth/admin-login
pub async fn admin_login<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<LoginRequest>,
) -> AuthResult<Json<ApiResponse<AuthData>>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    sign_in(state, req, true).await
}

async fn sign_in<R>(
    state: AuthAppState<R>,
    req: LoginRequest,
    require_admin: bool,
) -> AuthResult<Json<ApiResponse<AuthData>>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = SignInUseCase::new(state.repo.clone(), state.config.clone());

    let output = use_case
        .execute(SignInInput {
            email: req.email,
            password: req.password,
            require_admin,
        })
        .await?;

    Ok(Json(
        ApiResponse::ok(AuthData {
            token: output.token,
            user: UserDto::from(&output.user),
        })
        .with_message("Login successful"),
    ))
}

// ============================================================================
// Current user
// ============================================================================

/// GET /api/auth/me (behind `require_auth`)
pub async fn me(
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> Json<ApiResponse<MeData>> {
    Json(ApiResponse::ok(MeData {
        user: UserDto::from(&user),
    }))
}
