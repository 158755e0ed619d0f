//! Mining Router

use axum::{
    Router,
    middleware::from_fn,
    routing::{get, post},
};
use std::sync::Arc;

use auth::domain::repository::UserRepository;
use auth::middleware::{AuthMiddlewareState, require_admin, require_auth};

use crate::domain::repository::MiningRepository;
use crate::presentation::handlers::{self, MiningAppState};

/// Create the Mining router
///
/// Auth guards come from the auth crate so both routers resolve tokens
/// against the same configuration and user store.
pub fn mining_router<R, U>(repo: R, auth_state: AuthMiddlewareState<U>) -> Router
where
    R: MiningRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let state = MiningAppState {
        repo: Arc::new(repo),
    };

    let collect_guard = auth_state.clone();
    let stats_guard = auth_state;

    Router::new()
        .route(
            "/collect",
            post(handlers::collect::<R>).route_layer(from_fn(move |req, next| {
                let state = collect_guard.clone();
                async move { require_auth(state, req, next).await }
            })),
        )
        .route(
            "/stats",
            get(handlers::stats::<R>).route_layer(from_fn(move |req, next| {
                let state = stats_guard.clone();
                async move { require_admin(state, req, next).await }
            })),
        )
        .route("/plans", get(handlers::list_plans::<R>))
        .with_state(state)
}
