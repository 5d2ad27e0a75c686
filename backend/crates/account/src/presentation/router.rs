//! Account Router

use axum::{
    Router,
    middleware::from_fn,
    routing::{get, post},
};
use std::sync::Arc;

use crate::application::config::AccountConfig;
use crate::domain::repository::AccountRepository;
use crate::infra::postgres::PgAccountRepository;
use crate::presentation::handlers::{self, AccountAppState};
use crate::presentation::middleware::{SessionMiddlewareState, require_session};

/// Create the account router with the PostgreSQL repository
pub fn account_router(repo: PgAccountRepository, config: AccountConfig) -> Router {
    account_router_generic(repo, config)
}

/// Create a generic account router for any repository implementation
pub fn account_router_generic<R>(repo: R, config: AccountConfig) -> Router
where
    R: AccountRepository + Clone + Send + Sync + 'static,
{
    let state = AccountAppState {
        repo: Arc::new(repo),
        config: Arc::new(config),
    };

    let guard_state = SessionMiddlewareState {
        repo: state.repo.clone(),
        config: state.config.clone(),
    };

    // Logout requires an existing session; the guard redirects anonymous
    // callers to the entry page.
    let protected = Router::new()
        .route("/logout", get(handlers::logout::<R>))
        .route_layer(from_fn(
            move |req: axum::extract::Request, next: axum::middleware::Next| {
                let st = guard_state.clone();
                async move { require_session(st, req, next).await }
            },
        ));

    Router::new()
        .route("/register", post(handlers::register::<R>))
        .route("/login", post(handlers::login::<R>))
        .route("/session", get(handlers::session_status::<R>))
        .merge(protected)
        .with_state(state)
}
