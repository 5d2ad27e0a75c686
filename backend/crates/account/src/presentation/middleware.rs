//! Session Middleware
//!
//! Runs session restoration on every protected request. `Anonymous` is
//! rejected with a redirect to the entry page, not an error page.

use axum::body::Body;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use std::sync::Arc;

use crate::application::config::AccountConfig;
use crate::application::{RestoreSessionUseCase, Session};
use crate::domain::entity::account::Account;
use crate::domain::repository::AccountRepository;

/// Middleware state
#[derive(Clone)]
pub struct SessionMiddlewareState<R>
where
    R: AccountRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AccountConfig>,
}

/// The account resolved for this request, stored in request extensions
#[derive(Clone)]
pub struct CurrentAccount(pub Account);

/// Middleware that requires a restored session
pub async fn require_session<R>(
    state: SessionMiddlewareState<R>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, Response>
where
    R: AccountRepository + Clone + Send + Sync + 'static,
{
    let token = platform::cookie::extract_cookie(req.headers(), &state.config.session_cookie_name);

    let use_case = RestoreSessionUseCase::new(state.repo.clone(), state.config.clone());

    let session = match use_case.execute(token.as_deref()).await {
        Ok(session) => session,
        // Storage unreachable is the one failure that surfaces as an error
        Err(e) => return Err(e.into_response()),
    };

    match session {
        Session::Authenticated(account) => {
            req.extensions_mut().insert(CurrentAccount(account));
            Ok(next.run(req).await)
        }
        Session::Anonymous => Err(Redirect::to(&state.config.entry_path).into_response()),
    }
}
