//! HTTP Handlers
//!
//! Form-post entry points that establish a session, plus logout and a JSON
//! session-status probe. User-visible failures become redirects to the
//! entry page with a `notice` query parameter; everything else goes through
//! `AccountError`'s problem-response mapping.

use axum::Json;
use axum::extract::{Form, State};
use axum::http::{HeaderMap, header};
use axum::response::{IntoResponse, Redirect, Response};
use std::sync::Arc;

use platform::cookie::{CookieConfig, extract_cookie};

use crate::application::config::AccountConfig;
use crate::application::{
    LoginInput, LoginUseCase, RegisterInput, RegisterUseCase, RestoreSessionUseCase, Session,
};
use crate::domain::repository::AccountRepository;
use crate::domain::value_object::account_role::AccountRole;
use crate::error::{AccountError, AccountResult};
use crate::presentation::dto::{LoginRequest, RegisterRequest, SessionStatusResponse};

/// Shared state for account handlers
#[derive(Clone)]
pub struct AccountAppState<R>
where
    R: AccountRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AccountConfig>,
}

// ============================================================================
// Register
// ============================================================================

/// POST /register
pub async fn register<R>(
    State(state): State<AccountAppState<R>>,
    Form(req): Form<RegisterRequest>,
) -> AccountResult<Response>
where
    R: AccountRepository + Clone + Send + Sync + 'static,
{
    let role = AccountRole::parse(&req.tag).ok_or(AccountError::InvalidRole)?;

    let use_case = RegisterUseCase::new(state.repo.clone(), state.config.clone());

    let input = RegisterInput {
        display_name: req.name,
        email: req.email,
        password: req.password,
        contact_number: req.contact_number,
        role,
        region: req.state,
    };

    match use_case.execute(input).await {
        Ok(output) => {
            let cookie = session_cookie(&state.config).build_set_cookie(&output.session_token);
            Ok((
                [(header::SET_COOKIE, cookie)],
                Redirect::to(&state.config.landing_path),
            )
                .into_response())
        }
        Err(AccountError::DuplicateEmail) => {
            Ok(entry_redirect(&state.config, "duplicate-email").into_response())
        }
        Err(e) => Err(e),
    }
}

// ============================================================================
// Login
// ============================================================================

/// POST /login
pub async fn login<R>(
    State(state): State<AccountAppState<R>>,
    Form(req): Form<LoginRequest>,
) -> AccountResult<Response>
where
    R: AccountRepository + Clone + Send + Sync + 'static,
{
    let use_case = LoginUseCase::new(state.repo.clone(), state.config.clone());

    let input = LoginInput {
        email: req.email,
        password: req.password,
    };

    match use_case.execute(input).await {
        Ok(output) => {
            let cookie = session_cookie(&state.config).build_set_cookie(&output.session_token);
            Ok((
                [(header::SET_COOKIE, cookie)],
                Redirect::to(&state.config.landing_path),
            )
                .into_response())
        }
        Err(AccountError::InvalidCredentials) => {
            Ok(entry_redirect(&state.config, "invalid-credentials").into_response())
        }
        Err(e) => Err(e),
    }
}

// ============================================================================
// Logout
// ============================================================================

/// GET /logout
///
/// The router runs this behind the session guard, so an anonymous caller is
/// redirected before getting here.
pub async fn logout<R>(State(state): State<AccountAppState<R>>) -> Response
where
    R: AccountRepository + Clone + Send + Sync + 'static,
{
    let cookie = session_cookie(&state.config).build_delete_cookie();
    (
        [(header::SET_COOKIE, cookie)],
        Redirect::to(&state.config.entry_path),
    )
        .into_response()
}

// ============================================================================
// Session Status
// ============================================================================

/// GET /session
///
/// Never an error for a bad token: anonymous is a normal answer.
pub async fn session_status<R>(
    State(state): State<AccountAppState<R>>,
    headers: HeaderMap,
) -> AccountResult<Json<SessionStatusResponse>>
where
    R: AccountRepository + Clone + Send + Sync + 'static,
{
    let token = extract_cookie(&headers, &state.config.session_cookie_name);

    let use_case = RestoreSessionUseCase::new(state.repo.clone(), state.config.clone());
    let session = use_case.execute(token.as_deref()).await?;

    Ok(Json(match session {
        Session::Authenticated(account) => SessionStatusResponse {
            authenticated: true,
            public_id: Some(account.public_id.to_string()),
        },
        Session::Anonymous => SessionStatusResponse {
            authenticated: false,
            public_id: None,
        },
    }))
}

// ============================================================================
// Helper Functions
// ============================================================================

fn session_cookie(config: &AccountConfig) -> CookieConfig {
    CookieConfig {
        name: config.session_cookie_name.clone(),
        secure: config.cookie_secure,
        http_only: true,
        same_site: config.cookie_same_site,
        path: "/".to_string(),
        max_age_secs: Some(config.session_ttl_secs()),
    }
}

fn entry_redirect(config: &AccountConfig, notice: &str) -> Redirect {
    Redirect::to(&format!("{}?notice={}", config.entry_path, notice))
}
