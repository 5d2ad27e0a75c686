//! Restore Session Use Case
//!
//! Resolves a presented session token back into an account, once per
//! request. Every failure mode short of storage being unreachable — missing
//! token, bad signature, malformed id, account gone — downgrades silently
//! to `Anonymous` with no distinguishing signal.

use std::sync::Arc;

use crate::application::config::AccountConfig;
use crate::application::token;
use crate::domain::entity::account::Account;
use crate::domain::repository::AccountRepository;
use crate::error::AccountResult;

/// Per-request session state
#[derive(Debug, Clone)]
pub enum Session {
    /// No valid session on this channel
    Anonymous,
    /// Token resolved to an existing account
    Authenticated(Account),
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::Authenticated(_))
    }

    pub fn account(&self) -> Option<&Account> {
        match self {
            Session::Authenticated(account) => Some(account),
            Session::Anonymous => None,
        }
    }
}

/// Restore session use case
pub struct RestoreSessionUseCase<R>
where
    R: AccountRepository,
{
    repo: Arc<R>,
    config: Arc<AccountConfig>,
}

impl<R> RestoreSessionUseCase<R>
where
    R: AccountRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<AccountConfig>) -> Self {
        Self { repo, config }
    }

    /// Resolve an optional presented token into a session.
    ///
    /// `Err` is reserved for storage failures; everything else is a clean
    /// `Ok(Session::Anonymous)`.
    pub async fn execute(&self, presented: Option<&str>) -> AccountResult<Session> {
        let Some(token) = presented else {
            return Ok(Session::Anonymous);
        };

        let Some(public_id) = token::verify(token, &self.config.session_secret) else {
            tracing::debug!("Session token failed verification");
            return Ok(Session::Anonymous);
        };

        match self.repo.find_by_public_id(&public_id).await? {
            Some(account) => Ok(Session::Authenticated(account)),
            None => {
                // Valid signature but no such account (e.g. removed
                // out-of-band): same silent downgrade as a forged token.
                tracing::debug!("Session token resolved to no account");
                Ok(Session::Anonymous)
            }
        }
    }
}
