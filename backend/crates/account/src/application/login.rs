//! Login Use Case
//!
//! Authenticates by email + password and issues a session token bound to
//! the account's public id. Unknown email and wrong password collapse into
//! one undifferentiated `InvalidCredentials`, so the endpoint cannot be
//! used to enumerate registered emails. The stored hash stays inside this
//! function's scope: it is not logged and never reaches the token.

use std::sync::Arc;

use platform::password::ClearTextPassword;

use crate::application::config::AccountConfig;
use crate::application::token;
use crate::domain::repository::AccountRepository;
use crate::domain::value_object::email::Email;
use crate::error::{AccountError, AccountResult};

/// Login input
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

/// Login output
pub struct LoginOutput {
    /// Public id of the authenticated account
    pub public_id: String,
    /// Session token for the cookie
    pub session_token: String,
}

/// Login use case
pub struct LoginUseCase<R>
where
    R: AccountRepository,
{
    repo: Arc<R>,
    config: Arc<AccountConfig>,
}

impl<R> LoginUseCase<R>
where
    R: AccountRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<AccountConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self, input: LoginInput) -> AccountResult<LoginOutput> {
        let email = Email::new(input.email).map_err(|_| AccountError::InvalidCredentials)?;

        let password = ClearTextPassword::new(input.password)
            .map_err(|_| AccountError::InvalidCredentials)?;

        let account = self
            .repo
            .find_by_email(&email)
            .await?
            .ok_or(AccountError::InvalidCredentials)?;

        if !account
            .credential_hash
            .verify(&password, self.config.pepper())
        {
            return Err(AccountError::InvalidCredentials);
        }

        let session_token = token::issue(&account.public_id, &self.config.session_secret);

        tracing::info!(public_id = %account.public_id, "Account logged in");

        Ok(LoginOutput {
            public_id: account.public_id.to_string(),
            session_token,
        })
    }
}
