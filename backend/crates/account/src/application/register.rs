//! Register Use Case
//!
//! Creates a new account and leaves it authenticated: registration and
//! login are fused, so success always ends with a session token for the
//! fresh account.

use std::sync::Arc;

use platform::password::ClearTextPassword;

use crate::application::config::AccountConfig;
use crate::application::token;
use crate::domain::entity::account::Account;
use crate::domain::repository::AccountRepository;
use crate::domain::value_object::{account_role::AccountRole, email::Email};
use crate::error::{AccountError, AccountResult};

/// Register input; every field is required and non-empty at this layer
pub struct RegisterInput {
    pub display_name: String,
    pub email: String,
    pub password: String,
    pub contact_number: String,
    pub role: AccountRole,
    pub region: String,
}

/// Register output
pub struct RegisterOutput {
    /// Public id of the new account
    pub public_id: String,
    /// Session token for the fused login
    pub session_token: String,
}

/// Register use case
pub struct RegisterUseCase<R>
where
    R: AccountRepository,
{
    repo: Arc<R>,
    config: Arc<AccountConfig>,
}

impl<R> RegisterUseCase<R>
where
    R: AccountRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<AccountConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self, input: RegisterInput) -> AccountResult<RegisterOutput> {
        let email =
            Email::new(input.email).map_err(|e| AccountError::Validation(e.message().to_string()))?;

        for (field, value) in [
            ("name", &input.display_name),
            ("contact_number", &input.contact_number),
            ("state", &input.region),
        ] {
            if value.trim().is_empty() {
                return Err(AccountError::Validation(format!("{field} is required")));
            }
        }

        let password = ClearTextPassword::new(input.password)
            .map_err(|e| AccountError::Validation(e.to_string()))?;
        let credential_hash = password
            .hash(self.config.pepper())
            .map_err(|e| AccountError::Internal(e.to_string()))?;

        let account = Account::new(
            email,
            credential_hash,
            input.display_name,
            input.contact_number,
            input.region,
            input.role,
        );

        // Single atomic insert; a racing duplicate registration loses here
        // and nothing below runs for it.
        self.repo.insert(&account).await?;

        // The session starts only after the insert fully succeeded, so an
        // abandoned request never authenticates a half-created account.
        let session_token = token::issue(&account.public_id, &self.config.session_secret);

        tracing::info!(
            public_id = %account.public_id,
            role = %account.role,
            "Account registered"
        );

        Ok(RegisterOutput {
            public_id: account.public_id.to_string(),
            session_token,
        })
    }
}
