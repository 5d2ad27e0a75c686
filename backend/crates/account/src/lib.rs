//! Account (Identity & Session) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, repository trait
//! - `application/` - Use cases (register, login, session restore) and config
//! - `infra/` - PostgreSQL repository
//! - `presentation/` - HTTP handlers, DTOs, router, middleware
//!
//! ## Features
//! - Producer/buyer registration with email + password (registration is
//!   fused with login: a new account is left authenticated)
//! - Login with a single undifferentiated failure for unknown email and
//!   wrong password
//! - Stateless, signed session tokens resolving to the account's public id
//!
//! ## Security Model
//! - Passwords hashed with Argon2id (see `platform::password`)
//! - Accounts are addressed externally by a random v4 UUID public id only;
//!   the storage row key never leaves the database
//! - Session tokens carry the public id alone, HMAC-SHA256 signed
//! - Unresolvable tokens downgrade silently to an anonymous session

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use application::config::AccountConfig;
pub use error::{AccountError, AccountResult};
pub use infra::postgres::PgAccountRepository;
pub use presentation::router::account_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

// Convenience re-exports
pub mod config {
    pub use crate::application::config::*;
}

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod store {
    pub use crate::infra::postgres::PgAccountRepository as AccountStore;
}

pub mod router {
    pub use crate::presentation::router::*;
}

pub mod middleware {
    pub use crate::presentation::middleware::*;
}
