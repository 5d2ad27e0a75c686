//! Repository Trait
//!
//! Interface for account persistence. Implementation is in the
//! infrastructure layer. These three operations are the only storage entry
//! points the identity subsystem uses; there is deliberately no update or
//! delete.

use crate::domain::entity::account::Account;
use crate::domain::value_object::{email::Email, public_id::PublicId};
use crate::error::AccountResult;

/// Account repository trait
#[trait_variant::make(AccountRepository: Send)]
pub trait LocalAccountRepository {
    /// Insert a new account in a single atomic write.
    ///
    /// A uniqueness violation on the email column yields
    /// `AccountError::DuplicateEmail` and the operation is a complete
    /// no-op. Under concurrent same-email inserts exactly one succeeds;
    /// that guarantee comes from the storage constraint, never from a
    /// read-then-write check here.
    async fn insert(&self, account: &Account) -> AccountResult<()>;

    /// Find an account by email
    async fn find_by_email(&self, email: &Email) -> AccountResult<Option<Account>>;

    /// Find an account by public id
    async fn find_by_public_id(&self, public_id: &PublicId) -> AccountResult<Option<Account>>;
}
