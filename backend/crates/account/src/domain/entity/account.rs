//! Account Entity
//!
//! The statically-typed account record, populated once at the store
//! boundary. The storage row key is not part of this entity: it never
//! leaves the database, so no field exists for it. Accounts are created
//! exactly once by registration and never mutated or deleted afterwards,
//! which is why this type has no setters.

use chrono::{DateTime, Utc};
use platform::password::HashedPassword;

use crate::domain::value_object::{account_role::AccountRole, email::Email, public_id::PublicId};

/// Marketplace account
#[derive(Debug, Clone)]
pub struct Account {
    /// Public-facing random identifier, the only external handle
    pub public_id: PublicId,
    /// Unique login email
    pub email: Email,
    /// Argon2id PHC credential hash (Debug-redacted, never logged)
    pub credential_hash: HashedPassword,
    /// Display name, free-form
    pub display_name: String,
    /// Contact number, free-form
    pub contact_number: String,
    /// Region, free-form
    pub region: String,
    /// Producer or buyer
    pub role: AccountRole,
    /// Set once at creation
    pub created_at: DateTime<Utc>,
}

impl Account {
    /// Build a new account with a freshly generated public id.
    pub fn new(
        email: Email,
        credential_hash: HashedPassword,
        display_name: String,
        contact_number: String,
        region: String,
        role: AccountRole,
    ) -> Self {
        Self {
            public_id: PublicId::new(),
            email,
            credential_hash,
            display_name,
            contact_number,
            region,
            role,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use platform::password::ClearTextPassword;

    fn sample_account() -> Account {
        let password = ClearTextPassword::new("harvest2024".to_string()).unwrap();
        Account::new(
            Email::new("grower@example.com").unwrap(),
            password.hash(None).unwrap(),
            "Grower One".to_string(),
            "9876543210".to_string(),
            "Punjab".to_string(),
            AccountRole::Producer,
        )
    }

    #[test]
    fn test_new_account_gets_fresh_public_id() {
        let a = sample_account();
        let b = sample_account();
        assert_ne!(a.public_id, b.public_id);
    }

    #[test]
    fn test_debug_never_contains_hash() {
        let account = sample_account();
        let debug = format!("{:?}", account);
        assert!(!debug.contains(account.credential_hash.as_phc_string()));
    }
}
