//! Account Role Value Object
//!
//! Exactly two roles exist. Bad input is rejected when parsed at the API
//! boundary, and the storage schema carries a CHECK constraint as the
//! authoritative guard, so no other value is ever persisted.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Marketplace account role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountRole {
    /// Sells produce on the marketplace
    Producer,
    /// Purchases produce on the marketplace
    Buyer,
}

impl AccountRole {
    /// String code for storage and serialization
    #[inline]
    pub const fn code(&self) -> &'static str {
        match self {
            AccountRole::Producer => "producer",
            AccountRole::Buyer => "buyer",
        }
    }

    /// Parse a role code; anything outside the value set is `None`
    #[inline]
    pub fn parse(code: &str) -> Option<Self> {
        match code {
            "producer" => Some(AccountRole::Producer),
            "buyer" => Some(AccountRole::Buyer),
            _ => None,
        }
    }
}

impl fmt::Display for AccountRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_codes() {
        assert_eq!(AccountRole::Producer.code(), "producer");
        assert_eq!(AccountRole::Buyer.code(), "buyer");
    }

    #[test]
    fn test_role_parse() {
        assert_eq!(AccountRole::parse("producer"), Some(AccountRole::Producer));
        assert_eq!(AccountRole::parse("buyer"), Some(AccountRole::Buyer));
    }

    #[test]
    fn test_role_parse_rejects_outside_value_set() {
        assert_eq!(AccountRole::parse("admin"), None);
        assert_eq!(AccountRole::parse("Producer"), None);
        assert_eq!(AccountRole::parse(""), None);
    }

    #[test]
    fn test_role_serde_lowercase() {
        let json = serde_json::to_string(&AccountRole::Buyer).unwrap();
        assert_eq!(json, "\"buyer\"");
        let role: AccountRole = serde_json::from_str("\"producer\"").unwrap();
        assert_eq!(role, AccountRole::Producer);
    }
}
