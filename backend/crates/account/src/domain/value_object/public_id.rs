//! PublicId Value Object
//!
//! The only account handle ever exposed outside the storage layer: a random
//! version-4 UUID, generated at account creation and immutable after that.
//! 128 random bits with no sequential structure, so one account's id gives
//! no information about any other's. It is deliberately unrelated to the
//! storage row key.

use std::str::FromStr;

use kernel::error::app_error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PublicId(Uuid);

impl PublicId {
    /// Generate a fresh random id (UUID v4).
    #[inline]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    #[inline]
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    #[inline]
    pub fn parse_str(s: &str) -> AppResult<Self> {
        Uuid::parse_str(s)
            .map(PublicId)
            .map_err(|e| AppError::bad_request(format!("Invalid public id: {}", e)))
    }

    #[inline]
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    #[inline]
    pub fn into_uuid(self) -> Uuid {
        self.0
    }
}

impl FromStr for PublicId {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        PublicId::parse_str(s)
    }
}

impl Default for PublicId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for PublicId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
