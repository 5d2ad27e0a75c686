//! Value Objects

pub mod account_role;
pub mod email;
pub mod public_id;

// Re-exports
pub use account_role::AccountRole;
pub use email::Email;
pub use public_id::PublicId;
