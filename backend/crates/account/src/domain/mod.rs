//! Domain Layer
//!
//! Contains the account entity, value objects, and the repository trait.

pub mod entity;
pub mod repository;
pub mod value_object;

// Re-exports
pub use entity::account::Account;
pub use repository::AccountRepository;
