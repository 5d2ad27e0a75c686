//! Platform Crate - Technical Infrastructure
//!
//! Shared technical foundations with no domain knowledge:
//! - Password hashing (Argon2id, self-contained PHC strings)
//! - Cookie management

pub mod cookie;
pub mod password;
