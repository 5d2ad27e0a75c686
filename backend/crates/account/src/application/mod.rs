//! Application Layer
//!
//! Use cases and application services.

pub mod config;
pub mod login;
pub mod register;
pub mod restore_session;
pub mod token;

// Re-exports
pub use config::AccountConfig;
pub use login::{LoginInput, LoginOutput, LoginUseCase};
pub use register::{RegisterInput, RegisterOutput, RegisterUseCase};
pub use restore_session::{RestoreSessionUseCase, Session};
