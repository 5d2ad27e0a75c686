//! Shared Kernel - Domain-crossing minimal core
//!
//! The smallest common vocabulary shared by every crate in the workspace:
//! the unified error type, its classification, and conversions from common
//! library errors.
//!
//! **Design Principle**: only things that are "hard to change" and mean the
//! same thing in every domain belong here.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
