//! API DTOs (Data Transfer Objects)
//!
//! Field names on the form requests match the posted form fields: `tag`
//! carries the role code and `state` the region.

use serde::{Deserialize, Serialize};

// ============================================================================
// Register
// ============================================================================

/// Registration form
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub contact_number: String,
    pub tag: String,
    pub state: String,
}

// ============================================================================
// Login
// ============================================================================

/// Login form
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

// ============================================================================
// Session Status
// ============================================================================

/// Session status response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionStatusResponse {
    pub authenticated: bool,
    pub public_id: Option<String>,
}
