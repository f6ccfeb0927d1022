// src/models/auth.rs
// DOCUMENTATION: Account request/response models
// PURPOSE: Bodies for the /register/ and /login/ endpoints

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Request DTO for POST /register/
#[derive(Clone, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Request DTO for POST /login/
#[derive(Clone, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

// Passwords never reach logs through {:?}
impl fmt::Debug for RegisterRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterRequest")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Token pair returned by a successful login
/// Only `access` is used; the server may send more fields
#[derive(Deserialize)]
pub struct LoginResponse {
    pub access: String,
    #[serde(default)]
    pub refresh: Option<String>,
}

/// Error envelope returned by the API on failures: `{"error": ...}`
#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    pub error: Option<Value>,
}

impl ApiErrorBody {
    /// Extract the server's error message from a raw body
    /// DOCUMENTATION: Strings are returned verbatim, other JSON values as
    /// their compact text. None when the body is not JSON or has no `error`.
    pub fn message_from(body: &str) -> Option<String> {
        let parsed: ApiErrorBody = serde_json::from_str(body).ok()?;
        match parsed.error? {
            Value::Null => None,
            Value::String(s) => Some(s),
            other => Some(other.to_string()),
        }
    }
}
