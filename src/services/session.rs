// src/services/session.rs
// DOCUMENTATION: In-memory user session
// PURPOSE: Hold the bearer token between actions of one console run

use chrono::{DateTime, Utc};
use std::fmt;

/// Authenticated state for one run of the client
/// DOCUMENTATION: The token is either absent or the `access` value of the
/// last successful login. There is no logout; a new login replaces it.
#[derive(Clone, Default)]
pub struct Session {
    token: Option<String>,
    username: Option<String>,
    authenticated_at: Option<DateTime<Utc>>,
}

impl Session {
    /// Create an anonymous session
    pub fn new() -> Self {
        Self::default()
    }

    /// Session that already holds a token
    #[cfg(test)]
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
            username: None,
            authenticated_at: Some(Utc::now()),
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    pub fn authenticated_at(&self) -> Option<DateTime<Utc>> {
        self.authenticated_at
    }

    /// Store the token from a successful login
    pub(crate) fn authenticate(&mut self, username: &str, token: String) {
        self.token = Some(token);
        self.username = Some(username.to_string());
        self.authenticated_at = Some(Utc::now());
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("username", &self.username)
            .field("authenticated_at", &self.authenticated_at)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_is_anonymous() {
        let session = Session::new();
        assert!(!session.is_authenticated());
        assert!(session.token().is_none());
        assert!(session.authenticated_at().is_none());
    }

    #[test]
    fn test_authenticate_replaces_token() {
        let mut session = Session::with_token("old");
        session.authenticate("bob", "new".to_string());

        assert_eq!(session.token(), Some("new"));
        assert_eq!(session.username(), Some("bob"));
        assert!(session.authenticated_at().is_some());
    }

    #[test]
    fn test_debug_redacts_token() {
        let session = Session::with_token("eyJhbGciOiJIUzI1NiJ9.secret");
        let printed = format!("{:?}", session);

        assert!(printed.contains("<redacted>"));
        assert!(!printed.contains("secret"));
    }
}
