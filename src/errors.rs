// src/errors.rs
// DOCUMENTATION: Custom error types for API client operations
// PURPOSE: Centralized error taxonomy for every user action

use thiserror::Error;

/// Client-side error types
/// DOCUMENTATION: One variant per failure category a user action can hit
/// Every variant is terminal for the action that produced it; the console
/// renders it and accepts the next action
#[derive(Error, Debug)]
pub enum ClientError {
    /// Local validation failed, no request was sent
    #[error("{0}")]
    Validation(String),

    /// Authenticated action attempted without a session token
    #[error("Please log in first.")]
    NotLoggedIn,

    /// Server answered with a non-success status and an error message
    /// (taken from the body's `error` field or a per-action fallback)
    #[error("{message}")]
    Rejected { status: u16, message: String },

    /// Server answered with a non-success status, reported by code
    #[error("API request failed with status code {status}.")]
    Status { status: u16, body: String },

    /// Success status but the body was not in the expected shape
    #[error("Received an unexpected response format. Please try again later.")]
    UnexpectedFormat { body: String },

    /// Connection refused, DNS failure, timeout and the like
    #[error("An error occurred while connecting to the API.")]
    Transport(String),

    /// External browser could not be launched
    #[error("Could not open a browser: {0}")]
    Browser(String),
}

impl ClientError {
    /// Extra diagnostic line shown under the main message, if any
    pub fn detail(&self) -> Option<String> {
        match self {
            ClientError::Status { body, .. } | ClientError::UnexpectedFormat { body } => {
                Some(format!("Response content: {}", body))
            }
            ClientError::Transport(detail) => Some(format!("Error details: {}", detail)),
            _ => None,
        }
    }

    /// HTTP status the server answered with, when there was one
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Rejected { status, .. } | ClientError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the failure happened before any request left the process
    pub fn is_local(&self) -> bool {
        matches!(self, ClientError::Validation(_) | ClientError::NotLoggedIn)
    }
}

impl From<validator::ValidationErrors> for ClientError {
    fn from(errors: validator::ValidationErrors) -> Self {
        // First message wins; forms only ever have one field in error
        let message = errors
            .field_errors()
            .values()
            .flat_map(|errs| errs.iter())
            .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
            .unwrap_or_else(|| errors.to_string());
        ClientError::Validation(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_echoes_body() {
        let err = ClientError::Status {
            status: 502,
            body: "<html>bad gateway</html>".to_string(),
        };

        assert_eq!(err.to_string(), "API request failed with status code 502.");
        assert_eq!(
            err.detail(),
            Some("Response content: <html>bad gateway</html>".to_string())
        );
        assert!(!err.is_local());
    }

    #[test]
    fn test_rejected_uses_message_verbatim() {
        let err = ClientError::Rejected {
            status: 400,
            message: "Username already taken".to_string(),
        };

        assert_eq!(err.to_string(), "Username already taken");
        assert!(err.detail().is_none());
        assert_eq!(err.status(), Some(400));
    }

    #[test]
    fn test_local_errors() {
        assert!(ClientError::NotLoggedIn.is_local());
        assert!(ClientError::Validation("x".to_string()).is_local());
        assert_eq!(ClientError::NotLoggedIn.to_string(), "Please log in first.");
    }
}
