// src/models/search.rs
// DOCUMENTATION: Free-text search query model
// PURPOSE: Query parameters for GET /search-place

use serde::Serialize;
use std::borrow::Cow;
use validator::{Validate, ValidationError};

/// Query parameters for GET /search-place
/// DOCUMENTATION: `q` is forwarded verbatim (never trimmed); it only has to
/// contain something other than whitespace
#[derive(Debug, Clone, Serialize, Validate)]
pub struct SearchQuery {
    #[validate(custom = "validate_not_blank")]
    pub q: String,
}

impl SearchQuery {
    pub fn new(q: impl Into<String>) -> Self {
        Self { q: q.into() }
    }
}

fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some(Cow::from("Please enter a valid query."));
        return Err(err);
    }
    Ok(())
}
