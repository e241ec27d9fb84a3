//! Request validation for searches.
//!
//! The server passes fields through untouched. The client form trims first,
//! so a whitespace-only query is rejected there but accepted by the API.

use crate::errors::AppError;
use crate::listings::models::{SearchRequest, ValidatedSearch};

pub const MISSING_QUERY: &str = "Search query is required";

/// Server-side check: `query` must be present and non-empty. No trimming.
pub fn validate_search(request: SearchRequest) -> Result<ValidatedSearch, AppError> {
    match request.query {
        Some(query) if !query.is_empty() => Ok(ValidatedSearch {
            query,
            location: request.location.filter(|l| !l.is_empty()),
        }),
        _ => Err(AppError::Validation(MISSING_QUERY.to_string())),
    }
}

/// Client-side check on raw form input: trims both fields before validating.
pub fn validate_form_input(query: &str, location: &str) -> Result<ValidatedSearch, AppError> {
    let query = query.trim();
    if query.is_empty() {
        return Err(AppError::Validation(MISSING_QUERY.to_string()));
    }

    let location = location.trim();
    Ok(ValidatedSearch {
        query: query.to_string(),
        location: (!location.is_empty()).then(|| location.to_string()),
    })
}
