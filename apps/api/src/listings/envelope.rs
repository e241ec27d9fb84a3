//! Search response envelope.

use serde::{Deserialize, Serialize};

use crate::listings::models::{JobListing, ValidatedSearch};

/// Echoed in place of a location when the caller did not supply one.
pub const ALL_LOCATIONS: &str = "All locations";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchEnvelope {
    pub success: bool,
    pub count: usize,
    pub query: String,
    pub location: String,
    pub jobs: Vec<JobListing>,
}

/// Wraps generated listings with counts and the echoed search parameters.
/// Infallible; failures upstream never reach this point.
pub fn format_search_response(search: ValidatedSearch, jobs: Vec<JobListing>) -> SearchEnvelope {
    SearchEnvelope {
        success: true,
        count: jobs.len(),
        query: search.query,
        location: search
            .location
            .unwrap_or_else(|| ALL_LOCATIONS.to_string()),
        jobs,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_location_echoes_sentinel() {
        let envelope = format_search_response(
            ValidatedSearch {
                query: "Designer".to_string(),
                location: None,
            },
            vec![],
        );
        assert!(envelope.success);
        assert_eq!(envelope.count, 0);
        assert_eq!(envelope.query, "Designer");
        assert_eq!(envelope.location, ALL_LOCATIONS);
    }

    #[test]
    fn test_supplied_location_echoed() {
        let envelope = format_search_response(
            ValidatedSearch {
                query: "Designer".to_string(),
                location: Some("Remote".to_string()),
            },
            vec![],
        );
        assert_eq!(envelope.location, "Remote");
    }
}
