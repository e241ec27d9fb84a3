use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single synthetic job record. Generated fresh per search, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobListing {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
    pub posted_date: DateTime<Utc>,
    pub salary_range: String,
    // Only populated by profiles with enhanced fields (government notices).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eligibility: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_deadline: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exam_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vacancies: Option<u32>,
}

/// Body of `POST /api/search`. Both fields are optional on the wire so the
/// validator, not the JSON extractor, decides what a missing query means.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    pub query: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

/// A search that passed validation: the query is present and non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedSearch {
    pub query: String,
    pub location: Option<String>,
}

/// Canned record returned by `GET /api/jobs/:id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobDetail {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
    pub requirements: Vec<String>,
    pub salary: String,
    pub posted: DateTime<Utc>,
}
