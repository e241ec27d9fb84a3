//! Job sources: the seam through which the server and the portal client
//! obtain listings.
//!
//! Default: `MockJobGenerator` (in-process, no I/O).
//! Alternative: `ApiJobSource` (POSTs to a running portal API over HTTP).

use anyhow::anyhow;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::debug;

use crate::errors::AppError;
use crate::listings::envelope::SearchEnvelope;
use crate::listings::generator::MockJobGenerator;
use crate::listings::models::{JobListing, SearchRequest, ValidatedSearch};

/// Implement this to swap where listings come from without touching the
/// handlers or the portal session.
///
/// Carried in `AppState` as `Arc<dyn JobSource>`.
#[async_trait]
pub trait JobSource: Send + Sync {
    async fn search(&self, search: &ValidatedSearch) -> Result<Vec<JobListing>, AppError>;

    /// Short backend name for logs: "mock" | "api".
    fn backend(&self) -> &'static str;
}

#[async_trait]
impl JobSource for MockJobGenerator {
    async fn search(&self, search: &ValidatedSearch) -> Result<Vec<JobListing>, AppError> {
        self.generate(&search.query, search.location.as_deref())
    }

    fn backend(&self) -> &'static str {
        "mock"
    }
}

/// Error body shape shared by the 400 and 500 responses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
    #[serde(default)]
    message: Option<String>,
}

/// Fetches listings from `POST {base_url}/api/search`.
#[derive(Debug, Clone)]
pub struct ApiJobSource {
    client: Client,
    base_url: String,
}

impl ApiJobSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn search_url(&self) -> String {
        format!("{}/api/search", self.base_url)
    }
}

#[async_trait]
impl JobSource for ApiJobSource {
    async fn search(&self, search: &ValidatedSearch) -> Result<Vec<JobListing>, AppError> {
        let body = SearchRequest {
            query: Some(search.query.clone()),
            location: search.location.clone(),
        };

        let url = self.search_url();
        debug!("POST {url}");
        let response = self.client.post(&url).json(&body).send().await?;
        let status = response.status();

        if status.is_success() {
            let envelope: SearchEnvelope = response.json().await?;
            return Ok(envelope.jobs);
        }

        let error: ErrorBody = response.json().await?;
        match status {
            StatusCode::BAD_REQUEST => Err(AppError::Validation(error.error)),
            _ => Err(AppError::Internal(anyhow!(
                "{} ({status}): {}",
                error.error,
                error.message.unwrap_or_default()
            ))),
        }
    }

    fn backend(&self) -> &'static str {
        "api"
    }
}
