//! Axum route handlers for the search and job detail API.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use tracing::{info, warn};

use crate::errors::AppError;
use crate::listings::detail::lookup_job_detail;
use crate::listings::envelope::{format_search_response, SearchEnvelope};
use crate::listings::models::{JobDetail, SearchRequest};
use crate::listings::validation::{validate_search, MISSING_QUERY};
use crate::state::AppState;

/// POST /api/search
///
/// Validates the body, fabricates listings through the configured source and
/// wraps them in the search envelope. A body that is not valid JSON is
/// treated like one without a query.
pub async fn handle_search(
    State(state): State<AppState>,
    body: Result<Json<SearchRequest>, JsonRejection>,
) -> Result<Json<SearchEnvelope>, AppError> {
    let Json(request) = body.map_err(|rejection| {
        warn!("Rejected search body: {rejection}");
        AppError::Validation(MISSING_QUERY.to_string())
    })?;

    let search = validate_search(request)?;
    let jobs = state.source.search(&search).await?;

    info!(
        "Search '{}' ({}) returned {} listings via {}",
        search.query,
        search.location.as_deref().unwrap_or("any location"),
        jobs.len(),
        state.source.backend()
    );

    Ok(Json(format_search_response(search, jobs)))
}

/// GET /api/jobs/:id
///
/// Echo-id, fixed-body stub. Any id is accepted.
pub async fn handle_get_job(Path(id): Path<String>) -> Json<JobDetail> {
    Json(lookup_job_detail(&id))
}
