use axum::Json;
use chrono::Utc;
use serde_json::{json, Value};

/// GET /api/health
/// Returns a status object with service version and the current time.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "ONLINE",
        "message": "Deep Research Job Portal API is running",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": Utc::now().to_rfc3339()
    }))
}
