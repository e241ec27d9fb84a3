pub mod health;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::services::{ServeDir, ServeFile};

use crate::listings::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let static_dir = state.config.static_dir.clone();
    // Unknown paths fall through to the front-end page.
    let frontend = ServeDir::new(&static_dir).fallback(ServeFile::new(static_dir.join("index.html")));

    Router::new()
        .route("/api/health", get(health::health_handler))
        .route("/api/search", post(handlers::handle_search))
        .route("/api/jobs/:id", get(handlers::handle_get_job))
        .fallback_service(frontend)
        .with_state(state)
}
