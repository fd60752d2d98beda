use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers;
use crate::state::AppState;

/// Create the dashboard router with all routes
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Page
        .route("/", get(handlers::dashboard_page))
        .route("/health", get(handlers::health_check))
        .route("/api/v1/page", get(handlers::page_text))

        // Form
        .route("/api/v1/form", get(handlers::form_options))
        .route("/api/v1/counties/{name}", get(handlers::county_defaults))
        .route("/api/v1/predict", post(handlers::handle_predict))

        // Map
        .route("/api/v1/map", get(handlers::render_map))

        // Reference data
        .route("/api/v1/housing/summary", get(handlers::housing_summary))

        .with_state(state)
}
