use std::sync::Arc;

use axum::{extract::State, response::IntoResponse, Json};

use crate::dto::HealthResponse;
use crate::state::AppState;

pub async fn health_check(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok",
        service: "calhouse-api",
        counties: state.datasets.counties.names().len(),
        model: state.model.model_name().to_string(),
        loaded_at: state.datasets.loaded_at,
    })
}
