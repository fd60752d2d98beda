use std::sync::Arc;

use axum::{extract::State, Json};
use calhouse_core::models::HousingSummary;

use crate::state::AppState;

pub async fn housing_summary(State(state): State<Arc<AppState>>) -> Json<HousingSummary> {
    Json(state.datasets.housing.summary())
}
