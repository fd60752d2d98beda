use std::sync::Arc;

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use calhouse_core::models::FormInput;

use crate::dto::PredictResponse;
use crate::error::ApiError;
use crate::state::AppState;

pub async fn handle_predict(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<FormInput>, JsonRejection>,
) -> Result<Json<PredictResponse>, ApiError> {
    let Json(input) = payload?;

    tracing::info!(
        county = %input.county,
        housing_median_age = input.housing_median_age,
        median_income = input.median_income,
        "Processing prediction request"
    );

    let prediction = state.form().submit(&input)?;

    Ok(Json(PredictResponse::new(prediction, state.model.model_name())))
}
