use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use calhouse_core::form::PREDICTION_LABEL;
use calhouse_core::models::{AGE_INPUT, INCOME_INPUT};

use crate::dto::{CountyDefaultsResponse, FormResponse};
use crate::error::ApiError;
use crate::state::AppState;

pub async fn form_options(State(state): State<Arc<AppState>>) -> Json<FormResponse> {
    let counties = state.form().options().into_iter().map(str::to_string).collect();

    Json(FormResponse {
        counties,
        housing_median_age: AGE_INPUT.into(),
        median_income: INCOME_INPUT.into(),
        prediction_label: PREDICTION_LABEL,
    })
}

pub async fn county_defaults(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<Json<CountyDefaultsResponse>, ApiError> {
    let record = state.form().defaults_for(&name)?;
    let parts = state.datasets.counties.rows_for(&name).count();

    Ok(Json(CountyDefaultsResponse::new(record, parts)))
}
