use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use calhouse_core::DeckSpec;

use crate::dto::MapQuery;
use crate::error::ApiError;
use crate::state::AppState;

pub async fn render_map(
    State(state): State<Arc<AppState>>,
    Query(query): Query<MapQuery>,
) -> Result<Json<DeckSpec>, ApiError> {
    let county = match query.county {
        Some(county) => county,
        None => state
            .form()
            .options()
            .first()
            .map(|name| name.to_string())
            .ok_or_else(|| ApiError::not_found("No counties loaded"))?,
    };

    Ok(Json(state.map().render(&county)?))
}
