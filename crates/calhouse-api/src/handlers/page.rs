use std::sync::Arc;

use axum::{extract::State, response::Html, Json};

use crate::dto::PageResponse;
use crate::state::AppState;

const DASHBOARD_HTML: &str = include_str!("../../static/index.html");

/// The dashboard page; the form and map are filled in from the JSON routes
pub async fn dashboard_page(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(DASHBOARD_HTML.replace("{{title}}", state.datasets.page.title))
}

pub async fn page_text(State(state): State<Arc<AppState>>) -> Json<PageResponse> {
    let page = &state.datasets.page;
    Json(PageResponse {
        title: page.title,
        intro: page.intro().to_string(),
        sections: page.sections.clone(),
    })
}
