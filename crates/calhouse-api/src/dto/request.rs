use serde::Deserialize;

/// Map query string; without a county the first selector option is shown
#[derive(Debug, Deserialize)]
pub struct MapQuery {
    pub county: Option<String>,
}
