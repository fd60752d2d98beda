mod form;
mod health;
mod housing;
mod map;
mod page;
mod predict;

pub use form::{county_defaults, form_options};
pub use health::health_check;
pub use housing::housing_summary;
pub use map::render_map;
pub use page::{dashboard_page, page_text};
pub use predict::handle_predict;
