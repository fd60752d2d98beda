//! calhouse store - loaders for the dashboard's input files
//!
//! Every loader reads its file once. `Datasets` bundles the loaded tables so
//! the binaries can hold them for the session and pass them around explicitly.

pub mod counties;
pub mod datasets;
pub mod geoparquet;
pub mod housing;
pub mod page;
pub mod table;

pub use counties::load_counties;
pub use datasets::Datasets;
pub use geoparquet::{read_geoparquet, GeoTable};
pub use housing::load_housing;
pub use page::{load_page_text, PageText, PAGE_TITLE};
pub use table::ParquetTable;
