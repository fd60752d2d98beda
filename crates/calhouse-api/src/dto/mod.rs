mod request;
mod response;

pub use request::MapQuery;
pub use response::{
    CountyDefaultsResponse, FormResponse, HealthResponse, PageResponse, PredictResponse, WidgetBounds,
};
