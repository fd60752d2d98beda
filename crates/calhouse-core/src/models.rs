pub mod county;
pub mod features;
pub mod form;
pub mod geometry;
pub mod housing;

pub use county::{CountyRecord, CountyTable};
pub use features::{FeatureRow, FeatureValue, FEATURE_COLUMNS};
pub use form::{FormInput, NumericBounds, AGE_INPUT, INCOME_INPUT, INCOME_SCALE};
pub use geometry::{FlatGeometry, Ring};
pub use housing::{HousingRecord, HousingSummary, HousingTable};
