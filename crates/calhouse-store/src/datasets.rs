//! Session datasets.

use chrono::{DateTime, Utc};

use calhouse_core::config::DataPaths;
use calhouse_core::error::Result;
use calhouse_core::models::{CountyTable, HousingTable};

use crate::page::{load_page_text, PageText};
use crate::{load_counties, load_housing};

/// The tables a session works with, loaded once and then read-only
#[derive(Debug, Clone)]
pub struct Datasets {
    pub housing: HousingTable,
    pub counties: CountyTable,
    pub page: PageText,
    pub loaded_at: DateTime<Utc>,
}

impl Datasets {
    pub fn load(paths: &DataPaths) -> Result<Self> {
        let housing = load_housing(&paths.housing_data)?;
        let counties = load_counties(&paths.geo_data)?;
        let page = load_page_text(&paths.page_text)?;

        Ok(Self {
            housing,
            counties,
            page,
            loaded_at: Utc::now(),
        })
    }

    /// Datasets built in memory, for callers that already hold the tables
    pub fn from_tables(housing: HousingTable, counties: CountyTable, page: PageText) -> Self {
        Self {
            housing,
            counties,
            page,
            loaded_at: Utc::now(),
        }
    }
}
