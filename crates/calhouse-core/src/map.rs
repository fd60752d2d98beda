//! Map renderer: the deck description the browser map draws.
//!
//! Field names follow deck.gl's JSON conventions (`@@type`, camelCase props)
//! so the page can hand each layer to the widget almost verbatim.

use serde::Serialize;

use crate::error::Result;
use crate::models::{CountyRecord, CountyTable, Ring};

pub const MAP_STYLE: &str = "light";
pub const TOOLTIP_HTML: &str = "<b>County:</b> {name}";

const ALL_COUNTIES_FILL: [u8; 4] = [0, 0, 255, 100];
const ALL_COUNTIES_LINE: [u8; 3] = [255, 255, 255];
const SELECTED_FILL: [u8; 4] = [255, 0, 0, 100];
const SELECTED_LINE: [u8; 3] = [0, 0, 0];

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeckSpec {
    pub initial_view_state: ViewState,
    pub map_style: &'static str,
    pub layers: Vec<PolygonLayer>,
    pub tooltip: Tooltip,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewState {
    pub latitude: f64,
    pub longitude: f64,
    pub zoom: f64,
    pub min_zoom: f64,
    pub max_zoom: f64,
}

impl ViewState {
    pub fn centered_on(longitude: f64, latitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            zoom: 5.0,
            min_zoom: 5.0,
            max_zoom: 15.0,
        }
    }
}

/// One polygon drawn by a layer; every ring of a county part becomes its own datum
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PolygonDatum {
    pub name: String,
    pub polygon: Ring,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PolygonLayer {
    pub id: &'static str,
    #[serde(rename = "@@type")]
    pub layer_type: &'static str,
    pub data: Vec<PolygonDatum>,
    pub get_fill_color: [u8; 4],
    pub get_line_color: [u8; 3],
    pub get_line_width: f64,
    pub pickable: bool,
    pub auto_highlight: bool,
}

impl PolygonLayer {
    fn new<'a>(
        id: &'static str,
        records: impl Iterator<Item = &'a CountyRecord>,
        fill: [u8; 4],
        line: [u8; 3],
        line_width: f64,
    ) -> Self {
        let data = records
            .flat_map(|record| {
                record.geometry.rings().iter().filter(|ring| !ring.is_empty()).map(|ring| {
                    PolygonDatum {
                        name: record.name.clone(),
                        polygon: ring.clone(),
                    }
                })
            })
            .collect();

        Self {
            id,
            layer_type: "PolygonLayer",
            data,
            get_fill_color: fill,
            get_line_color: line,
            get_line_width: line_width,
            pickable: true,
            auto_highlight: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tooltip {
    pub html: &'static str,
    pub style: TooltipStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TooltipStyle {
    pub background_color: &'static str,
    pub color: &'static str,
    pub font_size: &'static str,
}

impl Default for Tooltip {
    fn default() -> Self {
        Self {
            html: TOOLTIP_HTML,
            style: TooltipStyle {
                background_color: "steelblue",
                color: "white",
                font_size: "10px",
            },
        }
    }
}

pub struct MapRenderer<'a> {
    counties: &'a CountyTable,
}

impl<'a> MapRenderer<'a> {
    pub fn new(counties: &'a CountyTable) -> Self {
        Self { counties }
    }

    /// Deck for `selected`: every county in blue, the selection in red on top
    pub fn render(&self, selected: &str) -> Result<DeckSpec> {
        let first = self.counties.first_for(selected)?;

        let all = PolygonLayer::new(
            "all-counties",
            self.counties.records().iter(),
            ALL_COUNTIES_FILL,
            ALL_COUNTIES_LINE,
            50.0,
        );
        let highlight = PolygonLayer::new(
            "selected-county",
            self.counties.rows_for(selected),
            SELECTED_FILL,
            SELECTED_LINE,
            500.0,
        );

        tracing::debug!(
            county = selected,
            polygons = all.data.len(),
            highlighted = highlight.data.len(),
            "Rendered map"
        );

        Ok(DeckSpec {
            initial_view_state: ViewState::centered_on(first.longitude, first.latitude),
            map_style: MAP_STYLE,
            layers: vec![all, highlight],
            tooltip: Tooltip::default(),
        })
    }
}
