//! Fixture writers shared by the loader tests

#![allow(dead_code)]

use std::fs::File;
use std::path::Path;
use std::sync::Arc;

use arrow_array::{ArrayRef, Float64Array, Int64Array, RecordBatch, StringArray};
use arrow_schema::{DataType, Field, Schema};
use geo::{Geometry, LineString, MultiPolygon, Polygon};
use geoarrow_array::builder::GeometryBuilder;
use geoarrow_array::GeoArrowArray;
use geoarrow_schema::GeometryType;
use geoparquet::writer::{GeoParquetRecordBatchEncoder, GeoParquetWriterOptions};
use parquet::arrow::ArrowWriter;

pub type Ring = Vec<(f64, f64)>;

pub enum Shape {
    Polygon(Ring),
    MultiPolygon(Vec<Ring>),
    Missing,
}

pub struct CountyRow {
    pub name: &'static str,
    pub longitude: f64,
    pub latitude: f64,
    pub income_cat: i64,
    pub shape: Shape,
}

fn polygon(ring: &Ring) -> Polygon<f64> {
    Polygon::new(LineString::from(ring.clone()), vec![])
}

pub fn geometry(shape: &Shape) -> Option<Geometry<f64>> {
    match shape {
        Shape::Polygon(ring) => Some(Geometry::Polygon(polygon(ring))),
        Shape::MultiPolygon(parts) => {
            Some(Geometry::MultiPolygon(MultiPolygon::new(parts.iter().map(polygon).collect())))
        }
        Shape::Missing => None,
    }
}

pub fn square(x: f64, y: f64, size: f64) -> Ring {
    vec![(x, y), (x + size, y), (x + size, y + size), (x, y + size), (x, y)]
}

pub fn clockwise_square(x: f64, y: f64, size: f64) -> Ring {
    let mut ring = square(x, y, size);
    ring.reverse();
    ring
}

pub fn bowtie(x: f64, y: f64) -> Ring {
    vec![(x, y), (x + 2.0, y + 2.0), (x + 2.0, y), (x, y + 2.0), (x, y)]
}

/// Shoelace area of a closed ring; positive when counter-clockwise
pub fn signed_area(ring: &[[f64; 2]]) -> f64 {
    ring.windows(2).map(|w| w[0][0] * w[1][1] - w[1][0] * w[0][1]).sum::<f64>() / 2.0
}

/// Write a county table; `with_geo_metadata = false` leaves out the `geo` key
pub fn write_counties(path: &Path, rows: &[CountyRow], with_geo_metadata: bool) {
    let n = rows.len();

    let geometry_type = GeometryType::new(Default::default());
    let geometry_field = geometry_type.to_field("geometry", true);
    let mut builder = GeometryBuilder::new(geometry_type);
    let geometries: Vec<Option<Geometry<f64>>> = rows.iter().map(|r| geometry(&r.shape)).collect();
    for geometry in &geometries {
        builder.push_geometry(geometry.as_ref()).unwrap();
    }
    let geometry_array = builder.finish();

    let schema = Arc::new(Schema::new(vec![
        Field::new("name", DataType::Utf8, false),
        Field::new("longitude", DataType::Float64, false),
        Field::new("latitude", DataType::Float64, false),
        Field::new("total_rooms", DataType::Float64, false),
        Field::new("population", DataType::Int64, false),
        Field::new("rooms_per_household", DataType::Float64, false),
        Field::new("bedrooms_per_room", DataType::Float64, false),
        Field::new("population_per_household", DataType::Float64, false),
        Field::new("ocean_proximity", DataType::Utf8, false),
        Field::new("median_income_cat", DataType::Int64, false),
        geometry_field,
    ]));

    let columns: Vec<ArrayRef> = vec![
        Arc::new(StringArray::from(rows.iter().map(|r| r.name).collect::<Vec<_>>())),
        Arc::new(Float64Array::from(rows.iter().map(|r| r.longitude).collect::<Vec<_>>())),
        Arc::new(Float64Array::from(rows.iter().map(|r| r.latitude).collect::<Vec<_>>())),
        Arc::new(Float64Array::from(vec![2500.0; n])),
        Arc::new(Int64Array::from(vec![1300; n])),
        Arc::new(Float64Array::from(vec![5.3; n])),
        Arc::new(Float64Array::from(vec![0.21; n])),
        Arc::new(Float64Array::from(vec![2.9; n])),
        Arc::new(StringArray::from(vec!["INLAND"; n])),
        Arc::new(Int64Array::from(rows.iter().map(|r| r.income_cat).collect::<Vec<_>>())),
        geometry_array.to_array_ref(),
    ];
    let batch = RecordBatch::try_new(schema.clone(), columns).unwrap();

    let options = GeoParquetWriterOptions::default();
    let mut encoder = GeoParquetRecordBatchEncoder::try_new(schema.as_ref(), &options).unwrap();
    let encoded = encoder.encode_record_batch(&batch).unwrap();

    let file = File::create(path).unwrap();
    let mut writer = ArrowWriter::try_new(file, encoder.target_schema(), None).unwrap();
    writer.write(&encoded).unwrap();
    if with_geo_metadata {
        writer.append_key_value_metadata(encoder.into_keyvalue().unwrap());
    }
    writer.close().unwrap();
}

pub fn write_housing(path: &Path) {
    let schema = Arc::new(Schema::new(vec![
        Field::new("longitude", DataType::Float64, false),
        Field::new("latitude", DataType::Float64, false),
        Field::new("housing_median_age", DataType::Float64, false),
        Field::new("total_rooms", DataType::Float64, false),
        Field::new("total_bedrooms", DataType::Float64, true),
        Field::new("population", DataType::Float64, false),
        Field::new("households", DataType::Float64, false),
        Field::new("median_income", DataType::Float64, false),
        Field::new("ocean_proximity", DataType::Utf8, false),
    ]));

    let columns: Vec<ArrayRef> = vec![
        Arc::new(Float64Array::from(vec![-122.23, -121.5, -118.3])),
        Arc::new(Float64Array::from(vec![37.88, 38.6, 34.1])),
        Arc::new(Float64Array::from(vec![41.0, 21.0, 35.0])),
        Arc::new(Float64Array::from(vec![880.0, 7099.0, 1467.0])),
        Arc::new(Float64Array::from(vec![Some(129.0), None, Some(190.0)])),
        Arc::new(Float64Array::from(vec![322.0, 2401.0, 496.0])),
        Arc::new(Float64Array::from(vec![126.0, 1138.0, 177.0])),
        Arc::new(Float64Array::from(vec![8.3252, 8.3014, 7.2574])),
        Arc::new(StringArray::from(vec!["NEAR BAY", "INLAND", "NEAR BAY"])),
    ];

    let batch = RecordBatch::try_new(schema.clone(), columns).unwrap();
    let file = File::create(path).unwrap();
    let mut writer = ArrowWriter::try_new(file, schema, None).unwrap();
    writer.write(&batch).unwrap();
    writer.close().unwrap();
}
