//! Loading the county and housing tables from parquet files on disk

mod common;

use std::fs;

use calhouse_core::config::DataPaths;
use calhouse_core::CalhouseError;
use calhouse_store::geoparquet::read_geoparquet;
use calhouse_store::{load_counties, load_housing, Datasets};
use geo::Geometry;
use common::*;
use tempfile::TempDir;

fn county_rows() -> Vec<CountyRow> {
    vec![
        CountyRow {
            name: "Alameda",
            longitude: -121.9,
            latitude: 37.6,
            income_cat: 3,
            shape: Shape::Polygon(clockwise_square(-122.3, 37.4, 0.5)),
        },
        CountyRow {
            name: "Los Angeles",
            longitude: -118.2,
            latitude: 34.3,
            income_cat: 4,
            shape: Shape::MultiPolygon(vec![
                square(-118.9, 33.7, 1.0),
                square(-118.6, 33.3, 0.2),
            ]),
        },
        CountyRow {
            name: "Fresno",
            longitude: -119.7,
            latitude: 36.7,
            income_cat: 2,
            shape: Shape::Polygon(bowtie(-120.9, 36.0)),
        },
        CountyRow {
            name: "Nowhere",
            longitude: -120.0,
            latitude: 35.0,
            income_cat: 1,
            shape: Shape::Missing,
        },
    ]
}

#[test]
fn test_load_counties_normalizes_geometries() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("counties.parquet");
    write_counties(&path, &county_rows(), true);

    let counties = load_counties(&path).unwrap();

    assert_eq!(counties.names(), vec!["Alameda", "Fresno", "Los Angeles"]);
    assert_eq!(counties.rows_for("Los Angeles").count(), 2);
    assert!(counties.rows_for("Nowhere").next().is_none());

    for record in counties.records() {
        for ring in record.geometry.rings() {
            assert!(signed_area(ring) > 0.0, "{} is not counter-clockwise", record.name);
        }
    }

    let alameda = counties.first_for("Alameda").unwrap();
    assert_eq!(alameda.median_income_cat, "3");
    assert_eq!(alameda.population, 1300.0);
    assert_eq!(alameda.ocean_proximity, "INLAND");
    assert_eq!(alameda.geometry.rings().len(), 1);
    assert_eq!(alameda.geometry.coord_count(), 5);
}

#[test]
fn test_multipolygon_rows_share_attributes() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("counties.parquet");
    write_counties(&path, &county_rows(), true);

    let counties = load_counties(&path).unwrap();
    let rows: Vec<_> = counties.rows_for("Los Angeles").collect();

    assert_eq!(rows[0].longitude, rows[1].longitude);
    assert_eq!(rows[0].median_income_cat, "4");
    assert_eq!(rows[1].median_income_cat, "4");
    assert_ne!(rows[0].geometry, rows[1].geometry);
}

#[test]
fn test_bowtie_is_repaired_on_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("counties.parquet");
    write_counties(&path, &county_rows(), true);

    let counties = load_counties(&path).unwrap();
    let fresno: Vec<_> = counties.rows_for("Fresno").collect();

    assert!(!fresno.is_empty());
    for record in fresno {
        assert!(!record.geometry.is_empty());
        for ring in record.geometry.rings() {
            assert!(signed_area(ring) > 0.0);
        }
    }
}

#[test]
fn test_read_geoparquet_keeps_row_order_and_nulls() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("counties.parquet");
    write_counties(&path, &county_rows(), true);

    let geo = read_geoparquet(&path).unwrap();
    assert_eq!(geo.geometry_column, "geometry");
    assert_eq!(geo.table.num_rows(), 4);
    assert_eq!(geo.geometries.len(), 4);
    assert!(geo.geometries[3].is_none());

    let parts = |g: &Option<Geometry<f64>>| match g {
        Some(Geometry::Polygon(_)) => 1,
        Some(Geometry::MultiPolygon(mp)) => mp.0.len(),
        _ => 0,
    };
    assert_eq!(parts(&geo.geometries[0]), 1);
    assert_eq!(parts(&geo.geometries[1]), 2);
    assert_eq!(geo.table.required_string("name").unwrap()[1], "Los Angeles");
}

#[test]
fn test_non_finite_vertex_is_kept_on_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("counties.parquet");
    let rows = vec![
        CountyRow {
            name: "Kern",
            longitude: -118.7,
            latitude: 35.3,
            income_cat: 3,
            shape: Shape::Polygon(vec![
                (-119.0, 35.0),
                (-118.0, 35.0),
                (f64::NAN, 36.0),
                (-119.0, 36.0),
                (-119.0, 35.0),
            ]),
        },
        CountyRow {
            name: "Inyo",
            longitude: -117.4,
            latitude: 36.5,
            income_cat: 2,
            shape: Shape::Polygon(clockwise_square(-118.0, 36.0, 1.0)),
        },
    ];
    write_counties(&path, &rows, true);

    let counties = load_counties(&path).unwrap();
    assert_eq!(counties.names(), vec!["Inyo", "Kern"]);

    let kern = counties.first_for("Kern").unwrap();
    assert_eq!(kern.geometry.coord_count(), 5);
    assert!(kern.geometry.rings()[0][2][0].is_nan());

    let inyo = counties.first_for("Inyo").unwrap();
    assert!(signed_area(&inyo.geometry.rings()[0]) > 0.0);
}

#[test]
fn test_plain_parquet_is_not_geoparquet() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("plain.parquet");
    write_counties(&path, &county_rows(), false);

    let err = load_counties(&path).unwrap_err();
    assert!(matches!(err, CalhouseError::NotGeoParquet { .. }));
}

#[test]
fn test_missing_file() {
    let dir = TempDir::new().unwrap();
    let err = load_counties(&dir.path().join("absent.parquet")).unwrap_err();
    assert!(matches!(err, CalhouseError::DatasetNotFound { .. }));
}

#[test]
fn test_housing_table_is_not_a_county_table() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("housing.parquet");
    write_housing(&path);

    // no geo metadata and no county columns
    let err = load_counties(&path).unwrap_err();
    assert!(matches!(err, CalhouseError::NotGeoParquet { .. }));
}

#[test]
fn test_load_housing() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("housing.parquet");
    write_housing(&path);

    let housing = load_housing(&path).unwrap();
    assert_eq!(housing.len(), 3);

    let records = housing.records();
    assert_eq!(records[0].total_bedrooms, Some(129.0));
    assert_eq!(records[1].total_bedrooms, None);
    assert!(records.iter().all(|r| r.median_house_value.is_none()));
    assert!(records.iter().all(|r| r.median_income_cat.is_none()));

    let summary = housing.summary();
    assert_eq!(summary.by_ocean_proximity["NEAR BAY"], 2);
    assert_eq!(summary.by_ocean_proximity["INLAND"], 1);
    assert_eq!(summary.mean_median_house_value, None);
}

#[test]
fn test_housing_missing_column() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("counties.parquet");
    write_counties(&path, &county_rows(), true);

    let err = load_housing(&path).unwrap_err();
    assert!(
        matches!(err, CalhouseError::MissingColumn { ref column, .. } if column == "housing_median_age")
    );
}

#[test]
fn test_datasets_load() {
    let dir = TempDir::new().unwrap();
    let paths = DataPaths {
        housing_data: dir.path().join("housing.parquet"),
        geo_data: dir.path().join("counties.parquet"),
        model: dir.path().join("model.json"),
        page_text: dir.path().join("home.md"),
    };
    write_housing(&paths.housing_data);
    write_counties(&paths.geo_data, &county_rows(), true);
    fs::write(&paths.page_text, "Pick a county.\n\n---\n\nData from the 1990 census.\n").unwrap();

    let datasets = Datasets::load(&paths).unwrap();
    assert_eq!(datasets.housing.len(), 3);
    assert_eq!(datasets.counties.names().len(), 3);
    assert_eq!(datasets.page.sections.len(), 2);
    assert_eq!(datasets.page.intro(), "Pick a county.");
}

#[test]
fn test_datasets_missing_page_text() {
    let dir = TempDir::new().unwrap();
    let paths = DataPaths {
        housing_data: dir.path().join("housing.parquet"),
        geo_data: dir.path().join("counties.parquet"),
        model: dir.path().join("model.json"),
        page_text: dir.path().join("home.md"),
    };
    write_housing(&paths.housing_data);
    write_counties(&paths.geo_data, &county_rows(), true);

    let err = Datasets::load(&paths).unwrap_err();
    assert!(matches!(err, CalhouseError::DatasetNotFound { ref path } if path.ends_with("home.md")));
}
