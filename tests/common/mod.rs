// SPDX-License-Identifier: PMPL-1.0-or-later

//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use geo::{polygon, MultiPolygon};
use release_worldmap::config::MapConfig;
use release_worldmap::types::GeometryRecord;
use shapefile::dbase::{FieldName, FieldValue, Record, TableWriterBuilder};
use shapefile::{Point, Polygon, PolygonRing};
use std::fs;
use std::path::Path;

/// A 10x10 degree square with its south-west corner at (lon, lat).
pub fn square(lon: f64, lat: f64) -> MultiPolygon<f64> {
    MultiPolygon::new(vec![polygon![
        (x: lon, y: lat),
        (x: lon, y: lat + 10.0),
        (x: lon + 10.0, y: lat + 10.0),
        (x: lon + 10.0, y: lat),
        (x: lon, y: lat),
    ]])
}

pub fn record(admin: &str, sovereign: &str, lon: f64, lat: f64) -> GeometryRecord {
    GeometryRecord::new(admin, sovereign, square(lon, lat))
}

/// Germany, Venezuela, Brazil, France (plus French Guiana) and Spain.
pub fn sample_records() -> Vec<GeometryRecord> {
    vec![
        record("Germany", "Germany", 5.0, 47.0),
        record("Venezuela", "Venezuela", -73.0, 0.0),
        record("Brazil", "Brazil", -60.0, -20.0),
        record("France", "France", -5.0, 42.0),
        record("French Guiana", "France", -54.0, 2.0),
        record("Spain", "Spain", -10.0, 36.0),
    ]
}

/// Write a polygon shapefile with `ADMIN`/`SOVEREIGNT` attributes.
pub fn write_shapefile(path: &Path, records: &[(&str, &str, f64, f64)]) {
    let table = TableWriterBuilder::new()
        .add_character_field(FieldName::try_from("ADMIN").unwrap(), 60)
        .add_character_field(FieldName::try_from("SOVEREIGNT").unwrap(), 60);
    let mut writer = shapefile::Writer::from_path(path, table).unwrap();
    for (admin, sovereign, lon, lat) in records {
        let ring = vec![
            Point::new(*lon, *lat),
            Point::new(*lon, lat + 10.0),
            Point::new(lon + 10.0, lat + 10.0),
            Point::new(lon + 10.0, *lat),
            Point::new(*lon, *lat),
        ];
        let mut attributes = Record::default();
        attributes.insert(
            "ADMIN".to_string(),
            FieldValue::Character(Some(admin.to_string())),
        );
        attributes.insert(
            "SOVEREIGNT".to_string(),
            FieldValue::Character(Some(sovereign.to_string())),
        );
        writer
            .write_shape_and_record(&Polygon::new(PolygonRing::Outer(ring)), &attributes)
            .unwrap();
    }
}

/// Config whose every path points inside `dir`, at a low DPI so tests
/// rasterize quickly.
pub fn config_in(dir: &Path) -> MapConfig {
    let mut config = MapConfig::default();
    config.paths.highlighted = dir.join("highlighted_countries.txt");
    config.paths.partial = dir.join("partially_supported_countries.txt");
    config.paths.shapefile = dir.join("countries.shp");
    config.paths.logo = dir.join("logo.png");
    config.paths.output_dir = dir.join("out");
    config.figure.dpi = 18;
    config
}

pub fn write_list(path: &Path, names: &[&str]) {
    fs::write(path, names.join("\n")).unwrap();
}
