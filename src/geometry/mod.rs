// SPDX-License-Identifier: PMPL-1.0-or-later

//! Base-map geometry loading.
//!
//! Reads a country shapefile (Natural Earth admin-0 layout) into
//! [`GeometryRecord`]s. Only the outline and the `ADMIN`/`SOVEREIGNT`
//! attributes are kept.

mod projection;

pub use projection::{project_shape, winkel_tripel};

use crate::error::{MapError, MapResult};
use crate::types::GeometryRecord;
use geo::{Coord, LineString, MultiPolygon, Polygon};
use shapefile::dbase::{FieldValue, Record};
use shapefile::{PolygonRing, Shape};
use std::path::Path;

pub const ADMIN_FIELD: &str = "ADMIN";
pub const SOVEREIGN_FIELD: &str = "SOVEREIGNT";

pub fn load_records(path: &Path) -> MapResult<Vec<GeometryRecord>> {
    if !path.exists() {
        return Err(MapError::RequiredInputMissing {
            what: "geometry shapefile",
            path: path.to_path_buf(),
        });
    }

    let geometry_error = |reason: String| MapError::Geometry {
        path: path.to_path_buf(),
        reason,
    };

    let mut reader =
        shapefile::Reader::from_path(path).map_err(|err| geometry_error(err.to_string()))?;

    let mut records = Vec::new();
    for (index, item) in reader.iter_shapes_and_records().enumerate() {
        let (shape, attributes) = item.map_err(|err| geometry_error(err.to_string()))?;
        let outline = shape_outline(shape).map_err(|kind| {
            geometry_error(format!("feature {} has unsupported shape type {}", index, kind))
        })?;
        records.push(GeometryRecord::new(
            text_field(&attributes, ADMIN_FIELD),
            text_field(&attributes, SOVEREIGN_FIELD),
            outline,
        ));
    }

    Ok(records)
}

/// Reproject lon/lat records to Winkel Tripel.
pub fn project_records(records: Vec<GeometryRecord>) -> Vec<GeometryRecord> {
    records
        .into_iter()
        .map(|record| GeometryRecord {
            shape: project_shape(&record.shape),
            ..record
        })
        .collect()
}

fn shape_outline(shape: Shape) -> Result<MultiPolygon<f64>, String> {
    match shape {
        Shape::Polygon(polygon) => Ok(rings_to_multipolygon(polygon.rings(), |p| Coord {
            x: p.x,
            y: p.y,
        })),
        Shape::PolygonM(polygon) => Ok(rings_to_multipolygon(polygon.rings(), |p| Coord {
            x: p.x,
            y: p.y,
        })),
        Shape::PolygonZ(polygon) => Ok(rings_to_multipolygon(polygon.rings(), |p| Coord {
            x: p.x,
            y: p.y,
        })),
        Shape::NullShape => Ok(MultiPolygon::new(Vec::new())),
        other => Err(format!("{:?}", other.shapetype())),
    }
}

/// Outer rings start a new polygon; inner rings are holes of the most
/// recent outer ring. Holes appearing before any outer ring are dropped.
fn rings_to_multipolygon<P>(
    rings: &[PolygonRing<P>],
    xy: impl Fn(&P) -> Coord<f64>,
) -> MultiPolygon<f64> {
    let mut parts: Vec<(LineString<f64>, Vec<LineString<f64>>)> = Vec::new();
    for ring in rings {
        match ring {
            PolygonRing::Outer(points) => {
                parts.push((points.iter().map(&xy).collect(), Vec::new()));
            }
            PolygonRing::Inner(points) => {
                if let Some((_, holes)) = parts.last_mut() {
                    holes.push(points.iter().map(&xy).collect());
                }
            }
        }
    }
    MultiPolygon::new(
        parts
            .into_iter()
            .map(|(exterior, holes)| Polygon::new(exterior, holes))
            .collect(),
    )
}

fn text_field(record: &Record, name: &str) -> String {
    match record.get(name) {
        Some(FieldValue::Character(Some(value))) => value.clone(),
        Some(FieldValue::Memo(value)) => value.clone(),
        _ => String::new(),
    }
}
