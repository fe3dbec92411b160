//! GeoJSON reading operations.

use anyhow::{anyhow, bail, ensure, Context, Result};
use geo::{Coord, LineString, MultiLineString};
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::io::raw::{self, RawGeometry, RawRecord};
use crate::street::StreetGeometry;

#[derive(Debug, Deserialize)]
struct FeatureCollection {
    features: Vec<Feature>,
}

#[derive(Debug, Deserialize)]
struct Feature {
    #[serde(default)]
    geometry: Option<Value>,
    #[serde(default)]
    properties: Option<Map<String, Value>>,
}

/// Parse a FeatureCollection into raw records. Properties use the same field
/// names as the CSV header; a null `geometry` falls back to a WKT `geom` property.
pub fn read_records(text: &str) -> Result<Vec<RawRecord>> {
    let collection: FeatureCollection = serde_json::from_str(text.trim_start_matches('\u{feff}'))
        .context("[io::geojson::read] Failed to parse GeoJSON FeatureCollection")?;

    let records = collection.features.into_iter()
        .map(|feature| {
            let props = feature.properties.unwrap_or_default();
            let field = |key: &str| props.get(key).and_then(value_text);
            let geometry = match feature.geometry {
                Some(geometry @ Value::Object(_)) => RawGeometry::GeoJson(geometry),
                _ => field(raw::GEOMETRY).map(RawGeometry::Wkt).unwrap_or_default(),
            };
            RawRecord {
                id: field(raw::ID),
                ident: field(raw::IDENT),
                name: field(raw::NAME),
                short_name: field(raw::SHORT_NAME),
                person: field(raw::PERSON),
                note: field(raw::NOTE),
                born: field(raw::BORN),
                died: field(raw::DIED),
                female_marker: field(raw::FEMALE),
                geometry,
            }
        })
        .collect();

    Ok(records)
}

/// Property value as text; numbers keep their decimal form, null and empty strings are absent.
fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Convert a GeoJSON `LineString` or `MultiLineString` geometry object.
pub fn parse_geometry(value: &Value) -> Result<StreetGeometry> {
    let ty = value.get("type").and_then(Value::as_str)
        .ok_or_else(|| anyhow!("[io::geojson::parse_geometry] Geometry has no type"))?;
    let coordinates = value.get("coordinates")
        .ok_or_else(|| anyhow!("[io::geojson::parse_geometry] {ty} has no coordinates"))?;

    match ty {
        "LineString" => {
            let positions: Vec<Vec<f64>> = serde_json::from_value(coordinates.clone())
                .context("[io::geojson::parse_geometry] Invalid LineString coordinates")?;
            Ok(StreetGeometry::Line(line_from_positions(positions)?))
        }
        "MultiLineString" => {
            let lines: Vec<Vec<Vec<f64>>> = serde_json::from_value(coordinates.clone())
                .context("[io::geojson::parse_geometry] Invalid MultiLineString coordinates")?;
            ensure!(!lines.is_empty(), "[io::geojson::parse_geometry] Empty MultiLineString");
            let lines = lines.into_iter()
                .map(line_from_positions)
                .collect::<Result<Vec<_>>>()?;
            Ok(StreetGeometry::MultiLine(MultiLineString::new(lines)))
        }
        other => bail!("[io::geojson::parse_geometry] Unsupported geometry type {other:?}"),
    }
}

fn line_from_positions(positions: Vec<Vec<f64>>) -> Result<LineString<f64>> {
    ensure!(!positions.is_empty(), "[io::geojson::parse_geometry] Line without coordinates");
    let coords = positions.into_iter()
        .map(|p| match p.as_slice() {
            [x, y, ..] => Ok(Coord { x: *x, y: *y }),
            _ => bail!("[io::geojson::parse_geometry] Position needs at least two ordinates"),
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(LineString::new(coords))
}
