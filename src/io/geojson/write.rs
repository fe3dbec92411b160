//! GeoJSON export of a filtered view for the map renderer.

use std::path::Path;

use anyhow::{Context, Result};
use serde_json::{json, Value};

use crate::common::write_atomic;
use crate::filter::ViewMode;
use crate::street::{StreetFeature, StreetId};
use crate::style::{draw_color, Color};

/// Export streets as a GeoJSON FeatureCollection.
/// Each feature carries its flat properties plus the line `color` for `mode`
/// and a `selected` flag. The selected street is drawn in the highlight color.
pub fn to_geojson<'a, I>(streets: I, mode: ViewMode, selected: Option<StreetId>) -> Result<Value>
where
    I: IntoIterator<Item = &'a StreetFeature>,
{
    let features = streets.into_iter()
        .map(|street| -> Result<Value> {
            let mut properties = serde_json::to_value(street.properties())
                .with_context(|| format!("[io::geojson::write] Failed to serialize street {}", street.id))?;
            let is_selected = selected == Some(street.id);
            let color = if is_selected { Color::HIGHLIGHT } else { draw_color(street, mode) };
            if let Value::Object(map) = &mut properties {
                map.insert("color".to_string(), json!(color.to_string()));
                map.insert("selected".to_string(), json!(is_selected));
            }
            Ok(json!({
                "type": "Feature",
                "id": street.id, // Feature ID for renderer highlight/selection
                "geometry": street.geometry.to_geojson(),
                "properties": properties,
            }))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(json!({
        "type": "FeatureCollection",
        "features": features,
    }))
}

/// Export streets to a GeoJSON file, replacing it atomically.
/// An existing file is only overwritten with `force`.
pub fn write_geojson<'a, I>(path: &Path, streets: I, mode: ViewMode, selected: Option<StreetId>, force: bool) -> Result<()>
where
    I: IntoIterator<Item = &'a StreetFeature>,
{
    let value = to_geojson(streets, mode, selected)?;
    let bytes = serde_json::to_vec(&value)
        .context("[io::geojson::write] Failed to encode GeoJSON")?;
    write_atomic(path, &bytes, force)
        .with_context(|| format!("[io::geojson::write] Failed to write {}", path.display()))
}
