//! IO module for the raw dataset formats and the map renderer's GeoJSON.
//!
//! # Format Modules
//!
//! - `csv` - semicolon-delimited registry export, one street per row
//! - `geojson` - feature-collection export (read) and the renderer's view (write)
//! - `wkt` - LINESTRING / MULTILINESTRING text geometry used by the CSV export
//!
//! Both readers produce the same `RawRecord`; adaptation into canonical
//! streets happens once, in `StreetCollection::from_records`.

pub mod csv;
pub mod geojson;
pub mod wkt;
mod raw;

pub use raw::{RawGeometry, RawRecord};

use std::{fs, path::Path};

use anyhow::{Context, Result};

use crate::street::StreetCollection;

/// The two raw schema variants of the street registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Csv,
    GeoJson,
}

impl SourceFormat {
    /// Probe the content: a JSON object is GeoJSON, anything else is CSV.
    pub fn detect(text: &str) -> SourceFormat {
        match text.trim_start_matches('\u{feff}').trim_start().starts_with('{') {
            true => SourceFormat::GeoJson,
            false => SourceFormat::Csv,
        }
    }

    pub fn from_extension(path: &Path) -> Option<SourceFormat> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "csv" | "txt" => Some(SourceFormat::Csv),
            "json" | "geojson" => Some(SourceFormat::GeoJson),
            _ => None,
        }
    }
}

/// Read raw records of the given format.
pub fn read_records(text: &str, format: SourceFormat) -> Result<Vec<RawRecord>> {
    match format {
        SourceFormat::Csv => csv::read_records(text),
        SourceFormat::GeoJson => geojson::read_records(text),
    }
}

/// Load a dataset from text, detecting its format.
pub fn load_str(text: &str) -> Result<StreetCollection> {
    let records = read_records(text, SourceFormat::detect(text))?;
    Ok(StreetCollection::from_records(records))
}

/// Load a dataset file. The extension picks the format, falling back to
/// probing the content.
pub fn load_path(path: &Path) -> Result<StreetCollection> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("[io::load_path] Failed to read dataset {}", path.display()))?;
    let format = SourceFormat::from_extension(path).unwrap_or_else(|| SourceFormat::detect(&text));
    tracing::info!(path = %path.display(), ?format, "loading street dataset");

    let records = read_records(&text, format)
        .with_context(|| format!("[io::load_path] Failed to parse dataset {}", path.display()))?;
    Ok(StreetCollection::from_records(records))
}
