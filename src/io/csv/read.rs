//! CSV reading operations.

use std::io::Cursor;

use anyhow::{ensure, Context, Result};
use polars::{frame::DataFrame, io::SerReader, prelude::CsvReadOptions};

use crate::io::raw::{self, RawGeometry, RawRecord};

/// Parse a semicolon-delimited export with a header row into raw records.
/// Every column is read as text; absent columns leave the field empty.
pub fn read_records(text: &str) -> Result<Vec<RawRecord>> {
    let df = read_csv_string(text)?;
    ensure!(df.column(raw::GEOMETRY).is_ok(),
        "[io::csv::read] CSV has no '{}' column", raw::GEOMETRY);

    let mut ids = string_column(&df, raw::ID)?.into_iter();
    let mut idents = string_column(&df, raw::IDENT)?.into_iter();
    let mut names = string_column(&df, raw::NAME)?.into_iter();
    let mut short_names = string_column(&df, raw::SHORT_NAME)?.into_iter();
    let mut persons = string_column(&df, raw::PERSON)?.into_iter();
    let mut notes = string_column(&df, raw::NOTE)?.into_iter();
    let mut born = string_column(&df, raw::BORN)?.into_iter();
    let mut died = string_column(&df, raw::DIED)?.into_iter();
    let mut female = string_column(&df, raw::FEMALE)?.into_iter();
    let mut geoms = string_column(&df, raw::GEOMETRY)?.into_iter();

    let records = (0..df.height())
        .map(|_| RawRecord {
            id: ids.next().flatten(),
            ident: idents.next().flatten(),
            name: names.next().flatten(),
            short_name: short_names.next().flatten(),
            person: persons.next().flatten(),
            note: notes.next().flatten(),
            born: born.next().flatten(),
            died: died.next().flatten(),
            female_marker: female.next().flatten(),
            geometry: geoms.next().flatten()
                .map(RawGeometry::Wkt)
                .unwrap_or_default(),
        })
        .collect();

    Ok(records)
}

/// Reads a semicolon-delimited CSV from a string, all columns as strings.
fn read_csv_string(text: &str) -> Result<DataFrame> {
    let text = text.trim_start_matches('\u{feff}');
    CsvReadOptions::default()
        .with_has_header(true)
        .map_parse_options(|po| po.with_separator(b';'))
        .with_infer_schema_length(Some(0))
        .into_reader_with_file_handle(Cursor::new(text.as_bytes()))
        .finish()
        .context("[io::csv::read] Failed to read semicolon-delimited CSV")
}

/// Values of a string column, or all `None` if the column is absent.
fn string_column(df: &DataFrame, name: &str) -> Result<Vec<Option<String>>> {
    let Ok(col) = df.column(name) else { return Ok(vec![None; df.height()]) };
    let values = col.str()
        .with_context(|| format!("[io::csv::read] Column '{name}' is not text"))?;
    Ok(values.into_iter().map(|v| v.map(str::to_string)).collect())
}
