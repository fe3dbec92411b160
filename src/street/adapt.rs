use anyhow::{Context, Result};

use crate::classify::{Category, Era};
use crate::io::RawRecord;
use crate::text::{death_note, extract_year, non_blank};
use super::{Honoree, StreetFeature, StreetId};

/// Gender-marker value that flags a female honoree. Anything else, including
/// an unrecognized or missing marker, is read as male.
pub const FEMALE_MARKER: &str = "ja";

impl StreetFeature {
    /// Adapt one raw record. `fallback_id` stands in for the id when the
    /// record carries no usable one.
    /// Fails only when the geometry cannot be parsed.
    pub fn adapt(raw: &RawRecord, fallback_id: StreetId) -> Result<StreetFeature> {
        let geometry = raw.geometry.parse()
            .with_context(|| format!("[street::adapt] Record {:?} has no usable geometry", raw.id))?;

        let id = match record_id(raw) {
            Some(id) => id,
            None => {
                tracing::warn!(raw_id = ?raw.id, fallback_id, "record has no integer id, using fallback");
                fallback_id
            }
        };

        let name = raw.name.clone().unwrap_or_default();
        let short_name = raw.short_name.clone()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| name.clone());

        Ok(StreetFeature {
            id,
            ident: non_blank(raw.ident.as_deref()).map(str::to_string),
            name,
            short_name,
            geometry,
            honoree: Honoree::from_raw(raw),
        })
    }
}

/// The record's own integer id, if it has one.
pub fn record_id(raw: &RawRecord) -> Option<StreetId> {
    non_blank(raw.id.as_deref())?.parse().ok()
}

impl Honoree {
    /// Present only when the record names a person (after trimming).
    pub fn from_raw(raw: &RawRecord) -> Option<Honoree> {
        let name = non_blank(raw.person.as_deref())?;
        let note = non_blank(raw.note.as_deref());
        let death_year = extract_year(raw.died.as_deref());

        Some(Honoree {
            name: name.to_string(),
            note: note.map(str::to_string),
            birth_year: extract_year(raw.born.as_deref()),
            death_year,
            death_note: death_note(raw.died.as_deref()),
            is_female: raw.female_marker.as_deref() == Some(FEMALE_MARKER),
            category: Category::classify(note),
            era: Era::from_death_year(death_year),
        })
    }
}
