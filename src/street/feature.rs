use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

use crate::classify::{Category, Era};
use super::StreetGeometry;

/// Selection key of a street, stable across reloads of the same snapshot.
pub type StreetId = u64;

/// The person a street is named after, with everything derived from them.
#[derive(Debug, Clone, PartialEq)]
pub struct Honoree {
    pub name: String,
    pub note: Option<String>,  // Biographical annotation
    pub birth_year: Option<u16>,
    pub death_year: Option<u16>,
    pub death_note: Option<String>,  // e.g. "Suizid", "verschollen"
    pub is_female: bool,
    pub category: Category,
    pub era: Era,
}

/// A street normalized to the canonical schema.
#[derive(Debug, Clone, PartialEq)]
pub struct StreetFeature {
    pub id: StreetId,
    pub ident: Option<String>,  // Registry identifier (str_ident)
    pub name: String,
    pub short_name: String,
    pub geometry: StreetGeometry,
    pub honoree: Option<Honoree>,
}

/// Flat per-feature properties as handed to the map renderer and detail panel.
/// All honoree fields are null together when the street is not named after a person.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreetProperties {
    pub id: StreetId,
    #[serde(default)]
    pub str_ident: Option<String>,
    pub name: String,
    pub name_short: String,
    #[serde(default)]
    pub person: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub birth_year: Option<u16>,
    #[serde(default)]
    pub death_year: Option<u16>,
    #[serde(default)]
    pub death_note: Option<String>,
    #[serde(default)]
    pub is_female: Option<bool>,
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(default)]
    pub era: Option<Era>,
}

impl StreetFeature {
    pub fn is_female(&self) -> Option<bool> {
        self.honoree.as_ref().map(|h| h.is_female)
    }

    pub fn category(&self) -> Option<Category> {
        self.honoree.as_ref().map(|h| h.category)
    }

    pub fn era(&self) -> Option<Era> {
        self.honoree.as_ref().map(|h| h.era)
    }

    pub fn properties(&self) -> StreetProperties {
        StreetProperties::from(self)
    }

    /// Rebuild a feature from flat properties, rejecting records whose
    /// honoree-derived fields disagree with the presence of a person.
    pub fn from_properties(props: StreetProperties, geometry: StreetGeometry) -> Result<StreetFeature> {
        let person = props.person.filter(|p| !p.trim().is_empty());

        let honoree = match person {
            None => {
                if props.is_female.is_some() || props.category.is_some() || props.era.is_some() {
                    bail!("[street::from_properties] Street {} has gender, category or era but no person", props.id);
                }
                None
            }
            Some(name) => {
                let Some(is_female) = props.is_female else {
                    bail!("[street::from_properties] Street {} names a person but has no gender", props.id);
                };
                Some(Honoree {
                    name,
                    note: props.description,
                    birth_year: props.birth_year,
                    death_year: props.death_year,
                    death_note: props.death_note,
                    is_female,
                    category: props.category.unwrap_or(Category::classify(None)),
                    era: props.era.unwrap_or(Era::from_death_year(props.death_year)),
                })
            }
        };

        Ok(StreetFeature {
            id: props.id,
            ident: props.str_ident,
            name: props.name,
            short_name: props.name_short,
            geometry,
            honoree,
        })
    }
}

impl From<&StreetFeature> for StreetProperties {
    fn from(street: &StreetFeature) -> Self {
        let honoree = street.honoree.as_ref();
        StreetProperties {
            id: street.id,
            str_ident: street.ident.clone(),
            name: street.name.clone(),
            name_short: street.short_name.clone(),
            person: honoree.map(|h| h.name.clone()),
            description: honoree.and_then(|h| h.note.clone()),
            birth_year: honoree.and_then(|h| h.birth_year),
            death_year: honoree.and_then(|h| h.death_year),
            death_note: honoree.and_then(|h| h.death_note.clone()),
            is_female: honoree.map(|h| h.is_female),
            category: honoree.map(|h| h.category),
            era: honoree.map(|h| h.era),
        }
    }
}
