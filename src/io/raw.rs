use anyhow::{bail, Result};
use serde_json::Value;

use crate::street::StreetGeometry;

/// Field names shared by the CSV header and the GeoJSON feature properties.
pub(crate) const ID: &str = "id";
pub(crate) const IDENT: &str = "str_ident";
pub(crate) const NAME: &str = "strasse";
pub(crate) const SHORT_NAME: &str = "strasse_kurz";
pub(crate) const PERSON: &str = "person";
pub(crate) const NOTE: &str = "zusatz";
pub(crate) const BORN: &str = "geb";
pub(crate) const DIED: &str = "gest";
pub(crate) const FEMALE: &str = "weiblich";
pub(crate) const GEOMETRY: &str = "geom";

/// One street as it appears in either source schema, all fields still text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRecord {
    pub id: Option<String>,
    pub ident: Option<String>,
    pub name: Option<String>,
    pub short_name: Option<String>,
    pub person: Option<String>,
    pub note: Option<String>,
    pub born: Option<String>,
    pub died: Option<String>,
    pub female_marker: Option<String>,
    pub geometry: RawGeometry,
}

/// Geometry before parsing.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum RawGeometry {
    Wkt(String),
    GeoJson(Value),
    #[default]
    Missing,
}

impl RawGeometry {
    pub fn parse(&self) -> Result<StreetGeometry> {
        match self {
            RawGeometry::Wkt(text) => super::wkt::parse(text),
            RawGeometry::GeoJson(value) => super::geojson::parse_geometry(value),
            RawGeometry::Missing => bail!("[io::raw] Record has no geometry"),
        }
    }
}
