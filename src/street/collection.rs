use std::collections::HashMap;

use anyhow::{ensure, Result};
use geo::{coord, Rect};

use crate::filter::{self, FilterConfig};
use crate::io::RawRecord;
use crate::stats::Summary;
use super::adapt::record_id;
use super::{StreetFeature, StreetId};

/// All streets of one dataset load, in source order. Built once, never mutated.
#[derive(Debug, Clone, Default)]
pub struct StreetCollection {
    streets: Vec<StreetFeature>,
    index: HashMap<StreetId, usize>, // Map between street ids and positions in `streets`.
}

impl StreetCollection {
    /// Adapt raw records in order. Records without a usable geometry and
    /// records repeating an earlier id are dropped. Records without an id are
    /// numbered after the largest id in the load.
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = RawRecord>,
    {
        let records: Vec<RawRecord> = records.into_iter().collect();
        let mut next_fallback = records.iter()
            .filter_map(record_id)
            .max()
            .map_or(0, |max| max.saturating_add(1));

        let mut collection = StreetCollection::default();
        let mut no_geometry = 0usize;
        let mut duplicates = 0usize;

        for (row, raw) in records.iter().enumerate() {
            let fallback_id = next_fallback;
            if record_id(raw).is_none() {
                next_fallback = next_fallback.saturating_add(1);
            }
            let street = match StreetFeature::adapt(raw, fallback_id) {
                Ok(street) => street,
                Err(e) => {
                    tracing::debug!(row, "dropping record: {e:#}");
                    no_geometry += 1;
                    continue;
                }
            };
            if collection.index.contains_key(&street.id) {
                tracing::warn!(row, id = street.id, "dropping record with duplicate id");
                duplicates += 1;
                continue;
            }
            collection.push(street);
        }

        tracing::info!(
            streets = collection.len(),
            named = collection.iter().filter(|s| s.honoree.is_some()).count(),
            no_geometry,
            duplicates,
            "adapted street records"
        );
        collection
    }

    /// Wrap already canonical features; ids must be unique.
    pub fn from_features(streets: Vec<StreetFeature>) -> Result<Self> {
        let mut collection = StreetCollection::default();
        for street in streets {
            ensure!(!collection.index.contains_key(&street.id),
                "[street::collection] Duplicate street id {}", street.id);
            collection.push(street);
        }
        Ok(collection)
    }

    fn push(&mut self, street: StreetFeature) {
        self.index.insert(street.id, self.streets.len());
        self.streets.push(street);
    }

    pub fn len(&self) -> usize { self.streets.len() }

    pub fn is_empty(&self) -> bool { self.streets.is_empty() }

    pub fn iter(&self) -> std::slice::Iter<'_, StreetFeature> { self.streets.iter() }

    pub fn as_slice(&self) -> &[StreetFeature] { &self.streets }

    /// Street with the given selection id.
    pub fn get(&self, id: StreetId) -> Option<&StreetFeature> {
        self.index.get(&id).map(|&i| &self.streets[i])
    }

    /// Bounding rectangle of all geometries, `None` for an empty collection.
    pub fn bounds(&self) -> Option<Rect<f64>> {
        self.streets.iter()
            .filter_map(|s| s.geometry.bounding_rect())
            .reduce(|a, b| Rect::new(
                coord! { x: a.min().x.min(b.min().x), y: a.min().y.min(b.min().y) },
                coord! { x: a.max().x.max(b.max().x), y: a.max().y.max(b.max().y) },
            ))
    }

    /// Streets visible under `config`, in source order.
    pub fn filter(&self, config: &FilterConfig) -> Vec<&StreetFeature> {
        filter::filter(&self.streets, config)
    }

    /// Totals and cross-filtered counts under `config`.
    pub fn summary(&self, config: &FilterConfig) -> Summary {
        Summary::compute(&self.streets, config)
    }
}

impl<'a> IntoIterator for &'a StreetCollection {
    type Item = &'a StreetFeature;
    type IntoIter = std::slice::Iter<'a, StreetFeature>;

    fn into_iter(self) -> Self::IntoIter { self.streets.iter() }
}
