//! Totals and legend counts.
//!
//! Category and era counts are cross-filtered: each honors the active gender
//! filter and the *other* dimension's filter, never its own, so the legend
//! can show what picking an option would yield.

use std::cmp::Reverse;

use serde::Serialize;

use crate::classify::{Category, Era};
use crate::filter::FilterConfig;
use crate::street::{Honoree, StreetFeature};
use crate::style::Color;

/// Overall figures over the unfiltered collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Totals {
    pub total: usize,
    pub named_after_person: usize,
    pub female: usize,
    pub male: usize,
}

impl Totals {
    pub fn compute<'a, I>(streets: I) -> Totals
    where
        I: IntoIterator<Item = &'a StreetFeature>,
    {
        streets.into_iter().fold(Totals::default(), |mut totals, street| {
            totals.total += 1;
            if let Some(honoree) = &street.honoree {
                totals.named_after_person += 1;
                match honoree.is_female {
                    true => totals.female += 1,
                    false => totals.male += 1,
                }
            }
            totals
        })
    }
}

/// One legend row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendEntry<T> {
    pub key: T,
    pub label: &'static str,
    pub count: usize,
    pub color: Option<Color>,
    pub disabled: bool,  // Zero count; the option cannot be picked
}

/// Honorees per category under the gender and era filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CategoryCounts([usize; Category::ALL.len()]);

impl CategoryCounts {
    pub fn compute<'a, I>(streets: I, config: &FilterConfig) -> CategoryCounts
    where
        I: IntoIterator<Item = &'a StreetFeature>,
    {
        let mut counts = CategoryCounts::default();
        for honoree in honorees(streets) {
            if config.gender_matches(honoree) && config.era_matches(honoree) {
                counts.0[honoree.category.index()] += 1;
            }
        }
        counts
    }

    pub fn get(&self, category: Category) -> usize { self.0[category.index()] }

    pub fn sum(&self) -> usize { self.0.iter().sum() }

    pub fn iter(&self) -> impl Iterator<Item = (Category, usize)> + '_ {
        Category::ALL.into_iter().map(|c| (c, self.get(c)))
    }

    /// Every category, specific ones before `Other`, non-empty before empty,
    /// then by descending count; ties keep declaration order.
    pub fn legend(&self) -> Vec<LegendEntry<Category>> {
        let mut entries: Vec<_> = self.iter()
            .map(|(key, count)| LegendEntry { key, label: key.label(), count, color: None, disabled: count == 0 })
            .collect();
        entries.sort_by_key(|e| (e.key == Category::Other, e.count == 0, Reverse(e.count)));
        entries
    }
}

/// Honorees per era under the gender and category filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EraCounts([usize; Era::ALL.len()]);

impl EraCounts {
    pub fn compute<'a, I>(streets: I, config: &FilterConfig) -> EraCounts
    where
        I: IntoIterator<Item = &'a StreetFeature>,
    {
        let mut counts = EraCounts::default();
        for honoree in honorees(streets) {
            if config.gender_matches(honoree) && config.category_matches(honoree) {
                counts.0[honoree.era.index()] += 1;
            }
        }
        counts
    }

    pub fn get(&self, era: Era) -> usize { self.0[era.index()] }

    pub fn sum(&self) -> usize { self.0.iter().sum() }

    pub fn iter(&self) -> impl Iterator<Item = (Era, usize)> + '_ {
        Era::ALL.into_iter().map(|e| (e, self.get(e)))
    }

    /// Eras with at least one honoree, in chronological order.
    pub fn legend(&self) -> Vec<LegendEntry<Era>> {
        self.iter()
            .filter(|&(_, count)| count > 0)
            .map(|(key, count)| LegendEntry { key, label: key.label(), count, color: Some(key.color()), disabled: false })
            .collect()
    }
}

/// Everything the legend and about dialog display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub totals: Totals,
    pub categories: CategoryCounts,
    pub eras: EraCounts,
}

impl Summary {
    /// Three separate passes, one per figure.
    pub fn compute(streets: &[StreetFeature], config: &FilterConfig) -> Summary {
        Summary {
            totals: Totals::compute(streets),
            categories: CategoryCounts::compute(streets, config),
            eras: EraCounts::compute(streets, config),
        }
    }
}

fn honorees<'a, I>(streets: I) -> impl Iterator<Item = &'a Honoree>
where
    I: IntoIterator<Item = &'a StreetFeature>,
{
    streets.into_iter().filter_map(|s| s.honoree.as_ref())
}
