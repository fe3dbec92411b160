//! Which streets the map shows for a given legend configuration.

use std::{fmt, fs, path::Path, str::FromStr};

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};

use crate::classify::{Category, Era};
use crate::stats::Summary;
use crate::street::{Honoree, StreetFeature};

/// Which property colors the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Gender,
    Era,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenderFilter {
    #[default]
    All,
    Female,
    Male,
}

/// Legend state. `None` for category or era means "all".
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterConfig {
    pub show_all_streets: bool,
    pub view_mode: ViewMode,
    pub gender_filter: GenderFilter,
    #[serde(with = "all_or")]
    pub category_filter: Option<Category>,
    #[serde(with = "all_or")]
    pub era_filter: Option<Era>,
}

impl FilterConfig {
    /// Whether `street` is shown. Streets without honoree only appear with
    /// `show_all_streets`; named streets must pass every active sub-filter.
    pub fn matches(&self, street: &StreetFeature) -> bool {
        match &street.honoree {
            None => self.show_all_streets,
            Some(h) => self.gender_matches(h) && self.category_matches(h) && self.era_matches(h),
        }
    }

    pub fn gender_matches(&self, honoree: &Honoree) -> bool {
        match self.gender_filter {
            GenderFilter::All => true,
            GenderFilter::Female => honoree.is_female,
            GenderFilter::Male => !honoree.is_female,
        }
    }

    pub fn category_matches(&self, honoree: &Honoree) -> bool {
        self.category_filter.is_none_or(|c| c == honoree.category)
    }

    pub fn era_matches(&self, honoree: &Honoree) -> bool {
        self.era_filter.is_none_or(|e| e == honoree.era)
    }

    /// Switch the view. The filter that belongs to the view being left is
    /// reset, so a hidden control never narrows the map.
    pub fn with_view_mode(self, view_mode: ViewMode) -> FilterConfig {
        match view_mode {
            ViewMode::Gender => FilterConfig { view_mode, era_filter: None, ..self },
            ViewMode::Era => FilterConfig { view_mode, gender_filter: GenderFilter::All, ..self },
        }
    }

    /// Reset a category or era selection whose count under the other active
    /// filters dropped to zero. Returns whether anything changed.
    pub fn reconcile(&mut self, summary: &Summary) -> bool {
        let mut changed = false;
        if self.category_filter.is_some_and(|c| summary.categories.get(c) == 0) {
            self.category_filter = None;
            changed = true;
        }
        if self.era_filter.is_some_and(|e| summary.eras.get(e) == 0) {
            self.era_filter = None;
            changed = true;
        }
        changed
    }

    /// Load a saved configuration; missing keys keep their defaults.
    pub fn from_json_file(path: &Path) -> Result<FilterConfig> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("[filter::from_json_file] Failed to read {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("[filter::from_json_file] Invalid filter config {}", path.display()))
    }
}

/// Streets passing `config`, in input order. Input is never modified, and
/// filtering the output again with the same config returns it unchanged.
pub fn filter<'a, I>(streets: I, config: &FilterConfig) -> Vec<&'a StreetFeature>
where
    I: IntoIterator<Item = &'a StreetFeature>,
{
    streets.into_iter().filter(|s| config.matches(s)).collect()
}

/// Parse an `"all"`-or-value selection, as used on the command line.
pub fn parse_selection<T>(text: &str) -> Result<Option<T>>
where
    T: FromStr<Err = anyhow::Error>,
{
    match text {
        "all" => Ok(None),
        other => other.parse().map(Some),
    }
}

impl FromStr for GenderFilter {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "all" => Ok(GenderFilter::All),
            "female" => Ok(GenderFilter::Female),
            "male" => Ok(GenderFilter::Male),
            other => Err(anyhow!("[filter] Unknown gender filter: {other}")),
        }
    }
}

impl FromStr for ViewMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "gender" => Ok(ViewMode::Gender),
            "era" => Ok(ViewMode::Era),
            other => Err(anyhow!("[filter] Unknown view mode: {other}")),
        }
    }
}

impl fmt::Display for GenderFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            GenderFilter::All => "all",
            GenderFilter::Female => "female",
            GenderFilter::Male => "male",
        })
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self { ViewMode::Gender => "gender", ViewMode::Era => "era" })
    }
}

/// Serde adapter writing `None` as the string `"all"`.
mod all_or {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<T, S>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: Serialize,
        S: Serializer,
    {
        match value {
            Some(v) => v.serialize(serializer),
            None => serializer.serialize_str("all"),
        }
    }

    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        T: Deserialize<'de>,
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Selection<T> {
            All(AllTag),
            One(T),
        }

        #[derive(Deserialize)]
        enum AllTag {
            #[serde(rename = "all")]
            All,
        }

        Ok(match Selection::<T>::deserialize(deserializer)? {
            Selection::All(AllTag::All) => None,
            Selection::One(v) => Some(v),
        })
    }
}

#[cfg(test)]
mod tests {
    use geo::LineString;

    use super::*;
    use crate::street::StreetGeometry;

    fn street(id: u64, honoree: Option<(bool, Category, Era)>) -> StreetFeature {
        StreetFeature {
            id,
            ident: None,
            name: format!("Straße {id}"),
            short_name: format!("Str. {id}"),
            geometry: StreetGeometry::Line(LineString::from(vec![(13.7, 51.0), (13.8, 51.1)])),
            honoree: honoree.map(|(is_female, category, era)| Honoree {
                name: format!("Person {id}"),
                note: None,
                birth_year: None,
                death_year: None,
                death_note: None,
                is_female,
                category,
                era,
            }),
        }
    }

    fn streets() -> Vec<StreetFeature> {
        vec![
            street(1, None),
            street(2, Some((true, Category::Artist, Era::Weimar))),
            street(3, Some((false, Category::Artist, Era::Gdr))),
            street(4, None),
            street(5, Some((false, Category::Politician, Era::Weimar))),
            street(6, Some((true, Category::Other, Era::Unknown))),
        ]
    }

    fn ids(streets: &[&StreetFeature]) -> Vec<u64> { streets.iter().map(|s| s.id).collect() }

    #[test]
    fn default_shows_exactly_named_streets_in_order() {
        let streets = streets();
        let shown = filter(&streets, &FilterConfig::default());
        assert_eq!(ids(&shown), vec![2, 3, 5, 6]);
    }

    #[test]
    fn show_all_includes_unnamed_streets() {
        let streets = streets();
        let config = FilterConfig { show_all_streets: true, ..FilterConfig::default() };
        assert_eq!(ids(&filter(&streets, &config)), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn sub_filters_do_not_hide_unnamed_streets() {
        let streets = streets();
        let config = FilterConfig {
            show_all_streets: true,
            gender_filter: GenderFilter::Female,
            ..FilterConfig::default()
        };
        assert_eq!(ids(&filter(&streets, &config)), vec![1, 2, 4, 6]);
    }

    #[test]
    fn gender_filters() {
        let streets = streets();
        let female = FilterConfig { gender_filter: GenderFilter::Female, ..FilterConfig::default() };
        let male = FilterConfig { gender_filter: GenderFilter::Male, ..FilterConfig::default() };
        assert_eq!(ids(&filter(&streets, &female)), vec![2, 6]);
        assert_eq!(ids(&filter(&streets, &male)), vec![3, 5]);
    }

    #[test]
    fn sub_filters_combine_with_and() {
        let streets = streets();
        let config = FilterConfig {
            gender_filter: GenderFilter::Male,
            category_filter: Some(Category::Artist),
            ..FilterConfig::default()
        };
        assert_eq!(ids(&filter(&streets, &config)), vec![3]);

        let config = FilterConfig {
            category_filter: Some(Category::Artist),
            era_filter: Some(Era::Weimar),
            ..FilterConfig::default()
        };
        assert_eq!(ids(&filter(&streets, &config)), vec![2]);
    }

    #[test]
    fn filtering_is_idempotent() {
        let streets = streets();
        let config = FilterConfig { era_filter: Some(Era::Weimar), show_all_streets: true, ..FilterConfig::default() };
        let once = filter(&streets, &config);
        let twice = filter(once.iter().copied(), &config);
        assert_eq!(ids(&once), ids(&twice));
    }

    #[test]
    fn view_switch_resets_hidden_filter() {
        let config = FilterConfig {
            gender_filter: GenderFilter::Female,
            era_filter: Some(Era::Weimar),
            category_filter: Some(Category::Artist),
            ..FilterConfig::default()
        };
        let era_view = config.clone().with_view_mode(ViewMode::Era);
        assert_eq!(era_view.view_mode, ViewMode::Era);
        assert_eq!(era_view.gender_filter, GenderFilter::All);
        assert_eq!(era_view.era_filter, Some(Era::Weimar));
        assert_eq!(era_view.category_filter, Some(Category::Artist));

        let gender_view = config.with_view_mode(ViewMode::Gender);
        assert_eq!(gender_view.gender_filter, GenderFilter::Female);
        assert_eq!(gender_view.era_filter, None);
    }

    #[test]
    fn reconcile_resets_empty_selections() {
        let streets = streets();
        let mut config = FilterConfig {
            gender_filter: GenderFilter::Female,
            category_filter: Some(Category::Politician),
            ..FilterConfig::default()
        };
        let summary = Summary::compute(&streets, &config);
        assert!(config.reconcile(&summary));
        assert_eq!(config.category_filter, None);

        let summary = Summary::compute(&streets, &config);
        assert!(!config.reconcile(&summary));
    }

    #[test]
    fn reconcile_keeps_selections_with_matches() {
        let streets = streets();
        let mut config = FilterConfig {
            gender_filter: GenderFilter::Male,
            category_filter: Some(Category::Politician),
            era_filter: Some(Era::Weimar),
            ..FilterConfig::default()
        };
        let summary = Summary::compute(&streets, &config);
        assert!(!config.reconcile(&summary));
        assert_eq!(config.category_filter, Some(Category::Politician));
        assert_eq!(config.era_filter, Some(Era::Weimar));
    }

    #[test]
    fn reconcile_resets_both_when_their_intersection_is_empty() {
        let streets = streets();
        let mut config = FilterConfig {
            category_filter: Some(Category::Politician),
            era_filter: Some(Era::Gdr),
            ..FilterConfig::default()
        };
        let summary = Summary::compute(&streets, &config);
        assert!(config.reconcile(&summary));
        assert_eq!(config.category_filter, None);
        assert_eq!(config.era_filter, None);
    }

    #[test]
    fn config_json_uses_all_for_unset() {
        let config = FilterConfig { category_filter: Some(Category::AntifascistResistance), ..FilterConfig::default() };
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["categoryFilter"], "antifascist-resistance");
        assert_eq!(json["eraFilter"], "all");
        assert_eq!(json["genderFilter"], "all");
        assert_eq!(json["viewMode"], "gender");

        let back: FilterConfig = serde_json::from_value(json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn config_json_defaults_missing_keys() {
        let config: FilterConfig = serde_json::from_str(r#"{"eraFilter": "third-reich", "showAllStreets": true}"#).unwrap();
        assert_eq!(config.era_filter, Some(Era::ThirdReich));
        assert!(config.show_all_streets);
        assert_eq!(config.category_filter, None);
        assert!(serde_json::from_str::<FilterConfig>(r#"{"eraFilter": "bronze-age"}"#).is_err());
    }

    #[test]
    fn parses_cli_selections() {
        assert_eq!(parse_selection::<Category>("all").unwrap(), None);
        assert_eq!(parse_selection::<Era>("gdr").unwrap(), Some(Era::Gdr));
        assert!(parse_selection::<Era>("ddr").is_err());
        assert_eq!("female".parse::<GenderFilter>().unwrap(), GenderFilter::Female);
        assert_eq!("era".parse::<ViewMode>().unwrap(), ViewMode::Era);
    }
}
