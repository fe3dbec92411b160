use std::path::PathBuf;

use anyhow::{ensure, Result};
use streetnames::{parse_selection, FilterConfig, GenderFilter, StreetId, ViewMode};

/// Street-name map data CLI
#[derive(clap::Parser, Debug)]
#[command(name = "streetnames", version, about, propagate_version = true)]
pub struct Cli {
    /// Increase output verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Print totals and legend counts for the active filters
    Summary(SummaryArgs),

    /// Write the filtered streets as GeoJSON for the map renderer
    Export(ExportArgs),

    /// Print the detail panel of one street
    Show(ShowArgs),
}

/// Legend state; flags override values loaded from `--filters`.
#[derive(clap::Args, Debug)]
pub struct FilterArgs {
    /// Saved filter configuration (JSON)
    #[arg(long, value_hint = clap::ValueHint::FilePath)]
    pub filters: Option<PathBuf>,

    /// Also show streets not named after a person
    #[arg(long)]
    pub all_streets: bool,

    /// Map coloring: gender or era
    #[arg(long)]
    pub view: Option<ViewMode>,

    /// all, female or male
    #[arg(long)]
    pub gender: Option<GenderFilter>,

    /// Category slug (e.g. artist, antifascist-resistance) or "all"
    #[arg(long)]
    pub category: Option<String>,

    /// Era slug (e.g. weimar, third-reich) or "all"
    #[arg(long)]
    pub era: Option<String>,
}

impl FilterArgs {
    pub fn config(&self) -> Result<FilterConfig> {
        let mut config = match &self.filters {
            Some(path) => FilterConfig::from_json_file(path)?,
            None => FilterConfig::default(),
        };
        let view = self.view.unwrap_or(config.view_mode);
        ensure!(view == ViewMode::Gender || self.gender.is_none_or(|g| g == GenderFilter::All),
            "[cli] --gender only applies to the gender view");
        ensure!(view == ViewMode::Era || self.era.as_deref().is_none_or(|e| e == "all"),
            "[cli] --era only applies to the era view (add --view era)");

        if self.all_streets {
            config.show_all_streets = true;
        }
        if let Some(gender) = self.gender {
            config.gender_filter = gender;
        }
        if let Some(category) = &self.category {
            config.category_filter = parse_selection(category)?;
        }
        if let Some(era) = &self.era {
            config.era_filter = parse_selection(era)?;
        }
        Ok(config.with_view_mode(view))
    }
}

#[derive(clap::Args, Debug)]
pub struct SummaryArgs {
    /// Street dataset (semicolon CSV or GeoJSON)
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub data: PathBuf,

    #[command(flatten)]
    pub filter: FilterArgs,
}

#[derive(clap::Args, Debug)]
pub struct ExportArgs {
    /// Street dataset (semicolon CSV or GeoJSON)
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub data: PathBuf,

    /// Output GeoJSON file ("-" is rejected)
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: PathBuf,

    /// Street id to flag as selected
    #[arg(long)]
    pub selected: Option<StreetId>,

    /// Overwrite if the file exists
    #[arg(long)]
    pub force: bool,

    #[command(flatten)]
    pub filter: FilterArgs,
}

#[derive(clap::Args, Debug)]
pub struct ShowArgs {
    /// Street dataset (semicolon CSV or GeoJSON)
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub data: PathBuf,

    /// Street id
    pub id: StreetId,
}

#[cfg(test)]
mod tests {
    use streetnames::{Era, FilterConfig, GenderFilter, ViewMode};

    use super::FilterArgs;

    fn args() -> FilterArgs {
        FilterArgs { filters: None, all_streets: false, view: None, gender: None, category: None, era: None }
    }

    #[test]
    fn flags_override_defaults() {
        let config = FilterArgs { view: Some(ViewMode::Era), era: Some("weimar".into()), ..args() }
            .config().unwrap();
        assert_eq!(config.view_mode, ViewMode::Era);
        assert_eq!(config.era_filter, Some(Era::Weimar));
        assert_eq!(config.gender_filter, GenderFilter::All);
    }

    #[test]
    fn filter_of_other_view_is_rejected() {
        let era_view_with_gender = FilterArgs {
            view: Some(ViewMode::Era),
            gender: Some(GenderFilter::Female),
            ..args()
        };
        assert!(era_view_with_gender.config().is_err());

        let gender_view_with_era = FilterArgs { era: Some("weimar".into()), ..args() };
        assert!(gender_view_with_era.config().is_err());
    }

    #[test]
    fn saved_config_is_normalized_to_its_view() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("filters.json");
        std::fs::write(&path, r#"{"viewMode": "era", "genderFilter": "female", "eraFilter": "weimar"}"#).unwrap();

        let config = FilterArgs { filters: Some(path), ..args() }.config().unwrap();
        assert_eq!(config, FilterConfig {
            view_mode: ViewMode::Era,
            era_filter: Some(Era::Weimar),
            ..FilterConfig::default()
        });
    }
}
