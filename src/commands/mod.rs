pub mod export;
pub mod show;
pub mod summary;

use anyhow::Result;
use streetnames::{FilterConfig, StreetCollection, Summary};

use crate::cli::FilterArgs;

/// Resolve the legend state against the loaded data. Selections that no
/// street matches any more fall back to "all", as the legend would do.
pub(crate) fn resolve_filters(streets: &StreetCollection, args: &FilterArgs) -> Result<(FilterConfig, Summary)> {
    let mut config = args.config()?;
    let mut summary = streets.summary(&config);
    if config.reconcile(&summary) {
        tracing::warn!(
            category = ?config.category_filter,
            era = ?config.era_filter,
            "selection matched no streets, reset to all"
        );
        summary = streets.summary(&config);
    }
    Ok((config, summary))
}
