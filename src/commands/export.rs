use anyhow::Result;
use streetnames::io::geojson::write_geojson;
use streetnames::load_path;

use crate::cli::{Cli, ExportArgs};

pub fn run(_cli: &Cli, args: &ExportArgs) -> Result<()> {
    let streets = load_path(&args.data)?;
    let (config, _) = super::resolve_filters(&streets, &args.filter)?;

    let visible = streets.filter(&config);
    if let Some(id) = args.selected {
        if !visible.iter().any(|s| s.id == id) {
            tracing::warn!(id, "selected street is not visible under the active filters");
        }
    }

    tracing::info!(visible = visible.len(), output = %args.output.display(), "writing GeoJSON");
    write_geojson(&args.output, visible, config.view_mode, args.selected, args.force)?;

    if let Some(bounds) = streets.bounds() {
        tracing::info!(
            min_lng = bounds.min().x, min_lat = bounds.min().y,
            max_lng = bounds.max().x, max_lat = bounds.max().y,
            "dataset bounds"
        );
    }
    Ok(())
}
