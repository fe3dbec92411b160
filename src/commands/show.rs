use anyhow::{anyhow, Result};
use streetnames::{load_path, StreetDetail};

use crate::cli::{Cli, ShowArgs};

pub fn run(_cli: &Cli, args: &ShowArgs) -> Result<()> {
    let streets = load_path(&args.data)?;
    let street = streets.get(args.id)
        .ok_or_else(|| anyhow!("[show] No street with id {} in {}", args.id, args.data.display()))?;
    print!("{}", StreetDetail::of(street));
    Ok(())
}
