use anyhow::Result;
use streetnames::{load_path, ViewMode};

use crate::cli::{Cli, SummaryArgs};

pub fn run(_cli: &Cli, args: &SummaryArgs) -> Result<()> {
    let streets = load_path(&args.data)?;
    let (config, summary) = super::resolve_filters(&streets, &args.filter)?;
    let totals = summary.totals;

    println!("{} Straßen insgesamt", totals.total);
    println!("{} nach Personen benannt", totals.named_after_person);
    println!("{} weiblich, {} männlich", totals.female, totals.male);
    println!("{} sichtbar", streets.filter(&config).len());

    match config.view_mode {
        ViewMode::Gender => {
            println!("\nGeschlecht ({}):", config.gender_filter);
            println!("   {:<28} {:>5}", "Weiblich", totals.female);
            println!("   {:<28} {:>5}", "Männlich", totals.male);
        }
        ViewMode::Era => {
            println!("\nEpoche:");
            for entry in summary.eras.legend() {
                let marker = if config.era_filter == Some(entry.key) { '*' } else { ' ' };
                println!(" {marker} {:<28} {:>5}", entry.label, entry.count);
            }
        }
    }

    println!("\nKategorie:");
    for entry in summary.categories.legend() {
        let marker = if config.category_filter == Some(entry.key) { '*' } else { ' ' };
        let disabled = if entry.disabled { " (leer)" } else { "" };
        println!(" {marker} {:<28} {:>5}{disabled}", entry.label, entry.count);
    }

    Ok(())
}
