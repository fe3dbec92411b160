#![doc = "Street-name registry: honoree classification, map filtering and legend counts"]
mod common;
mod detail;
mod filter;
mod stats;
mod style;
mod text;

pub mod classify;
pub mod io;
pub mod street;

#[doc(inline)]
pub use classify::{Category, Era};

#[doc(inline)]
pub use street::{Honoree, StreetCollection, StreetFeature, StreetGeometry, StreetId, StreetProperties};

#[doc(inline)]
pub use filter::{filter, parse_selection, FilterConfig, GenderFilter, ViewMode};

#[doc(inline)]
pub use stats::{CategoryCounts, EraCounts, LegendEntry, Summary, Totals};

#[doc(inline)]
pub use detail::{PersonDetail, StreetDetail};

#[doc(inline)]
pub use style::{draw_color, Color};

#[doc(inline)]
pub use text::{death_note, extract_year};

#[doc(inline)]
pub use io::{load_path, load_str};
