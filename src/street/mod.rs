//! Canonical street features and the adapter that builds them from raw records.

mod adapt;
mod collection;
mod feature;
mod geometry;

pub use adapt::FEMALE_MARKER;
pub use collection::StreetCollection;
pub use feature::{Honoree, StreetFeature, StreetId, StreetProperties};
pub use geometry::StreetGeometry;
