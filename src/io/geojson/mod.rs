//! GeoJSON: the feature-collection export of the registry, and the
//! collection handed to the map renderer.

mod read;
mod write;

pub use read::{parse_geometry, read_records};
pub use write::{to_geojson, write_geojson};
