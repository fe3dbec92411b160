use geo::{BoundingRect, LineString, MultiLineString, Rect};
use serde_json::{json, Value};

/// Street centerline, either one polyline or several. Coordinates are `(lng, lat)`.
#[derive(Debug, Clone, PartialEq)]
pub enum StreetGeometry {
    Line(LineString<f64>),
    MultiLine(MultiLineString<f64>),
}

impl StreetGeometry {
    /// Component polylines in source order.
    pub fn lines(&self) -> std::slice::Iter<'_, LineString<f64>> {
        match self {
            StreetGeometry::Line(line) => std::slice::from_ref(line).iter(),
            StreetGeometry::MultiLine(multi) => multi.0.iter(),
        }
    }

    /// Total number of coordinates over all component lines.
    pub fn coord_count(&self) -> usize {
        self.lines().map(|line| line.0.len()).sum()
    }

    pub fn bounding_rect(&self) -> Option<Rect<f64>> {
        match self {
            StreetGeometry::Line(line) => line.bounding_rect(),
            StreetGeometry::MultiLine(multi) => multi.bounding_rect(),
        }
    }

    /// GeoJSON geometry object.
    pub fn to_geojson(&self) -> Value {
        fn positions(line: &LineString<f64>) -> Vec<[f64; 2]> {
            line.coords().map(|c| [c.x, c.y]).collect()
        }
        match self {
            StreetGeometry::Line(line) => json!({
                "type": "LineString",
                "coordinates": positions(line),
            }),
            StreetGeometry::MultiLine(multi) => json!({
                "type": "MultiLineString",
                "coordinates": multi.0.iter().map(positions).collect::<Vec<_>>(),
            }),
        }
    }
}
