use crate::domain::GeoPoint;

/// What happened to the map as the result of a single command.
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    MarkerAdded { title: String, position: GeoPoint },
    PolygonAdded { vertices: usize },
    MapCleared,
}
