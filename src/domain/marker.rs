use crate::domain::GeoPoint;

#[derive(Clone, Debug, PartialEq)]
pub struct Marker {
    pub position: GeoPoint,
    pub title: String,
}

impl Marker {
    pub fn new(position: GeoPoint, title: impl Into<String>) -> Self {
        Marker {
            position,
            title: title.into(),
        }
    }
}
