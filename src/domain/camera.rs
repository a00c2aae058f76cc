use crate::domain::GeoPoint;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CameraPosition {
    pub target: GeoPoint,
    pub zoom: f64,
    pub tilt: f64, // In degrees
}

impl CameraPosition {
    pub fn new(target: GeoPoint, zoom: f64, tilt: f64) -> Self {
        CameraPosition { target, zoom, tilt }
    }
}
