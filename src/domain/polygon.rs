use crate::domain::GeoPoint;
use crate::domain::color::Color;

/// An ordered list of vertices, drawn as given. Fewer than three vertices are kept as-is.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    pub vertices: Vec<GeoPoint>,
    pub fill_color: Color,
}

impl Polygon {
    pub fn new(vertices: Vec<GeoPoint>, fill_color: Color) -> Self {
        Polygon { vertices, fill_color }
    }

    pub fn is_degenerate(&self) -> bool {
        self.vertices.len() < 3
    }
}
