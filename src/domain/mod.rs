pub mod camera;
pub mod color;
pub mod commands;
pub mod events;
mod geo_point;
pub mod marker;
mod marker_counter;
pub mod polygon;
pub mod renderer;

pub use geo_point::{GeoPoint, GeoPointError};
pub use marker_counter::MarkerCounter;
