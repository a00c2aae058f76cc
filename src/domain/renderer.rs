use crate::domain::GeoPointError;
use crate::domain::camera::CameraPosition;
use crate::domain::marker::Marker;
use crate::domain::polygon::Polygon;
use async_trait::async_trait;
use std::fmt::Debug;
use std::time::Duration;
use thiserror::Error;

/// The map surface that markers and polygons are drawn on.
#[async_trait]
pub trait Renderer: Debug + Send + Sync {
    fn id(&self) -> &'static str;

    async fn add_marker(&self, marker: Marker) -> Result<(), RenderError>;

    async fn animate_camera(&self, position: CameraPosition, duration: Duration) -> Result<(), RenderError>;

    async fn add_polygon(&self, polygon: Polygon) -> Result<(), RenderError>;

    /// Removes every marker and polygon.
    async fn clear(&self) -> Result<(), RenderError>;
}

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("cannot place an object at an invalid position: {0}")]
    InvalidPosition(#[from] GeoPointError),
}
