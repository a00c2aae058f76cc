use crate::domain::GeoPoint;
use crate::domain::camera::CameraPosition;
use crate::domain::marker::Marker;
use crate::domain::polygon::Polygon;
use crate::domain::renderer::{RenderError, Renderer};
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::sync::watch::{self, Receiver as WatchReceiver, Sender as WatchSender};
use tracing::{debug, info, instrument, warn};

pub const RENDERER_ID: &str = "map_canvas";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct MapSnapshot {
    pub style: String,
    pub markers: Vec<Marker>,
    pub polygons: Vec<Polygon>,
    pub camera: Option<CameraPosition>,
}

/// Keeps everything drawn on the map in memory and publishes a snapshot after every change.
#[derive(Debug)]
pub struct MapCanvas {
    state: Arc<RwLock<MapSnapshot>>,
    notifier_tx: WatchSender<MapSnapshot>,
    notifier_rx: WatchReceiver<MapSnapshot>,
}

impl MapCanvas {
    pub fn new(style: &str) -> Self {
        let snapshot = MapSnapshot {
            style: style.to_string(),
            ..MapSnapshot::default()
        };
        let (notifier_tx, notifier_rx) = watch::channel(snapshot.clone());
        info!("🗺️ Loaded map style '{}'", style);

        MapCanvas {
            state: Arc::new(RwLock::new(snapshot)),
            notifier_tx,
            notifier_rx,
        }
    }

    pub fn notifier(&self) -> WatchReceiver<MapSnapshot> {
        self.notifier_rx.clone()
    }

    pub async fn snapshot(&self) -> MapSnapshot {
        self.state.read().await.clone()
    }

    async fn update<F>(&self, mutate: F)
    where
        F: FnOnce(&mut MapSnapshot),
    {
        let mut write_guard = self.state.write().await;
        mutate(&mut write_guard);
        self.notifier_tx.send(write_guard.clone()).unwrap_or_default();
    }
}

fn validate(point: &GeoPoint) -> Result<(), RenderError> {
    GeoPoint::try_new(point.latitude, point.longitude)?;
    Ok(())
}

#[async_trait]
impl Renderer for MapCanvas {
    fn id(&self) -> &'static str {
        RENDERER_ID
    }

    #[instrument(skip_all, fields(title = %marker.title))]
    async fn add_marker(&self, marker: Marker) -> Result<(), RenderError> {
        validate(&marker.position)?;

        info!("📍 Added marker '{}' at {}", marker.title, marker.position);
        self.update(|snapshot| snapshot.markers.push(marker)).await;
        Ok(())
    }

    #[instrument(skip_all)]
    async fn animate_camera(&self, position: CameraPosition, duration: Duration) -> Result<(), RenderError> {
        validate(&position.target)?;

        debug!(
            zoom = position.zoom,
            tilt = position.tilt,
            "🎥 Moving camera to {} over {}ms",
            position.target,
            duration.as_millis()
        );
        self.update(|snapshot| snapshot.camera = Some(position)).await;
        Ok(())
    }

    #[instrument(skip_all, fields(vertices = polygon.vertices.len()))]
    async fn add_polygon(&self, polygon: Polygon) -> Result<(), RenderError> {
        for vertex in &polygon.vertices {
            validate(vertex)?;
        }

        if polygon.is_degenerate() {
            warn!("⚠️ Drawing a degenerate polygon with {} vertex(es)", polygon.vertices.len());
        }

        info!("🔷 Added polygon with {} vertex(es), filled with {}", polygon.vertices.len(), polygon.fill_color);
        self.update(|snapshot| snapshot.polygons.push(polygon)).await;
        Ok(())
    }

    #[instrument(skip_all)]
    async fn clear(&self) -> Result<(), RenderError> {
        self.update(|snapshot| {
            info!("🧹 Cleared {} marker(s) and {} polygon(s)", snapshot.markers.len(), snapshot.polygons.len());
            snapshot.markers.clear();
            snapshot.polygons.clear();
        })
        .await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::color::Color;
    use pretty_assertions::assert_eq;
    use test_log::test;

    const STYLE: &str = "mapbox://styles/mapbox/streets-v11";

    fn purple() -> Color {
        Color::Hex("#6200ee".to_string())
    }

    #[test(tokio::test)]
    async fn starts_empty_with_the_given_style() {
        let canvas = MapCanvas::new(STYLE);

        let snapshot = canvas.snapshot().await;

        assert_eq!(snapshot.style, STYLE);
        assert!(snapshot.markers.is_empty());
        assert!(snapshot.polygons.is_empty());
        assert_eq!(snapshot.camera, None);
    }

    #[test(tokio::test)]
    async fn records_markers_polygons_and_camera() {
        let canvas = MapCanvas::new(STYLE);
        let point = GeoPoint::new(10.0, 20.0);

        canvas.add_marker(Marker::new(point, "marker 0")).await.unwrap();
        canvas.animate_camera(CameraPosition::new(point, 10.0, 20.0), Duration::from_secs(3)).await.unwrap();
        canvas.add_polygon(Polygon::new(vec![point, GeoPoint::new(0.0, 0.0)], purple())).await.unwrap();

        let snapshot = canvas.snapshot().await;
        assert_eq!(snapshot.markers, vec![Marker::new(point, "marker 0")]);
        assert_eq!(snapshot.polygons.len(), 1);
        assert_eq!(snapshot.camera, Some(CameraPosition::new(point, 10.0, 20.0)));
    }

    #[test(tokio::test)]
    async fn accepts_an_empty_polygon() {
        let canvas = MapCanvas::new(STYLE);

        canvas.add_polygon(Polygon::new(vec![], purple())).await.unwrap();

        assert_eq!(canvas.snapshot().await.polygons, vec![Polygon::new(vec![], purple())]);
    }

    #[test(tokio::test)]
    async fn rejects_invalid_positions() {
        let canvas = MapCanvas::new(STYLE);

        let result = canvas.add_marker(Marker::new(GeoPoint::new(95.0, 0.0), "marker 0")).await;

        assert!(matches!(result, Err(RenderError::InvalidPosition(_))));
        assert!(canvas.snapshot().await.markers.is_empty());
    }

    #[test(tokio::test)]
    async fn clear_removes_markers_and_polygons_but_keeps_the_camera() {
        let canvas = MapCanvas::new(STYLE);
        let point = GeoPoint::new(-45.0, 120.0);
        canvas.add_marker(Marker::new(point, "marker 0")).await.unwrap();
        canvas.animate_camera(CameraPosition::new(point, 10.0, 20.0), Duration::from_secs(3)).await.unwrap();
        canvas.add_polygon(Polygon::new(vec![point], purple())).await.unwrap();

        canvas.clear().await.unwrap();

        let snapshot = canvas.snapshot().await;
        assert!(snapshot.markers.is_empty());
        assert!(snapshot.polygons.is_empty());
        assert!(snapshot.camera.is_some());
    }

    #[test(tokio::test)]
    async fn notifies_listeners_of_changes() {
        let canvas = MapCanvas::new(STYLE);
        let mut rx = canvas.notifier();

        canvas.add_marker(Marker::new(GeoPoint::new(1.0, 2.0), "marker 0")).await.unwrap();

        rx.changed().await.unwrap();
        assert_eq!(rx.borrow().markers.len(), 1);
    }
}
