use crate::app_config::AppConfig;
use crate::domain::MarkerCounter;
use crate::domain::camera::CameraPosition;
use crate::domain::commands::Command;
use crate::domain::events::Event;
use crate::domain::marker::Marker;
use crate::domain::polygon::Polygon;
use crate::domain::renderer::{RenderError, Renderer};
use crate::sampler::SphereSampler;
use rand::Rng;
use rand::rngs::StdRng;
use std::sync::Arc;
use tokio::sync::mpsc::Receiver;
use tracing::{debug, info, instrument, warn};

/// Turns commands into sampled points and hands them to the renderer, one command at a time.
#[derive(Debug)]
pub struct Dispatcher<R = StdRng> {
    rx: Receiver<Command>,
    sampler: SphereSampler<R>,
    renderer: Arc<dyn Renderer>,
    config: Arc<AppConfig>,
    counter: MarkerCounter,
}

impl<R: Rng> Dispatcher<R> {
    pub fn new(rx: Receiver<Command>, sampler: SphereSampler<R>, renderer: Arc<dyn Renderer>, config: Arc<AppConfig>) -> Self {
        Dispatcher {
            rx,
            sampler,
            renderer,
            config,
            counter: MarkerCounter::default(),
        }
    }

    pub fn counter(&self) -> MarkerCounter {
        self.counter
    }

    #[instrument(skip(self), fields(renderer = self.renderer.id()))]
    pub async fn listen(&mut self) {
        while let Some(command) = self.rx.recv().await {
            debug!("🔵 Received command: {:?}", command);
            match self.dispatch(command).await {
                Ok(event) => log_event(&event),
                Err(err) => warn!("⚠️ Unable to handle {:?}: {}", command, err),
            }
        }
        debug!("🔵 Command channel closed");
    }

    pub async fn dispatch(&mut self, command: Command) -> Result<Event, RenderError> {
        match command {
            Command::AddMarker => self.add_marker().await,
            Command::AddPolygon => self.add_polygon().await,
            Command::Clear => self.clear().await,
        }
    }

    async fn add_marker(&mut self) -> Result<Event, RenderError> {
        let settings = self.config.marker();
        let position = self.sampler.sample();
        let title = self.counter.title(settings.label_prefix());

        self.renderer.add_marker(Marker::new(position, title.clone())).await?;

        if settings.follow_camera() {
            let camera = CameraPosition::new(position, settings.camera_zoom(), settings.camera_tilt());
            self.renderer.animate_camera(camera, settings.camera_animation()).await?;
        }

        self.counter = self.counter.next();
        Ok(Event::MarkerAdded { title, position })
    }

    async fn add_polygon(&mut self) -> Result<Event, RenderError> {
        let count = self.sampler.polygon_vertex_count();
        let vertices = self.sampler.sample_n(count);
        let fill_color = self.config.polygon().fill_color().clone();

        self.renderer.add_polygon(Polygon::new(vertices, fill_color)).await?;
        Ok(Event::PolygonAdded { vertices: count })
    }

    async fn clear(&mut self) -> Result<Event, RenderError> {
        self.renderer.clear().await?;
        self.counter = MarkerCounter::default();
        Ok(Event::MapCleared)
    }
}

fn log_event(event: &Event) {
    match event {
        Event::MarkerAdded { title, position } => info!("🟢 Marker '{}' added at {}", title, position),
        Event::PolygonAdded { vertices } => info!("🟢 Polygon with {} vertex(es) added", vertices),
        Event::MapCleared => info!("🟢 Map cleaned"),
    }
}
