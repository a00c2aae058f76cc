use crate::domain::color::Color;
use config::{Config, ConfigBuilder, ConfigError};
use config::builder::DefaultState;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    core: Core,
    map: Map,
    #[serde(default)]
    sampler: Sampler,
    marker: Marker,
    polygon: Polygon,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_builder(
            Config::builder()
                .add_source(config::File::with_name("config").required(true))
                .add_source(config::File::with_name("config_local").required(false))
                .add_source(config::Environment::with_prefix("MAPSCATTER").separator("__")),
        )
    }

    fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        builder.build()?.try_deserialize()
    }

    pub fn core(&self) -> &Core {
        &self.core
    }

    pub fn map(&self) -> &Map {
        &self.map
    }

    pub fn sampler(&self) -> &Sampler {
        &self.sampler
    }

    pub fn marker(&self) -> &Marker {
        &self.marker
    }

    pub fn polygon(&self) -> &Polygon {
        &self.polygon
    }
}

#[derive(Debug, Deserialize)]
pub struct Core {
    command_buffer_size: usize,
}

impl Core {
    pub fn command_buffer_size(&self) -> usize {
        self.command_buffer_size
    }
}

#[derive(Debug, Deserialize)]
pub struct Map {
    style: String,
    snapshot_path: Option<PathBuf>,
}

impl Map {
    pub fn style(&self) -> &str {
        &self.style
    }

    pub fn snapshot_path(&self) -> Option<&Path> {
        self.snapshot_path.as_deref()
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct Sampler {
    seed: Option<u64>,
}

impl Sampler {
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

#[derive(Debug, Deserialize)]
pub struct Marker {
    label_prefix: String,
    follow_camera: bool,
    camera_zoom: f64,
    camera_tilt: f64,
    #[serde(with = "humantime_serde")]
    camera_animation: Duration,
}

impl Marker {
    pub fn label_prefix(&self) -> &str {
        &self.label_prefix
    }

    pub fn follow_camera(&self) -> bool {
        self.follow_camera
    }

    pub fn camera_zoom(&self) -> f64 {
        self.camera_zoom
    }

    pub fn camera_tilt(&self) -> f64 {
        self.camera_tilt
    }

    pub fn camera_animation(&self) -> Duration {
        self.camera_animation
    }
}

#[derive(Debug, Deserialize)]
pub struct Polygon {
    fill_color: Color,
}

impl Polygon {
    pub fn fill_color(&self) -> &Color {
        &self.fill_color
    }
}

#[cfg(test)]
pub struct AppConfigBuilder {
    config: AppConfig,
}

#[cfg(test)]
impl AppConfigBuilder {
    pub fn new() -> Self {
        AppConfigBuilder {
            config: AppConfig {
                core: Core { command_buffer_size: 1 },
                map: Map {
                    style: "mapbox://styles/mapbox/streets-v11".to_string(),
                    snapshot_path: None,
                },
                sampler: Sampler { seed: Some(42) },
                marker: Marker {
                    label_prefix: "marker".to_string(),
                    follow_camera: true,
                    camera_zoom: 10.0,
                    camera_tilt: 20.0,
                    camera_animation: Duration::from_secs(3),
                },
                polygon: Polygon {
                    fill_color: Color::Hex("#6200ee".to_string()),
                },
            },
        }
    }

    pub fn follow_camera(mut self, follow_camera: bool) -> Self {
        self.config.marker.follow_camera = follow_camera;
        self
    }

    pub fn label_prefix(mut self, label_prefix: &str) -> Self {
        self.config.marker.label_prefix = label_prefix.to_string();
        self
    }

    pub fn build(self) -> AppConfig {
        self.config
    }
}
