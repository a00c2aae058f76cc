pub mod app_config;
mod color_deserializer;
pub mod dispatcher;
pub mod domain;
pub mod geojson;
pub mod input;
pub mod map_canvas;
pub mod sampler;
pub mod snapshot_listener;
