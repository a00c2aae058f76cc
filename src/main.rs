use mapscatter::app_config::AppConfig;
use mapscatter::dispatcher::Dispatcher;
use mapscatter::domain::commands::Command;
use mapscatter::input::read_commands;
use mapscatter::map_canvas::MapCanvas;
use mapscatter::sampler::SphereSampler;
use mapscatter::snapshot_listener::snapshot_listener;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

    info!("🪵 Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let config = Arc::new(AppConfig::load()?);
    info!("✅  Loaded configuration");

    let canvas = Arc::new(MapCanvas::new(config.map().style()));

    let snapshot_handle = config.map().snapshot_path().map(|path| {
        let notifier_rx = canvas.notifier();
        let path = path.to_path_buf();
        info!("✅  Writing map snapshots to '{}'", path.display());
        task::spawn(async move {
            snapshot_listener(notifier_rx, path).await;
        })
    });

    let sampler = match config.sampler().seed() {
        Some(seed) => {
            info!("🎲 Sampling with fixed seed {}", seed);
            SphereSampler::seeded(seed)
        }
        None => SphereSampler::from_entropy(),
    };

    let (tx, rx) = mpsc::channel::<Command>(config.core().command_buffer_size());
    let mut dispatcher = Dispatcher::new(rx, sampler, canvas.clone(), config.clone());
    let dispatcher_handle = task::spawn(async move {
        dispatcher.listen().await;
    });
    info!("✅  Initialized dispatcher");

    info!("🔥 {} is up and running, type 'marker', 'polygon', 'clear' or 'quit'", env!("CARGO_PKG_NAME"));

    read_commands(tokio::io::stdin(), tx).await?;
    dispatcher_handle.await?;

    // Dropping the canvas closes the notifier, which lets the snapshot listener finish its last write
    drop(canvas);
    if let Some(handle) = snapshot_handle {
        handle.await?;
    }

    info!("👋 {} stopped", env!("CARGO_PKG_NAME"));
    Ok(())
}
