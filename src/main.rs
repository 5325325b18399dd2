#![allow(dead_code, clippy::similar_names)]
#![warn(clippy::shadow_reuse, clippy::shadow_same, clippy::builtin_type_shadow)]
mod config;
mod debris_vis;
mod http_handler;
mod logger;
mod telemetry;

use crate::config::Config;
use crate::debris_vis::{
    AnimationDriver, ConsoleRenderer, DebrisCatalog, MAX_DISTANCE_KM, OrbitProjector, Viewport,
};
use crate::http_handler::http_client::HTTPClient;
use crate::telemetry::{CollectionPoint, Emitter, RecordSource, Transport};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Both flows run on the same one-second cadence.
const EMIT_PERIOD: Duration = Duration::from_millis(1000);
const TICK_PERIOD: Duration = Duration::from_millis(1000);

#[tokio::main(flavor = "multi_thread", worker_threads = 4)]
async fn main() {
    let config = Config::from_env();
    info!(
        "Collection server at {} (database {} '{}')",
        config.submit_base_url(),
        config.database().host(),
        config.database().name()
    );

    let token = CancellationToken::new();
    let relay = spawn_relay(&config, token.clone());
    let display = spawn_display(&config, token.clone()).await;

    tokio::signal::ctrl_c().await.ok();
    info!("Shutting down");
    token.cancel();
    relay.await.ok();
    if let Some(task) = display {
        task.await.ok();
    }
}

/// Starts the reading relay. A missing or malformed readings file is
/// fatal: there is nothing to relay.
fn spawn_relay(config: &Config, token: CancellationToken) -> JoinHandle<()> {
    let source = RecordSource::load(config.readings_path()).unwrap_or_else(|e| {
        fatal!("Cannot load readings from {}: {e}", config.readings_path())
    });
    let client = HTTPClient::new(&config.submit_base_url());
    let transport: Arc<dyn Transport> = Arc::new(CollectionPoint::new(client));
    let emitter = Emitter::new(source, config.location(), EMIT_PERIOD, transport);
    tokio::spawn(emitter.run(token))
}

/// Starts the debris display if its catalog is available. A failed catalog
/// load only costs the display; the relay keeps running.
async fn spawn_display(config: &Config, token: CancellationToken) -> Option<JoinHandle<()>> {
    let catalog_src = config.catalog_path();
    let loaded = if catalog_src.starts_with("http://") || catalog_src.starts_with("https://") {
        DebrisCatalog::fetch(catalog_src, MAX_DISTANCE_KM).await
    } else {
        DebrisCatalog::load(catalog_src, MAX_DISTANCE_KM)
    };
    let catalog = match loaded {
        Ok(catalog) => catalog,
        Err(e) => {
            error!("Cannot load debris catalog from {catalog_src}: {e}");
            return None;
        }
    };
    let viewport = Viewport::from_window(config.window_width(), config.window_height());
    let projector = OrbitProjector::new(&catalog, viewport);
    let mut driver = AnimationDriver::new(catalog, projector, ConsoleRenderer::new(), TICK_PERIOD);
    driver.mount();
    Some(tokio::spawn(driver.run(token)))
}
