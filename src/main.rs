//! IR-Graph Server - Binary Entry Point
//!
//! This is the main entry point for the irgraph-server binary.

use std::sync::Arc;

use irgraph::api::http::create_router;
use irgraph::api::state::AppState;
use irgraph::config::{AppConfig, UiConfig};
use irgraph::store::GraphStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = AppConfig::from_env();
    let ui_config = UiConfig::load(&config.ui_config_file);
    let store = Arc::new(GraphStore::open(config.graphs_file.clone()));

    log::info!(
        "{} v{} serving {} graphs from {}",
        irgraph::NAME,
        irgraph::VERSION,
        store.graph_count(),
        store.file_path()
    );

    let state = Arc::new(AppState::new(store.clone(), ui_config, config.flush_delay));
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    log::info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // Final save so positions still inside a debounce window survive the
    // shutdown
    store.persist()?;
    Ok(())
}

/// Resolve when ctrl-c is received
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to install shutdown handler: {}", e);
        return;
    }
    log::info!("Shutting down");
}
