use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use transit_server::cache::{CachedPlanner, PlanCacheConfig};
use transit_server::config::AppConfig;
use transit_server::storage::load_network;
use transit_server::web::{AppState, create_router};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env();

    let network = match load_network(&config.data_dir) {
        Ok(network) => Arc::new(network),
        Err(err) => {
            eprintln!(
                "Failed to load network data from {}: {err}",
                config.data_dir.display()
            );
            std::process::exit(1);
        }
    };

    let planner = CachedPlanner::new(network.clone(), &PlanCacheConfig::default());
    let state = AppState::new(network, planner);
    let app = create_router(state);

    println!("Transit Trip Planner listening on http://{}", config.bind_addr);
    println!();
    println!("API Endpoints:");
    println!("  GET  /health     - Health check");
    println!("  GET  /api/stops  - List stops");
    println!("  GET  /api/lines  - List lines");
    println!("  POST /api/plan   - Plan a trip");

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .unwrap();
    axum::serve(listener, app).await.unwrap();
}
