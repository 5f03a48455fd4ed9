//! Orders API entry point
//!
//! Loads configuration, initializes logging, bootstraps the SQLite schema,
//! and starts the HTTP gateway.

use std::sync::Arc;

use anyhow::Context;

use orders_api::config::AppConfig;
use orders_api::db::Database;
use orders_api::gateway::{self, state::AppState};
use orders_api::logging;
use orders_api::orders::{OrderRepository, OrderService};

fn get_env() -> String {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if (args[i] == "--env" || args[i] == "-e") && i + 1 < args.len() {
            return args[i + 1].clone();
        }
    }
    "dev".to_string()
}

/// Get port override from command line (--port argument)
fn get_port_override() -> Option<u16> {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if args[i] == "--port" && i + 1 < args.len() {
            return args[i + 1].parse().ok();
        }
    }
    None
}

fn main() -> anyhow::Result<()> {
    let env = get_env();
    let app_config = AppConfig::load(&env);
    let _log_guard = logging::init_logging(&app_config);

    tracing::info!("Starting Orders API in {} env", env);

    let port = get_port_override().unwrap_or(app_config.gateway.port);
    let database_url = app_config.database_url();

    let rt = tokio::runtime::Runtime::new().context("Failed to create tokio runtime")?;
    rt.block_on(async {
        let db = Database::connect(&database_url)
            .await
            .with_context(|| format!("Failed to connect to {}", database_url))?;
        db.ensure_schema()
            .await
            .context("Failed to create order tables")?;

        let db = Arc::new(db);
        let repository = OrderRepository::new(db.pool().clone());
        let orders = OrderService::new(repository);
        let state = Arc::new(AppState::new(orders, db));

        gateway::run_server(&app_config.gateway.host, port, state).await;
        Ok(())
    })
}
