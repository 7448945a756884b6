use tp_server::{AppState, build_router, logger};

use std::error::Error;

use log::info;
use sqlx::sqlite::SqlitePoolOptions;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Load .env if present, then read configuration from the environment
    dotenvy::dotenv().ok();

    let config = tp_config::Config::load()?;
    config.validate()?;

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, config.logging.colored)?;

    info!("Starting tp-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Initialize database pool; an unreachable database is fatal
    let pool = SqlitePoolOptions::new()
        .max_connections(10)
        .connect(&config.database.url)
        .await?;

    info!("Database connection established");

    // Ensure the test_projects table exists
    tp_db::ensure_schema(&pool).await?;

    // Build router
    let app = build_router(AppState { pool });

    // Create TCP listener
    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr).await?;

    // Actual bound address matters when port is 0 / auto-assigned
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            match tokio::signal::ctrl_c().await {
                Ok(()) => info!("Received SIGINT (Ctrl+C), shutting down"),
                Err(e) => log::error!("Failed to listen for SIGINT: {}", e),
            }
        })
        .await?;

    info!("Shutdown complete");

    Ok(())
}
