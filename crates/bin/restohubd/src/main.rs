//! # restohubd — restohub daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Load configuration (`restohub.toml` plus `RESTOHUB_*` env vars)
//! - Initialize logging
//! - Open the `SQLite` connection pool and run migrations
//! - Prepare the upload directory
//! - Construct the restaurant service, injecting adapters via port traits
//! - Build the axum router, bind to a TCP port and serve
//! - Handle graceful shutdown (SIGTERM/SIGINT), then close the database
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use restohub_adapter_http_axum::router::{self, RouterConfig};
use restohub_adapter_http_axum::state::AppState;
use restohub_adapter_storage_sqlite_sqlx::SqliteRestaurantRepository;
use restohub_app::services::restaurant_service::RestaurantService;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    // Database
    let db = restohub_adapter_storage_sqlite_sqlx::Config {
        database_url: config.database_url().to_string(),
    }
    .build()
    .await?;
    let repo = SqliteRestaurantRepository::new(db.pool().clone());

    // Uploads
    let images = restohub_adapter_uploads_fs::Config {
        directory: config.uploads.dir.clone(),
    }
    .build()
    .await?;

    // HTTP
    let state = AppState::new(RestaurantService::new(repo, images));
    let app = router::build(
        state,
        &RouterConfig {
            uploads_dir: config.uploads.dir.clone(),
            max_body_bytes: config.uploads.max_bytes,
        },
    );

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(%bind_addr, "restohubd listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    db.close().await;
    tracing::info!("restohubd stopped");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for ctrl-c");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("shutdown signal received");
}
