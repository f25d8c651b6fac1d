//! Application Startup
//!
//! Application building and server initialization.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::Router;
use tokio::net::TcpListener;

use crate::application::services::{Directory, Multiplexer, Publisher};
use crate::config::Settings;
use crate::presentation::http::routes;
use crate::presentation::middleware::{cors, logging};
use crate::shared::snowflake::SnowflakeGenerator;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub directory: Arc<Directory>,
    pub publisher: Arc<Publisher>,
    pub multiplexer: Arc<Multiplexer>,
    pub settings: Arc<Settings>,
}

impl AppState {
    /// Build a fresh state from settings. Every instance owns its own
    /// directory; there are no process-wide singletons.
    pub fn new(settings: Settings) -> Self {
        let ids = Arc::new(SnowflakeGenerator::new(settings.snowflake.machine_id as u64));
        let directory = Arc::new(Directory::new(
            ids.clone(),
            settings.mailbox.capacity,
            settings.mailbox.signal_capacity,
        ));
        let publisher = Arc::new(Publisher::new(directory.clone(), ids));
        let multiplexer = Arc::new(Multiplexer::new(directory.clone()));

        Self {
            directory,
            publisher,
            multiplexer,
            settings: Arc::new(settings),
        }
    }
}

/// Application instance
pub struct Application {
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the application from settings
    pub async fn build(settings: Settings) -> Result<Self> {
        let state = AppState::new(settings.clone());

        // Build router with middleware
        let router = routes::create_router(state)
            .layer(logging::create_trace_layer())
            .layer(cors::create_cors_layer(&settings.cors));

        // Bind to address
        let addr: SocketAddr = settings.server_addr().parse()?;
        let listener = TcpListener::bind(addr).await?;
        tracing::info!("Listening on {}", listener.local_addr()?);

        Ok(Self { listener, router })
    }

    /// Run the server until stopped by SIGINT
    pub async fn run_until_stopped(self) -> Result<()> {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;
        Ok(())
    }

    /// Get the bound address
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to install shutdown signal handler");
        return;
    }
    tracing::info!("Shutting down server...");
}
