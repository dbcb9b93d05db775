//! Daemon: runtime orchestrator.
//!
//! # Lifecycle
//!
//! 1. Load configuration
//! 2. Build the store (connect + migrate for postgres builds)
//! 3. Start the API server
//! 4. Graceful shutdown on ctrl-c, closing the pool

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::{error, info};

use reptrack_store::{ExerciseRepository, MemoryExerciseStore};

use crate::api::{create_router, ApiState};
use crate::config::Config;
use crate::error::{DaemonError, DaemonResult};

#[cfg(feature = "postgres")]
use reptrack_store::{PgExerciseStore, StoreError};
#[cfg(feature = "postgres")]
use sqlx::PgPool;

// =============================================================================
// Daemon
// =============================================================================

/// The reptrack daemon.
///
/// Owns the store handle and, for postgres builds, the connection pool
/// whose lifecycle spans the process: opened before serving, closed on
/// shutdown.
pub struct Daemon {
    /// Configuration
    config: Config,
    /// Data-access layer
    store: Arc<dyn ExerciseRepository>,
    /// Connection pool, when backed by PostgreSQL
    #[cfg(feature = "postgres")]
    pool: Option<PgPool>,
}

impl Daemon {
    /// Create a daemon over an existing store.
    pub fn new(config: Config, store: Arc<dyn ExerciseRepository>) -> Self {
        Self {
            config,
            store,
            #[cfg(feature = "postgres")]
            pool: None,
        }
    }

    /// Create a daemon over the in-memory store (development and tests;
    /// records do not survive the process).
    pub fn with_memory_store(config: Config) -> Self {
        Self::new(config, Arc::new(MemoryExerciseStore::new()))
    }

    /// Connect to PostgreSQL, run migrations, and build the daemon over
    /// the SQL-backed store.
    #[cfg(feature = "postgres")]
    pub async fn connect(config: Config) -> DaemonResult<Self> {
        let url = config
            .database
            .url
            .clone()
            .ok_or_else(|| DaemonError::Config("DATABASE_URL is required".to_string()))?;

        let pool = PgPool::connect(&url)
            .await
            .map_err(|e| DaemonError::Store(StoreError::Connection(e.to_string())))?;

        reptrack_db::migrate(&pool)
            .await
            .map_err(|e| DaemonError::Store(StoreError::Database(e.to_string())))?;

        let store: Arc<dyn ExerciseRepository> = Arc::new(PgExerciseStore::new(pool.clone()));

        Ok(Self {
            config,
            store,
            pool: Some(pool),
        })
    }

    /// Run the daemon.
    ///
    /// This method blocks until shutdown is requested (ctrl-c).
    pub async fn run(self) -> DaemonResult<()> {
        info!(
            version = env!("CARGO_PKG_VERSION"),
            environment = %self.config.environment,
            "Starting reptrackd"
        );

        let state = Arc::new(ApiState {
            store: self.store.clone(),
        });
        let router = create_router(state);

        let addr = format!("{}:{}", self.config.api.host, self.config.api.port);
        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|e| DaemonError::Config(format!("Failed to bind to {}: {}", addr, e)))?;

        let local_addr = listener
            .local_addr()
            .map_err(|e| DaemonError::Config(format!("Failed to get local address: {}", e)))?;
        info!(%local_addr, "API server listening");

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| DaemonError::Server(e.to_string()))?;

        self.shutdown().await
    }

    /// Graceful shutdown.
    async fn shutdown(self) -> DaemonResult<()> {
        info!("Initiating graceful shutdown");

        #[cfg(feature = "postgres")]
        if let Some(pool) = self.pool {
            pool.close().await;
            info!("Database pool closed");
        }

        info!("Shutdown complete");
        Ok(())
    }
}

/// Resolve when a shutdown signal arrives.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for shutdown signal");
        return;
    }
    info!("Received shutdown signal");
}
