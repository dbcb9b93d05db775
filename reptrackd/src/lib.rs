//! Reptrackd
//!
//! Daemon for the reptrack exercise tracker: configuration, the HTTP
//! API, and runtime orchestration over the data-access layer.
//!
//! # Architecture
//!
//! ```text
//! Client → API (validate, route) → ExerciseRepository → store
//! ```
//!
//! Each request runs a single linear chain: validation, one store call,
//! response. No state is held between requests beyond the store handle.
//!
//! # Example
//!
//! ```rust,ignore
//! use reptrackd::{Config, Daemon};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = Config::from_env().expect("Failed to load config");
//!     let daemon = Daemon::with_memory_store(config);
//!     daemon.run().await.expect("Daemon error");
//! }
//! ```

#![warn(clippy::all)]

pub mod api;
pub mod config;
pub mod daemon;
pub mod error;

#[cfg(feature = "postgres")]
pub mod db;

// Re-exports for convenience
pub use api::{create_router, ApiState};
pub use config::{ApiConfig, Config, DatabaseConfig, Environment};
pub use daemon::Daemon;
pub use error::{ApiError, DaemonError, DaemonResult, ErrorBody};
