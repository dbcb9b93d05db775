//! Reptrackd
//!
//! Exercise tracker daemon: REST API over a document store of exercise
//! records.
//!
//! # Usage
//!
//! ```bash
//! # Start with default configuration
//! cargo run -p reptrackd
//!
//! # Start with custom environment
//! REPTRACK_ENV=test REPTRACK_API_PORT=8081 cargo run -p reptrackd
//! ```
//!
//! # Environment Variables
//!
//! - `REPTRACK_ENV`: Environment (test, development, production)
//! - `REPTRACK_API_HOST`: API host (default: 0.0.0.0)
//! - `REPTRACK_API_PORT`: API port (default: 8080)
//! - `DATABASE_URL`: PostgreSQL connection string (postgres builds)

use reptrackd::{Config, Daemon};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env().add_directive("reptrackd=info".parse()?))
        .init();

    // Database subcommands (postgres builds): `reptrackd db <migrate|status>`
    #[cfg(feature = "postgres")]
    {
        let args: Vec<String> = std::env::args().collect();
        if args.get(1).map(String::as_str) == Some("db") {
            return reptrackd::db::run_db_command(args).await;
        }
    }

    // Load configuration
    let config = Config::from_env()?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        environment = %config.environment,
        api_host = %config.api.host,
        api_port = config.api.port,
        "Reptrack daemon"
    );

    // Create and run daemon
    #[cfg(feature = "postgres")]
    let daemon = Daemon::connect(config).await?;

    #[cfg(not(feature = "postgres"))]
    let daemon = {
        tracing::warn!("Built without the postgres feature; records are held in memory only");
        Daemon::with_memory_store(config)
    };

    daemon.run().await?;

    Ok(())
}
