//! Database CLI subcommands for reptrackd.
//!
//! Provides `db migrate` and `db status` commands.

use anyhow::{anyhow, Result};
use std::env;

use reptrack_db::{migrate, status};

/// Run database CLI subcommands.
///
/// Supported commands:
/// - `reptrackd db migrate` - Run pending migrations
/// - `reptrackd db status` - Check migration status
pub async fn run_db_command(args: Vec<String>) -> Result<()> {
    if args.len() < 3 {
        return Err(anyhow!("Usage: reptrackd db <migrate|status>"));
    }

    let database_url = env::var("DATABASE_URL")
        .map_err(|_| anyhow!("DATABASE_URL environment variable is required for db commands"))?;

    let pool = sqlx::PgPool::connect(&database_url).await?;

    match args[2].as_str() {
        "migrate" => {
            migrate(&pool).await?;
        },
        "status" => {
            status(&pool).await?;
        },
        other => {
            return Err(anyhow!("Unknown db command: {}. Use migrate or status", other));
        },
    }

    pool.close().await;
    Ok(())
}
