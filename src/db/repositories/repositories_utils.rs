use anyhow::{Context, Result};

use super::{DBConnection, DBPool};

pub fn get_conn(pool: &DBPool) -> Result<DBConnection> {
    pool.get().context("Failed to get DB connection")
}

/// Runs synchronous repository work on the blocking thread pool so it does
/// not stall the async runtime driving the CLI.
pub async fn run_blocking<T, F>(work: F) -> Result<T>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T> + Send + 'static,
{
    tokio::task::spawn_blocking(work)
        .await
        .context("Database task execution failed")?
}
