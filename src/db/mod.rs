use anyhow::{Context, Result};
use diesel::mysql::MysqlConnection;
use diesel::r2d2::{ConnectionManager, Pool};
use std::sync::Arc;
use tracing::info;

pub mod models;
pub mod mysql;
pub mod repositories;
pub mod tables;

pub use repositories::DBPool;

/// Builds a single-connection pool. Every invocation runs one query chain,
/// so there is nothing to share a larger pool with.
pub fn connect(database_url: &str) -> Result<Arc<DBPool>> {
    info!("Setting up database connection pool...");
    let manager = ConnectionManager::<MysqlConnection>::new(database_url);
    let pool = Pool::builder()
        .max_size(1)
        .build(manager)
        .context("Failed to create database connection pool")?;
    info!("Database pool created successfully.");
    Ok(Arc::new(pool))
}
