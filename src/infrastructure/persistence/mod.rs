//! Link store implementations.
//!
//! - [`PgLinkRepository`] - PostgreSQL storage via SQLx
//! - [`InMemoryLinkRepository`] - Process-local storage for tests and local runs
//!
//! [`connect`] picks one from the configured `DATABASE_URL`.

pub mod memory_link_repository;
pub mod pg_link_repository;

pub use memory_link_repository::InMemoryLinkRepository;
pub use pg_link_repository::PgLinkRepository;

use anyhow::{Context, Result};
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use std::time::Duration;

use crate::config::Config;
use crate::domain::repositories::LinkRepository;

/// Builds the link repository described by `config`.
///
/// For PostgreSQL this opens the pool and applies pending migrations, which
/// also create the unique index that guards slugs.
///
/// # Errors
///
/// Returns an error if the database is unreachable or a migration fails.
pub async fn connect(config: &Config) -> Result<Arc<dyn LinkRepository>> {
    if config.uses_memory_store() {
        tracing::warn!("Using in-memory link store; links are lost on restart");
        return Ok(Arc::new(InMemoryLinkRepository::new()));
    }

    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to apply database migrations")?;

    Ok(Arc::new(PgLinkRepository::new(Arc::new(pool))))
}
