//! Schema migrations
//!
//! Embeds the SQL migrations from the crate's `migrations/` directory
//! and applies any that have not yet run. Migrations are tracked in the
//! `_sqlx_migrations` table and are safe to run on every startup.

use crate::error::DatabaseError;
use crate::pool::DatabasePool;
use tracing::info;

/// Applies all pending schema migrations
///
/// # Errors
///
/// Returns [`DatabaseError::MigrationFailed`] if a migration cannot be
/// applied, including checksum mismatches against previously applied
/// versions.
pub async fn run_migrations(pool: &DatabasePool) -> Result<(), DatabaseError> {
    info!("Running database migrations");

    sqlx::migrate!("./migrations").run(pool).await?;

    info!("Database migrations complete");
    Ok(())
}
