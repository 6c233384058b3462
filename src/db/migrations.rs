//! Schema migrations keyed off `PRAGMA user_version`.

use anyhow::{Context, Result};
use rusqlite::Connection;
use tracing::{info, warn};

/// Schema version this build knows how to produce.
pub const SCHEMA_VERSION: i64 = 1;

/// Default migration hook handed to [`crate::db::open_database`]. Brings the
/// store up to [`SCHEMA_VERSION`]; a store that is already current is left
/// alone.
pub fn migrate_db_if_needed(conn: &mut Connection) -> Result<()> {
    let current: i64 = conn
        .query_row("PRAGMA user_version", [], |row| row.get(0))
        .context("failed to read schema version")?;

    if current >= SCHEMA_VERSION {
        if current > SCHEMA_VERSION {
            warn!(
                current,
                known = SCHEMA_VERSION,
                "database schema is newer than this build"
            );
        }
        return Ok(());
    }

    let tx = conn
        .transaction()
        .context("failed to start migration transaction")?;

    if current < 1 {
        tx.execute_batch(
            "CREATE TABLE IF NOT EXISTS exercise (
                id TEXT PRIMARY KEY NOT NULL,
                name TEXT NOT NULL,
                training_type TEXT NOT NULL
                    CHECK (training_type IN ('mobility', 'cardio', 'resistance', 'skill')),
                is_active INTEGER NOT NULL DEFAULT 1
            );
            CREATE INDEX IF NOT EXISTS exercise_active_name ON exercise (is_active, name);",
        )
        .context("failed to create exercise table")?;
    }

    tx.execute_batch(&format!("PRAGMA user_version = {SCHEMA_VERSION}"))
        .context("failed to bump schema version")?;
    tx.commit().context("failed to commit migration")?;

    info!(from = current, to = SCHEMA_VERSION, "migrated database schema");
    Ok(())
}
