use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use directories::BaseDirs;
use rusqlite::Connection;
use tracing::{debug, info};

/// Folder name used beneath the user's home directory for application data.
const DATA_DIR_NAME: &str = ".ascnd";
/// Logical name of the on-device store.
pub const DB_FILE_NAME: &str = "arc.db";

/// Open the store at `path` and hand it to `migrate` before anyone else sees
/// it. The connection is only returned once the hook has completed, so every
/// consumer observes a migrated schema.
pub fn open_database<F>(path: &Path, migrate: F) -> Result<Connection>
where
    F: FnOnce(&mut Connection) -> Result<()>,
{
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).context("failed to create data directory")?;
    }

    let mut conn = Connection::open(path)
        .with_context(|| format!("failed to open SQLite database at {}", path.display()))?;
    conn.execute("PRAGMA foreign_keys = ON", [])
        .context("failed to enable foreign keys")?;

    debug!(path = %path.display(), "running migration hook");
    migrate(&mut conn).context("database migration failed")?;
    info!(path = %path.display(), "database ready");

    Ok(conn)
}

/// Resolve the application data directory inside the user's home.
pub fn default_data_dir() -> Result<PathBuf> {
    let base_dirs = BaseDirs::new().ok_or_else(|| anyhow!("could not locate home directory"))?;
    Ok(base_dirs.home_dir().join(DATA_DIR_NAME))
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn creates_missing_parent_and_runs_hook_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(DB_FILE_NAME);
        let calls = Cell::new(0);

        let conn = open_database(&path, |_| {
            calls.set(calls.get() + 1);
            Ok(())
        })
        .unwrap();

        assert_eq!(calls.get(), 1);
        assert!(path.exists());
        let fk: i64 = conn
            .query_row("PRAGMA foreign_keys", [], |row| row.get(0))
            .unwrap();
        assert_eq!(fk, 1);
    }

    #[test]
    fn hook_failure_is_returned() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DB_FILE_NAME);

        let err = open_database(&path, |_| Err(anyhow!("schema too new"))).unwrap_err();

        assert_eq!(err.to_string(), "database migration failed");
        assert_eq!(err.root_cause().to_string(), "schema too new");
    }
}
