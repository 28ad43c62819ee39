use crate::core::error;
use rusqlite::Connection;
use std::path::{Path, PathBuf};

/// Directory under the data root that holds the per-screen databases.
pub const DATA_DIR: &str = ".listpad";

pub fn db_connect(db_path: &str) -> Result<Connection, error::ListpadError> {
    let conn = Connection::open(db_path)?;
    conn.busy_timeout(std::time::Duration::from_secs(5))
        .map_err(error::ListpadError::RusqliteError)?;
    conn.query_row("PRAGMA journal_mode=WAL;", [], |_| Ok(()))
        .map_err(error::ListpadError::RusqliteError)?;
    conn.execute("PRAGMA foreign_keys=ON;", [])
        .map_err(error::ListpadError::RusqliteError)?;
    Ok(conn)
}

pub fn data_dir(root: &Path) -> PathBuf {
    root.join(DATA_DIR)
}

// Screens own their schemas and database files; this module only hands out
// connections with a uniform pragma discipline.
