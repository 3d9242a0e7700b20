pub mod blobs;
pub mod pool;
pub mod tables;
pub mod users;

use sqlx::SqlitePool;
use std::path::Path;

use crate::error::Result;

pub use pool::create_pool;

/// Database handle type (pool is internally reference counted)
pub type Db = SqlitePool;

/// Open or create the database at the given URL
///
/// Creates all required tables on first run.
pub async fn open_database(database_url: &str) -> Result<Db> {
    tracing::info!("Opening database at: {}", database_url);

    // Create parent directory of a file-backed database if it doesn't exist
    if let Some(parent) = sqlite_file_path(database_url).and_then(|p| p.parent()) {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent).map_err(|e| {
                tracing::error!("Failed to create database directory: {}", e);
                sqlx::Error::Io(e)
            })?;
        }
    }

    let db = create_pool(database_url).await?;

    tracing::info!("Running database migrations...");
    sqlx::migrate!("./migrations").run(&db).await?;
    tracing::info!("Database initialized successfully");

    Ok(db)
}

/// Filesystem path of a `sqlite:` URL, `None` for in-memory databases
fn sqlite_file_path(database_url: &str) -> Option<&Path> {
    let rest = database_url
        .strip_prefix("sqlite://")
        .or_else(|| database_url.strip_prefix("sqlite:"))?;
    let path = rest.split('?').next().unwrap_or(rest);

    if path.is_empty() || path == ":memory:" {
        return None;
    }

    Some(Path::new(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sqlite_file_path() {
        assert_eq!(
            sqlite_file_path("sqlite://./data/trainer.db"),
            Some(Path::new("./data/trainer.db"))
        );
        assert_eq!(
            sqlite_file_path("sqlite:/tmp/x.db?mode=rwc"),
            Some(Path::new("/tmp/x.db"))
        );
        assert_eq!(sqlite_file_path("sqlite::memory:"), None);
        assert_eq!(sqlite_file_path("postgres://localhost/db"), None);
    }
}
