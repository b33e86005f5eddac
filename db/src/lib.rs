pub mod grade;
pub mod models;
pub mod test_utils;

use sea_orm::{Database, DatabaseConnection, DbErr};
use std::path::Path;

/// Turns a configured database location into a connection URL.
///
/// DSNs starting with `sqlite:` are returned unchanged; anything else is treated
/// as a SQLite file path that should be created on first use.
pub fn database_url(path_or_url: &str) -> String {
    if path_or_url.starts_with("sqlite:") {
        path_or_url.to_string()
    } else {
        format!("sqlite://{path_or_url}?mode=rwc")
    }
}

pub async fn connect(path_or_url: &str) -> Result<DatabaseConnection, DbErr> {
    if !path_or_url.starts_with("sqlite:") {
        // SQLite won't create intermediate directories.
        if let Some(parent) = Path::new(path_or_url).parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| DbErr::Custom(format!("cannot create {}: {e}", parent.display())))?;
            }
        }
    }

    let url = database_url(path_or_url);
    log::debug!("Connecting to {url}");
    Database::connect(&url).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dsn_is_passed_through() {
        assert_eq!(database_url("sqlite::memory:"), "sqlite::memory:");
        assert_eq!(database_url("sqlite://x.db"), "sqlite://x.db");
    }

    #[test]
    fn file_path_becomes_rwc_url() {
        assert_eq!(
            database_url("data/quizmaster.db"),
            "sqlite://data/quizmaster.db?mode=rwc"
        );
    }

    #[tokio::test]
    async fn connect_creates_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("quiz.db");
        let db = connect(path.to_str().unwrap()).await.unwrap();
        db.ping().await.unwrap();
        assert!(path.parent().unwrap().exists());
    }
}
