use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, Statement,
};
use std::path::Path;

const CREATE_ENQUIRY_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS a004_enquiry (
        id TEXT PRIMARY KEY NOT NULL,
        customer_name TEXT NOT NULL,
        company TEXT,
        email TEXT NOT NULL,
        phone TEXT,
        message TEXT,
        items_json TEXT NOT NULL,
        item_count INTEGER NOT NULL DEFAULT 0,
        notified INTEGER NOT NULL DEFAULT 0,
        received_at TEXT NOT NULL
    );
"#;

/// Open (creating if needed) the enquiry database file and bootstrap the schema
pub async fn initialize_database(db_file: &Path) -> anyhow::Result<DatabaseConnection> {
    if let Some(parent) = db_file.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let absolute_path = if db_file.is_absolute() {
        db_file.to_path_buf()
    } else {
        std::env::current_dir()?.join(db_file)
    };
    // Normalize path separators and ensure proper URL form on Windows
    let normalized = absolute_path.to_string_lossy().replace('\\', "/");
    let needs_leading_slash = !normalized.starts_with('/') && normalized.contains(':');
    let prefix = if needs_leading_slash { "/" } else { "" };
    let db_url = format!("sqlite://{}{}?mode=rwc", prefix, normalized);

    tracing::info!("Opening enquiry database at {}", absolute_path.display());
    let conn = Database::connect(&db_url).await?;
    ensure_schema(&conn).await?;
    Ok(conn)
}

/// Private in-memory database, one connection so every query sees the same data
pub async fn connect_in_memory() -> anyhow::Result<DatabaseConnection> {
    let mut options = ConnectOptions::new("sqlite::memory:".to_owned());
    options.max_connections(1).sqlx_logging(false);
    let conn = Database::connect(options).await?;
    ensure_schema(&conn).await?;
    Ok(conn)
}

pub async fn ensure_schema(conn: &DatabaseConnection) -> anyhow::Result<()> {
    conn.execute(Statement::from_string(
        DatabaseBackend::Sqlite,
        CREATE_ENQUIRY_TABLE.to_string(),
    ))
    .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_schema_bootstrap_is_repeatable() {
        let conn = connect_in_memory().await.unwrap();
        ensure_schema(&conn).await.unwrap();

        let rows = conn
            .query_all(Statement::from_string(
                DatabaseBackend::Sqlite,
                "SELECT name FROM sqlite_master WHERE type='table' AND name='a004_enquiry';"
                    .to_string(),
            ))
            .await
            .unwrap();
        assert_eq!(rows.len(), 1);
    }
}
