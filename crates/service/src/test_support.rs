#![cfg(test)]
use sea_orm::DatabaseConnection;
use configs::DatabaseConfig;
use models::db::{connect_with_config, migrate};

/// Fresh, fully migrated in-memory database for the current test.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    let db = connect_with_config(&DatabaseConfig::sqlite_memory()).await?;
    migrate(&db).await?;
    Ok(db)
}
