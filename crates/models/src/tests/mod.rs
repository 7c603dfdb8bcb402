/// Database connection and migration tests
pub mod db_tests;

/// CRUD operations tests for both entities
pub mod crud_tests;

use sea_orm::DatabaseConnection;

/// Fresh in-memory SQLite database with every migration applied.
pub(crate) async fn setup_test_db() -> anyhow::Result<DatabaseConnection> {
    let db = crate::db::connect_with_config(&configs::DatabaseConfig::sqlite_memory()).await?;
    crate::db::migrate(&db).await?;
    Ok(db)
}
