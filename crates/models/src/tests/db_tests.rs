use anyhow::Result;
use configs::DatabaseConfig;
use migration::MigratorTrait;
use sea_orm::{ConnectionTrait, DatabaseBackend, Statement};

use crate::db::{connect_with_config, migrate};

#[tokio::test]
async fn test_sqlite_memory_connection() -> Result<()> {
    let db = connect_with_config(&DatabaseConfig::sqlite_memory()).await?;
    assert_eq!(db.get_database_backend(), DatabaseBackend::Sqlite);

    let row = db
        .query_one(Statement::from_string(DatabaseBackend::Sqlite, "SELECT 1 AS one".to_string()))
        .await?;
    assert!(row.is_some());
    Ok(())
}

#[tokio::test]
async fn test_invalid_config_is_rejected_before_connecting() {
    let cfg = DatabaseConfig { url: "mysql://localhost/labs".into(), ..DatabaseConfig::default() };
    assert!(connect_with_config(&cfg).await.is_err());
}

#[tokio::test]
async fn test_migrations_are_idempotent() -> Result<()> {
    let db = connect_with_config(&DatabaseConfig::sqlite_memory()).await?;
    migrate(&db).await?;
    migrate(&db).await?;

    let applied = migration::Migrator::get_applied_migrations(&db).await?;
    assert_eq!(applied.len(), 3);
    Ok(())
}
