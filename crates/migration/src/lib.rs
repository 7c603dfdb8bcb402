//! Migrator registering table migrations first, indexes last.
pub use sea_orm_migration::prelude::*;

mod m20240601_000001_create_lab;
mod m20240601_000002_create_lab_result;
mod m20240601_000003_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240601_000001_create_lab::Migration),
            Box::new(m20240601_000002_create_lab_result::Migration),
            // Indexes should always be applied last
            Box::new(m20240601_000003_add_indexes::Migration),
        ]
    }
}
