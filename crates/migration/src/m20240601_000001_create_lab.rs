//! Create `lab` table.
//!
//! `external_id` and `key_name` are both unique.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Lab::Table)
                    .if_not_exists()
                    .col(pk_auto(Lab::Id))
                    .col(string_len(Lab::ExternalId, 26).unique_key().not_null())
                    .col(string_len(Lab::KeyName, 50).unique_key().not_null())
                    .col(string_len(Lab::Name, 100).not_null())
                    .col(string_len_null(Lab::Description, 500))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Lab::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Lab { Table, Id, ExternalId, KeyName, Name, Description }
