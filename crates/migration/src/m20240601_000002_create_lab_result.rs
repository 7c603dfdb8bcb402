//! Create `lab_result` table.
//!
//! `lab_id` points at `lab.id` but carries no foreign key, and `nif` is not unique.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(LabResult::Table)
                    .if_not_exists()
                    .col(pk_auto(LabResult::Id))
                    .col(string_len(LabResult::ExternalId, 26).unique_key().not_null())
                    .col(integer(LabResult::LabId).not_null())
                    .col(string_len(LabResult::Nif, 50).not_null())
                    .col(string_len(LabResult::PatientName, 100).not_null())
                    .col(big_integer(LabResult::ResultDate).not_null())
                    .col(text(LabResult::Data).not_null())
                    .col(string_len(LabResult::Status, 50).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(LabResult::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum LabResult {
    Table,
    Id,
    ExternalId,
    LabId,
    Nif,
    PatientName,
    ResultDate,
    Data,
    Status,
}
