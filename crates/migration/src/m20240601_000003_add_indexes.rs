use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // LabResult: lookup by subject, non-unique
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_lab_result_nif")
                    .table(LabResult::Table)
                    .col(LabResult::Nif)
                    .to_owned(),
            )
            .await?;

        // LabResult: listing per lab
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_lab_result_lab")
                    .table(LabResult::Table)
                    .col(LabResult::LabId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_lab_result_nif").table(LabResult::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_lab_result_lab").table(LabResult::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum LabResult { Table, Nif, LabId }
