use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BillingSetting::Table)
                    .if_not_exists()
                    .col(string(BillingSetting::Name).primary_key())
                    .col(double(BillingSetting::Value))
                    .col(timestamp(BillingSetting::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BillingSetting::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum BillingSetting {
    Table,
    Name,
    Value,
    UpdatedAt,
}
