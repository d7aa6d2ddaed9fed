use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EveMarketPrice::Table)
                    .if_not_exists()
                    .col(big_integer(EveMarketPrice::TypeId).primary_key())
                    .col(double(EveMarketPrice::AveragePrice))
                    .col(double(EveMarketPrice::AdjustedPrice))
                    .col(timestamp(EveMarketPrice::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EveMarketPrice::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum EveMarketPrice {
    Table,
    TypeId,
    AveragePrice,
    AdjustedPrice,
    UpdatedAt,
}
