use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000001_eve_corporation::EveCorporation;

static IDX_CORPORATION_BILL_PERIOD: &str = "idx-billing_corporation_bill-corporation_id-year-month";
static FK_CORPORATION_BILL_CORPORATION_ID: &str = "fk-billing_corporation_bill-corporation_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BillingCorporationBill::Table)
                    .if_not_exists()
                    .col(pk_auto(BillingCorporationBill::Id))
                    .col(integer(BillingCorporationBill::CorporationId))
                    .col(integer(BillingCorporationBill::Year))
                    .col(integer(BillingCorporationBill::Month))
                    .col(double(BillingCorporationBill::MiningBill))
                    .col(double(BillingCorporationBill::PveBill))
                    .col(double(BillingCorporationBill::MiningTaxRate))
                    .col(double(BillingCorporationBill::MiningModifier))
                    .col(double(BillingCorporationBill::PveTaxRate))
                    .col(timestamp(BillingCorporationBill::CreatedAt))
                    .col(timestamp(BillingCorporationBill::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_CORPORATION_BILL_PERIOD)
                    .table(BillingCorporationBill::Table)
                    .col(BillingCorporationBill::CorporationId)
                    .col(BillingCorporationBill::Year)
                    .col(BillingCorporationBill::Month)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_CORPORATION_BILL_CORPORATION_ID)
                    .from_tbl(BillingCorporationBill::Table)
                    .from_col(BillingCorporationBill::CorporationId)
                    .to_tbl(EveCorporation::Table)
                    .to_col(EveCorporation::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_CORPORATION_BILL_CORPORATION_ID)
                    .table(BillingCorporationBill::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_CORPORATION_BILL_PERIOD)
                    .table(BillingCorporationBill::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(BillingCorporationBill::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum BillingCorporationBill {
    Table,
    Id,
    CorporationId,
    Year,
    Month,
    MiningBill,
    PveBill,
    MiningTaxRate,
    MiningModifier,
    PveTaxRate,
    CreatedAt,
    UpdatedAt,
}
