use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000001_eve_corporation::EveCorporation;

static IDX_CHARACTER_BILL_PERIOD: &str =
    "idx-billing_character_bill-corporation_id-character_id-year-month";
static FK_CHARACTER_BILL_CORPORATION_ID: &str = "fk-billing_character_bill-corporation_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BillingCharacterBill::Table)
                    .if_not_exists()
                    .col(pk_auto(BillingCharacterBill::Id))
                    .col(integer(BillingCharacterBill::CorporationId))
                    .col(big_integer(BillingCharacterBill::CharacterId))
                    .col(integer(BillingCharacterBill::Year))
                    .col(integer(BillingCharacterBill::Month))
                    .col(double(BillingCharacterBill::MiningBill))
                    .col(double(BillingCharacterBill::MiningTaxRate))
                    .col(double(BillingCharacterBill::MiningModifier))
                    .col(timestamp(BillingCharacterBill::CreatedAt))
                    .col(timestamp(BillingCharacterBill::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_CHARACTER_BILL_PERIOD)
                    .table(BillingCharacterBill::Table)
                    .col(BillingCharacterBill::CorporationId)
                    .col(BillingCharacterBill::CharacterId)
                    .col(BillingCharacterBill::Year)
                    .col(BillingCharacterBill::Month)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_CHARACTER_BILL_CORPORATION_ID)
                    .from_tbl(BillingCharacterBill::Table)
                    .from_col(BillingCharacterBill::CorporationId)
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
                    .name(FK_CHARACTER_BILL_CORPORATION_ID)
                    .table(BillingCharacterBill::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_CHARACTER_BILL_PERIOD)
                    .table(BillingCharacterBill::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(BillingCharacterBill::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum BillingCharacterBill {
    Table,
    Id,
    CorporationId,
    CharacterId,
    Year,
    Month,
    MiningBill,
    MiningTaxRate,
    MiningModifier,
    CreatedAt,
    UpdatedAt,
}
