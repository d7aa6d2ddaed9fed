use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000001_eve_corporation::EveCorporation;

static IDX_WALLET_JOURNAL_REF_TYPE_DATE: &str = "idx-eve_corporation_wallet_journal-ref_type-date";
static FK_WALLET_JOURNAL_CORPORATION_ID: &str = "fk-eve_corporation_wallet_journal-corporation_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EveCorporationWalletJournal::Table)
                    .if_not_exists()
                    .col(pk_auto(EveCorporationWalletJournal::Id))
                    .col(integer(EveCorporationWalletJournal::CorporationId))
                    .col(integer(EveCorporationWalletJournal::Division))
                    .col(big_integer_uniq(EveCorporationWalletJournal::JournalId))
                    .col(timestamp(EveCorporationWalletJournal::Date))
                    .col(string(EveCorporationWalletJournal::RefType))
                    .col(big_integer_null(EveCorporationWalletJournal::FirstPartyId))
                    .col(big_integer_null(EveCorporationWalletJournal::SecondPartyId))
                    .col(double(EveCorporationWalletJournal::Amount))
                    .col(text_null(EveCorporationWalletJournal::Reason))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_WALLET_JOURNAL_REF_TYPE_DATE)
                    .table(EveCorporationWalletJournal::Table)
                    .col(EveCorporationWalletJournal::RefType)
                    .col(EveCorporationWalletJournal::Date)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_WALLET_JOURNAL_CORPORATION_ID)
                    .from_tbl(EveCorporationWalletJournal::Table)
                    .from_col(EveCorporationWalletJournal::CorporationId)
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
                    .name(FK_WALLET_JOURNAL_CORPORATION_ID)
                    .table(EveCorporationWalletJournal::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_WALLET_JOURNAL_REF_TYPE_DATE)
                    .table(EveCorporationWalletJournal::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(
                Table::drop()
                    .table(EveCorporationWalletJournal::Table)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum EveCorporationWalletJournal {
    Table,
    Id,
    CorporationId,
    Division,
    JournalId,
    Date,
    RefType,
    FirstPartyId,
    SecondPartyId,
    Amount,
    Reason,
}
