use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000001_eve_corporation::EveCorporation;

static IDX_MEMBER_TRACKING_CORPORATION_ID: &str =
    "idx-eve_corporation_member_tracking-corporation_id";
static FK_MEMBER_TRACKING_CORPORATION_ID: &str =
    "fk-eve_corporation_member_tracking-corporation_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EveCorporationMemberTracking::Table)
                    .if_not_exists()
                    .col(pk_auto(EveCorporationMemberTracking::Id))
                    .col(integer(EveCorporationMemberTracking::CorporationId))
                    .col(big_integer(EveCorporationMemberTracking::CharacterId))
                    .col(boolean(EveCorporationMemberTracking::KeyOk))
                    .col(timestamp(EveCorporationMemberTracking::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_MEMBER_TRACKING_CORPORATION_ID)
                    .table(EveCorporationMemberTracking::Table)
                    .col(EveCorporationMemberTracking::CorporationId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_MEMBER_TRACKING_CORPORATION_ID)
                    .from_tbl(EveCorporationMemberTracking::Table)
                    .from_col(EveCorporationMemberTracking::CorporationId)
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
                    .name(FK_MEMBER_TRACKING_CORPORATION_ID)
                    .table(EveCorporationMemberTracking::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_MEMBER_TRACKING_CORPORATION_ID)
                    .table(EveCorporationMemberTracking::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(
                Table::drop()
                    .table(EveCorporationMemberTracking::Table)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum EveCorporationMemberTracking {
    Table,
    Id,
    CorporationId,
    CharacterId,
    KeyOk,
    UpdatedAt,
}
