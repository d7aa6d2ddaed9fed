use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000002_eve_character::EveCharacter;

static IDX_CHARACTER_MINING_PERIOD: &str = "idx-eve_character_mining-character_id-year-month";
static FK_CHARACTER_MINING_CHARACTER_ID: &str = "fk-eve_character_mining-character_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EveCharacterMining::Table)
                    .if_not_exists()
                    .col(pk_auto(EveCharacterMining::Id))
                    .col(integer(EveCharacterMining::CharacterId))
                    .col(date(EveCharacterMining::Date))
                    .col(integer(EveCharacterMining::Year))
                    .col(integer(EveCharacterMining::Month))
                    .col(big_integer(EveCharacterMining::SolarSystemId))
                    .col(big_integer(EveCharacterMining::TypeId))
                    .col(big_integer(EveCharacterMining::Quantity))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_CHARACTER_MINING_PERIOD)
                    .table(EveCharacterMining::Table)
                    .col(EveCharacterMining::CharacterId)
                    .col(EveCharacterMining::Year)
                    .col(EveCharacterMining::Month)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_CHARACTER_MINING_CHARACTER_ID)
                    .from_tbl(EveCharacterMining::Table)
                    .from_col(EveCharacterMining::CharacterId)
                    .to_tbl(EveCharacter::Table)
                    .to_col(EveCharacter::Id)
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
                    .name(FK_CHARACTER_MINING_CHARACTER_ID)
                    .table(EveCharacterMining::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_CHARACTER_MINING_PERIOD)
                    .table(EveCharacterMining::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(EveCharacterMining::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum EveCharacterMining {
    Table,
    Id,
    CharacterId,
    Date,
    Year,
    Month,
    SolarSystemId,
    TypeId,
    Quantity,
}
