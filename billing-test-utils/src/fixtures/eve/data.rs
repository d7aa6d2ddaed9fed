//! EVE entity database insertion utilities.
//!
//! Parent entities are created automatically where possible: inserting a character creates its
//! corporation if missing. Entries that reference a character by EVE ID require the character
//! to be inserted first.

use chrono::{NaiveDate, NaiveDateTime, Utc};
use sea_orm::{ActiveValue, ColumnTrait, DbErr, EntityTrait, QueryFilter};

use crate::{
    error::TestError,
    fixtures::eve::{
        factory::{
            mock_character, mock_corporation, mock_journal_entry, mock_mining, CONCORD_ID,
        },
        EveFixtures,
    },
    model::{
        EveCharacterModel, EveCorporationModel, MarketPriceModel, MemberTrackingModel,
        MiningModel, WalletJournalModel,
    },
};

impl<'a> EveFixtures<'a> {
    /// Insert a mock corporation into the database.
    ///
    /// If a corporation with the specified ID already exists, returns the existing record
    /// instead of creating a duplicate.
    ///
    /// # Arguments
    /// - `corporation_id` - The EVE Online corporation ID to insert
    ///
    /// # Returns
    /// - `Ok(EveCorporationModel)` - The created or existing corporation record
    /// - `Err(TestError::DbErr)` - Database query or insert operation failed
    pub async fn insert_mock_corporation(
        &self,
        corporation_id: i64,
    ) -> Result<EveCorporationModel, TestError> {
        if let Some(existing_corporation) = entity::prelude::EveCorporation::find()
            .filter(entity::eve_corporation::Column::CorporationId.eq(corporation_id))
            .one(&self.setup.db)
            .await?
        {
            return Ok(existing_corporation);
        }

        Ok(
            entity::prelude::EveCorporation::insert(mock_corporation(corporation_id))
                .exec_with_returning(&self.setup.db)
                .await?,
        )
    }

    /// Insert a mock character into the database.
    ///
    /// The character's corporation is created if it doesn't exist. If a character with the
    /// specified ID already exists, returns the existing record.
    ///
    /// # Arguments
    /// - `character_id` - The EVE Online character ID to insert
    /// - `corporation_id` - The EVE Online corporation ID the character belongs to
    ///
    /// # Returns
    /// - `Ok(EveCharacterModel)` - The created or existing character record
    /// - `Err(TestError::DbErr)` - Database query or insert operation failed
    pub async fn insert_mock_character(
        &self,
        character_id: i64,
        corporation_id: i64,
    ) -> Result<EveCharacterModel, TestError> {
        if let Some(existing_character) = self.find_character(character_id).await? {
            return Ok(existing_character);
        }

        let corporation = self.insert_mock_corporation(corporation_id).await?;

        Ok(
            entity::prelude::EveCharacter::insert(mock_character(character_id, corporation.id))
                .exec_with_returning(&self.setup.db)
                .await?,
        )
    }

    /// Insert a member tracking entry for a corporation.
    ///
    /// # Arguments
    /// - `corporation_id` - The EVE Online corporation ID tracking the member
    /// - `character_id` - The EVE Online character ID of the member
    /// - `key_ok` - Whether the member has registered a valid key
    pub async fn insert_member_tracking(
        &self,
        corporation_id: i64,
        character_id: i64,
        key_ok: bool,
    ) -> Result<MemberTrackingModel, TestError> {
        let corporation = self.insert_mock_corporation(corporation_id).await?;

        Ok(entity::prelude::EveCorporationMemberTracking::insert(
            entity::eve_corporation_member_tracking::ActiveModel {
                corporation_id: ActiveValue::Set(corporation.id),
                character_id: ActiveValue::Set(character_id),
                key_ok: ActiveValue::Set(key_ok),
                updated_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            },
        )
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    /// Insert tracking entries for a number of registered and unregistered members.
    ///
    /// Members are given sequential character IDs that don't correspond to character entries.
    ///
    /// # Arguments
    /// - `corporation_id` - The EVE Online corporation ID tracking the members
    /// - `registered` - Number of members with a valid key
    /// - `unregistered` - Number of members without a valid key
    pub async fn insert_tracked_members(
        &self,
        corporation_id: i64,
        registered: usize,
        unregistered: usize,
    ) -> Result<(), TestError> {
        for index in 0..(registered + unregistered) {
            let character_id = 90_000_000 + index as i64;

            self.insert_member_tracking(corporation_id, character_id, index < registered)
                .await?;
        }

        Ok(())
    }

    /// Insert the market price of an ore type.
    ///
    /// # Arguments
    /// - `type_id` - Ore type ID
    /// - `average_price` - Average market price per unit
    pub async fn insert_market_price(
        &self,
        type_id: i64,
        average_price: f64,
    ) -> Result<MarketPriceModel, TestError> {
        Ok(
            entity::prelude::EveMarketPrice::insert(entity::eve_market_price::ActiveModel {
                type_id: ActiveValue::Set(type_id),
                average_price: ActiveValue::Set(average_price),
                adjusted_price: ActiveValue::Set(average_price),
                updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a mining ledger entry for an existing character.
    ///
    /// # Arguments
    /// - `character_id` - The EVE Online character ID of the miner
    /// - `date` - Day the ore was mined, also determines the entry's year and month
    /// - `type_id` - Ore type ID
    /// - `quantity` - Units mined
    ///
    /// # Returns
    /// - `Ok(MiningModel)` - The created ledger entry
    /// - `Err(TestError::DbErr)` - The character doesn't exist or the insert failed
    pub async fn insert_mining(
        &self,
        character_id: i64,
        date: NaiveDate,
        type_id: i64,
        quantity: i64,
    ) -> Result<MiningModel, TestError> {
        let character = self.require_character(character_id).await?;

        Ok(
            entity::prelude::EveCharacterMining::insert(mock_mining(
                character.id,
                date,
                type_id,
                quantity,
            ))
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a player donation into a corporation's wallet journal.
    ///
    /// # Arguments
    /// - `corporation_id` - The EVE Online corporation ID owning the wallet
    /// - `journal_id` - Unique journal entry ID
    /// - `sender_id` - The EVE Online character ID of the donor
    /// - `amount` - Donated amount
    /// - `date` - Date of the donation
    pub async fn insert_donation(
        &self,
        corporation_id: i64,
        journal_id: i64,
        sender_id: i64,
        amount: f64,
        date: NaiveDateTime,
    ) -> Result<WalletJournalModel, TestError> {
        let corporation = self.insert_mock_corporation(corporation_id).await?;

        let mut entry = mock_journal_entry(
            corporation.id,
            journal_id,
            "player_donation",
            date,
            amount,
        );
        entry.first_party_id = ActiveValue::Set(Some(sender_id));
        entry.second_party_id = ActiveValue::Set(Some(corporation_id));
        entry.reason = ActiveValue::Set(Some("tax".to_string()));

        Ok(
            entity::prelude::EveCorporationWalletJournal::insert(entry)
                .exec_with_returning(&self.setup.db)
                .await?,
        )
    }

    /// Insert a bounty payout into a corporation's wallet journal.
    ///
    /// # Arguments
    /// - `corporation_id` - The EVE Online corporation ID owning the wallet
    /// - `journal_id` - Unique journal entry ID
    /// - `ref_type` - Journal reference type, e.g. `bounty_prizes`
    /// - `character_id` - The EVE Online character ID that earned the bounty
    /// - `amount` - Corporation share of the bounty
    /// - `date` - Date of the payout
    pub async fn insert_bounty(
        &self,
        corporation_id: i64,
        journal_id: i64,
        ref_type: &str,
        character_id: i64,
        amount: f64,
        date: NaiveDateTime,
    ) -> Result<WalletJournalModel, TestError> {
        let corporation = self.insert_mock_corporation(corporation_id).await?;

        let mut entry = mock_journal_entry(corporation.id, journal_id, ref_type, date, amount);
        entry.first_party_id = ActiveValue::Set(Some(CONCORD_ID));
        entry.second_party_id = ActiveValue::Set(Some(character_id));

        Ok(
            entity::prelude::EveCorporationWalletJournal::insert(entry)
                .exec_with_returning(&self.setup.db)
                .await?,
        )
    }

    async fn find_character(
        &self,
        character_id: i64,
    ) -> Result<Option<EveCharacterModel>, TestError> {
        Ok(entity::prelude::EveCharacter::find()
            .filter(entity::eve_character::Column::CharacterId.eq(character_id))
            .one(&self.setup.db)
            .await?)
    }

    pub(crate) async fn require_character(
        &self,
        character_id: i64,
    ) -> Result<EveCharacterModel, TestError> {
        self.find_character(character_id).await?.ok_or_else(|| {
            TestError::DbErr(DbErr::RecordNotFound(format!(
                "character {} must be inserted first",
                character_id
            )))
        })
    }
}
