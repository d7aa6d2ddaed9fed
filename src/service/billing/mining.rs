use std::collections::BTreeMap;

use sea_orm::ConnectionTrait;
use tracing::debug;

use crate::{
    data::eve::{
        character::CharacterRepository, mining::MiningRepository,
        wallet_journal::WalletJournalRepository,
    },
    error::Error,
    model::billing::{BillingPeriod, MiningLedgerEntry},
    service::billing::{policy::TaxPolicyProvider, BillingService},
    util::time::month_bounds,
};

impl<'a, C: ConnectionTrait, P: TaxPolicyProvider> BillingService<'a, C, P> {
    /// Get the value mined by a character during a billing period
    ///
    /// # Arguments
    /// - `character_id`: EVE Online character ID
    /// - `period`: Billing period to sum the character's mining ledger over
    ///
    /// # Returns
    /// - `Ok(f64)`: Sum of quantity times average market price, `0.0` if the character is unknown
    ///   or mined nothing priced
    /// - `Err(Error::DbErr)`: Database error
    pub async fn get_character_billing(
        &self,
        character_id: i64,
        period: BillingPeriod,
    ) -> Result<f64, Error> {
        let character_repo = CharacterRepository::new(self.db);
        let mining_repo = MiningRepository::new(self.db);

        let Some((character, _)) = character_repo.get_by_character_id(character_id).await? else {
            debug!("Character {} not found, billing 0", character_id);
            return Ok(0.0);
        };

        Ok(mining_repo
            .get_character_mining_value(character.id, period.year, period.month as i32)
            .await?)
    }

    /// Get the mining ledger of a corporation grouped per character
    ///
    /// # Arguments
    /// - `corporation_id`: EVE Online corporation ID
    /// - `period`: Billing period of the ledger
    ///
    /// # Returns
    /// - `Ok(Vec<MiningLedgerEntry>)`: One entry per character of the corporation with priced
    ///   mining during the period, ordered by character ID
    /// - `Err(Error::DbErr)`: Database error
    pub async fn get_mining_ledger(
        &self,
        corporation_id: i64,
        period: BillingPeriod,
    ) -> Result<Vec<MiningLedgerEntry>, Error> {
        match self.find_corporation(corporation_id).await? {
            Some(corporation) => self.mining_ledger_for_entry(corporation.id, period).await,
            None => Ok(Vec::new()),
        }
    }

    /// Get the total value mined by a corporation's characters during a billing period
    ///
    /// # Returns
    /// - `Ok(f64)`: Sum of the corporation's mining ledger, `0.0` if empty
    /// - `Err(Error::DbErr)`: Database error
    pub async fn get_mining_total(
        &self,
        corporation_id: i64,
        period: BillingPeriod,
    ) -> Result<f64, Error> {
        let ledger = self.get_mining_ledger(corporation_id, period).await?;

        Ok(ledger.iter().map(|entry| entry.amount).sum())
    }

    /// Get the bounty income recorded in a corporation's wallet during a billing period
    ///
    /// Counts `bounty_prizes` and `ess_escrow_transfer` journal entries.
    ///
    /// # Returns
    /// - `Ok(f64)`: Total bounty income, `0.0` if none
    /// - `Err(Error::DbErr)`: Database error
    pub async fn get_bounty_total(
        &self,
        corporation_id: i64,
        period: BillingPeriod,
    ) -> Result<f64, Error> {
        match self.find_corporation(corporation_id).await? {
            Some(corporation) => self.bounty_total_for_entry(corporation.id, period).await,
            None => Ok(0.0),
        }
    }

    pub(super) async fn mining_ledger_for_entry(
        &self,
        corporation_record_id: i32,
        period: BillingPeriod,
    ) -> Result<Vec<MiningLedgerEntry>, Error> {
        let mining_repo = MiningRepository::new(self.db);

        let rows = mining_repo
            .get_corporation_ledger_rows(corporation_record_id, period.year, period.month as i32)
            .await?;

        let mut ledger: BTreeMap<i64, MiningLedgerEntry> = BTreeMap::new();

        for (character_id, quantity, average_price) in rows {
            let entry = ledger.entry(character_id).or_insert(MiningLedgerEntry {
                character_id,
                quantity: 0,
                amount: 0.0,
            });

            entry.quantity += quantity;
            entry.amount += quantity as f64 * average_price;
        }

        Ok(ledger.into_values().collect())
    }

    pub(super) async fn bounty_total_for_entry(
        &self,
        corporation_record_id: i32,
        period: BillingPeriod,
    ) -> Result<f64, Error> {
        let wallet_journal_repo = WalletJournalRepository::new(self.db);

        let Some((start, end)) = month_bounds(period.year, period.month) else {
            debug!(
                "Billing period {}-{} is not a calendar month, no bounties",
                period.year, period.month
            );
            return Ok(0.0);
        };

        let totals = wallet_journal_repo
            .get_bounty_totals(corporation_record_id, start, end)
            .await?;

        Ok(totals.into_iter().filter_map(|(_, total)| total).sum())
    }
}
