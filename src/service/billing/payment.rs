use sea_orm::ConnectionTrait;
use tracing::{debug, warn};

use crate::{
    data::eve::{character::CharacterRepository, wallet_journal::WalletJournalRepository},
    error::Error,
    service::billing::{policy::TaxPolicyProvider, BillingService},
    util::{isk::round_isk, time::month_bounds},
};

impl<'a, C: ConnectionTrait, P: TaxPolicyProvider> BillingService<'a, C, P> {
    /// Find the wallet journal entries paying a bill
    ///
    /// A bill is paid by a `player_donation` of exactly the bill amount rounded to 2 decimal
    /// places, sent by a character of the corporation during the month. Multiple identical
    /// donations in the same month all match.
    ///
    /// # Arguments
    /// - `corporation_id`: EVE Online corporation ID of the billed corporation
    /// - `amount`: Bill amount, rounded to 2 decimal places before matching
    /// - `month`: 0-based month of the donation (January = 0)
    /// - `year`: Calendar year of the donation
    ///
    /// # Returns
    /// - `Ok(Vec<i64>)`: Journal IDs of the matching donations, empty if `month` is out of range
    ///   or the corporation is unknown
    /// - `Err(Error::DbErr)`: Database error
    pub async fn get_paid_bill_from_journal(
        &self,
        corporation_id: i64,
        amount: f64,
        month: u32,
        year: i32,
    ) -> Result<Vec<i64>, Error> {
        let character_repo = CharacterRepository::new(self.db);
        let wallet_journal_repo = WalletJournalRepository::new(self.db);

        let Some((start, end)) = month
            .checked_add(1)
            .and_then(|calendar_month| month_bounds(year, calendar_month))
        else {
            warn!(
                "Month {} of {} is out of range, no payments can match",
                month, year
            );
            return Ok(Vec::new());
        };

        let Some(amount) = round_isk(amount) else {
            warn!("Bill amount {} is not a finite ISK amount", amount);
            return Ok(Vec::new());
        };

        let Some(corporation) = self.find_corporation(corporation_id).await? else {
            debug!(
                "Corporation {} not found, no payments can match",
                corporation_id
            );
            return Ok(Vec::new());
        };

        let sender_ids = character_repo
            .get_character_ids_by_corporation(corporation.id)
            .await?;

        Ok(wallet_journal_repo
            .find_donation_journal_ids(&sender_ids, amount, start, end)
            .await?)
    }
}
