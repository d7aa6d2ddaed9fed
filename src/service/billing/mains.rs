use std::collections::BTreeMap;

use chrono::Utc;
use sea_orm::ConnectionTrait;
use tracing::{debug, warn};

use crate::{
    data::{
        eve::mining::MiningRepository,
        user::{user_character::UserCharacterRepository, UserRepository},
    },
    error::Error,
    model::billing::{BillingPeriod, MainBillingSummary},
    service::billing::{policy::TaxPolicyProvider, BillingService},
    util::time::previous_billing_period,
};

impl<'a, C: ConnectionTrait, P: TaxPolicyProvider> BillingService<'a, C, P> {
    /// Get the mining billing of every main character for the previous calendar month
    ///
    /// See [`Self::get_mains_billing_for_period`], evaluated for the month before the current
    /// one (December of the prior year in January).
    pub async fn get_mains_billing(
        &self,
        corporation_id: i64,
    ) -> Result<BTreeMap<i64, MainBillingSummary>, Error> {
        let period = previous_billing_period(Utc::now());

        self.get_mains_billing_for_period(corporation_id, period)
            .await
    }

    /// Get the mining billing of every main character with characters in a corporation
    ///
    /// For every user, the mining value of each owned character affiliated with the corporation
    /// is added to a total keyed by the EVE character ID of the user's main. Owned characters are
    /// visited in ascending record ID order; the summary records the last character matched.
    ///
    /// # Arguments
    /// - `corporation_id`: EVE Online corporation ID
    /// - `period`: Billing period to sum mining over
    ///
    /// # Returns
    /// - `Ok(BTreeMap<i64, MainBillingSummary>)`: Summary per main character ID, empty if the
    ///   corporation is unknown. Mains without characters in the corporation are absent.
    /// - `Err(Error::DbErr)`: Database error
    pub async fn get_mains_billing_for_period(
        &self,
        corporation_id: i64,
        period: BillingPeriod,
    ) -> Result<BTreeMap<i64, MainBillingSummary>, Error> {
        let Some(corporation) = self.find_corporation(corporation_id).await? else {
            debug!(
                "Corporation {} not found, no mains to bill",
                corporation_id
            );
            return Ok(BTreeMap::new());
        };

        // Every matched character belongs to this corporation, so they share its tax rate
        let tax_rate = self
            .tax_rates_for_corporation_entry(corporation.id)
            .await?
            .tax_rate;

        self.mains_billing_for_entry(corporation.id, period, tax_rate)
            .await
    }

    /// Sum mining per main for a corporation entry, recording `tax_rate` on every summary
    pub(super) async fn mains_billing_for_entry(
        &self,
        corporation_record_id: i32,
        period: BillingPeriod,
        tax_rate: f64,
    ) -> Result<BTreeMap<i64, MainBillingSummary>, Error> {
        let user_repo = UserRepository::new(self.db);
        let user_character_repo = UserCharacterRepository::new(self.db);
        let mining_repo = MiningRepository::new(self.db);

        let mut summary: BTreeMap<i64, MainBillingSummary> = BTreeMap::new();

        for (user, main_character) in user_repo.get_all_with_main_character().await? {
            let Some(main_character) = main_character else {
                warn!(
                    "Main character of user {} not found, skipping user",
                    user.id
                );
                continue;
            };

            let characters = user_character_repo
                .get_characters_by_user_id(user.id)
                .await?;

            for (_, character) in characters {
                let Some(character) = character else {
                    continue;
                };

                if character.corporation_id != corporation_record_id {
                    continue;
                }

                let amount = mining_repo
                    .get_character_mining_value(character.id, period.year, period.month as i32)
                    .await?;

                let entry = summary
                    .entry(main_character.character_id)
                    .or_insert(MainBillingSummary {
                        amount: 0.0,
                        character_id: character.character_id,
                        tax_rate,
                    });

                entry.amount += amount;
                entry.character_id = character.character_id;
            }
        }

        Ok(summary)
    }
}
