use sea_orm::ConnectionTrait;
use tracing::warn;

use crate::{
    data::{
        billing::{
            character_bill::CharacterBillRepository, corporation_bill::CorporationBillRepository,
        },
        eve::corporation::CorporationRepository,
    },
    error::Error,
    model::{
        billing::BillingPeriod,
        db::{CharacterBillModel, CorporationBillModel},
    },
    service::billing::{policy::TaxPolicyProvider, BillingService},
};

impl<'a, C: ConnectionTrait, P: TaxPolicyProvider> BillingService<'a, C, P> {
    /// Get the billing periods with a corporation bill for any of the provided corporations
    ///
    /// # Arguments
    /// - `corporation_ids`: EVE Online corporation IDs, unknown IDs are ignored
    ///
    /// # Returns
    /// - `Ok(Vec<BillingPeriod>)`: Distinct periods ordered by year descending, then month
    ///   descending
    /// - `Err(Error::DbErr)`: Database error
    pub async fn get_corporation_billing_months(
        &self,
        corporation_ids: &[i64],
    ) -> Result<Vec<BillingPeriod>, Error> {
        let corporation_repo = CorporationRepository::new(self.db);
        let corporation_bill_repo = CorporationBillRepository::new(self.db);

        let corporation_record_ids: Vec<i32> = corporation_repo
            .get_entry_ids_by_corporation_ids(corporation_ids)
            .await?
            .into_iter()
            .map(|(record_id, _)| record_id)
            .collect();

        if corporation_record_ids.is_empty() {
            return Ok(Vec::new());
        }

        let months = corporation_bill_repo
            .get_billing_months(&corporation_record_ids)
            .await?;

        Ok(months
            .into_iter()
            .filter_map(|(year, month)| match u32::try_from(month) {
                Ok(month) => Some(BillingPeriod::new(year, month)),
                Err(_) => {
                    warn!("Skipping corporation bill with invalid month {}-{}", year, month);
                    None
                }
            })
            .collect())
    }

    /// Get the bill of a corporation for a billing period
    ///
    /// # Returns
    /// - `Ok(Some(CorporationBillModel))`: The corporation's bill
    /// - `Ok(None)`: The corporation is unknown or wasn't billed for the period
    /// - `Err(Error::DbErr)`: Database error
    pub async fn get_corporation_bill_by_month(
        &self,
        corporation_id: i64,
        period: BillingPeriod,
    ) -> Result<Option<CorporationBillModel>, Error> {
        let corporation_bill_repo = CorporationBillRepository::new(self.db);

        let Some(corporation) = self.find_corporation(corporation_id).await? else {
            return Ok(None);
        };

        Ok(corporation_bill_repo
            .get_by_month(corporation.id, period.year, period.month as i32)
            .await?)
    }

    /// Get the bills of every main character of a corporation for a billing period
    ///
    /// # Returns
    /// - `Ok(Vec<CharacterBillModel>)`: Bills ordered by main character ID, empty if the
    ///   corporation is unknown or no bills exist for the period
    /// - `Err(Error::DbErr)`: Database error
    pub async fn get_past_mains_billing_by_month(
        &self,
        corporation_id: i64,
        period: BillingPeriod,
    ) -> Result<Vec<CharacterBillModel>, Error> {
        let character_bill_repo = CharacterBillRepository::new(self.db);

        let Some(corporation) = self.find_corporation(corporation_id).await? else {
            return Ok(Vec::new());
        };

        Ok(character_bill_repo
            .get_many_by_month(corporation.id, period.year, period.month as i32)
            .await?)
    }
}
