use sea_orm::{ConnectionTrait, TransactionSession, TransactionTrait};
use tracing::{info, warn};

use crate::{
    data::billing::{
        character_bill::CharacterBillRepository, corporation_bill::CorporationBillRepository,
    },
    error::Error,
    model::billing::{BillingPeriod, GeneratedBills},
    service::billing::{policy::TaxPolicyProvider, BillingService},
};

impl<'a, C, P> BillingService<'a, C, P>
where
    C: ConnectionTrait + TransactionTrait,
    P: TaxPolicyProvider,
{
    /// Generate and persist the bills of a corporation for a billing period
    ///
    /// Computes the corporation's tax rates, mining total, bounty total and per main billing,
    /// then stores one corporation bill and one character bill per main in a single transaction.
    /// Bills that already exist for the period are updated, so generating the same period again
    /// leaves one bill per corporation and main.
    ///
    /// # Arguments
    /// - `corporation_id`: EVE Online corporation ID
    /// - `period`: Billing period to generate bills for
    ///
    /// # Returns
    /// - `Ok(Some(GeneratedBills))`: The persisted bills
    /// - `Ok(None)`: The corporation is unknown
    /// - `Err(Error::DbErr)`: Database error, no bills are persisted
    pub async fn generate_bills(
        &self,
        corporation_id: i64,
        period: BillingPeriod,
    ) -> Result<Option<GeneratedBills>, Error> {
        let Some(corporation) = self.find_corporation(corporation_id).await? else {
            warn!(
                "Corporation {} not found, no bills generated for {}-{:02}",
                corporation_id, period.year, period.month
            );
            return Ok(None);
        };

        let rates = self.tax_rates_for_corporation_entry(corporation.id).await?;
        let mining_total: f64 = self
            .mining_ledger_for_entry(corporation.id, period)
            .await?
            .iter()
            .map(|entry| entry.amount)
            .sum();
        let bounty_total = self.bounty_total_for_entry(corporation.id, period).await?;
        let mains = self
            .mains_billing_for_entry(corporation.id, period, rates.tax_rate)
            .await?;

        let txn = self.db.begin().await?;

        let corporation_bill = CorporationBillRepository::new(&txn)
            .upsert(corporation.id, period, mining_total, bounty_total, rates)
            .await?;

        let character_bill_repo = CharacterBillRepository::new(&txn);
        let mut character_bills = Vec::with_capacity(mains.len());

        for (main_character_id, summary) in mains {
            let character_bill = character_bill_repo
                .upsert(
                    corporation.id,
                    main_character_id,
                    period,
                    summary.amount,
                    summary.tax_rate,
                    rates.modifier,
                )
                .await?;

            character_bills.push(character_bill);
        }

        txn.commit().await?;

        info!(
            "Generated bills for corporation {} ({}) for {}-{:02}: mining {:.2} ISK, bounties {:.2} ISK, {} mains",
            corporation.name,
            corporation_id,
            period.year,
            period.month,
            mining_total,
            bounty_total,
            character_bills.len()
        );

        Ok(Some(GeneratedBills {
            corporation_id,
            corporation_bill,
            character_bills,
        }))
    }
}
