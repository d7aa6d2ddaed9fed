use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder, QuerySelect,
};

use crate::model::billing::{BillingPeriod, TaxRates};

pub struct CorporationBillRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CorporationBillRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Get the distinct billing months with a bill for any of the provided corporations
    ///
    /// # Arguments
    /// - `corporation_ids`: Record IDs of the corporation entries in the database
    ///
    /// # Returns
    /// `(year, month)` tuples ordered by year descending, then month descending
    pub async fn get_billing_months(
        &self,
        corporation_ids: &[i32],
    ) -> Result<Vec<(i32, i32)>, DbErr> {
        entity::prelude::BillingCorporationBill::find()
            .select_only()
            .column(entity::billing_corporation_bill::Column::Year)
            .column(entity::billing_corporation_bill::Column::Month)
            .distinct()
            .filter(
                entity::billing_corporation_bill::Column::CorporationId
                    .is_in(corporation_ids.iter().copied()),
            )
            .order_by_desc(entity::billing_corporation_bill::Column::Year)
            .order_by_desc(entity::billing_corporation_bill::Column::Month)
            .into_tuple::<(i32, i32)>()
            .all(self.db)
            .await
    }

    pub async fn get_by_month(
        &self,
        corporation_id: i32,
        year: i32,
        month: i32,
    ) -> Result<Option<entity::billing_corporation_bill::Model>, DbErr> {
        entity::prelude::BillingCorporationBill::find()
            .filter(entity::billing_corporation_bill::Column::CorporationId.eq(corporation_id))
            .filter(entity::billing_corporation_bill::Column::Year.eq(year))
            .filter(entity::billing_corporation_bill::Column::Month.eq(month))
            .one(self.db)
            .await
    }

    /// Create or update the bill of a corporation for a billing period
    ///
    /// An existing bill for the same corporation and period is updated in place, so repeated
    /// calls leave a single bill.
    ///
    /// # Arguments
    /// - `corporation_id`: Record ID of the corporation entry in the database
    /// - `period`: Billing period of the bill
    /// - `mining_bill`: Total value mined by the corporation's characters
    /// - `pve_bill`: Total bounty income of the corporation
    /// - `rates`: Tax rates applied to the bill
    pub async fn upsert(
        &self,
        corporation_id: i32,
        period: BillingPeriod,
        mining_bill: f64,
        pve_bill: f64,
        rates: TaxRates,
    ) -> Result<entity::billing_corporation_bill::Model, DbErr> {
        let now = Utc::now().naive_utc();

        match self
            .get_by_month(corporation_id, period.year, period.month as i32)
            .await?
        {
            Some(existing) => {
                let mut bill = existing.into_active_model();
                bill.mining_bill = ActiveValue::Set(mining_bill);
                bill.pve_bill = ActiveValue::Set(pve_bill);
                bill.mining_tax_rate = ActiveValue::Set(rates.tax_rate);
                bill.mining_modifier = ActiveValue::Set(rates.modifier);
                bill.pve_tax_rate = ActiveValue::Set(rates.pve_tax_rate);
                bill.updated_at = ActiveValue::Set(now);

                bill.update(self.db).await
            }
            None => {
                let bill = entity::billing_corporation_bill::ActiveModel {
                    corporation_id: ActiveValue::Set(corporation_id),
                    year: ActiveValue::Set(period.year),
                    month: ActiveValue::Set(period.month as i32),
                    mining_bill: ActiveValue::Set(mining_bill),
                    pve_bill: ActiveValue::Set(pve_bill),
                    mining_tax_rate: ActiveValue::Set(rates.tax_rate),
                    mining_modifier: ActiveValue::Set(rates.modifier),
                    pve_tax_rate: ActiveValue::Set(rates.pve_tax_rate),
                    created_at: ActiveValue::Set(now),
                    updated_at: ActiveValue::Set(now),
                    ..Default::default()
                };

                bill.insert(self.db).await
            }
        }
    }
}
