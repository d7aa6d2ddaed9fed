use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::model::billing::BillingPeriod;

pub struct CharacterBillRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CharacterBillRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Get all character bills of a corporation for a billing period
    ///
    /// Bills are ordered by ascending main character ID.
    pub async fn get_many_by_month(
        &self,
        corporation_id: i32,
        year: i32,
        month: i32,
    ) -> Result<Vec<entity::billing_character_bill::Model>, DbErr> {
        entity::prelude::BillingCharacterBill::find()
            .filter(entity::billing_character_bill::Column::CorporationId.eq(corporation_id))
            .filter(entity::billing_character_bill::Column::Year.eq(year))
            .filter(entity::billing_character_bill::Column::Month.eq(month))
            .order_by_asc(entity::billing_character_bill::Column::CharacterId)
            .all(self.db)
            .await
    }

    /// Create or update the bill of a main character for a billing period
    ///
    /// # Arguments
    /// - `corporation_id`: Record ID of the corporation entry in the database
    /// - `character_id`: EVE Online character ID of the main character
    /// - `period`: Billing period of the bill
    /// - `mining_bill`: Total value mined by the main's characters in the corporation
    /// - `tax_rate`: Mining tax rate as a fraction
    /// - `modifier`: Mining value modifier as a fraction
    pub async fn upsert(
        &self,
        corporation_id: i32,
        character_id: i64,
        period: BillingPeriod,
        mining_bill: f64,
        tax_rate: f64,
        modifier: f64,
    ) -> Result<entity::billing_character_bill::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let existing = entity::prelude::BillingCharacterBill::find()
            .filter(entity::billing_character_bill::Column::CorporationId.eq(corporation_id))
            .filter(entity::billing_character_bill::Column::CharacterId.eq(character_id))
            .filter(entity::billing_character_bill::Column::Year.eq(period.year))
            .filter(entity::billing_character_bill::Column::Month.eq(period.month as i32))
            .one(self.db)
            .await?;

        if let Some(existing) = existing {
            let mut bill = existing.into_active_model();
            bill.mining_bill = ActiveValue::Set(mining_bill);
            bill.mining_tax_rate = ActiveValue::Set(tax_rate);
            bill.mining_modifier = ActiveValue::Set(modifier);
            bill.updated_at = ActiveValue::Set(now);

            return bill.update(self.db).await;
        }

        let bill = entity::billing_character_bill::ActiveModel {
            corporation_id: ActiveValue::Set(corporation_id),
            character_id: ActiveValue::Set(character_id),
            year: ActiveValue::Set(period.year),
            month: ActiveValue::Set(period.month as i32),
            mining_bill: ActiveValue::Set(mining_bill),
            mining_tax_rate: ActiveValue::Set(tax_rate),
            mining_modifier: ActiveValue::Set(modifier),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        bill.insert(self.db).await
    }
}
