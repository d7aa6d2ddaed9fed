//! Tax policy setting and bill fixture utilities.

use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    constant::{
        DEFAULT_TAX_SETTINGS, TEST_HIGH_TIER_MINING_TAX_RATE, TEST_HIGH_TIER_MODIFIER,
        TEST_HIGH_TIER_PVE_TAX_RATE,
    },
    error::TestError,
    model::{CharacterBillModel, CorporationBillModel, SettingModel},
    TestContext,
};

impl TestContext {
    pub fn billing<'a>(&'a self) -> BillingFixtures<'a> {
        BillingFixtures { setup: self }
    }
}

pub struct BillingFixtures<'a> {
    pub setup: &'a TestContext,
}

impl<'a> BillingFixtures<'a> {
    /// Insert a tax policy setting.
    ///
    /// # Arguments
    /// - `name` - Setting name, e.g. `ioretaxrate`
    /// - `value` - Setting value as a percentage
    pub async fn insert_setting(&self, name: &str, value: f64) -> Result<SettingModel, TestError> {
        Ok(
            entity::prelude::BillingSetting::insert(entity::billing_setting::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                value: ActiveValue::Set(value),
                updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert every tax policy setting with its value from [`DEFAULT_TAX_SETTINGS`].
    pub async fn insert_default_settings(&self) -> Result<Vec<SettingModel>, TestError> {
        let mut settings = Vec::new();

        for (name, value) in DEFAULT_TAX_SETTINGS {
            settings.push(self.insert_setting(name, value).await?);
        }

        Ok(settings)
    }

    /// Insert a corporation bill taxed at the high compliance tier rates.
    ///
    /// The corporation is created if it doesn't exist.
    ///
    /// # Arguments
    /// - `corporation_id` - The EVE Online corporation ID being billed
    /// - `year` - Calendar year of the bill
    /// - `month` - Calendar month of the bill, 1-based
    /// - `mining_bill` - Total value mined during the month
    pub async fn insert_corporation_bill(
        &self,
        corporation_id: i64,
        year: i32,
        month: i32,
        mining_bill: f64,
    ) -> Result<CorporationBillModel, TestError> {
        let corporation = self
            .setup
            .eve()
            .insert_mock_corporation(corporation_id)
            .await?;

        Ok(entity::prelude::BillingCorporationBill::insert(
            entity::billing_corporation_bill::ActiveModel {
                corporation_id: ActiveValue::Set(corporation.id),
                year: ActiveValue::Set(year),
                month: ActiveValue::Set(month),
                mining_bill: ActiveValue::Set(mining_bill),
                pve_bill: ActiveValue::Set(0.0),
                mining_tax_rate: ActiveValue::Set(TEST_HIGH_TIER_MINING_TAX_RATE / 100.0),
                mining_modifier: ActiveValue::Set(TEST_HIGH_TIER_MODIFIER / 100.0),
                pve_tax_rate: ActiveValue::Set(TEST_HIGH_TIER_PVE_TAX_RATE / 100.0),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                updated_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            },
        )
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    /// Insert a character bill taxed at the high compliance tier rates.
    ///
    /// # Arguments
    /// - `corporation_id` - The EVE Online corporation ID the bill belongs to
    /// - `character_id` - The EVE Online character ID of the billed main
    /// - `year` - Calendar year of the bill
    /// - `month` - Calendar month of the bill, 1-based
    /// - `mining_bill` - Total value mined during the month
    pub async fn insert_character_bill(
        &self,
        corporation_id: i64,
        character_id: i64,
        year: i32,
        month: i32,
        mining_bill: f64,
    ) -> Result<CharacterBillModel, TestError> {
        let corporation = self
            .setup
            .eve()
            .insert_mock_corporation(corporation_id)
            .await?;

        Ok(entity::prelude::BillingCharacterBill::insert(
            entity::billing_character_bill::ActiveModel {
                corporation_id: ActiveValue::Set(corporation.id),
                character_id: ActiveValue::Set(character_id),
                year: ActiveValue::Set(year),
                month: ActiveValue::Set(month),
                mining_bill: ActiveValue::Set(mining_bill),
                mining_tax_rate: ActiveValue::Set(TEST_HIGH_TIER_MINING_TAX_RATE / 100.0),
                mining_modifier: ActiveValue::Set(TEST_HIGH_TIER_MODIFIER / 100.0),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                updated_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            },
        )
        .exec_with_returning(&self.setup.db)
        .await?)
    }
}
