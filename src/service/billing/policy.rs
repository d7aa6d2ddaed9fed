//! Tax policy settings and their providers.
//!
//! A [`TaxPolicy`] holds the raw percentage values of every tax setting. Services obtain it
//! through a [`TaxPolicyProvider`], either read from the settings table with
//! [`SettingTaxPolicyProvider`] or supplied directly as a static `TaxPolicy`.

use std::future::Future;

use sea_orm::ConnectionTrait;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::{data::billing::setting::SettingRepository, error::Error};

/// Named tax settings stored in the settings table
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TaxSetting {
    /// Mining tax rate of the high compliance tier (`ioretaxrate`)
    HighTierMiningTaxRate,
    /// Mining tax rate of the low compliance tier (`oretaxrate`)
    LowTierMiningTaxRate,
    /// Ore value modifier of the high compliance tier (`ioremodifier`)
    HighTierModifier,
    /// Ore value modifier of the low compliance tier (`oremodifier`)
    LowTierModifier,
    /// PvE tax rate of the high compliance tier (`ipvetaxrate`)
    HighTierPveTaxRate,
    /// PvE tax rate of the low compliance tier (`pvetaxrate`)
    LowTierPveTaxRate,
    /// Share of tracked members with a valid key required for the high compliance tier (`irate`)
    RegistrationRate,
}

impl TaxSetting {
    /// Every tax setting
    pub const ALL: [TaxSetting; 7] = [
        TaxSetting::HighTierMiningTaxRate,
        TaxSetting::LowTierMiningTaxRate,
        TaxSetting::HighTierModifier,
        TaxSetting::LowTierModifier,
        TaxSetting::HighTierPveTaxRate,
        TaxSetting::LowTierPveTaxRate,
        TaxSetting::RegistrationRate,
    ];

    /// Name of the setting in the settings table
    pub fn name(self) -> &'static str {
        match self {
            TaxSetting::HighTierMiningTaxRate => "ioretaxrate",
            TaxSetting::LowTierMiningTaxRate => "oretaxrate",
            TaxSetting::HighTierModifier => "ioremodifier",
            TaxSetting::LowTierModifier => "oremodifier",
            TaxSetting::HighTierPveTaxRate => "ipvetaxrate",
            TaxSetting::LowTierPveTaxRate => "pvetaxrate",
            TaxSetting::RegistrationRate => "irate",
        }
    }
}

/// Tax settings as percentages (0 - 100)
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TaxPolicy {
    /// Mining tax rate of the high compliance tier
    pub high_tier_mining_tax_rate: f64,
    /// Mining tax rate of the low compliance tier
    pub low_tier_mining_tax_rate: f64,
    /// Ore value modifier of the high compliance tier
    pub high_tier_modifier: f64,
    /// Ore value modifier of the low compliance tier
    pub low_tier_modifier: f64,
    /// PvE tax rate of the high compliance tier
    pub high_tier_pve_tax_rate: f64,
    /// PvE tax rate of the low compliance tier
    pub low_tier_pve_tax_rate: f64,
    /// Share of tracked members with a valid key required for the high compliance tier
    pub registration_rate: f64,
}

impl TaxPolicy {
    /// Get the value of a single setting
    pub fn get(&self, setting: TaxSetting) -> f64 {
        match setting {
            TaxSetting::HighTierMiningTaxRate => self.high_tier_mining_tax_rate,
            TaxSetting::LowTierMiningTaxRate => self.low_tier_mining_tax_rate,
            TaxSetting::HighTierModifier => self.high_tier_modifier,
            TaxSetting::LowTierModifier => self.low_tier_modifier,
            TaxSetting::HighTierPveTaxRate => self.high_tier_pve_tax_rate,
            TaxSetting::LowTierPveTaxRate => self.low_tier_pve_tax_rate,
            TaxSetting::RegistrationRate => self.registration_rate,
        }
    }

    /// Set the value of a single setting
    pub fn set(&mut self, setting: TaxSetting, value: f64) {
        let field = match setting {
            TaxSetting::HighTierMiningTaxRate => &mut self.high_tier_mining_tax_rate,
            TaxSetting::LowTierMiningTaxRate => &mut self.low_tier_mining_tax_rate,
            TaxSetting::HighTierModifier => &mut self.high_tier_modifier,
            TaxSetting::LowTierModifier => &mut self.low_tier_modifier,
            TaxSetting::HighTierPveTaxRate => &mut self.high_tier_pve_tax_rate,
            TaxSetting::LowTierPveTaxRate => &mut self.low_tier_pve_tax_rate,
            TaxSetting::RegistrationRate => &mut self.registration_rate,
        };

        *field = value;
    }
}

/// Source of the tax policy used by billing calculations
pub trait TaxPolicyProvider {
    /// Get the current tax policy
    ///
    /// # Returns
    /// - `Ok(TaxPolicy)` - The tax policy, settings without a value read as `0.0`
    /// - `Err(Error::DbErr)` - Reading the settings failed
    fn tax_policy(&self) -> impl Future<Output = Result<TaxPolicy, Error>>;
}

impl TaxPolicyProvider for TaxPolicy {
    async fn tax_policy(&self) -> Result<TaxPolicy, Error> {
        Ok(*self)
    }
}

/// Tax policy provider reading the settings table on every call
pub struct SettingTaxPolicyProvider<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SettingTaxPolicyProvider<'a, C> {
    /// Creates a new instance of [`SettingTaxPolicyProvider`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }
}

impl<C: ConnectionTrait> TaxPolicyProvider for SettingTaxPolicyProvider<'_, C> {
    async fn tax_policy(&self) -> Result<TaxPolicy, Error> {
        let setting_repo = SettingRepository::new(self.db);

        let names = TaxSetting::ALL.map(TaxSetting::name);
        let settings = setting_repo.get_many(&names).await?;

        let mut policy = TaxPolicy::default();

        for setting in TaxSetting::ALL {
            match settings.iter().find(|stored| stored.name == setting.name()) {
                Some(stored) => policy.set(setting, stored.value),
                None => warn!(
                    "Tax setting {} is not configured, using 0 instead",
                    setting.name()
                ),
            }
        }

        Ok(policy)
    }
}
