//! Compliance tier selection and tax rate lookups.
//!
//! Corporations whose share of tracked members with a valid key reaches the policy's
//! registration rate are taxed at the high compliance tier rates; all others at the low
//! compliance tier rates.

use sea_orm::ConnectionTrait;
use tracing::debug;

use crate::{
    data::eve::{character::CharacterRepository, member_tracking::MemberTrackingRepository},
    error::Error,
    model::billing::TaxRates,
    service::billing::{
        policy::{TaxPolicy, TaxPolicyProvider},
        BillingService,
    },
};

/// Tax tier of a corporation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ComplianceTier {
    /// Registration ratio at or above the registration rate
    High,
    /// Registration ratio below the registration rate
    Low,
}

/// Share of tracked members that registered a valid key
///
/// A corporation without tracked members is treated as having one, so the ratio is `0.0`.
pub fn registration_ratio(registered: u64, total: u64) -> f64 {
    registered as f64 / total.max(1) as f64
}

/// Select the compliance tier for a corporation's member tracking counts
pub fn compliance_tier(policy: &TaxPolicy, registered: u64, total: u64) -> ComplianceTier {
    if registration_ratio(registered, total) < policy.registration_rate / 100.0 {
        ComplianceTier::Low
    } else {
        ComplianceTier::High
    }
}

/// Resolve the tax rates of a corporation's compliance tier as fractions
///
/// # Arguments
/// - `policy`: Tax policy with percentage values
/// - `registered`: Number of tracked members with a valid key
/// - `total`: Number of tracked members
pub fn resolve_tax_rates(policy: &TaxPolicy, registered: u64, total: u64) -> TaxRates {
    let (tax_rate, modifier, pve_tax_rate) = match compliance_tier(policy, registered, total) {
        ComplianceTier::High => (
            policy.high_tier_mining_tax_rate,
            policy.high_tier_modifier,
            policy.high_tier_pve_tax_rate,
        ),
        ComplianceTier::Low => (
            policy.low_tier_mining_tax_rate,
            policy.low_tier_modifier,
            policy.low_tier_pve_tax_rate,
        ),
    };

    TaxRates {
        tax_rate: tax_rate / 100.0,
        modifier: modifier / 100.0,
        pve_tax_rate: pve_tax_rate / 100.0,
    }
}

impl<'a, C: ConnectionTrait, P: TaxPolicyProvider> BillingService<'a, C, P> {
    /// Get the mining tax rate applied to a character
    ///
    /// The rate is that of the compliance tier of the character's current corporation.
    ///
    /// # Arguments
    /// - `character_id`: EVE Online character ID
    ///
    /// # Returns
    /// - `Ok(f64)`: The mining tax rate as a fraction, `0.0` if the character or its corporation
    ///   is unknown
    /// - `Err(Error::DbErr)`: Database error
    pub async fn get_character_tax_rate(&self, character_id: i64) -> Result<f64, Error> {
        let character_repo = CharacterRepository::new(self.db);

        let corporation = match character_repo.get_by_character_id(character_id).await? {
            Some((_, Some(corporation))) => corporation,
            Some((_, None)) => {
                debug!(
                    "Corporation of character {} not found, using tax rate 0",
                    character_id
                );
                return Ok(0.0);
            }
            None => {
                debug!("Character {} not found, using tax rate 0", character_id);
                return Ok(0.0);
            }
        };

        let rates = self.tax_rates_for_corporation_entry(corporation.id).await?;

        Ok(rates.tax_rate)
    }

    /// Get the tax rates of a corporation's compliance tier
    ///
    /// A corporation without member tracking entries, including an unknown corporation, has a
    /// registration ratio of `0.0`.
    ///
    /// # Arguments
    /// - `corporation_id`: EVE Online corporation ID
    ///
    /// # Returns
    /// - `Ok(TaxRates)`: Mining tax rate, modifier and PvE tax rate as fractions
    /// - `Err(Error::DbErr)`: Database error
    pub async fn get_corporation_tax_rates(&self, corporation_id: i64) -> Result<TaxRates, Error> {
        match self.find_corporation(corporation_id).await? {
            Some(corporation) => self.tax_rates_for_corporation_entry(corporation.id).await,
            None => {
                debug!(
                    "Corporation {} not found, evaluating tax rates without tracked members",
                    corporation_id
                );

                let policy = self.policy.tax_policy().await?;

                Ok(resolve_tax_rates(&policy, 0, 0))
            }
        }
    }

    pub(super) async fn tax_rates_for_corporation_entry(
        &self,
        corporation_record_id: i32,
    ) -> Result<TaxRates, Error> {
        let member_tracking_repo = MemberTrackingRepository::new(self.db);

        let (registered, total) = member_tracking_repo
            .count_by_corporation(corporation_record_id)
            .await?;
        let policy = self.policy.tax_policy().await?;

        Ok(resolve_tax_rates(&policy, registered, total))
    }
}
