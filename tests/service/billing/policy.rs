//! Tests for reading the tax policy from the settings table.

use corp_billing::service::billing::policy::{TaxPolicy, TaxPolicyProvider, TaxSetting};

use super::*;

/// Tests reading every configured tax setting.
///
/// Expected: Ok with each setting's stored percentage
#[tokio::test]
async fn reads_configured_settings() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_billing_tables()
        .with_default_settings()
        .build()
        .await?;

    let provider = SettingTaxPolicyProvider::new(&test.db);
    let policy = provider.tax_policy().await.unwrap();

    assert_eq!(
        policy,
        TaxPolicy {
            high_tier_mining_tax_rate: TEST_HIGH_TIER_MINING_TAX_RATE,
            low_tier_mining_tax_rate: TEST_LOW_TIER_MINING_TAX_RATE,
            high_tier_modifier: TEST_HIGH_TIER_MODIFIER,
            low_tier_modifier: TEST_LOW_TIER_MODIFIER,
            high_tier_pve_tax_rate: TEST_HIGH_TIER_PVE_TAX_RATE,
            low_tier_pve_tax_rate: TEST_LOW_TIER_PVE_TAX_RATE,
            registration_rate: TEST_REGISTRATION_RATE,
        }
    );

    Ok(())
}

/// Tests reading a partially configured tax policy.
///
/// Verifies that settings without a stored value read as 0 and configured ones are kept.
///
/// Expected: Ok with only the configured setting set
#[tokio::test]
async fn reads_missing_settings_as_zero() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_billing_tables()
        .with_setting("irate", 60.0)
        .build()
        .await?;

    let provider = SettingTaxPolicyProvider::new(&test.db);
    let policy = provider.tax_policy().await.unwrap();

    assert_eq!(policy.get(TaxSetting::RegistrationRate), 60.0);
    for setting in TaxSetting::ALL
        .into_iter()
        .filter(|setting| *setting != TaxSetting::RegistrationRate)
    {
        assert_eq!(policy.get(setting), 0.0, "{} should be 0", setting.name());
    }

    Ok(())
}

/// Tests that the policy is read again on every call.
///
/// Expected: Ok with the updated value after the setting changes
#[tokio::test]
async fn rereads_settings_on_every_call() -> Result<(), TestError> {
    let test = TestBuilder::new().with_billing_tables().build().await?;

    let provider = SettingTaxPolicyProvider::new(&test.db);
    let before = provider.tax_policy().await.unwrap();
    test.billing().insert_setting("oretaxrate", 25.0).await?;
    let after = provider.tax_policy().await.unwrap();

    assert_eq!(before.low_tier_mining_tax_rate, 0.0);
    assert_eq!(after.low_tier_mining_tax_rate, 25.0);

    Ok(())
}
