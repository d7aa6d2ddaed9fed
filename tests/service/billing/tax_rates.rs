//! Tests for BillingService tax rate resolution.
//!
//! This module verifies compliance tier selection from member tracking, including the
//! boundary at the registration rate, corporations without tracked members, and the
//! per-character variant.

use corp_billing::service::billing::policy::TaxPolicy;

use super::*;

/// Tests a corporation exactly at the registration rate.
///
/// Verifies that 3 of 4 registered members (75%) select the high compliance tier rates with a
/// registration rate of 75%.
///
/// Expected: Ok with high compliance tier rates as fractions
#[tokio::test]
async fn selects_high_tier_at_registration_rate() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_billing_tables()
        .with_default_settings()
        .build()
        .await?;
    test.eve()
        .insert_tracked_members(CORPORATION_ID, 3, 1)
        .await?;

    let billing_service = billing_service(&test);
    let result = billing_service
        .get_corporation_tax_rates(CORPORATION_ID)
        .await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap(), high_tier_rates());

    Ok(())
}

/// Tests a corporation below the registration rate.
///
/// Verifies that 2 of 4 registered members (50%) select the low compliance tier rates.
///
/// Expected: Ok with low compliance tier rates as fractions
#[tokio::test]
async fn selects_low_tier_below_registration_rate() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_billing_tables()
        .with_default_settings()
        .build()
        .await?;
    test.eve()
        .insert_tracked_members(CORPORATION_ID, 2, 2)
        .await?;

    let billing_service = billing_service(&test);
    let rates = billing_service
        .get_corporation_tax_rates(CORPORATION_ID)
        .await
        .unwrap();

    assert_eq!(rates, low_tier_rates());

    Ok(())
}

/// Tests a corporation without tracked members.
///
/// Verifies that the total is treated as 1 instead of dividing by zero, giving a registration
/// ratio of 0.
///
/// Expected: Ok with low compliance tier rates
#[tokio::test]
async fn treats_untracked_corporation_as_unregistered() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_billing_tables()
        .with_default_settings()
        .with_mock_corporation(CORPORATION_ID)
        .build()
        .await?;

    let billing_service = billing_service(&test);
    let rates = billing_service
        .get_corporation_tax_rates(CORPORATION_ID)
        .await
        .unwrap();

    assert_eq!(rates, low_tier_rates());

    Ok(())
}

/// Tests tax rates of an unknown corporation.
///
/// Verifies that an unknown corporation is evaluated as having no tracked members.
///
/// Expected: Ok with low compliance tier rates
#[tokio::test]
async fn evaluates_unknown_corporation_without_members() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_billing_tables()
        .with_default_settings()
        .build()
        .await?;

    let billing_service = billing_service(&test);
    let rates = billing_service
        .get_corporation_tax_rates(CORPORATION_ID)
        .await
        .unwrap();

    assert_eq!(rates, low_tier_rates());

    Ok(())
}

/// Tests the tax rate of a character.
///
/// Verifies that a character is taxed at the mining tax rate of its corporation's tier.
///
/// Expected: Ok with the high compliance tier mining tax rate
#[tokio::test]
async fn gets_character_tax_rate_from_corporation() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_billing_tables()
        .with_default_settings()
        .with_mock_character(2114794365, CORPORATION_ID)
        .build()
        .await?;
    test.eve()
        .insert_tracked_members(CORPORATION_ID, 4, 0)
        .await?;
    // Members of other corporations don't count
    test.eve()
        .insert_tracked_members(OTHER_CORPORATION_ID, 0, 10)
        .await?;

    let billing_service = billing_service(&test);
    let tax_rate = billing_service
        .get_character_tax_rate(2114794365)
        .await
        .unwrap();

    assert_eq!(tax_rate, high_tier_rates().tax_rate);

    Ok(())
}

/// Tests the tax rate of an unknown character.
///
/// Expected: Ok with 0.0
#[tokio::test]
async fn returns_zero_for_unknown_character() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_billing_tables()
        .with_default_settings()
        .build()
        .await?;

    let billing_service = billing_service(&test);
    let tax_rate = billing_service
        .get_character_tax_rate(2114794365)
        .await
        .unwrap();

    assert_eq!(tax_rate, 0.0);

    Ok(())
}

/// Tests tax rates from a static tax policy.
///
/// Verifies that a `TaxPolicy` can be provided directly instead of reading the settings table,
/// and that a registration rate of 0 places every corporation in the high compliance tier.
///
/// Expected: Ok with the static policy's high compliance tier rates
#[tokio::test]
async fn uses_static_tax_policy() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_billing_tables()
        .with_mock_corporation(CORPORATION_ID)
        .build()
        .await?;
    let policy = TaxPolicy {
        high_tier_mining_tax_rate: 8.0,
        low_tier_mining_tax_rate: 30.0,
        high_tier_modifier: 50.0,
        low_tier_modifier: 100.0,
        high_tier_pve_tax_rate: 4.0,
        low_tier_pve_tax_rate: 20.0,
        registration_rate: 0.0,
    };

    let billing_service = BillingService::new(&test.db, policy);
    let rates = billing_service
        .get_corporation_tax_rates(CORPORATION_ID)
        .await
        .unwrap();

    assert_eq!(
        rates,
        TaxRates {
            tax_rate: 0.08,
            modifier: 0.5,
            pve_tax_rate: 0.04,
        }
    );

    Ok(())
}
