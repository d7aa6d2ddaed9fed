//! Tests for BillingService::generate_bills method.
//!
//! This module verifies that generating bills persists the corporation bill and one character
//! bill per main, and that generating the same period again updates the existing bills.

use std::sync::atomic::{AtomicUsize, Ordering};

use corp_billing::{
    error::Error,
    service::billing::policy::{TaxPolicy, TaxPolicyProvider},
};
use sea_orm::{EntityTrait, PaginatorTrait};

use super::*;

/// EVE Online character ID of the main
static MAIN_ID: i64 = 2114794365;

/// EVE Online character ID of the main's alt
static ALT_ID: i64 = 2114794366;

async fn setup() -> Result<TestContext, TestError> {
    let test = TestBuilder::new()
        .with_billing_tables()
        .with_default_settings()
        .with_market_price(ORE_TYPE_ID, 10.0)
        .with_mock_character(MAIN_ID, CORPORATION_ID)
        .with_mock_character(ALT_ID, CORPORATION_ID)
        .build()
        .await?;

    let user = test.user().insert_user(MAIN_ID).await?;
    test.user()
        .insert_user_character_ownership(user.id, ALT_ID)
        .await?;

    test.eve()
        .insert_mining(MAIN_ID, date(2025, 2, 3), ORE_TYPE_ID, 10)
        .await?;
    test.eve()
        .insert_mining(ALT_ID, date(2025, 2, 4), ORE_TYPE_ID, 5)
        .await?;
    test.eve()
        .insert_bounty(CORPORATION_ID, 1, "bounty_prizes", MAIN_ID, 1000.0, datetime(2025, 2, 5))
        .await?;

    Ok(test)
}

/// Tests generating bills of a corporation.
///
/// Verifies that the corporation bill stores the mining and bounty totals with the
/// corporation's tax rates and that the main's bill sums both characters' mining.
///
/// Expected: Ok with one corporation bill and one character bill
#[tokio::test]
async fn generates_corporation_and_character_bills() -> Result<(), TestError> {
    let test = setup().await?;

    let billing_service = billing_service(&test);
    let result = billing_service
        .generate_bills(CORPORATION_ID, february())
        .await;

    assert!(result.is_ok());
    let generated = result.unwrap().unwrap();
    let rates = low_tier_rates();

    assert_eq!(generated.corporation_id, CORPORATION_ID);
    assert_eq!(generated.corporation_bill.year, 2025);
    assert_eq!(generated.corporation_bill.month, 2);
    assert_eq!(generated.corporation_bill.mining_bill, 150.0);
    assert_eq!(generated.corporation_bill.pve_bill, 1000.0);
    assert_eq!(generated.corporation_bill.mining_tax_rate, rates.tax_rate);
    assert_eq!(generated.corporation_bill.mining_modifier, rates.modifier);
    assert_eq!(generated.corporation_bill.pve_tax_rate, rates.pve_tax_rate);

    assert_eq!(generated.character_bills.len(), 1);
    let character_bill = &generated.character_bills[0];
    assert_eq!(character_bill.character_id, MAIN_ID);
    assert_eq!(character_bill.mining_bill, 150.0);
    assert_eq!(character_bill.mining_tax_rate, rates.tax_rate);
    assert_eq!(character_bill.mining_modifier, rates.modifier);

    let stored = billing_service
        .get_corporation_bill_by_month(CORPORATION_ID, february())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.id, generated.corporation_bill.id);
    assert_eq!(stored.mining_bill, 150.0);

    Ok(())
}

/// Tests generating bills of the same period twice.
///
/// Verifies that the second run updates the existing bills with the new totals instead of
/// inserting duplicates.
///
/// Expected: Ok with a single corporation bill and character bill holding the latest totals
#[tokio::test]
async fn regenerating_updates_existing_bills() -> Result<(), TestError> {
    let test = setup().await?;

    let billing_service = billing_service(&test);
    billing_service
        .generate_bills(CORPORATION_ID, february())
        .await
        .unwrap();

    test.eve()
        .insert_mining(ALT_ID, date(2025, 2, 20), ORE_TYPE_ID, 5)
        .await?;
    let generated = billing_service
        .generate_bills(CORPORATION_ID, february())
        .await
        .unwrap()
        .unwrap();

    let corporation_bill_count = entity::prelude::BillingCorporationBill::find()
        .count(&test.db)
        .await?;
    let character_bill_count = entity::prelude::BillingCharacterBill::find()
        .count(&test.db)
        .await?;

    assert_eq!(corporation_bill_count, 1);
    assert_eq!(character_bill_count, 1);
    assert_eq!(generated.corporation_bill.mining_bill, 200.0);
    assert_eq!(generated.character_bills[0].mining_bill, 200.0);

    let past_bills = billing_service
        .get_past_mains_billing_by_month(CORPORATION_ID, february())
        .await
        .unwrap();
    assert_eq!(past_bills.len(), 1);
    assert_eq!(past_bills[0].mining_bill, 200.0);

    Ok(())
}

/// Tests generating bills at the high compliance tier.
///
/// Expected: Ok with the high tier rates stored on both bills
#[tokio::test]
async fn stores_high_tier_rates_for_compliant_corporation() -> Result<(), TestError> {
    let test = setup().await?;
    test.eve()
        .insert_tracked_members(CORPORATION_ID, 3, 1)
        .await?;

    let billing_service = billing_service(&test);
    let generated = billing_service
        .generate_bills(CORPORATION_ID, february())
        .await
        .unwrap()
        .unwrap();
    let rates = high_tier_rates();

    assert_eq!(generated.corporation_bill.mining_tax_rate, rates.tax_rate);
    assert_eq!(generated.corporation_bill.pve_tax_rate, rates.pve_tax_rate);
    assert_eq!(generated.character_bills[0].mining_tax_rate, rates.tax_rate);
    assert_eq!(generated.character_bills[0].mining_modifier, rates.modifier);

    Ok(())
}

/// Tests generating bills of an unknown corporation.
///
/// Expected: Ok(None) and nothing persisted
#[tokio::test]
async fn returns_none_for_unknown_corporation() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_billing_tables()
        .with_default_settings()
        .build()
        .await?;

    let billing_service = billing_service(&test);
    let result = billing_service
        .generate_bills(CORPORATION_ID, february())
        .await;

    assert!(matches!(result, Ok(None)));
    let corporation_bill_count = entity::prelude::BillingCorporationBill::find()
        .count(&test.db)
        .await?;
    assert_eq!(corporation_bill_count, 0);

    Ok(())
}

/// Tax policy whose low tier mining tax rate changes after it is first read
struct ChangingTaxPolicy {
    reads: AtomicUsize,
}

impl TaxPolicyProvider for ChangingTaxPolicy {
    async fn tax_policy(&self) -> Result<TaxPolicy, Error> {
        let low_tier_mining_tax_rate = match self.reads.fetch_add(1, Ordering::SeqCst) {
            0 => TEST_LOW_TIER_MINING_TAX_RATE,
            _ => 50.0,
        };

        Ok(TaxPolicy {
            low_tier_mining_tax_rate,
            low_tier_modifier: TEST_LOW_TIER_MODIFIER,
            low_tier_pve_tax_rate: TEST_LOW_TIER_PVE_TAX_RATE,
            registration_rate: TEST_REGISTRATION_RATE,
            ..Default::default()
        })
    }
}

/// Tests that one generation run applies a single set of tax rates.
///
/// Verifies that the corporation bill and the character bills store the rates of the same
/// policy read, even if the policy changes while the bills are being generated.
///
/// Expected: Ok with equal mining tax rates on the corporation and character bills
#[tokio::test]
async fn applies_one_policy_read_to_every_bill() -> Result<(), TestError> {
    let test = setup().await?;

    let billing_service = BillingService::new(
        &test.db,
        ChangingTaxPolicy {
            reads: AtomicUsize::new(0),
        },
    );
    let generated = billing_service
        .generate_bills(CORPORATION_ID, february())
        .await
        .unwrap()
        .unwrap();

    assert_eq!(generated.corporation_bill.mining_tax_rate, low_tier_rates().tax_rate);
    assert_eq!(generated.character_bills.len(), 1);
    assert_eq!(
        generated.character_bills[0].mining_tax_rate,
        generated.corporation_bill.mining_tax_rate
    );

    Ok(())
}
