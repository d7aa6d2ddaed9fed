//! Tests for BillingService mains billing summaries.
//!
//! This module verifies that mining of every character owned by a user is summed under the
//! user's main character, that characters outside the corporation are ignored, and that the
//! summary is stable across repeated calls.

use chrono::Utc;
use corp_billing::{model::billing::MainBillingSummary, util::time::previous_billing_period};

use super::*;

/// Insert a user whose main mined 100 ISK and whose alt mined 50 ISK in the corporation.
async fn insert_main_with_alt(test: &TestContext, period: BillingPeriod) -> Result<(), TestError> {
    let day = date(period.year, period.month, 15);

    test.eve()
        .insert_mock_character(2114794365, CORPORATION_ID)
        .await?;
    test.eve()
        .insert_mock_character(2114794366, CORPORATION_ID)
        .await?;
    let user = test.user().insert_user(2114794365).await?;
    test.user()
        .insert_user_character_ownership(user.id, 2114794366)
        .await?;

    test.eve()
        .insert_mining(2114794365, day, ORE_TYPE_ID, 10)
        .await?;
    test.eve()
        .insert_mining(2114794366, day, ORE_TYPE_ID, 5)
        .await?;

    Ok(())
}

/// Tests a main with two characters in the corporation.
///
/// Verifies that both characters' mining is summed under the main's character ID and that the
/// last matched character is recorded.
///
/// Expected: Ok with one entry of 150 ISK
#[tokio::test]
async fn sums_characters_under_main() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_billing_tables()
        .with_default_settings()
        .with_market_price(ORE_TYPE_ID, 10.0)
        .build()
        .await?;
    insert_main_with_alt(&test, february()).await?;

    let billing_service = billing_service(&test);
    let result = billing_service
        .get_mains_billing_for_period(CORPORATION_ID, february())
        .await;

    assert!(result.is_ok());
    let summary = result.unwrap();
    assert_eq!(summary.len(), 1);
    assert_eq!(
        summary.get(&2114794365),
        Some(&MainBillingSummary {
            amount: 150.0,
            character_id: 2114794366,
            tax_rate: low_tier_rates().tax_rate,
        })
    );

    Ok(())
}

/// Tests a main with characters in several corporations.
///
/// Verifies that only characters of the target corporation are summed, keyed by the main even
/// when the main itself is in another corporation, and that mains without characters in the
/// corporation are absent.
///
/// Expected: Ok with only the alt's mining under the main's character ID
#[tokio::test]
async fn ignores_characters_of_other_corporations() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_billing_tables()
        .with_default_settings()
        .with_market_price(ORE_TYPE_ID, 10.0)
        .with_mock_character(1, OTHER_CORPORATION_ID)
        .with_mock_character(2, CORPORATION_ID)
        .with_mock_character(3, OTHER_CORPORATION_ID)
        .with_user_for_character(3)
        .build()
        .await?;
    let user = test.user().insert_user(1).await?;
    test.user()
        .insert_user_character_ownership(user.id, 2)
        .await?;
    test.eve()
        .insert_mining(1, date(2025, 2, 10), ORE_TYPE_ID, 100)
        .await?;
    test.eve()
        .insert_mining(2, date(2025, 2, 10), ORE_TYPE_ID, 7)
        .await?;
    test.eve()
        .insert_mining(3, date(2025, 2, 10), ORE_TYPE_ID, 100)
        .await?;

    let billing_service = billing_service(&test);
    let summary = billing_service
        .get_mains_billing_for_period(CORPORATION_ID, february())
        .await
        .unwrap();

    assert_eq!(summary.len(), 1);
    let main_summary = summary.get(&1).unwrap();
    assert_eq!(main_summary.amount, 70.0);
    assert_eq!(main_summary.character_id, 2);

    Ok(())
}

/// Tests summaries computed twice with unchanged data.
///
/// Expected: Ok with identical summaries
#[tokio::test]
async fn is_stable_across_calls() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_billing_tables()
        .with_default_settings()
        .with_market_price(ORE_TYPE_ID, 10.0)
        .build()
        .await?;
    insert_main_with_alt(&test, february()).await?;

    let billing_service = billing_service(&test);
    let first = billing_service
        .get_mains_billing_for_period(CORPORATION_ID, february())
        .await
        .unwrap();
    let second = billing_service
        .get_mains_billing_for_period(CORPORATION_ID, february())
        .await
        .unwrap();

    assert_eq!(first, second);

    Ok(())
}

/// Tests the summary for the previous calendar month.
///
/// Verifies that `get_mains_billing` bills mining of the month before the current one.
///
/// Expected: Ok with the main's mining of the previous month
#[tokio::test]
async fn bills_previous_month() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_billing_tables()
        .with_default_settings()
        .with_market_price(ORE_TYPE_ID, 10.0)
        .build()
        .await?;
    let period = previous_billing_period(Utc::now());
    insert_main_with_alt(&test, period).await?;

    let billing_service = billing_service(&test);
    let summary = billing_service
        .get_mains_billing(CORPORATION_ID)
        .await
        .unwrap();

    assert_eq!(summary.get(&2114794365).unwrap().amount, 150.0);

    Ok(())
}

/// Tests the summary of an unknown corporation.
///
/// Expected: Ok with an empty summary
#[tokio::test]
async fn returns_empty_for_unknown_corporation() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_billing_tables()
        .with_default_settings()
        .build()
        .await?;

    let billing_service = billing_service(&test);
    let summary = billing_service
        .get_mains_billing_for_period(CORPORATION_ID, february())
        .await
        .unwrap();

    assert!(summary.is_empty());

    Ok(())
}
