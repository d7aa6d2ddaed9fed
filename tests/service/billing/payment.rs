//! Tests for BillingService::get_paid_bill_from_journal method.
//!
//! This module verifies matching of bills against player donations, including rounding of the
//! bill amount, the 0-based month convention, and the sender's corporation.

use super::*;

/// EVE Online character ID of a member paying bills
static MEMBER_ID: i64 = 2114794365;

async fn setup() -> Result<TestContext, TestError> {
    TestBuilder::new()
        .with_billing_tables()
        .with_mock_character(MEMBER_ID, CORPORATION_ID)
        .with_mock_character(2114794399, OTHER_CORPORATION_ID)
        .build()
        .await
}

/// Tests an exact donation in the following calendar month.
///
/// Verifies that month 1 (0-based) matches a donation dated in February.
///
/// Expected: Ok with the donation's journal ID
#[tokio::test]
async fn finds_exact_donation() -> Result<(), TestError> {
    let test = setup().await?;
    test.eve()
        .insert_donation(CORPORATION_ID, 1001, MEMBER_ID, 100.0, datetime(2025, 2, 10))
        .await?;

    let billing_service = billing_service(&test);
    let result = billing_service
        .get_paid_bill_from_journal(CORPORATION_ID, 100.0, 1, 2025)
        .await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap(), vec![1001]);

    Ok(())
}

/// Tests the month convention of reconciliation.
///
/// Verifies that month `m` matches donations in calendar month `m + 1` only.
///
/// Expected: Ok with no match for months 0 and 2
#[tokio::test]
async fn matches_following_calendar_month_only() -> Result<(), TestError> {
    let test = setup().await?;
    test.eve()
        .insert_donation(CORPORATION_ID, 1001, MEMBER_ID, 100.0, datetime(2025, 2, 10))
        .await?;

    let billing_service = billing_service(&test);
    let january = billing_service
        .get_paid_bill_from_journal(CORPORATION_ID, 100.0, 0, 2025)
        .await
        .unwrap();
    let march = billing_service
        .get_paid_bill_from_journal(CORPORATION_ID, 100.0, 2, 2025)
        .await
        .unwrap();

    assert!(january.is_empty());
    assert!(march.is_empty());

    Ok(())
}

/// Tests a bill amount exactly between two cent values.
///
/// Verifies that 99.995 rounds toward zero to 99.99 and doesn't match a 100.00 donation.
///
/// Expected: Ok with no match
#[tokio::test]
async fn rounds_midpoint_bill_toward_zero() -> Result<(), TestError> {
    let test = setup().await?;
    test.eve()
        .insert_donation(CORPORATION_ID, 1001, MEMBER_ID, 100.0, datetime(2025, 2, 10))
        .await?;

    let billing_service = billing_service(&test);
    let result = billing_service
        .get_paid_bill_from_journal(CORPORATION_ID, 99.995, 1, 2025)
        .await
        .unwrap();

    assert!(result.is_empty());

    Ok(())
}

/// Tests a bill amount with more than 2 decimal places.
///
/// Expected: Ok with the donation of the rounded amount
#[tokio::test]
async fn rounds_bill_amount_to_cents() -> Result<(), TestError> {
    let test = setup().await?;
    test.eve()
        .insert_donation(CORPORATION_ID, 1001, MEMBER_ID, 1234.57, datetime(2025, 2, 10))
        .await?;

    let billing_service = billing_service(&test);
    let result = billing_service
        .get_paid_bill_from_journal(CORPORATION_ID, 1234.5678, 1, 2025)
        .await
        .unwrap();

    assert_eq!(result, vec![1001]);

    Ok(())
}

/// Tests donations from characters outside the corporation.
///
/// Expected: Ok with no match
#[tokio::test]
async fn ignores_donations_from_other_corporations() -> Result<(), TestError> {
    let test = setup().await?;
    test.eve()
        .insert_donation(CORPORATION_ID, 1001, 2114794399, 100.0, datetime(2025, 2, 10))
        .await?;

    let billing_service = billing_service(&test);
    let result = billing_service
        .get_paid_bill_from_journal(CORPORATION_ID, 100.0, 1, 2025)
        .await
        .unwrap();

    assert!(result.is_empty());

    Ok(())
}

/// Tests two identical donations in the same month.
///
/// Expected: Ok with both journal IDs
#[tokio::test]
async fn returns_every_identical_donation() -> Result<(), TestError> {
    let test = setup().await?;
    test.eve()
        .insert_donation(CORPORATION_ID, 1001, MEMBER_ID, 100.0, datetime(2025, 2, 10))
        .await?;
    test.eve()
        .insert_donation(CORPORATION_ID, 1002, MEMBER_ID, 100.0, datetime(2025, 2, 11))
        .await?;

    let billing_service = billing_service(&test);
    let mut result = billing_service
        .get_paid_bill_from_journal(CORPORATION_ID, 100.0, 1, 2025)
        .await
        .unwrap();
    result.sort();

    assert_eq!(result, vec![1001, 1002]);

    Ok(())
}

/// Tests the last month of the year.
///
/// Verifies that month 11 matches donations in December.
///
/// Expected: Ok with the December donation
#[tokio::test]
async fn matches_december() -> Result<(), TestError> {
    let test = setup().await?;
    test.eve()
        .insert_donation(CORPORATION_ID, 1001, MEMBER_ID, 100.0, datetime(2024, 12, 31))
        .await?;

    let billing_service = billing_service(&test);
    let result = billing_service
        .get_paid_bill_from_journal(CORPORATION_ID, 100.0, 11, 2024)
        .await
        .unwrap();

    assert_eq!(result, vec![1001]);

    Ok(())
}

/// Tests a month outside of 0 - 11.
///
/// Expected: Ok with no match
#[tokio::test]
async fn returns_empty_for_out_of_range_month() -> Result<(), TestError> {
    let test = setup().await?;
    test.eve()
        .insert_donation(CORPORATION_ID, 1001, MEMBER_ID, 100.0, datetime(2026, 1, 10))
        .await?;

    let billing_service = billing_service(&test);
    let result = billing_service
        .get_paid_bill_from_journal(CORPORATION_ID, 100.0, 12, 2025)
        .await
        .unwrap();

    assert!(result.is_empty());

    Ok(())
}
