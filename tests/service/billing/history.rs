//! Tests for BillingService bill history lookups.

use super::*;

/// Tests billing months of two corporations.
///
/// Verifies that months billed for either corporation are returned once each, ordered by
/// year descending then month descending, and months of other corporations are excluded.
///
/// Expected: Ok with the union of billed months
#[tokio::test]
async fn gets_union_of_billing_months() -> Result<(), TestError> {
    let test = TestBuilder::new().with_billing_tables().build().await?;
    test.billing()
        .insert_corporation_bill(CORPORATION_ID, 2024, 12, 1.0)
        .await?;
    test.billing()
        .insert_corporation_bill(CORPORATION_ID, 2025, 2, 1.0)
        .await?;
    test.billing()
        .insert_corporation_bill(OTHER_CORPORATION_ID, 2025, 2, 1.0)
        .await?;
    test.billing()
        .insert_corporation_bill(OTHER_CORPORATION_ID, 2025, 1, 1.0)
        .await?;
    test.billing()
        .insert_corporation_bill(98000003, 2025, 3, 1.0)
        .await?;

    let billing_service = billing_service(&test);
    let months = billing_service
        .get_corporation_billing_months(&[CORPORATION_ID, OTHER_CORPORATION_ID])
        .await
        .unwrap();

    assert_eq!(
        months,
        vec![
            BillingPeriod::new(2025, 2),
            BillingPeriod::new(2025, 1),
            BillingPeriod::new(2024, 12),
        ]
    );

    Ok(())
}

/// Tests billing months with a corrupt stored month.
///
/// Verifies that a bill stored with a negative month is skipped instead of producing a bogus
/// billing period.
///
/// Expected: Ok with only the valid months
#[tokio::test]
async fn skips_bills_with_negative_month() -> Result<(), TestError> {
    let test = TestBuilder::new().with_billing_tables().build().await?;
    test.billing()
        .insert_corporation_bill(CORPORATION_ID, 2025, 2, 1.0)
        .await?;
    test.billing()
        .insert_corporation_bill(CORPORATION_ID, 2025, -1, 1.0)
        .await?;

    let billing_service = billing_service(&test);
    let months = billing_service
        .get_corporation_billing_months(&[CORPORATION_ID])
        .await
        .unwrap();

    assert_eq!(months, vec![BillingPeriod::new(2025, 2)]);

    Ok(())
}

/// Tests billing months of unknown corporations.
///
/// Expected: Ok with no months
#[tokio::test]
async fn returns_no_months_for_unknown_corporations() -> Result<(), TestError> {
    let test = TestBuilder::new().with_billing_tables().build().await?;

    let billing_service = billing_service(&test);
    let months = billing_service
        .get_corporation_billing_months(&[CORPORATION_ID])
        .await
        .unwrap();

    assert!(months.is_empty());

    Ok(())
}

/// Tests the corporation bill lookup.
///
/// Expected: Ok with Some for a billed month and None otherwise
#[tokio::test]
async fn gets_corporation_bill_by_month() -> Result<(), TestError> {
    let test = TestBuilder::new().with_billing_tables().build().await?;
    test.billing()
        .insert_corporation_bill(CORPORATION_ID, 2025, 2, 1250.0)
        .await?;

    let billing_service = billing_service(&test);
    let bill = billing_service
        .get_corporation_bill_by_month(CORPORATION_ID, february())
        .await
        .unwrap();
    let missing = billing_service
        .get_corporation_bill_by_month(CORPORATION_ID, BillingPeriod::new(2025, 1))
        .await
        .unwrap();

    assert_eq!(bill.unwrap().mining_bill, 1250.0);
    assert!(missing.is_none());

    Ok(())
}

/// Tests the character bills lookup.
///
/// Expected: Ok with the corporation's character bills of the month
#[tokio::test]
async fn gets_past_mains_billing_by_month() -> Result<(), TestError> {
    let test = TestBuilder::new().with_billing_tables().build().await?;
    test.billing()
        .insert_character_bill(CORPORATION_ID, 2114794365, 2025, 2, 150.0)
        .await?;
    test.billing()
        .insert_character_bill(CORPORATION_ID, 2114794366, 2025, 1, 80.0)
        .await?;
    test.billing()
        .insert_character_bill(OTHER_CORPORATION_ID, 2114794367, 2025, 2, 60.0)
        .await?;

    let billing_service = billing_service(&test);
    let bills = billing_service
        .get_past_mains_billing_by_month(CORPORATION_ID, february())
        .await
        .unwrap();

    assert_eq!(bills.len(), 1);
    assert_eq!(bills[0].character_id, 2114794365);
    assert_eq!(bills[0].mining_bill, 150.0);

    Ok(())
}

/// Tests the character bills lookup of an unbilled month.
///
/// Expected: Ok with no bills
#[tokio::test]
async fn returns_no_bills_for_unbilled_month() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_billing_tables()
        .with_mock_corporation(CORPORATION_ID)
        .build()
        .await?;

    let billing_service = billing_service(&test);
    let bills = billing_service
        .get_past_mains_billing_by_month(CORPORATION_ID, february())
        .await
        .unwrap();

    assert!(bills.is_empty());

    Ok(())
}
