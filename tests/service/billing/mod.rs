//! Tests for BillingService.
//!
//! Fixtures use the default test tax policy unless stated otherwise: high compliance tier at
//! 10% mining tax, 90% modifier and 5% PvE tax; low compliance tier at 20%, 100% and 15%;
//! registration rate 75%.

mod generate_bills;
mod history;
mod mains_billing;
mod payment;
mod policy;
mod tax_rates;

use billing_test_utils::prelude::*;
use chrono::{NaiveDate, NaiveDateTime};
use corp_billing::{
    model::billing::{BillingPeriod, TaxRates},
    service::billing::{policy::SettingTaxPolicyProvider, BillingService},
};
use sea_orm::DatabaseConnection;

/// EVE Online corporation ID billed in most tests
static CORPORATION_ID: i64 = 98785281;

/// EVE Online corporation ID of an unrelated corporation
static OTHER_CORPORATION_ID: i64 = 98000002;

/// Ore type ID with a market price of 10 ISK per unit
static ORE_TYPE_ID: i64 = 1230;

/// Build a billing service reading the tax policy from the settings table
fn billing_service(
    test: &TestContext,
) -> BillingService<'_, DatabaseConnection, SettingTaxPolicyProvider<'_, DatabaseConnection>> {
    BillingService::new(&test.db, SettingTaxPolicyProvider::new(&test.db))
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn datetime(year: i32, month: u32, day: u32) -> NaiveDateTime {
    date(year, month, day).and_hms_opt(12, 0, 0).unwrap()
}

fn high_tier_rates() -> TaxRates {
    TaxRates {
        tax_rate: TEST_HIGH_TIER_MINING_TAX_RATE / 100.0,
        modifier: TEST_HIGH_TIER_MODIFIER / 100.0,
        pve_tax_rate: TEST_HIGH_TIER_PVE_TAX_RATE / 100.0,
    }
}

fn low_tier_rates() -> TaxRates {
    TaxRates {
        tax_rate: TEST_LOW_TIER_MINING_TAX_RATE / 100.0,
        modifier: TEST_LOW_TIER_MODIFIER / 100.0,
        pve_tax_rate: TEST_LOW_TIER_PVE_TAX_RATE / 100.0,
    }
}

/// Billing period most tests mine in
fn february() -> BillingPeriod {
    BillingPeriod::new(2025, 2)
}
