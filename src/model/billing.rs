//! Billing models and DTOs.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::model::db::{CharacterBillModel, CorporationBillModel};

/// A calendar month that bills are computed for.
///
/// `month` is 1-based (January = 1). No range validation is performed, callers must provide a
/// valid calendar month.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BillingPeriod {
    /// Calendar year
    pub year: i32,
    /// Calendar month, 1-based
    pub month: u32,
}

impl BillingPeriod {
    /// Creates a billing period for the provided year and 1-based month.
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    /// Returns the period immediately before this one.
    ///
    /// January rolls back to December of the prior year.
    pub fn previous(self) -> Self {
        if self.month <= 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }
}

/// Tax rates selected for a corporation's compliance tier.
///
/// All values are fractions: a 10% tax rate is `0.1`, a 90% ore value modifier is `0.9`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TaxRates {
    /// Mining tax rate
    pub tax_rate: f64,
    /// Share of the ore value that is taxed
    pub modifier: f64,
    /// PvE (bounty) tax rate
    pub pve_tax_rate: f64,
}

/// Billing summary for one main character and all of their characters in a corporation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MainBillingSummary {
    /// Total mining value of the main's characters in the corporation
    pub amount: f64,
    /// EVE character ID of the last matched character
    pub character_id: i64,
    /// Mining tax rate as a fraction
    pub tax_rate: f64,
}

/// Mining ledger totals for one character over a billing period.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MiningLedgerEntry {
    /// EVE Online character ID
    pub character_id: i64,
    /// Total units mined
    pub quantity: i64,
    /// Total value of the mined units at average market price
    pub amount: f64,
}

/// Bills persisted for a corporation and billing period.
#[derive(Clone, Debug, PartialEq)]
pub struct GeneratedBills {
    /// EVE Online corporation ID the bills were generated for
    pub corporation_id: i64,
    /// Corporation-wide bill
    pub corporation_bill: CorporationBillModel,
    /// One bill per main character with characters in the corporation
    pub character_bills: Vec<CharacterBillModel>,
}

/// Serializable corporation bill.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CorporationBillDto {
    pub year: i32,
    pub month: i32,
    pub mining_bill: f64,
    pub pve_bill: f64,
    pub mining_tax_rate: f64,
    pub mining_modifier: f64,
    pub pve_tax_rate: f64,
    pub updated_at: NaiveDateTime,
}

impl From<CorporationBillModel> for CorporationBillDto {
    fn from(bill: CorporationBillModel) -> Self {
        Self {
            year: bill.year,
            month: bill.month,
            mining_bill: bill.mining_bill,
            pve_bill: bill.pve_bill,
            mining_tax_rate: bill.mining_tax_rate,
            mining_modifier: bill.mining_modifier,
            pve_tax_rate: bill.pve_tax_rate,
            updated_at: bill.updated_at,
        }
    }
}

/// Serializable character bill.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CharacterBillDto {
    pub character_id: i64,
    pub year: i32,
    pub month: i32,
    pub mining_bill: f64,
    pub mining_tax_rate: f64,
    pub mining_modifier: f64,
}

impl From<CharacterBillModel> for CharacterBillDto {
    fn from(bill: CharacterBillModel) -> Self {
        Self {
            character_id: bill.character_id,
            year: bill.year,
            month: bill.month,
            mining_bill: bill.mining_bill,
            mining_tax_rate: bill.mining_tax_rate,
            mining_modifier: bill.mining_modifier,
        }
    }
}

/// Serializable result of a bill generation run for one corporation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeneratedBillsDto {
    pub corporation_id: i64,
    pub corporation_bill: CorporationBillDto,
    pub character_bills: Vec<CharacterBillDto>,
}

impl From<GeneratedBills> for GeneratedBillsDto {
    fn from(bills: GeneratedBills) -> Self {
        Self {
            corporation_id: bills.corporation_id,
            corporation_bill: bills.corporation_bill.into(),
            character_bills: bills.character_bills.into_iter().map(Into::into).collect(),
        }
    }
}
