
use billing_test_utils::prelude::*;

use crate::model::billing::{BillingPeriod, TaxRates};

fn rates() -> TaxRates {
    TaxRates {
        tax_rate: 0.1,
        modifier: 0.9,
        pve_tax_rate: 0.05,
    }
}
