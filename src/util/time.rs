//! Calendar helpers for billing periods.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Utc};

use crate::model::billing::BillingPeriod;

/// Returns the billing period preceding the month of `now`.
///
/// Bills are generated for the previous calendar month, so in January this is December of the
/// prior year.
///
/// # Example
/// ```ignore
/// use chrono::{TimeZone, Utc};
///
/// let now = Utc.with_ymd_and_hms(2025, 1, 15, 10, 0, 0).unwrap();
/// assert_eq!(previous_billing_period(now), BillingPeriod::new(2024, 12));
/// ```
pub fn previous_billing_period(now: DateTime<Utc>) -> BillingPeriod {
    BillingPeriod::new(now.year(), now.month()).previous()
}

/// Returns the half-open range `[start, end)` covering the given calendar month.
///
/// # Returns
/// - `Some((start, end))` - Midnight of the first day of the month and of the following month
/// - `None` - `month` is not a valid calendar month (1-12) or the year is out of range
pub fn month_bounds(year: i32, month: u32) -> Option<(NaiveDateTime, NaiveDateTime)> {
    let start = NaiveDate::from_ymd_opt(year, month, 1)?;
    let end = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };

    Some((start.and_hms_opt(0, 0, 0)?, end.and_hms_opt(0, 0, 0)?))
}
