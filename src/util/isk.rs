//! ISK amount helpers.

use rust_decimal::{
    prelude::{FromPrimitive, ToPrimitive},
    Decimal, RoundingStrategy,
};

/// Rounds an ISK amount to 2 decimal places.
///
/// The amount is read as its shortest decimal form, so `99.995` is the decimal `99.995` rather
/// than the binary value `99.99500000000000454...` it is stored as. Midpoints round toward zero:
/// `99.995` rounds to `99.99` and can't match a payment of `100.00`.
///
/// # Returns
/// - `Some(f64)` - The rounded amount
/// - `None` - `amount` is NaN, infinite or outside the range of a decimal
pub fn round_isk(amount: f64) -> Option<f64> {
    Decimal::from_f64(amount)?
        .round_dp_with_strategy(2, RoundingStrategy::MidpointTowardZero)
        .to_f64()
}
