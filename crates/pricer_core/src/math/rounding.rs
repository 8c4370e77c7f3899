//! Decimal rounding for reported values.
//!
//! Valuation results are carried at full precision and only rounded at the
//! reporting boundary: option prices to [`PRICE_DECIMALS`] places, hedge
//! quantities and cash amounts to [`POSITION_DECIMALS`] places.
//!
//! Rounding is applied to the exact binary value, with exact ties going to
//! the even digit: `0.125` (exactly representable) rounds to `0.12`, while
//! `2.675` (stored just below the tie) rounds to `2.67`.

use std::fmt::Display;
use std::str::FromStr;

use num_traits::Float;

/// Decimal places used when reporting an option price.
pub const PRICE_DECIMALS: u32 = 2;

/// Decimal places used when reporting hedge shares and risk-free amounts.
pub const POSITION_DECIMALS: u32 = 4;

/// Rounds `value` to the nearest multiple of `10^-places`, ties to even.
///
/// The decimal expansion of `value` is rounded exactly by the formatter and
/// parsed back, so no scaling error is introduced. Non-finite inputs are
/// returned unchanged.
///
/// # Examples
/// ```
/// use pricer_core::math::rounding::round_to;
///
/// assert_eq!(round_to(3099.732750242958_f64, 2), 3099.73);
/// assert_eq!(round_to(-17840.864917395542_f64, 4), -17840.8649);
/// assert_eq!(round_to(0.125_f64, 2), 0.12);
/// assert_eq!(round_to(0.375_f64, 2), 0.38);
/// ```
pub fn round_to<T>(value: T, places: u32) -> T
where
    T: Float + Display + FromStr,
{
    if !value.is_finite() {
        return value;
    }
    format!("{:.*}", places as usize, value).parse().unwrap_or(value)
}

/// Rounds an option price for reporting.
pub fn round_price<T: Float + Display + FromStr>(value: T) -> T {
    round_to(value, PRICE_DECIMALS)
}

/// Rounds a hedge quantity or cash amount for reporting.
pub fn round_position<T: Float + Display + FromStr>(value: T) -> T {
    round_to(value, POSITION_DECIMALS)
}
