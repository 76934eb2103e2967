//! Presentation rounding and discounting helpers

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Decimal places for monetary figures
pub const MONEY_DECIMALS: i32 = 2;

/// Decimal places for ROI percentages
pub const PCT_DECIMALS: i32 = 1;

/// Round to `places` decimals, ties to even
///
/// Ties are judged on the exact binary value of `value`, so 2.675 (stored just
/// below the half) rounds down while 308.625 (stored exactly) rounds to 308.62.
/// Values outside the decimal range are returned unchanged.
pub fn round_to(value: f64, places: i32) -> f64 {
    let Some(exact) = Decimal::from_f64_retain(value) else {
        return value;
    };
    exact
        .round_dp_with_strategy(places.max(0) as u32, RoundingStrategy::MidpointNearestEven)
        .to_f64()
        .unwrap_or(value)
}

/// Round a monetary figure to cents
pub fn round_money(value: f64) -> f64 {
    round_to(value, MONEY_DECIMALS)
}

/// Discount factor for a cashflow `year` years out at an annual percentage rate
pub fn discount_factor(rate_pct: f64, year: u32) -> f64 {
    1.0 / (1.0 + rate_pct / 100.0).powi(year as i32)
}

/// Net present value of year-end cashflows, the first element falling at year 1
pub fn npv(cashflows: &[f64], rate_pct: f64) -> f64 {
    cashflows
        .iter()
        .enumerate()
        .map(|(idx, &cf)| cf * discount_factor(rate_pct, idx as u32 + 1))
        .sum()
}
