//! Running state carried across projection years

use super::cashflows::YearRow;
use super::money::round_money;

/// Unrounded running totals of a scenario projection
#[derive(Debug, Clone, Default)]
pub struct ProjectionState {
    /// Current projection year (1-indexed, 0 before the first year)
    pub year: u32,

    /// Cumulative profit before rounding
    pub cumulative_profit: f64,

    /// First month at which cumulative profit turned non-negative
    pub payback_month: Option<u32>,
}

impl ProjectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance to next year
    pub fn advance_year(&mut self) {
        self.year += 1;
    }

    /// Book one year's revenue and cost, returning the rounded table row
    ///
    /// Payback is detected on unrounded values; only the stored row is rounded.
    pub fn record_year(&mut self, revenue: f64, costs: f64) -> YearRow {
        let profit = revenue - costs;
        let prior_cumulative = self.cumulative_profit;
        self.cumulative_profit += profit;

        if self.payback_month.is_none() && self.cumulative_profit >= 0.0 {
            self.payback_month = Some(payback_month(self.year, prior_cumulative, profit));
        }

        YearRow {
            year: self.year,
            revenue: round_money(revenue),
            costs: round_money(costs),
            profit: round_money(profit),
            cumulative_profit: round_money(self.cumulative_profit),
        }
    }
}

/// Month of payback within the crossing year
///
/// A crossing in year 1 is always reported as month 12. Later crossings
/// interpolate linearly between the prior year-end balance and this year's
/// profit, rounding up to a whole month.
pub fn payback_month(year: u32, prior_cumulative: f64, profit: f64) -> u32 {
    if year <= 1 {
        return 12;
    }
    if profit <= 0.0 {
        return year * 12;
    }

    let months_into_year = (12.0 * -prior_cumulative / profit).ceil().clamp(0.0, 12.0);
    (year - 1) * 12 + months_into_year as u32
}
