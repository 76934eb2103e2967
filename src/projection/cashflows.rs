//! Yearly output structures for scenario projections

use serde::{Deserialize, Serialize};

use super::money::{npv, round_money, round_to, PCT_DECIMALS};

/// Placeholder shown when payback is not reached within the horizon
pub const PAYBACK_NOT_REACHED: &str = "N/A";

/// A single row of projection output for one year
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearRow {
    pub year: u32,
    pub revenue: f64,
    pub costs: f64,
    pub profit: f64,
    pub cumulative_profit: f64,
}

/// Complete projection of one scenario
///
/// Yearly sequences all have one entry per projection year. Figures are
/// rounded to cents (ROI to one decimal) for presentation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioResult {
    /// Scenario display name
    pub label: String,

    pub yearly_revenue: Vec<f64>,
    pub yearly_costs: Vec<f64>,
    pub yearly_profit: Vec<f64>,
    pub cumulative_profit: Vec<f64>,

    pub total_revenue: f64,
    pub total_costs: f64,
    pub total_profit: f64,

    /// Total profit over total costs, in percent
    pub roi_pct: f64,

    /// Yearly profits discounted at the request's discount rate
    pub npv: f64,

    /// Month at which cumulative profit first became non-negative
    pub payback_month: Option<u32>,

    /// Paying customers, constant across years
    pub customer_count: u64,
}

impl ScenarioResult {
    pub fn new(label: impl Into<String>, customer_count: u64) -> Self {
        Self {
            label: label.into(),
            yearly_revenue: Vec::new(),
            yearly_costs: Vec::new(),
            yearly_profit: Vec::new(),
            cumulative_profit: Vec::new(),
            total_revenue: 0.0,
            total_costs: 0.0,
            total_profit: 0.0,
            roi_pct: 0.0,
            npv: 0.0,
            payback_month: None,
            customer_count,
        }
    }

    /// Append a year row
    pub fn add_row(&mut self, row: YearRow) {
        self.yearly_revenue.push(row.revenue);
        self.yearly_costs.push(row.costs);
        self.yearly_profit.push(row.profit);
        self.cumulative_profit.push(row.cumulative_profit);
    }

    /// Compute totals, ROI and NPV from the recorded rows
    pub fn finalize(&mut self, discount_rate_pct: f64) {
        self.total_revenue = round_money(self.yearly_revenue.iter().sum());
        self.total_costs = round_money(self.yearly_costs.iter().sum());
        self.total_profit = round_money(self.total_revenue - self.total_costs);

        self.roi_pct = if self.total_costs > 0.0 {
            round_to(self.total_profit / self.total_costs * 100.0, PCT_DECIMALS)
        } else {
            log::warn!("{}: total costs are zero, reporting ROI as 0", self.label);
            0.0
        };

        self.npv = round_money(npv(&self.yearly_profit, discount_rate_pct));
    }

    /// Number of projected years
    pub fn years(&self) -> usize {
        self.yearly_revenue.len()
    }

    /// Rebuild the yearly table rows
    pub fn rows(&self) -> Vec<YearRow> {
        (0..self.years())
            .map(|idx| YearRow {
                year: idx as u32 + 1,
                revenue: self.yearly_revenue[idx],
                costs: self.yearly_costs[idx],
                profit: self.yearly_profit[idx],
                cumulative_profit: self.cumulative_profit[idx],
            })
            .collect()
    }

    /// Payback month as presented to readers, `N/A` when not reached
    pub fn payback_display(&self) -> String {
        match self.payback_month {
            Some(month) => month.to_string(),
            None => PAYBACK_NOT_REACHED.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(year: u32, revenue: f64, costs: f64, cumulative_profit: f64) -> YearRow {
        YearRow {
            year,
            revenue,
            costs,
            profit: revenue - costs,
            cumulative_profit,
        }
    }

    #[test]
    fn test_finalize_totals_and_roi() {
        let mut result = ScenarioResult::new("Most Likely", 10);
        result.add_row(row(1, 0.0, 100.0, -100.0));
        result.add_row(row(2, 250.0, 50.0, 100.0));
        result.finalize(0.0);

        assert_eq!(result.years(), 2);
        assert_eq!(result.total_revenue, 250.0);
        assert_eq!(result.total_costs, 150.0);
        assert_eq!(result.total_profit, 100.0);
        assert_eq!(result.roi_pct, 66.7);
        assert_eq!(result.npv, 100.0);
    }

    #[test]
    fn test_zero_costs_report_zero_roi() {
        let mut result = ScenarioResult::new("Optimistic", 1);
        result.add_row(row(1, 500.0, 0.0, 500.0));
        result.finalize(5.0);

        assert_eq!(result.total_costs, 0.0);
        assert_eq!(result.roi_pct, 0.0);
    }

    #[test]
    fn test_rows_round_trip_through_sequences() {
        let mut result = ScenarioResult::new("Pessimistic", 3);
        let rows = vec![row(1, 10.0, 20.0, -10.0), row(2, 40.0, 20.0, 10.0)];
        for r in &rows {
            result.add_row(*r);
        }
        assert_eq!(result.rows(), rows);
    }

    #[test]
    fn test_payback_display() {
        let mut result = ScenarioResult::new("Most Likely", 1);
        assert_eq!(result.payback_display(), "N/A");
        result.payback_month = Some(18);
        assert_eq!(result.payback_display(), "18");
    }
}
