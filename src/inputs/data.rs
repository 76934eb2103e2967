//! Investment request record and its validation

use serde::{Deserialize, Serialize};

use crate::error::ProjectionError;

/// Longest supported projection horizon in years
pub const MAX_PROJECTION_YEARS: u32 = 5;

/// Latest month revenue may start accruing
pub const MAX_REVENUE_START_MONTH: u32 = 36;

/// Parameters of one product investment analysis
///
/// Constructed once per request and never mutated by the engine. Percentages
/// are expressed in whole percent (`5.0` means 5%).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectInputs {
    /// Product being evaluated
    #[serde(default)]
    pub product_name: String,

    /// Market segment the product is sold into
    #[serde(default)]
    pub target_market: String,

    /// Free-text pitch, forwarded to the narrative assessment only
    #[serde(default)]
    pub product_description: String,

    /// One-time cost, charged in year 1 only
    pub initial_investment: f64,

    /// Recurring cost baseline for year 1
    pub annual_operating_cost: f64,

    /// Compounding growth of operating cost from year 2 onwards
    pub annual_cost_growth_pct: f64,

    /// Total market participants
    pub total_addressable_market: u64,

    /// Share of the market that qualifies as prospects (0-100)
    pub qualifying_ratio_pct: f64,

    /// Share of qualified prospects that convert (0-100)
    pub hit_rate_pct: f64,

    /// Revenue per converted customer per year
    pub avg_annual_license: f64,

    /// First month (1-36) in which revenue accrues
    pub revenue_start_month: u32,

    /// Compounding growth of revenue once ramp-up completes
    pub annual_revenue_growth_pct: f64,

    /// Projection horizon in years (1-5)
    pub projection_years: u32,

    /// Annual rate used for NPV discounting
    pub discount_rate_pct: f64,
}

impl ProjectInputs {
    /// Check every documented constraint, reporting the first violation
    pub fn validate(&self) -> Result<(), ProjectionError> {
        non_negative_money("initial_investment", self.initial_investment)?;
        non_negative_money("annual_operating_cost", self.annual_operating_cost)?;
        non_negative_money("avg_annual_license", self.avg_annual_license)?;

        bounded_pct("qualifying_ratio_pct", self.qualifying_ratio_pct)?;
        bounded_pct("hit_rate_pct", self.hit_rate_pct)?;

        finite_pct("annual_cost_growth_pct", self.annual_cost_growth_pct)?;
        finite_pct("annual_revenue_growth_pct", self.annual_revenue_growth_pct)?;
        discount_pct("discount_rate_pct", self.discount_rate_pct)?;

        if !(1..=MAX_PROJECTION_YEARS).contains(&self.projection_years) {
            return Err(ProjectionError::invalid(
                "projection_years",
                format!(
                    "must be between 1 and {}, got {}",
                    MAX_PROJECTION_YEARS, self.projection_years
                ),
            ));
        }

        if !(1..=MAX_REVENUE_START_MONTH).contains(&self.revenue_start_month) {
            return Err(ProjectionError::invalid(
                "revenue_start_month",
                format!(
                    "must be between 1 and {}, got {}",
                    MAX_REVENUE_START_MONTH, self.revenue_start_month
                ),
            ));
        }

        Ok(())
    }

    /// Months elapsed before the start of a projection year
    pub fn months_before_year(&self, year: u32) -> u32 {
        year.saturating_sub(1) * 12
    }

    /// Whether revenue is still ramping up at the start of `year`
    pub fn is_ramping(&self, year: u32) -> bool {
        self.months_before_year(year) < self.revenue_start_month
    }

    /// Months of `year` at or after the revenue start month, clamped to 0-12
    pub fn active_months(&self, year: u32) -> u32 {
        (year * 12 + 1).saturating_sub(self.revenue_start_month).min(12)
    }

    /// Projection year in which revenue first accrues (ceil of start month / 12)
    pub fn ramp_year(&self) -> u32 {
        self.revenue_start_month.div_ceil(12)
    }

    /// Whether revenue starts after the projection horizon ends
    pub fn revenue_beyond_horizon(&self) -> bool {
        self.revenue_start_month > self.projection_years * 12
    }
}

fn non_negative_money(field: &str, value: f64) -> Result<(), ProjectionError> {
    if !value.is_finite() {
        return Err(ProjectionError::invalid(field, "must be a finite amount"));
    }
    if value < 0.0 {
        return Err(ProjectionError::invalid(
            field,
            format!("cannot be negative, got {}", value),
        ));
    }
    Ok(())
}

fn bounded_pct(field: &str, value: f64) -> Result<(), ProjectionError> {
    if !value.is_finite() || !(0.0..=100.0).contains(&value) {
        return Err(ProjectionError::invalid(
            field,
            format!("must be between 0 and 100, got {}", value),
        ));
    }
    Ok(())
}

fn finite_pct(field: &str, value: f64) -> Result<(), ProjectionError> {
    if !value.is_finite() {
        return Err(ProjectionError::invalid(
            field,
            format!("must be a finite rate, got {}", value),
        ));
    }
    Ok(())
}

/// Discount factors divide by `1 + rate`, so the rate must stay above -100
fn discount_pct(field: &str, value: f64) -> Result<(), ProjectionError> {
    if !value.is_finite() || value <= -100.0 {
        return Err(ProjectionError::invalid(
            field,
            format!("must be a finite rate above -100, got {}", value),
        ));
    }
    Ok(())
}

#[cfg(test)]
pub(crate) fn sample_inputs() -> ProjectInputs {
    ProjectInputs {
        product_name: "Ledgerline".to_string(),
        target_market: "Mid-market accounting firms".to_string(),
        product_description: "Automated reconciliation for multi-entity books".to_string(),
        initial_investment: 50_000.0,
        annual_operating_cost: 20_000.0,
        annual_cost_growth_pct: 5.0,
        total_addressable_market: 100_000,
        qualifying_ratio_pct: 10.0,
        hit_rate_pct: 5.0,
        avg_annual_license: 1_000.0,
        revenue_start_month: 6,
        annual_revenue_growth_pct: 10.0,
        projection_years: 3,
        discount_rate_pct: 8.0,
    }
}
