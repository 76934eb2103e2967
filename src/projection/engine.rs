//! Core projection engine for yearly revenue, cost and profit projections

use crate::error::ProjectionError;
use crate::inputs::ProjectInputs;
use super::state::ProjectionState;
use super::cashflows::ScenarioResult;

/// Main projection engine
///
/// Holds a validated request; every scenario computed from it is a pure
/// function of the request and the scenario multipliers.
#[derive(Debug, Clone, Copy)]
pub struct ProjectionEngine<'a> {
    inputs: &'a ProjectInputs,
}

impl<'a> ProjectionEngine<'a> {
    /// Create a new projection engine, validating the request first
    pub fn new(inputs: &'a ProjectInputs) -> Result<Self, ProjectionError> {
        inputs.validate()?;
        Ok(Self { inputs })
    }

    /// Run projection for one scenario
    pub fn compute_scenario(
        &self,
        revenue_multiplier: f64,
        cost_multiplier: f64,
        label: &str,
    ) -> Result<ScenarioResult, ProjectionError> {
        positive_multiplier("revenue_multiplier", revenue_multiplier)?;
        positive_multiplier("cost_multiplier", cost_multiplier)?;

        if self.inputs.revenue_beyond_horizon() {
            log::warn!(
                "{}: revenue starts in month {}, after the {}-year horizon",
                label,
                self.inputs.revenue_start_month,
                self.inputs.projection_years,
            );
        }

        let customer_count = self.customer_count(revenue_multiplier, label);
        let base_annual_revenue = customer_count as f64 * self.inputs.avg_annual_license;

        let mut result = ScenarioResult::new(label, customer_count);
        let mut state = ProjectionState::new();

        for _year in 1..=self.inputs.projection_years {
            state.advance_year();

            let revenue = self.year_revenue(state.year, base_annual_revenue);
            let costs = self.year_costs(state.year, cost_multiplier);
            result.add_row(state.record_year(revenue, costs));
        }

        result.payback_month = state.payback_month;
        result.finalize(self.inputs.discount_rate_pct);

        log::debug!(
            "{}: customers={} revenue={:.2} costs={:.2} roi={:.1}% npv={:.2} payback={}",
            label,
            result.customer_count,
            result.total_revenue,
            result.total_costs,
            result.roi_pct,
            result.npv,
            result.payback_display(),
        );

        Ok(result)
    }

    /// Paying customers for a scenario, never fewer than one
    pub fn customer_count(&self, revenue_multiplier: f64, label: &str) -> u64 {
        let inputs = self.inputs;
        let raw = inputs.total_addressable_market as f64
            * (inputs.qualifying_ratio_pct / 100.0)
            * (inputs.hit_rate_pct / 100.0)
            * revenue_multiplier;

        let floored = raw.floor();
        if floored < 1.0 {
            log::warn!("{}: market yields {:.4} customers, flooring to 1", label, raw);
            1
        } else {
            floored as u64
        }
    }

    /// Revenue for a projection year
    ///
    /// Partial years before the ramp completes are prorated by active months;
    /// afterwards revenue compounds from the base annual run rate.
    fn year_revenue(&self, year: u32, base_annual_revenue: f64) -> f64 {
        let inputs = self.inputs;

        if year == 1 {
            if inputs.revenue_start_month <= 12 {
                base_annual_revenue * inputs.active_months(1) as f64 / 12.0
            } else {
                0.0
            }
        } else if inputs.is_ramping(year) {
            base_annual_revenue * inputs.active_months(year) as f64 / 12.0
        } else {
            let exponent = year - inputs.ramp_year();
            base_annual_revenue
                * (1.0 + inputs.annual_revenue_growth_pct / 100.0).powi(exponent as i32)
        }
    }

    /// Costs for a projection year
    ///
    /// The one-time investment lands in year 1; operating cost compounds from
    /// its year-1 baseline.
    fn year_costs(&self, year: u32, cost_multiplier: f64) -> f64 {
        let inputs = self.inputs;

        if year == 1 {
            (inputs.initial_investment + inputs.annual_operating_cost) * cost_multiplier
        } else {
            inputs.annual_operating_cost
                * (1.0 + inputs.annual_cost_growth_pct / 100.0).powi((year - 1) as i32)
                * cost_multiplier
        }
    }
}

fn positive_multiplier(field: &str, value: f64) -> Result<(), ProjectionError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ProjectionError::invalid(
            field,
            format!("must be a positive finite multiplier, got {}", value),
        ));
    }
    Ok(())
}

/// Validate `inputs` and run projection for one scenario
pub fn compute_scenario(
    inputs: &ProjectInputs,
    revenue_multiplier: f64,
    cost_multiplier: f64,
    label: &str,
) -> Result<ScenarioResult, ProjectionError> {
    ProjectionEngine::new(inputs)?.compute_scenario(revenue_multiplier, cost_multiplier, label)
}
