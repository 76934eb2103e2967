//! Typed prompt for the go/no-go narrative

use serde::Serialize;

use crate::inputs::ProjectInputs;
use crate::projection::ScenarioResult;
use crate::scenario::ScenarioSet;

/// Instruction block appended to every assessment prompt
pub const RESPONSE_FORMAT: &str = "\
Respond with a single JSON object and nothing else, using exactly these keys:
- \"market_assessment\": string
- \"risk_factors\": array of strings
- \"recommendations\": array of strings
- \"go_no_go\": string, either \"GO\", \"NO-GO\" or \"CONDITIONAL\"
- \"sensitivity_notes\": string";

/// Headline figures of one scenario as substituted into the prompt
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioFigures {
    pub customer_count: u64,
    pub total_revenue: f64,
    pub total_costs: f64,
    pub total_profit: f64,
    pub roi_pct: f64,
    pub npv: f64,
    /// Month number, or `N/A` when payback is not reached
    pub payback_month: String,
}

impl From<&ScenarioResult> for ScenarioFigures {
    fn from(result: &ScenarioResult) -> Self {
        Self {
            customer_count: result.customer_count,
            total_revenue: result.total_revenue,
            total_costs: result.total_costs,
            total_profit: result.total_profit,
            roi_pct: result.roi_pct,
            npv: result.npv,
            payback_month: result.payback_display(),
        }
    }
}

/// Every field the narrative generator receives
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssessmentPrompt {
    pub product_name: String,
    pub target_market: String,
    pub product_description: String,
    pub initial_investment: f64,
    pub annual_operating_cost: f64,
    pub total_addressable_market: u64,
    pub qualifying_ratio_pct: f64,
    pub hit_rate_pct: f64,
    pub avg_annual_license: f64,
    pub revenue_start_month: u32,
    pub projection_years: u32,
    pub discount_rate_pct: f64,
    pub most_likely: ScenarioFigures,
    pub optimistic: ScenarioFigures,
    pub pessimistic: ScenarioFigures,
}

impl AssessmentPrompt {
    pub fn new(inputs: &ProjectInputs, scenarios: &ScenarioSet) -> Self {
        Self {
            product_name: inputs.product_name.clone(),
            target_market: inputs.target_market.clone(),
            product_description: inputs.product_description.clone(),
            initial_investment: inputs.initial_investment,
            annual_operating_cost: inputs.annual_operating_cost,
            total_addressable_market: inputs.total_addressable_market,
            qualifying_ratio_pct: inputs.qualifying_ratio_pct,
            hit_rate_pct: inputs.hit_rate_pct,
            avg_annual_license: inputs.avg_annual_license,
            revenue_start_month: inputs.revenue_start_month,
            projection_years: inputs.projection_years,
            discount_rate_pct: inputs.discount_rate_pct,
            most_likely: (&scenarios.most_likely).into(),
            optimistic: (&scenarios.optimistic).into(),
            pessimistic: (&scenarios.pessimistic).into(),
        }
    }

    /// Render the prompt text
    pub fn render(&self) -> String {
        let mut out = format!(
            "You are a product strategy analyst evaluating a new product investment.\n\n\
             PRODUCT: {}\n\
             TARGET MARKET: {}\n\
             DESCRIPTION: {}\n\n\
             INVESTMENT PARAMETERS:\n\
             - Initial investment: ${:.2}\n\
             - Annual operating cost: ${:.2}\n\
             - Total addressable market: {}\n\
             - Qualifying ratio: {}%\n\
             - Hit rate: {}%\n\
             - Average annual license: ${:.2}\n\
             - Revenue start month: {}\n\
             - Projection horizon: {} years\n\
             - Discount rate: {}%\n\n",
            self.product_name,
            self.target_market,
            self.product_description,
            self.initial_investment,
            self.annual_operating_cost,
            self.total_addressable_market,
            self.qualifying_ratio_pct,
            self.hit_rate_pct,
            self.avg_annual_license,
            self.revenue_start_month,
            self.projection_years,
            self.discount_rate_pct,
        );

        for (title, figures) in [
            ("MOST LIKELY", &self.most_likely),
            ("OPTIMISTIC", &self.optimistic),
            ("PESSIMISTIC", &self.pessimistic),
        ] {
            out.push_str(&render_scenario(title, figures));
        }

        out.push_str(
            "Assess the market opportunity, the main risks, and how sensitive the \
             outcome is to the scenario assumptions.\n\n",
        );
        out.push_str(RESPONSE_FORMAT);
        out.push('\n');
        out
    }
}

fn render_scenario(title: &str, figures: &ScenarioFigures) -> String {
    format!(
        "{} SCENARIO:\n\
         - Customers: {}\n\
         - Total revenue: ${:.2}\n\
         - Total costs: ${:.2}\n\
         - Total profit: ${:.2}\n\
         - ROI: {:.1}%\n\
         - NPV: ${:.2}\n\
         - Payback month: {}\n\n",
        title,
        figures.customer_count,
        figures.total_revenue,
        figures.total_costs,
        figures.total_profit,
        figures.roi_pct,
        figures.npv,
        figures.payback_month,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inputs::sample_inputs;
    use crate::scenario::run_all_scenarios;

    #[test]
    fn test_prompt_carries_scenario_figures() {
        let inputs = sample_inputs();
        let scenarios = run_all_scenarios(&inputs).unwrap();
        let prompt = AssessmentPrompt::new(&inputs, &scenarios);

        assert_eq!(prompt.most_likely.customer_count, 500);
        assert_eq!(prompt.optimistic.customer_count, 650);
        assert_eq!(prompt.pessimistic.customer_count, 350);
        assert_eq!(prompt.most_likely.payback_month, "12");
        assert_eq!(prompt.most_likely.npv, scenarios.most_likely.npv);

        let text = prompt.render();
        assert!(text.contains("PRODUCT: Ledgerline"));
        assert!(text.contains("- Customers: 500"));
        assert!(text.contains("- Total costs: $113050.00"));
        assert!(text.contains("- ROI: 1179.7%"));
        assert!(text.contains("\"sensitivity_notes\""));

        let most_likely = text.find("MOST LIKELY SCENARIO").unwrap();
        let optimistic = text.find("OPTIMISTIC SCENARIO").unwrap();
        let pessimistic = text.find("PESSIMISTIC SCENARIO").unwrap();
        assert!(most_likely < optimistic && optimistic < pessimistic);
    }

    #[test]
    fn test_unreached_payback_renders_na() {
        let mut inputs = sample_inputs();
        inputs.revenue_start_month = 36;
        let scenarios = run_all_scenarios(&inputs).unwrap();
        let prompt = AssessmentPrompt::new(&inputs, &scenarios);

        assert_eq!(prompt.pessimistic.payback_month, "N/A");
        assert!(prompt.render().contains("- Payback month: N/A"));
    }
}
