//! Report output for presentation layers: JSON envelope, yearly CSV and console table

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{DataError, ProjectionError};
use crate::inputs::ProjectInputs;
use crate::scenario::{run_all_scenarios, ScenarioSet};

/// Complete analysis of one request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub generated_at: DateTime<Utc>,
    pub inputs: ProjectInputs,
    pub scenarios: ScenarioSet,
}

impl AnalysisReport {
    /// Run all scenarios and stamp the report with the current time
    pub fn build(inputs: &ProjectInputs) -> Result<Self, ProjectionError> {
        Ok(Self::with_timestamp(inputs, run_all_scenarios(inputs)?, Utc::now()))
    }

    pub fn with_timestamp(inputs: &ProjectInputs, scenarios: ScenarioSet, generated_at: DateTime<Utc>) -> Self {
        Self {
            generated_at,
            inputs: inputs.clone(),
            scenarios,
        }
    }
}

/// Raw CSV row of the yearly table
#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    #[serde(rename = "Scenario")]
    scenario: &'a str,
    #[serde(rename = "Year")]
    year: u32,
    #[serde(rename = "Revenue")]
    revenue: f64,
    #[serde(rename = "Costs")]
    costs: f64,
    #[serde(rename = "Profit")]
    profit: f64,
    #[serde(rename = "CumulativeProfit")]
    cumulative_profit: f64,
}

/// Write one row per scenario and year
pub fn write_yearly_csv<W: Write>(scenarios: &ScenarioSet, writer: W) -> Result<(), DataError> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    for (kind, result) in scenarios.iter() {
        for row in result.rows() {
            csv_writer.serialize(CsvRow {
                scenario: kind.key(),
                year: row.year,
                revenue: row.revenue,
                costs: row.costs,
                profit: row.profit,
                cumulative_profit: row.cumulative_profit,
            })?;
        }
    }

    csv_writer.flush()?;
    Ok(())
}

/// Raw CSV row of a multi-request yearly table
#[derive(Debug, Serialize)]
struct BatchCsvRow<'a> {
    #[serde(rename = "Product")]
    product: &'a str,
    #[serde(rename = "Scenario")]
    scenario: &'a str,
    #[serde(rename = "Year")]
    year: u32,
    #[serde(rename = "Revenue")]
    revenue: f64,
    #[serde(rename = "Costs")]
    costs: f64,
    #[serde(rename = "Profit")]
    profit: f64,
    #[serde(rename = "CumulativeProfit")]
    cumulative_profit: f64,
}

/// Write the yearly tables of many reports into one file, keyed by product
pub fn write_batch_csv<W: Write>(reports: &[AnalysisReport], writer: W) -> Result<(), DataError> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    for report in reports {
        for (kind, result) in report.scenarios.iter() {
            for row in result.rows() {
                csv_writer.serialize(BatchCsvRow {
                    product: &report.inputs.product_name,
                    scenario: kind.key(),
                    year: row.year,
                    revenue: row.revenue,
                    costs: row.costs,
                    profit: row.profit,
                    cumulative_profit: row.cumulative_profit,
                })?;
            }
        }
    }

    csv_writer.flush()?;
    Ok(())
}

/// Fixed-width comparison of the three scenarios
pub fn render_summary(scenarios: &ScenarioSet) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "{:<12} {:>10} {:>16} {:>16} {:>16} {:>9} {:>16} {:>8}\n",
        "Scenario", "Customers", "Revenue", "Costs", "Profit", "ROI %", "NPV", "Payback"
    ));
    out.push_str(&"-".repeat(110));
    out.push('\n');

    for (_, result) in scenarios.iter() {
        out.push_str(&format!(
            "{:<12} {:>10} {:>16.2} {:>16.2} {:>16.2} {:>9.1} {:>16.2} {:>8}\n",
            result.label,
            result.customer_count,
            result.total_revenue,
            result.total_costs,
            result.total_profit,
            result.roi_pct,
            result.npv,
            result.payback_display(),
        ));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inputs::sample_inputs;
    use chrono::TimeZone;

    #[test]
    fn test_yearly_csv_layout() {
        let scenarios = run_all_scenarios(&sample_inputs()).unwrap();

        let mut buffer = Vec::new();
        write_yearly_csv(&scenarios, &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Scenario,Year,Revenue,Costs,Profit,CumulativeProfit");
        // Three scenarios of three years each
        assert_eq!(lines.len(), 1 + 9);
        assert_eq!(lines[4], "most_likely,1,291666.67,70000.0,221666.67,221666.67");
        assert!(lines[9].starts_with("pessimistic,3,"));
    }

    #[test]
    fn test_batch_csv_prefixes_product() {
        let first = sample_inputs();
        let second = ProjectInputs {
            product_name: "Fieldkit".to_string(),
            projection_years: 2,
            ..sample_inputs()
        };
        let reports: Vec<_> = [first, second]
            .iter()
            .map(|inputs| AnalysisReport::build(inputs).unwrap())
            .collect();

        let mut buffer = Vec::new();
        write_batch_csv(&reports, &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Product,Scenario,Year,Revenue,Costs,Profit,CumulativeProfit");
        assert_eq!(lines.len(), 1 + 9 + 6);
        assert!(lines[1].starts_with("Ledgerline,optimistic,1,"));
        assert!(lines[15].starts_with("Fieldkit,pessimistic,2,"));
    }

    #[test]
    fn test_summary_lists_every_scenario() {
        let mut inputs = sample_inputs();
        inputs.revenue_start_month = 36;
        let scenarios = run_all_scenarios(&inputs).unwrap();

        let summary = render_summary(&scenarios);
        let lines: Vec<&str> = summary.lines().collect();

        assert_eq!(lines.len(), 5);
        assert!(lines[2].starts_with("Optimistic"));
        assert!(lines[3].starts_with("Most Likely"));
        assert!(lines[4].starts_with("Pessimistic"));
        assert!(lines[3].trim_end().ends_with("N/A"));
    }

    #[test]
    fn test_report_json_envelope() {
        let inputs = sample_inputs();
        let stamp = Utc.with_ymd_and_hms(2026, 1, 15, 9, 30, 0).unwrap();
        let report = AnalysisReport::with_timestamp(&inputs, run_all_scenarios(&inputs).unwrap(), stamp);

        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["generated_at"], "2026-01-15T09:30:00Z");
        assert_eq!(value["inputs"]["product_name"], "Ledgerline");
        assert_eq!(value["scenarios"]["optimistic"]["customer_count"], 650);

        let parsed: AnalysisReport = serde_json::from_value(value).unwrap();
        assert_eq!(parsed.scenarios, report.scenarios);
    }

    #[test]
    fn test_build_rejects_invalid_request() {
        let mut inputs = sample_inputs();
        inputs.initial_investment = -5.0;
        assert!(AnalysisReport::build(&inputs).is_err());
    }
}
