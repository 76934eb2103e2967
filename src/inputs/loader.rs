//! Load analysis requests from JSON and CSV files

use super::ProjectInputs;
use crate::error::DataError;
use csv::Reader;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Raw CSV row for batch request files
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "ProductName", default)]
    product_name: String,
    #[serde(rename = "TargetMarket", default)]
    target_market: String,
    #[serde(rename = "ProductDescription", default)]
    product_description: String,
    #[serde(rename = "InitialInvestment")]
    initial_investment: f64,
    #[serde(rename = "AnnualOperatingCost")]
    annual_operating_cost: f64,
    #[serde(rename = "AnnualCostGrowthPct")]
    annual_cost_growth_pct: f64,
    #[serde(rename = "TotalAddressableMarket")]
    total_addressable_market: u64,
    #[serde(rename = "QualifyingRatioPct")]
    qualifying_ratio_pct: f64,
    #[serde(rename = "HitRatePct")]
    hit_rate_pct: f64,
    #[serde(rename = "AvgAnnualLicense")]
    avg_annual_license: f64,
    #[serde(rename = "RevenueStartMonth")]
    revenue_start_month: u32,
    #[serde(rename = "AnnualRevenueGrowthPct")]
    annual_revenue_growth_pct: f64,
    #[serde(rename = "ProjectionYears")]
    projection_years: u32,
    #[serde(rename = "DiscountRatePct")]
    discount_rate_pct: f64,
}

impl CsvRow {
    fn into_inputs(self) -> ProjectInputs {
        ProjectInputs {
            product_name: self.product_name,
            target_market: self.target_market,
            product_description: self.product_description,
            initial_investment: self.initial_investment,
            annual_operating_cost: self.annual_operating_cost,
            annual_cost_growth_pct: self.annual_cost_growth_pct,
            total_addressable_market: self.total_addressable_market,
            qualifying_ratio_pct: self.qualifying_ratio_pct,
            hit_rate_pct: self.hit_rate_pct,
            avg_annual_license: self.avg_annual_license,
            revenue_start_month: self.revenue_start_month,
            annual_revenue_growth_pct: self.annual_revenue_growth_pct,
            projection_years: self.projection_years,
            discount_rate_pct: self.discount_rate_pct,
        }
    }
}

/// Load a single request from a JSON file and validate it
pub fn load_inputs<P: AsRef<Path>>(path: P) -> Result<ProjectInputs, DataError> {
    let file = File::open(path)?;
    let inputs: ProjectInputs = serde_json::from_reader(BufReader::new(file))?;
    inputs.validate()?;
    Ok(inputs)
}

/// Load all requests from a CSV file
pub fn load_inputs_batch<P: AsRef<Path>>(path: P) -> Result<Vec<ProjectInputs>, DataError> {
    let file = File::open(path)?;
    load_inputs_from_reader(file)
}

/// Load requests from any reader (e.g., string buffer, network stream)
///
/// Every row is validated; the first invalid row aborts the load.
pub fn load_inputs_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<ProjectInputs>, DataError> {
    let mut csv_reader = Reader::from_reader(reader);
    let mut requests = Vec::new();

    for (idx, result) in csv_reader.deserialize().enumerate() {
        let row: CsvRow = result?;
        let inputs = row.into_inputs();
        inputs
            .validate()
            .map_err(|source| DataError::Invalid { row: idx + 1, source })?;
        requests.push(inputs);
    }

    log::debug!("loaded {} analysis requests", requests.len());
    Ok(requests)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "ProductName,TargetMarket,ProductDescription,InitialInvestment,\
AnnualOperatingCost,AnnualCostGrowthPct,TotalAddressableMarket,QualifyingRatioPct,HitRatePct,\
AvgAnnualLicense,RevenueStartMonth,AnnualRevenueGrowthPct,ProjectionYears,DiscountRatePct";

    #[test]
    fn test_load_from_reader() {
        let data = format!(
            "{}\nLedgerline,Accounting,Reconciliation,50000,20000,5,100000,10,5,1000,6,10,3,8\n\
             Fieldkit,Utilities,Crew scheduling,120000,45000,3,8000,25,12,4500,13,15,5,10\n",
            HEADER
        );

        let requests = load_inputs_from_reader(data.as_bytes()).expect("Failed to load requests");
        assert_eq!(requests.len(), 2);

        assert_eq!(requests[0].product_name, "Ledgerline");
        assert_eq!(requests[0].total_addressable_market, 100_000);
        assert_eq!(requests[0].revenue_start_month, 6);

        assert_eq!(requests[1].product_name, "Fieldkit");
        assert_eq!(requests[1].projection_years, 5);
        assert_eq!(requests[1].avg_annual_license, 4500.0);
    }

    #[test]
    fn test_load_sample_files() {
        let batch = load_inputs_batch("data/sample_batch.csv").expect("Failed to load batch");
        assert_eq!(batch.len(), 3);
        assert_eq!(batch[2].product_name, "Shelfsense");
        assert_eq!(batch[2].revenue_start_month, 19);

        let single = load_inputs("data/sample_request.json").expect("Failed to load request");
        assert_eq!(single.product_name, batch[0].product_name);
        assert_eq!(single.total_addressable_market, batch[0].total_addressable_market);
        assert_eq!(single.discount_rate_pct, batch[0].discount_rate_pct);
    }

    #[test]
    fn test_invalid_row_reports_row_number() {
        let data = format!(
            "{}\nOk,M,D,50000,20000,5,100000,10,5,1000,6,10,3,8\n\
             Bad,M,D,50000,20000,5,100000,10,5,1000,6,10,9,8\n",
            HEADER
        );

        match load_inputs_from_reader(data.as_bytes()) {
            Err(DataError::Invalid { row, source }) => {
                assert_eq!(row, 2);
                assert_eq!(source.field(), "projection_years");
            }
            other => panic!("expected invalid row error, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_number_is_csv_error() {
        let data = format!(
            "{}\nOk,M,D,lots,20000,5,100000,10,5,1000,6,10,3,8\n",
            HEADER
        );
        assert!(matches!(load_inputs_from_reader(data.as_bytes()), Err(DataError::Csv(_))));
    }

    #[test]
    fn test_inputs_deserialize_from_json() {
        let json = r#"{
            "product_name": "Ledgerline",
            "initial_investment": 50000,
            "annual_operating_cost": 20000,
            "annual_cost_growth_pct": 5,
            "total_addressable_market": 100000,
            "qualifying_ratio_pct": 10,
            "hit_rate_pct": 5,
            "avg_annual_license": 1000,
            "revenue_start_month": 6,
            "annual_revenue_growth_pct": 10,
            "projection_years": 3,
            "discount_rate_pct": 8
        }"#;

        let inputs: ProjectInputs = serde_json::from_str(json).unwrap();
        assert!(inputs.validate().is_ok());
        assert_eq!(inputs.product_name, "Ledgerline");
        assert!(inputs.target_market.is_empty());
    }
}
