//! ROI Projection - deterministic multi-year projection engine for product investments
//!
//! This library provides:
//! - Yearly revenue, cost, profit and cumulative-profit projections
//! - Revenue ramp-up and compounding cost/revenue growth
//! - Scenario sensitivity (optimistic, most likely, pessimistic)
//! - ROI, NPV and payback-month estimation
//! - Report output and a narrative assessment seam for a text-generation service

pub mod error;
pub mod inputs;
pub mod projection;
pub mod scenario;
pub mod report;
pub mod assessment;

// Re-export commonly used types
pub use error::{ProjectionError, DataError, ParseError, AssessmentError};
pub use inputs::ProjectInputs;
pub use projection::{ProjectionEngine, ScenarioResult, YearRow, compute_scenario};
pub use scenario::{ScenarioKind, ScenarioRunner, ScenarioSet, run_all_scenarios};
pub use report::AnalysisReport;
