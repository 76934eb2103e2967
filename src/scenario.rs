//! Scenario sensitivity: fixed multiplier policy and batch runner
//!
//! Every request is projected under three canned scenarios. The multipliers
//! are business policy, not configuration.

use std::fmt;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::ProjectionError;
use crate::inputs::ProjectInputs;
use crate::projection::{ProjectionEngine, ScenarioResult};

/// The three canned scenarios
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScenarioKind {
    Optimistic,
    MostLikely,
    Pessimistic,
}

impl ScenarioKind {
    /// All scenarios in presentation order
    pub const ALL: [ScenarioKind; 3] = [
        ScenarioKind::Optimistic,
        ScenarioKind::MostLikely,
        ScenarioKind::Pessimistic,
    ];

    /// Map key used in serialized output
    pub fn key(&self) -> &'static str {
        match self {
            ScenarioKind::Optimistic => "optimistic",
            ScenarioKind::MostLikely => "most_likely",
            ScenarioKind::Pessimistic => "pessimistic",
        }
    }

    /// Display label stored on the result
    pub fn label(&self) -> &'static str {
        match self {
            ScenarioKind::Optimistic => "Optimistic",
            ScenarioKind::MostLikely => "Most Likely",
            ScenarioKind::Pessimistic => "Pessimistic",
        }
    }

    /// (revenue multiplier, cost multiplier)
    pub fn multipliers(&self) -> (f64, f64) {
        match self {
            ScenarioKind::Optimistic => (1.3, 0.9),
            ScenarioKind::MostLikely => (1.0, 1.0),
            ScenarioKind::Pessimistic => (0.7, 1.15),
        }
    }
}

impl fmt::Display for ScenarioKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Results of all three scenarios for one request, keyed by scenario name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioSet {
    pub optimistic: ScenarioResult,
    pub most_likely: ScenarioResult,
    pub pessimistic: ScenarioResult,
}

impl ScenarioSet {
    pub fn get(&self, kind: ScenarioKind) -> &ScenarioResult {
        match kind {
            ScenarioKind::Optimistic => &self.optimistic,
            ScenarioKind::MostLikely => &self.most_likely,
            ScenarioKind::Pessimistic => &self.pessimistic,
        }
    }

    /// Iterate in presentation order
    pub fn iter(&self) -> impl Iterator<Item = (ScenarioKind, &ScenarioResult)> {
        ScenarioKind::ALL.into_iter().map(move |kind| (kind, self.get(kind)))
    }
}

/// Project all three scenarios for a request
///
/// Fails only when the request does not validate; nothing is computed then.
pub fn run_all_scenarios(inputs: &ProjectInputs) -> Result<ScenarioSet, ProjectionError> {
    let engine = ProjectionEngine::new(inputs)?;
    let run = |kind: ScenarioKind| {
        let (revenue_multiplier, cost_multiplier) = kind.multipliers();
        engine.compute_scenario(revenue_multiplier, cost_multiplier, kind.label())
    };

    Ok(ScenarioSet {
        optimistic: run(ScenarioKind::Optimistic)?,
        most_likely: run(ScenarioKind::MostLikely)?,
        pessimistic: run(ScenarioKind::Pessimistic)?,
    })
}

/// Scenario runner for single and batch requests
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::new();
/// let requests = load_inputs_batch("requests.csv")?;
/// for outcome in runner.run_batch(&requests) {
///     let scenarios = outcome?;
///     println!("{}", scenarios.most_likely.npv);
/// }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ScenarioRunner;

impl ScenarioRunner {
    pub fn new() -> Self {
        Self
    }

    /// Run all scenarios for one request
    pub fn run(&self, inputs: &ProjectInputs) -> Result<ScenarioSet, ProjectionError> {
        run_all_scenarios(inputs)
    }

    /// Run many independent requests in parallel, preserving input order
    pub fn run_batch(&self, requests: &[ProjectInputs]) -> Vec<Result<ScenarioSet, ProjectionError>> {
        log::info!("running {} requests", requests.len());
        requests.par_iter().map(run_all_scenarios).collect()
    }
}
