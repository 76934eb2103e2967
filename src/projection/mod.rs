//! Projection engine for yearly scenario projections

mod state;
mod engine;
mod cashflows;
mod money;

pub use state::{ProjectionState, payback_month};
pub use engine::{ProjectionEngine, compute_scenario};
pub use cashflows::{YearRow, ScenarioResult, PAYBACK_NOT_REACHED};
pub use money::{round_to, round_money, discount_factor, npv, MONEY_DECIMALS, PCT_DECIMALS};
