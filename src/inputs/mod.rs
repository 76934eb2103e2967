//! Analysis request data structures and loading

mod data;
pub mod loader;

pub use data::{ProjectInputs, MAX_PROJECTION_YEARS, MAX_REVENUE_START_MONTH};
pub use loader::{load_inputs, load_inputs_batch, load_inputs_from_reader};

#[cfg(test)]
pub(crate) use data::sample_inputs;
