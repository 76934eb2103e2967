//! Narrative go/no-go assessment built on top of the scenario projections
//!
//! The projections are deterministic; the narrative comes from an injected
//! [`TextCompletionService`]:
//! 1. **Prompt**: typed figures from the request and all three scenarios
//! 2. **Completion**: a single call to the service, no retries
//! 3. **Parsing**: fenced or bare JSON into an [`Assessment`]

mod client;
mod parse;
mod prompt;

pub use client::{Assessor, AssessmentOutcome, TextCompletionService};
pub use parse::{parse_model_json, Assessment};
pub use prompt::{AssessmentPrompt, ScenarioFigures, RESPONSE_FORMAT};
