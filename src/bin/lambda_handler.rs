//! AWS Lambda handler for running scenario projections
//!
//! Accepts a projection request as the JSON event payload and returns the
//! full analysis report. Invalid requests come back with an `error` field
//! rather than a failed invocation.

use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use roi_projection::assessment::AssessmentPrompt;
use roi_projection::{AnalysisReport, ProjectInputs};
use serde::{Deserialize, Serialize};

/// Input payload: the request fields plus handler options
#[derive(Debug, Deserialize)]
pub struct ProjectionRequest {
    #[serde(flatten)]
    pub inputs: ProjectInputs,

    /// Also return the rendered assessment prompt
    #[serde(default)]
    pub include_prompt: bool,
}

/// Output from the projection
#[derive(Debug, Serialize)]
pub struct ProjectionResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<AnalysisReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
    pub execution_time_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

fn respond(request: &ProjectionRequest) -> ProjectionResponse {
    let start = std::time::Instant::now();

    match AnalysisReport::build(&request.inputs) {
        Ok(report) => {
            let prompt = request
                .include_prompt
                .then(|| AssessmentPrompt::new(&request.inputs, &report.scenarios).render());
            ProjectionResponse {
                report: Some(report),
                prompt,
                execution_time_ms: start.elapsed().as_millis() as u64,
                error: None,
            }
        }
        Err(e) => {
            log::warn!("rejected request for {}: {}", request.inputs.product_name, e);
            ProjectionResponse {
                report: None,
                prompt: None,
                execution_time_ms: start.elapsed().as_millis() as u64,
                error: Some(e.to_string()),
            }
        }
    }
}

async fn handler(event: LambdaEvent<ProjectionRequest>) -> Result<ProjectionResponse, Error> {
    log::info!("projection request {}", event.context.request_id);
    Ok(respond(&event.payload))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(service_fn(handler)).await
}
