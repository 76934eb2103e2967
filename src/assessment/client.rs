//! Completion service seam and the assessment round trip

use crate::error::AssessmentError;
use crate::inputs::ProjectInputs;
use crate::scenario::{run_all_scenarios, ScenarioSet};

use super::parse::{parse_model_json, Assessment};
use super::prompt::AssessmentPrompt;

/// External text-generation capability
///
/// Injected into [`Assessor`]; implementations wrap whatever model endpoint
/// the deployment uses.
pub trait TextCompletionService {
    fn complete(&self, prompt: &str) -> Result<String, AssessmentError>;
}

impl<S: TextCompletionService + ?Sized> TextCompletionService for &S {
    fn complete(&self, prompt: &str) -> Result<String, AssessmentError> {
        (**self).complete(prompt)
    }
}

/// Go/no-go narrative together with the figures it was based on
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct AssessmentOutcome {
    pub scenarios: ScenarioSet,
    pub assessment: Assessment,
}

/// Runs projections and asks the completion service for a narrative
pub struct Assessor<S> {
    service: S,
}

impl<S: TextCompletionService> Assessor<S> {
    pub fn new(service: S) -> Self {
        Self { service }
    }

    /// Project all scenarios, then request and parse the narrative
    ///
    /// The service is called once; failures are returned, never retried.
    pub fn assess(&self, inputs: &ProjectInputs) -> Result<AssessmentOutcome, AssessmentError> {
        let scenarios = run_all_scenarios(inputs)?;
        let assessment = self.assess_scenarios(inputs, &scenarios)?;
        Ok(AssessmentOutcome { scenarios, assessment })
    }

    /// Request a narrative for scenarios computed elsewhere
    pub fn assess_scenarios(
        &self,
        inputs: &ProjectInputs,
        scenarios: &ScenarioSet,
    ) -> Result<Assessment, AssessmentError> {
        let prompt = AssessmentPrompt::new(inputs, scenarios).render();
        log::debug!("requesting assessment for {} ({} chars)", inputs.product_name, prompt.len());

        let reply = self.service.complete(&prompt)?;
        let value = parse_model_json(&reply)?;
        serde_json::from_value(value).map_err(AssessmentError::Shape)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inputs::sample_inputs;
    use std::cell::RefCell;

    /// Replays a canned reply and records every prompt it receives
    struct ScriptedService {
        reply: Result<String, String>,
        prompts: RefCell<Vec<String>>,
    }

    impl ScriptedService {
        fn replying(reply: &str) -> Self {
            Self {
                reply: Ok(reply.to_string()),
                prompts: RefCell::new(Vec::new()),
            }
        }

        fn failing(message: &str) -> Self {
            Self {
                reply: Err(message.to_string()),
                prompts: RefCell::new(Vec::new()),
            }
        }
    }

    impl TextCompletionService for ScriptedService {
        fn complete(&self, prompt: &str) -> Result<String, AssessmentError> {
            self.prompts.borrow_mut().push(prompt.to_string());
            self.reply.clone().map_err(AssessmentError::Completion)
        }
    }

    const FENCED_REPLY: &str = "```json\n{\n  \"market_assessment\": \"Fragmented market with clear pain\",\n  \
        \"risk_factors\": [\"Long sales cycles\", \"Incumbent bundling\"],\n  \
        \"recommendations\": [\"Pilot with five firms\"],\n  \
        \"go_no_go\": \"GO\",\n  \
        \"sensitivity_notes\": \"Profitable even in the pessimistic case\"\n}\n```";

    #[test]
    fn test_assess_parses_fenced_reply() {
        let service = ScriptedService::replying(FENCED_REPLY);
        let assessor = Assessor::new(&service);

        let outcome = assessor.assess(&sample_inputs()).unwrap();

        assert_eq!(outcome.assessment.go_no_go, "GO");
        assert_eq!(outcome.assessment.risk_factors.len(), 2);
        assert_eq!(outcome.scenarios.most_likely.customer_count, 500);

        let prompts = service.prompts.borrow();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("Ledgerline"));
    }

    #[test]
    fn test_service_failure_is_not_retried() {
        let service = ScriptedService::failing("rate limited");
        let assessor = Assessor::new(&service);

        let err = assessor.assess(&sample_inputs()).unwrap_err();
        assert!(matches!(err, AssessmentError::Completion(ref msg) if msg == "rate limited"));
        assert_eq!(service.prompts.borrow().len(), 1);
    }

    #[test]
    fn test_invalid_request_never_reaches_service() {
        let service = ScriptedService::replying(FENCED_REPLY);
        let assessor = Assessor::new(&service);

        let mut inputs = sample_inputs();
        inputs.revenue_start_month = 40;

        let err = assessor.assess(&inputs).unwrap_err();
        assert!(matches!(err, AssessmentError::Projection(_)));
        assert!(service.prompts.borrow().is_empty());
    }

    #[test]
    fn test_non_json_reply() {
        let assessor = Assessor::new(ScriptedService::replying("I cannot help with that."));
        let err = assessor.assess(&sample_inputs()).unwrap_err();
        assert!(matches!(err, AssessmentError::Parse(_)));
    }

    #[test]
    fn test_wrong_shape_reply() {
        let assessor = Assessor::new(ScriptedService::replying(r#"{"risk_factors": "just one"}"#));
        let err = assessor.assess(&sample_inputs()).unwrap_err();
        assert!(matches!(err, AssessmentError::Shape(_)));
    }
}
