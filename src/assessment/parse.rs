//! Model output parsing

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ParseError;

/// Qualitative go/no-go narrative returned by the model
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Assessment {
    pub market_assessment: String,
    pub risk_factors: Vec<String>,
    pub recommendations: Vec<String>,
    pub go_no_go: String,
    pub sensitivity_notes: String,
}

/// Parse model output as JSON, accepting a Markdown code fence around it
pub fn parse_model_json(text: &str) -> Result<Value, ParseError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ParseError::Empty);
    }

    let body = strip_code_fence(trimmed).unwrap_or(trimmed);

    if body.is_empty() {
        return Err(ParseError::Empty);
    }
    Ok(serde_json::from_str(body)?)
}

/// Inner text of a fenced block, or `None` when `text` is not fenced
///
/// The opening fence may carry a language tag (```json).
fn strip_code_fence(text: &str) -> Option<&str> {
    let rest = text.strip_prefix("```")?;
    // Single-line fences carry no language tag
    let body = match rest.find('\n') {
        Some(idx) => &rest[idx + 1..],
        None => rest,
    };
    let body = body.strip_suffix("```").unwrap_or(body);
    Some(body.trim())
}
