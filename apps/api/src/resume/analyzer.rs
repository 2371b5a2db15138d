//! Resume analysis: turns extracted resume text into a structured
//! candidate record via the language model.
//!
//! The model returns free-form text with no schema enforcement; everything
//! it sends back passes through the single `parse_candidate` boundary, so
//! prompt or format changes only ever touch this module, and tests can feed
//! canned outputs without a live model.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use thiserror::Error;
use tracing::info;

use crate::llm_client::prompts::STRICT_JSON_SYSTEM;
use crate::llm_client::{ChatModel, LlmError};
use crate::resume::prompts::RESUME_ANALYSIS_PROMPT;

/// Keys the model must return. Presence is mandatory; values may be null.
const REQUIRED_KEYS: [&str; 4] = ["first_name", "last_name", "email", "phone"];

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("resume text is empty")]
    EmptyInput,

    #[error("model returned invalid JSON: {0}")]
    MalformedResponse(String),

    #[error("model response is missing required keys: {missing:?}")]
    IncompleteResponse { missing: Vec<String> },

    #[error("language model request failed: {0}")]
    Model(#[from] LlmError),
}

/// Candidate record extracted from a resume. Transient; always folded into
/// a persisted `ResumeRow` together with the normalized salary figures.
#[derive(Debug, Clone, Deserialize)]
pub struct ExtractedCandidate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    #[serde(default)]
    pub experience_time: Option<f64>,
    #[serde(default)]
    pub profession: Option<String>,
    #[serde(default, deserialize_with = "string_or_list")]
    pub education: Option<String>,
    #[serde(default)]
    pub skills: Option<Vec<String>>,
    #[serde(default)]
    pub awards: Option<Vec<String>>,
    #[serde(default)]
    pub projects: Option<Vec<String>>,
    #[serde(default)]
    pub courses: Option<Vec<String>>,
    #[serde(default)]
    pub languages: Option<BTreeMap<String, String>>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub grade: Option<String>,
    #[serde(default)]
    pub min_salary: Option<f64>,
    #[serde(default)]
    pub max_salary: Option<f64>,
    #[serde(default)]
    pub currency: Option<String>,
}

/// Analyzes resume text with the language model.
///
/// Blank input fails before any model call. The model response is parsed
/// strictly, and there is no automatic retry here; retry policy is the
/// caller's concern.
pub async fn analyze_resume(
    model: &dyn ChatModel,
    resume_text: &str,
) -> Result<ExtractedCandidate, AnalysisError> {
    if resume_text.trim().is_empty() {
        return Err(AnalysisError::EmptyInput);
    }

    let prompt = RESUME_ANALYSIS_PROMPT.replace("{resume_text}", resume_text);
    let response = model.complete(STRICT_JSON_SYSTEM, &prompt).await?;

    let candidate = parse_candidate(&response)?;
    info!(
        "analyzed resume for {} {}",
        candidate.first_name.as_deref().unwrap_or("?"),
        candidate.last_name.as_deref().unwrap_or("?")
    );
    Ok(candidate)
}

/// The validated-conversion boundary for the analysis call.
///
/// Syntax failures map to `MalformedResponse`; a syntactically valid object
/// missing any mandatory contact key maps to `IncompleteResponse`.
pub(crate) fn parse_candidate(raw: &str) -> Result<ExtractedCandidate, AnalysisError> {
    let value: Value = serde_json::from_str(raw.trim())
        .map_err(|e| AnalysisError::MalformedResponse(e.to_string()))?;

    let missing: Vec<String> = REQUIRED_KEYS
        .iter()
        .filter(|key| value.get(**key).is_none())
        .map(|key| key.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(AnalysisError::IncompleteResponse { missing });
    }

    serde_json::from_value(value).map_err(|e| AnalysisError::MalformedResponse(e.to_string()))
}

/// Accepts the education field as either free text or a list of entries.
fn string_or_list<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        Value::String(s) => Some(s),
        Value::Array(items) => {
            let parts: Vec<String> = items
                .into_iter()
                .filter_map(|item| match item {
                    Value::String(s) => Some(s),
                    _ => None,
                })
                .collect();
            if parts.is_empty() {
                None
            } else {
                Some(parts.join("; "))
            }
        }
        _ => None,
    }))
}
