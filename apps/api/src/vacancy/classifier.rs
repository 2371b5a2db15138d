//! Vacancy classification: asks the model for plausible (profession, grade)
//! pairs for a description, and validates the free-form reply into a typed
//! list behind a single parse boundary.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::info;

use crate::llm_client::{ChatModel, LlmError};
use crate::vacancy::prompts::{CLASSIFY_PROMPT, CLASSIFY_SYSTEM};

/// Sentinel grade for roles with no meaningful seniority ladder.
pub const UNSPECIFIED_GRADE: &str = "не указано";

#[derive(Debug, Error)]
pub enum ClassificationError {
    #[error("language model request failed: {0}")]
    Model(#[from] LlmError),

    /// The reply did not validate; `raw` keeps the offending text for diagnostics.
    #[error("classifier returned an invalid response: {reason}")]
    InvalidResponse { reason: String, raw: String },
}

/// Advisory (profession, grade) pair. Never persisted, only surfaced to HR
/// at vacancy-creation time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfessionSuggestion {
    pub profession: String,
    pub grade: String,
}

pub async fn classify_vacancy(
    model: &dyn ChatModel,
    description: &str,
) -> Result<Vec<ProfessionSuggestion>, ClassificationError> {
    let prompt = CLASSIFY_PROMPT.replace("{description}", description);
    let response = model.complete(CLASSIFY_SYSTEM, &prompt).await?;

    let suggestions = parse_suggestions(&response)?;
    info!("classifier proposed {} profession/grade pairs", suggestions.len());
    Ok(suggestions)
}

/// The validated-conversion boundary for the classification call.
///
/// The reply must be a bare JSON array of objects carrying string
/// `profession` and `grade` keys. A blank grade is normalized to the
/// unspecified sentinel rather than rejected.
pub(crate) fn parse_suggestions(raw: &str) -> Result<Vec<ProfessionSuggestion>, ClassificationError> {
    let invalid = |reason: String| ClassificationError::InvalidResponse {
        reason,
        raw: raw.to_string(),
    };

    let value: Value = serde_json::from_str(raw.trim())
        .map_err(|e| invalid(format!("not valid JSON: {e}")))?;

    let items = value
        .as_array()
        .ok_or_else(|| invalid("expected a JSON array".to_string()))?;

    let mut suggestions = Vec::with_capacity(items.len());
    for item in items {
        let entry = item
            .as_object()
            .ok_or_else(|| invalid("array element is not an object".to_string()))?;
        let profession = entry
            .get("profession")
            .and_then(Value::as_str)
            .ok_or_else(|| invalid("element is missing a string `profession`".to_string()))?;
        let grade = entry
            .get("grade")
            .and_then(Value::as_str)
            .ok_or_else(|| invalid("element is missing a string `grade`".to_string()))?;

        let grade = if grade.trim().is_empty() {
            UNSPECIFIED_GRADE
        } else {
            grade
        };
        suggestions.push(ProfessionSuggestion {
            profession: profession.to_string(),
            grade: grade.to_string(),
        });
    }

    Ok(suggestions)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_array_parses() {
        let raw = r#"[{"profession": "Аналитик данных", "grade": "Middle"},
                      {"profession": "Официант", "grade": "не указано"}]"#;
        let suggestions = parse_suggestions(raw).unwrap();
        assert_eq!(suggestions.len(), 2);
        assert_eq!(suggestions[0].profession, "Аналитик данных");
        assert_eq!(suggestions[1].grade, UNSPECIFIED_GRADE);
    }

    #[test]
    fn test_blank_grade_normalized_to_unspecified() {
        let raw = r#"[{"profession": "Водитель", "grade": ""}]"#;
        let suggestions = parse_suggestions(raw).unwrap();
        assert_eq!(suggestions[0].grade, UNSPECIFIED_GRADE);

        let raw = r#"[{"profession": "Кассир", "grade": "   "}]"#;
        let suggestions = parse_suggestions(raw).unwrap();
        assert_eq!(suggestions[0].grade, UNSPECIFIED_GRADE);
    }

    #[test]
    fn test_object_instead_of_array_is_rejected() {
        let raw = r#"{"profession": "Аналитик данных", "grade": "Middle"}"#;
        match parse_suggestions(raw) {
            Err(ClassificationError::InvalidResponse { reason, raw: kept }) => {
                assert!(reason.contains("array"), "reason: {reason}");
                assert!(kept.contains("Аналитик"));
            }
            other => panic!("expected InvalidResponse, got {other:?}"),
        }
    }

    #[test]
    fn test_non_object_element_is_rejected() {
        let raw = r#"["Аналитик данных"]"#;
        assert!(matches!(
            parse_suggestions(raw),
            Err(ClassificationError::InvalidResponse { .. })
        ));
    }

    #[test]
    fn test_missing_grade_key_is_rejected() {
        let raw = r#"[{"profession": "Аналитик данных"}]"#;
        match parse_suggestions(raw) {
            Err(ClassificationError::InvalidResponse { reason, .. }) => {
                assert!(reason.contains("grade"), "reason: {reason}");
            }
            other => panic!("expected InvalidResponse, got {other:?}"),
        }
    }

    #[test]
    fn test_prose_reply_is_rejected_with_raw_kept() {
        let raw = "К сожалению, я не могу классифицировать эту вакансию.";
        match parse_suggestions(raw) {
            Err(ClassificationError::InvalidResponse { raw: kept, .. }) => {
                assert_eq!(kept, raw);
            }
            other => panic!("expected InvalidResponse, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_array_is_valid_but_empty() {
        // The zero-suggestion gate lives in the service, not the parser.
        assert!(parse_suggestions("[]").unwrap().is_empty());
    }
}
