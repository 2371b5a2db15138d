//! Resume/vacancy matching: scores candidate fit with the language model.
//!
//! Matching is advisory: a reply with no recognizable score label is not an
//! error. The engine falls back to a neutral score and passes the raw text
//! through as the stored summary, so a format drift in the model never
//! blocks application submission.

use std::sync::LazyLock;

use regex::Regex;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::llm_client::ChatModel;
use crate::models::resume::ResumeRow;
use crate::models::vacancy::VacancyRow;

use super::prompts::{MATCH_PROMPT, MATCH_SYSTEM};

/// Neutral score used whenever no score can be read out of the reply.
pub const FALLBACK_SCORE: i32 = 50;

static SCORE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Соответствие:\s*(\d{1,3})").expect("score pattern is valid"));

/// Matching verdict: a clamped score and the model's narrative.
#[derive(Debug, Clone)]
pub struct MatchOutcome {
    pub score: i32,
    pub summary: String,
}

pub async fn analyze_matching(
    model: &dyn ChatModel,
    resume: &ResumeRow,
    vacancy: &VacancyRow,
) -> Result<MatchOutcome, AppError> {
    let prompt = build_match_prompt(resume, vacancy);
    let response = model
        .complete(MATCH_SYSTEM, &prompt)
        .await
        .map_err(|e| AppError::Llm(format!("Matching request failed: {e}")))?;

    let score = extract_score(&response);
    info!(
        "resume {} matched against vacancy {} (score: {score})",
        resume.id, vacancy.id
    );

    Ok(MatchOutcome {
        score,
        summary: response,
    })
}

pub(crate) fn build_match_prompt(resume: &ResumeRow, vacancy: &VacancyRow) -> String {
    MATCH_PROMPT
        .replace("{first_name}", &resume.first_name)
        .replace("{last_name}", resume.last_name.as_deref().unwrap_or(""))
        .replace("{experience_time}", &resume.experience_time.to_string())
        .replace("{resume_skills}", &resume.skills.join(", "))
        .replace(
            "{profession}",
            resume.profession.as_deref().unwrap_or("Не указано"),
        )
        .replace("{vacancy_title}", &vacancy.title)
        .replace("{vacancy_description}", &vacancy.description)
        .replace("{vacancy_experience}", vacancy.experience_band.label())
        .replace("{vacancy_skills}", &vacancy.skills)
}

/// Reads the score out of the `Соответствие: <число>` label.
///
/// Missing label or empty reply yields `FALLBACK_SCORE`; any parsed value is
/// clamped into [0, 100].
pub(crate) fn extract_score(text: &str) -> i32 {
    if text.trim().is_empty() {
        warn!("empty matching response, falling back to neutral score");
        return FALLBACK_SCORE;
    }

    match SCORE_PATTERN
        .captures(text)
        .and_then(|captures| captures.get(1))
        .and_then(|score| score.as_str().parse::<i32>().ok())
    {
        Some(score) => score.clamp(0, 100),
        None => {
            warn!("no score label in matching response, falling back to neutral score");
            FALLBACK_SCORE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{resume_row, vacancy_row};

    #[test]
    fn test_extracts_labeled_score() {
        assert_eq!(extract_score("Соответствие: 73"), 73);
        assert_eq!(
            extract_score("- Соответствие: 85\n- Пояснение: Хороший кандидат."),
            85
        );
    }

    #[test]
    fn test_label_with_extra_whitespace() {
        assert_eq!(extract_score("Соответствие:   42 из 100"), 42);
    }

    #[test]
    fn test_missing_label_falls_back() {
        assert_eq!(extract_score("Кандидат подходит отлично!"), FALLBACK_SCORE);
    }

    #[test]
    fn test_empty_response_falls_back() {
        assert_eq!(extract_score(""), FALLBACK_SCORE);
        assert_eq!(extract_score("   \n"), FALLBACK_SCORE);
    }

    #[test]
    fn test_score_is_clamped_to_100() {
        assert_eq!(extract_score("Соответствие: 999"), 100);
    }

    #[test]
    fn test_boundary_scores_pass_through() {
        assert_eq!(extract_score("Соответствие: 0"), 0);
        assert_eq!(extract_score("Соответствие: 100"), 100);
    }

    #[test]
    fn test_prompt_carries_candidate_and_vacancy_fields() {
        let resume = resume_row();
        let vacancy = vacancy_row();
        let prompt = build_match_prompt(&resume, &vacancy);

        assert!(prompt.contains(&resume.first_name));
        assert!(prompt.contains("SQL, Python"));
        assert!(prompt.contains(&vacancy.title));
        assert!(prompt.contains(vacancy.experience_band.label()));
        assert!(!prompt.contains("{first_name}"));
        assert!(!prompt.contains("{vacancy_skills}"));
    }

    #[test]
    fn test_prompt_uses_placeholder_profession_when_missing() {
        let mut resume = resume_row();
        resume.profession = None;
        let prompt = build_match_prompt(&resume, &vacancy_row());
        assert!(prompt.contains("Профессия: Не указано"));
    }
}
