// Prompts for the resume/vacancy matching call.

pub const MATCH_SYSTEM: &str = "Ты AI, анализирующий соответствие резюме и вакансий. \
    Оценивай справедливо и будь кратким (не более 5-7 предложений).";

/// User turn template. Replace the `{...}` placeholders before sending.
/// The reply is expected in the fixed label format below; `extract_score`
/// tolerates any deviation by falling back to a neutral score.
pub const MATCH_PROMPT: &str = r#"Кандидат:
- Имя: {first_name} {last_name}
- Опыт: {experience_time} лет
- Навыки: {resume_skills}
- Профессия: {profession}

Вакансия:
- Должность: {vacancy_title}
- Описание: {vacancy_description}
- Требуемый опыт: {vacancy_experience}
- Навыки: {vacancy_skills}

Оцени соответствие резюме и вакансии по шкале от 0 до 100, а также укажи, какие навыки отсутствуют и как их можно развить.

Ответь в формате:
- Соответствие: <число>
- Пояснение: <анализ>
"#;
