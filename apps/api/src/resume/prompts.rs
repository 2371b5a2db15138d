// Prompt for the resume analysis call. Replace `{resume_text}` before sending.
// The system turn is the shared strict-JSON clause from llm_client::prompts.

pub const RESUME_ANALYSIS_PROMPT: &str = r#"Ты анализируешь резюме кандидата и извлекаешь ключевую информацию.

Отвечай ТОЛЬКО JSON, без пояснений и комментариев. JSON должен быть корректным и валидным.

1. Определи язык текста (русский, английский, казахский).
2. Извлеки следующую информацию:
- Имя и фамилию (если есть отчество, не включай его).
- Email и телефон (если есть).
- Общий опыт работы в годах (вычисли по датам работы, даже если есть пересечения). Если не указано опыта работы, значит его нет — 0 лет. Если в тексте указано "н.в.", "present" или аналогичное, используй текущий год.
- Профессию (основную роль, если указано несколько — выбери самую релевантную).
- Образование (университет, специальность, год окончания).
- Навыки (ключевые hard skills).
- Проекты (краткое описание, если указаны).
- Дополнительные курсы и награды (сертификаты, достижения).
- Языки (укажи уровень владения).
- Желаемую зарплату (если указана, min/max). Определи валюту (например, USD, EUR, KZT, RUB). Если валюта не указана, попробуй понять по контексту. Если указано "от X KZT", то X — это min_salary, а max_salary = null. Если указан диапазон "X–Y KZT", используй X как min_salary, Y как max_salary.
- Общий краткий вывод (summary).
- Уровень кандидата (Junior / Middle / Senior) — если указано или можно определить по опыту.

Вот текст резюме:
{resume_text}

Проанализируй его и верни данные в следующем формате JSON:
{
  "first_name": "Алихан",
  "last_name": "Нурсеитов",
  "email": "alihan.nur@example.com",
  "phone": "+7 777 456-78-90",
  "experience_time": 9.0,
  "profession": "Software Engineer",
  "education": ["КазНУ, Информационные технологии, 2020", "Tomorrow School, Full-stack разработка, 2022"],
  "skills": ["Python", "Java", "SQL"],
  "awards": ["Лучший разработчик 2022"],
  "projects": ["Разработка ERP-системы"],
  "courses": ["Курс по ML в Coursera"],
  "languages": {"Казахский": "C2", "Английский": "B2"},
  "summary": "Опытный разработчик с 9 годами опыта в backend-разработке.",
  "grade": "Senior",
  "min_salary": 1000000.00,
  "max_salary": 1200000.00,
  "currency": "KZT"
}
"#;
