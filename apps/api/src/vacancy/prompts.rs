// Prompts for the vacancy classification call.

/// System turn: classification rules plus the bare-JSON-array output contract.
pub const CLASSIFY_SYSTEM: &str = r#"Ты эксперт по классификации вакансий. Твоя задача — определить 3-5 подходящих профессий и их уровней, основываясь на описании вакансии. Если вакансия содержит только одну профессию, предложи другие релевантные профессии. Если профессия не подразумевает формальных уровней (Junior, Middle, Senior) — как, например, бухгалтер, кассир, водитель — укажи grade как 'не указано'. Не делай вывод о грейде только по опыту. Если в вакансии указан стажёр, используй grade 'Intern'. Обязательно возвращай результат СТРОГО в виде строки с JSON, БЕЗ форматирования Markdown, БЕЗ обёртки ```json и ``` — только чистый JSON, пример: [{"profession": "Аналитик данных", "grade": "Middle"}, {"profession": "Официант", "grade": "не указано"}]."#;

/// User turn template. Replace `{description}` before sending.
pub const CLASSIFY_PROMPT: &str =
    "Описание вакансии: {description}\n\nКакие профессии и уровни соответствуют этому описанию?";
