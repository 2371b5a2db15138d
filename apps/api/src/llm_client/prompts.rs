// Shared prompt constants. Each service that needs LLM calls defines its own
// prompts.rs alongside it; this file carries cross-cutting fragments only.

/// System prompt fragment that enforces bare-JSON output for the Russian-language
/// extraction prompts. Stages that parse JSON strictly use this as the system turn.
pub const STRICT_JSON_SYSTEM: &str = "Ты точный структурированный ассистент. \
    Отвечай ТОЛЬКО корректным и валидным JSON. \
    Не добавляй пояснений, комментариев и текста вне JSON. \
    Не используй Markdown и обёртки ```json.";
