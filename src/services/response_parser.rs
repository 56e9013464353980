use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use crate::errors::{AppError, AppResult};

static LEADING_JSON_FENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^```json\s*").expect("LEADING_JSON_FENCE is a valid regex pattern"));

static TRAILING_FENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*```$").expect("TRAILING_FENCE is a valid regex pattern"));

/// Trims the completion and drops every single and double quote character.
pub fn clean_dialogue(text: &str) -> String {
    text.trim()
        .chars()
        .filter(|c| *c != '"' && *c != '\'')
        .collect::<String>()
        .trim()
        .to_string()
}

/// Removes a leading ```` ```json ```` fence and a trailing ```` ``` ```` fence, anchored to
/// the ends of the text. The `json` tag is matched case-sensitively.
pub fn strip_code_fences(text: &str) -> String {
    let trimmed = text.trim();
    let without_leading = LEADING_JSON_FENCE.replace(trimmed, "");
    let without_trailing = TRAILING_FENCE.replace(&without_leading, "");
    without_trailing.trim().to_string()
}

/// Parses a quiz batch. Anything other than a JSON array fails the whole batch.
pub fn parse_quiz_batch(text: &str) -> AppResult<Vec<Value>> {
    let cleaned = strip_code_fences(text);
    serde_json::from_str::<Vec<Value>>(&cleaned).map_err(|e| {
        AppError::ParseError(format!("provider output is not a JSON array of quizzes: {}", e))
    })
}
