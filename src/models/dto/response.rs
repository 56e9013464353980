use serde::Serialize;
use serde_json::Value;

use crate::models::domain::DialogueType;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DialogueResponse {
    pub dialogue: String,
    pub dialogue_type: DialogueType,
    #[serde(rename = "isAI")]
    pub is_ai: bool,
}

/// Success/error envelope for quiz generation. `quizzes` and `count` are present only on
/// success, `error` only on failure.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuizResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quizzes: Option<Vec<Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl QuizResponse {
    pub fn success(quizzes: Vec<Value>) -> Self {
        let count = quizzes.len();
        Self {
            success: true,
            quizzes: Some(quizzes),
            count: Some(count),
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            quizzes: None,
            count: None,
            error: Some(error.into()),
        }
    }
}

/// Response shape of the legacy rage/praise endpoints.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegacyMessageResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intensity: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn dialogue_response_uses_wire_field_names() {
        let response = DialogueResponse {
            dialogue: "거기까지였구나".to_string(),
            dialogue_type: DialogueType::ComboBroken,
            is_ai: false,
        };

        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({
                "dialogue": "거기까지였구나",
                "dialogueType": "combo_broken",
                "isAI": false
            })
        );
    }

    #[test]
    fn quiz_success_envelope_counts_items() {
        let response = QuizResponse::success(vec![json!({"question": "a"}), json!({"question": "b"})]);
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value["success"], json!(true));
        assert_eq!(value["count"], json!(2));
        assert!(value.get("error").is_none());
    }

    #[test]
    fn quiz_failure_envelope_omits_payload() {
        let value = serde_json::to_value(QuizResponse::failure("boom")).unwrap();

        assert_eq!(value, json!({"success": false, "error": "boom"}));
    }
}
