use serde::{Deserialize, Deserializer};
use validator::Validate;

use crate::models::domain::quiz::count_for_difficulty;

pub const DEFAULT_DIFFICULTY: i64 = 3;
pub const DEFAULT_PRAISE_COMBO: i64 = 3;

/// Treats an explicit JSON `null` like a missing field. Clients that build bodies from
/// maps send `null` for every unset key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn null_as_default_difficulty<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<i64>::deserialize(deserializer)?.unwrap_or(DEFAULT_DIFFICULTY))
}

fn null_as_default_praise_combo<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<i64>::deserialize(deserializer)?.unwrap_or(DEFAULT_PRAISE_COMBO))
}

/// Body of `POST /generate-dialogue`. The type stays a raw string so an unknown value
/// becomes a validation error rather than a deserialization failure.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DialogueRequest {
    pub dialogue_type: Option<String>,
    pub student_name: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub question: String,
    #[serde(deserialize_with = "null_as_default")]
    pub wrong_answer: String,
    #[serde(deserialize_with = "null_as_default")]
    pub correct_answer: String,
    #[serde(deserialize_with = "null_as_default")]
    pub combo: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub combo_broken: bool,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct QuizRequest {
    #[validate(
        required(message = "topic is required"),
        length(min = 1, max = 200, message = "topic must be 1-200 characters")
    )]
    pub topic: Option<String>,

    #[serde(
        default = "default_difficulty",
        deserialize_with = "null_as_default_difficulty"
    )]
    pub difficulty: i64,

    #[validate(range(min = 1, max = 50, message = "count must be between 1 and 50"))]
    #[serde(default)]
    pub count: Option<u32>,
}

fn default_difficulty() -> i64 {
    DEFAULT_DIFFICULTY
}

impl Default for QuizRequest {
    fn default() -> Self {
        Self {
            topic: None,
            difficulty: DEFAULT_DIFFICULTY,
            count: None,
        }
    }
}

/// Body of the legacy `POST /generate-rage` endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RageRequest {
    pub student_name: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub question: String,
    #[serde(deserialize_with = "null_as_default")]
    pub wrong_answer: String,
    #[serde(deserialize_with = "null_as_default")]
    pub correct_answer: String,
    #[serde(deserialize_with = "null_as_default")]
    pub combo: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub combo_broken: bool,
}

impl From<RageRequest> for DialogueRequest {
    fn from(request: RageRequest) -> Self {
        let dialogue_type = if request.combo_broken {
            "combo_broken"
        } else {
            "wrong_answer"
        };

        DialogueRequest {
            dialogue_type: Some(dialogue_type.to_string()),
            student_name: request.student_name,
            question: request.question,
            wrong_answer: request.wrong_answer,
            correct_answer: request.correct_answer,
            combo: request.combo,
            combo_broken: request.combo_broken,
        }
    }
}

/// Body of the legacy `POST /generate-praise` endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct PraiseRequest {
    #[serde(
        default = "default_praise_combo",
        deserialize_with = "null_as_default_praise_combo"
    )]
    pub combo: i64,
}

fn default_praise_combo() -> i64 {
    DEFAULT_PRAISE_COMBO
}

impl Default for PraiseRequest {
    fn default() -> Self {
        Self {
            combo: DEFAULT_PRAISE_COMBO,
        }
    }
}

impl From<PraiseRequest> for DialogueRequest {
    fn from(request: PraiseRequest) -> Self {
        DialogueRequest {
            dialogue_type: Some("combo_3".to_string()),
            combo: request.combo,
            ..Default::default()
        }
    }
}

impl QuizRequest {
    /// An explicit count wins; otherwise the difficulty table decides.
    pub fn target_count(&self) -> u32 {
        self.count
            .unwrap_or_else(|| count_for_difficulty(self.difficulty))
    }
}
