use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::constants::dialogue_prompts::{
    COMBO_3_FALLBACKS, COMBO_BROKEN_FALLBACKS, CORRECT_ANSWER_FALLBACKS, MENTAL_BREAK_FALLBACKS,
    WRONG_ANSWER_FALLBACKS,
};
use crate::errors::AppError;

/// Selects the prompt template and fallback list for a dialogue request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DialogueType {
    WrongAnswer,
    CorrectAnswer,
    MentalBreak,
    #[serde(rename = "combo_3")]
    Combo3,
    ComboBroken,
}

impl DialogueType {
    pub const ALL: [DialogueType; 5] = [
        DialogueType::WrongAnswer,
        DialogueType::CorrectAnswer,
        DialogueType::MentalBreak,
        DialogueType::Combo3,
        DialogueType::ComboBroken,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DialogueType::WrongAnswer => "wrong_answer",
            DialogueType::CorrectAnswer => "correct_answer",
            DialogueType::MentalBreak => "mental_break",
            DialogueType::Combo3 => "combo_3",
            DialogueType::ComboBroken => "combo_broken",
        }
    }

    pub fn fallbacks(&self) -> &'static [&'static str] {
        match self {
            DialogueType::WrongAnswer => WRONG_ANSWER_FALLBACKS,
            DialogueType::CorrectAnswer => CORRECT_ANSWER_FALLBACKS,
            DialogueType::MentalBreak => MENTAL_BREAK_FALLBACKS,
            DialogueType::Combo3 => COMBO_3_FALLBACKS,
            DialogueType::ComboBroken => COMBO_BROKEN_FALLBACKS,
        }
    }
}

impl fmt::Display for DialogueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DialogueType {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        DialogueType::ALL
            .into_iter()
            .find(|dialogue_type| dialogue_type.as_str() == value)
            .ok_or_else(|| AppError::ValidationError("Invalid dialogue type".to_string()))
    }
}
