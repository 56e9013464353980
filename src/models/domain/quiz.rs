use serde::{Deserialize, Serialize};

pub const OPTIONS_PER_QUIZ: usize = 4;
pub const DEFAULT_QUIZ_COUNT: u32 = 20;

/// One multiple-choice question as emitted by the provider.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Quiz {
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: String,
    pub explanation: String,
}

impl Quiz {
    /// Four options, exactly one of which matches `correct_answer` verbatim.
    pub fn is_well_formed(&self) -> bool {
        self.options.len() == OPTIONS_PER_QUIZ
            && self
                .options
                .iter()
                .filter(|option| **option == self.correct_answer)
                .count()
                == 1
    }

    /// Shape check for a raw provider entry. Anything that does not decode counts as malformed.
    pub fn value_is_well_formed(value: &serde_json::Value) -> bool {
        serde_json::from_value::<Quiz>(value.clone())
            .map(|quiz| quiz.is_well_formed())
            .unwrap_or(false)
    }
}

/// Number of quizzes requested for a difficulty level when the caller gives no explicit count.
pub fn count_for_difficulty(difficulty: i64) -> u32 {
    match difficulty {
        1 => 10,
        2 => 15,
        3 => 20,
        4 => 25,
        5 => 30,
        _ => DEFAULT_QUIZ_COUNT,
    }
}
