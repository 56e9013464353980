#[cfg(test)]
pub mod fixtures {
    use crate::{
        models::{
            domain::Quiz,
            dto::request::{DialogueRequest, QuizRequest},
        },
        services::fallback::FallbackSelector,
    };

    /// Always returns the same index.
    pub struct FixedSelector(pub usize);

    impl FallbackSelector for FixedSelector {
        fn pick(&self, _len: usize) -> usize {
            self.0
        }
    }

    /// Creates a dialogue request carrying the given raw type
    pub fn dialogue_request(dialogue_type: &str) -> DialogueRequest {
        DialogueRequest {
            dialogue_type: Some(dialogue_type.to_string()),
            question: "2 + 2 = ?".to_string(),
            wrong_answer: "5".to_string(),
            correct_answer: "4".to_string(),
            ..Default::default()
        }
    }

    pub fn quiz_request(topic: &str, difficulty: i64) -> QuizRequest {
        QuizRequest {
            topic: Some(topic.to_string()),
            difficulty,
            count: None,
        }
    }

    pub fn sample_quizzes(count: usize) -> Vec<Quiz> {
        (1..=count)
            .map(|n| Quiz {
                question: format!("Question {n}?"),
                options: vec![
                    format!("{n}-A"),
                    format!("{n}-B"),
                    format!("{n}-C"),
                    format!("{n}-D"),
                ],
                correct_answer: format!("{n}-A"),
                explanation: format!("Option A is correct for question {n}"),
            })
            .collect()
    }

    /// Provider-style JSON array with `count` well-formed quizzes
    pub fn quiz_batch_json(count: usize) -> String {
        serde_json::to_string_pretty(&sample_quizzes(count)).unwrap()
    }
}

#[cfg(test)]
pub mod test_helpers {
    use actix_web::http::StatusCode;

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[test]
    fn test_fixtures_sample_quizzes_are_well_formed() {
        let quizzes = sample_quizzes(3);
        assert_eq!(quizzes.len(), 3);
        assert!(quizzes.iter().all(|quiz| quiz.is_well_formed()));
    }

    #[test]
    fn test_fixtures_quiz_batch_json_is_array() {
        let value: serde_json::Value = serde_json::from_str(&quiz_batch_json(2)).unwrap();
        assert_eq!(value.as_array().map(Vec::len), Some(2));
        assert_eq!(value[0]["correctAnswer"], "1-A");
    }
}
