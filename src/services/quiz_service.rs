use std::sync::Arc;

use validator::Validate;

use crate::{
    constants::quiz_prompt::{quiz_generation_prompt, QUIZ_MAX_TOKENS, QUIZ_TEMPERATURE},
    errors::{AppError, AppResult},
    models::{
        domain::Quiz,
        dto::{request::QuizRequest, response::QuizResponse},
    },
    services::{
        completion_provider::{CompletionProvider, CompletionRequest},
        response_parser::parse_quiz_batch,
    },
};

pub struct QuizService {
    provider: Arc<dyn CompletionProvider>,
}

impl QuizService {
    pub fn new(provider: Arc<dyn CompletionProvider>) -> Self {
        Self { provider }
    }

    /// Generates a batch in one provider call. There is no fallback content: provider and
    /// parse failures are returned to the caller.
    pub async fn generate_quizzes(&self, request: QuizRequest) -> AppResult<QuizResponse> {
        request.validate()?;

        let topic = request
            .topic
            .as_deref()
            .map(str::trim)
            .filter(|topic| !topic.is_empty())
            .ok_or_else(|| AppError::ValidationError("topic is required".to_string()))?;
        let count = request.target_count();

        let raw = self
            .provider
            .complete(CompletionRequest {
                system_prompt: None,
                user_prompt: quiz_generation_prompt(topic, request.difficulty, count),
                max_tokens: QUIZ_MAX_TOKENS,
                temperature: QUIZ_TEMPERATURE,
            })
            .await?;

        let quizzes = parse_quiz_batch(&raw)?;

        let malformed = quizzes
            .iter()
            .filter(|quiz| !Quiz::value_is_well_formed(quiz))
            .count();
        if malformed > 0 {
            log::warn!(
                "{} of {} generated quizzes for '{}' do not match the quiz shape",
                malformed,
                quizzes.len(),
                topic
            );
        }
        if quizzes.len() != count as usize {
            log::warn!(
                "Requested {} quizzes for '{}' but provider returned {}",
                count,
                topic,
                quizzes.len()
            );
        }

        Ok(QuizResponse::success(quizzes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        services::completion_provider::MockCompletionProvider,
        test_utils::fixtures::{quiz_batch_json, quiz_request},
    };

    #[actix_web::test]
    async fn difficulty_three_yields_twenty_quizzes() {
        let mut provider = MockCompletionProvider::new();
        provider
            .expect_complete()
            .withf(|request| {
                request.system_prompt.is_none()
                    && request.max_tokens == QUIZ_MAX_TOKENS
                    && request.temperature == QUIZ_TEMPERATURE
                    && request.user_prompt.contains("개수: 20개")
            })
            .times(1)
            .returning(|_| Ok(quiz_batch_json(20)));

        let response = QuizService::new(Arc::new(provider))
            .generate_quizzes(quiz_request("algebra", 3))
            .await
            .unwrap();

        assert!(response.success);
        assert_eq!(response.count, Some(20));
        assert_eq!(response.quizzes.map(|q| q.len()), Some(20));
        assert!(response.error.is_none());
    }

    #[actix_web::test]
    async fn explicit_count_overrides_difficulty_in_prompt() {
        let mut provider = MockCompletionProvider::new();
        provider
            .expect_complete()
            .withf(|request| request.user_prompt.contains("개수: 5개"))
            .times(1)
            .returning(|_| Ok(quiz_batch_json(5)));

        let mut request = quiz_request("biology", 5);
        request.count = Some(5);

        let response = QuizService::new(Arc::new(provider))
            .generate_quizzes(request)
            .await
            .unwrap();

        assert_eq!(response.count, Some(5));
    }

    #[actix_web::test]
    async fn fenced_output_parses_like_plain_output() {
        let mut provider = MockCompletionProvider::new();
        provider
            .expect_complete()
            .returning(|_| Ok(format!("```json\n{}\n```", quiz_batch_json(10))));

        let response = QuizService::new(Arc::new(provider))
            .generate_quizzes(quiz_request("history", 1))
            .await
            .unwrap();

        assert!(response.success);
        assert_eq!(response.count, Some(10));
    }

    #[actix_web::test]
    async fn count_reflects_actual_batch_length() {
        let mut provider = MockCompletionProvider::new();
        provider
            .expect_complete()
            .returning(|_| Ok(quiz_batch_json(7)));

        let response = QuizService::new(Arc::new(provider))
            .generate_quizzes(quiz_request("chemistry", 4))
            .await
            .unwrap();

        assert_eq!(response.count, Some(7));
    }

    #[actix_web::test]
    async fn prose_output_is_a_parse_error() {
        let mut provider = MockCompletionProvider::new();
        provider
            .expect_complete()
            .returning(|_| Ok("I'm sorry, I can't produce quizzes on that topic.".to_string()));

        let result = QuizService::new(Arc::new(provider))
            .generate_quizzes(quiz_request("algebra", 3))
            .await;

        assert!(matches!(result, Err(AppError::ParseError(_))));
    }

    #[actix_web::test]
    async fn provider_failure_is_surfaced() {
        let mut provider = MockCompletionProvider::new();
        provider
            .expect_complete()
            .returning(|_| Err(AppError::ProviderError("timed out".to_string())));

        let result = QuizService::new(Arc::new(provider))
            .generate_quizzes(quiz_request("algebra", 3))
            .await;

        assert!(matches!(result, Err(AppError::ProviderError(_))));
    }

    #[actix_web::test]
    async fn missing_topic_fails_without_provider_call() {
        let mut provider = MockCompletionProvider::new();
        provider.expect_complete().never();

        let result = QuizService::new(Arc::new(provider))
            .generate_quizzes(QuizRequest::default())
            .await;

        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }

    #[actix_web::test]
    async fn blank_topic_fails_without_provider_call() {
        let mut provider = MockCompletionProvider::new();
        provider.expect_complete().never();

        let result = QuizService::new(Arc::new(provider))
            .generate_quizzes(quiz_request("   ", 3))
            .await;

        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }
}
