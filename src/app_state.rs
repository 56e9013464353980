use std::sync::Arc;

use crate::{
    config::Config,
    services::{
        completion_provider::{CompletionProvider, OpenAiCompletionProvider},
        dialogue_service::DialogueService,
        fallback::{FallbackSelector, RandomFallbackSelector},
        quiz_service::QuizService,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub dialogue_service: Arc<DialogueService>,
    pub quiz_service: Arc<QuizService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let provider = Arc::new(OpenAiCompletionProvider::new(&config));
        log::info!(
            "Using completion model {} (timeout {}s)",
            config.openai_model,
            config.provider_timeout_secs
        );

        Self::with_provider(config, provider, Arc::new(RandomFallbackSelector))
    }

    pub fn with_provider(
        config: Config,
        provider: Arc<dyn CompletionProvider>,
        selector: Arc<dyn FallbackSelector>,
    ) -> Self {
        let dialogue_service = Arc::new(DialogueService::new(provider.clone(), selector));
        let quiz_service = Arc::new(QuizService::new(provider));

        Self {
            dialogue_service,
            quiz_service,
            config: Arc::new(config),
        }
    }
}
