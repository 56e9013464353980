use std::sync::Arc;

use crate::{
    constants::dialogue_prompts::{
        combo_3_prompt, combo_broken_prompt, correct_answer_prompt, mental_break_prompt,
        wrong_answer_prompt, DEFAULT_STUDENT_NAME, DIALOGUE_MAX_TOKENS, DIALOGUE_TEMPERATURE,
        PERSONA_SYSTEM_PROMPT,
    },
    errors::{AppError, AppResult},
    models::{
        domain::DialogueType,
        dto::{request::DialogueRequest, response::DialogueResponse},
    },
    services::{
        completion_provider::{CompletionProvider, CompletionRequest},
        fallback::{choose_fallback, FallbackSelector},
        response_parser::clean_dialogue,
    },
};

pub struct DialogueService {
    provider: Arc<dyn CompletionProvider>,
    selector: Arc<dyn FallbackSelector>,
}

impl DialogueService {
    pub fn new(provider: Arc<dyn CompletionProvider>, selector: Arc<dyn FallbackSelector>) -> Self {
        Self { provider, selector }
    }

    /// Only an unknown or missing dialogue type is an error. Provider failures degrade to a
    /// fallback line with `is_ai = false`.
    pub async fn generate_dialogue(&self, request: DialogueRequest) -> AppResult<DialogueResponse> {
        let dialogue_type: DialogueType = request
            .dialogue_type
            .as_deref()
            .ok_or_else(|| AppError::ValidationError("Invalid dialogue type".to_string()))?
            .parse()?;

        let completion = CompletionRequest {
            system_prompt: Some(PERSONA_SYSTEM_PROMPT.to_string()),
            user_prompt: render_prompt(dialogue_type, &request),
            max_tokens: DIALOGUE_MAX_TOKENS,
            temperature: DIALOGUE_TEMPERATURE,
        };

        let generated = self
            .provider
            .complete(completion)
            .await
            .map(|text| clean_dialogue(&text))
            .and_then(|dialogue| {
                if dialogue.is_empty() {
                    Err(AppError::ProviderError(
                        "completion was empty after cleanup".to_string(),
                    ))
                } else {
                    Ok(dialogue)
                }
            });

        match generated {
            Ok(dialogue) => Ok(DialogueResponse {
                dialogue,
                dialogue_type,
                is_ai: true,
            }),
            Err(err) => {
                log::warn!("Dialogue generation for {} fell back: {}", dialogue_type, err);
                Ok(DialogueResponse {
                    dialogue: choose_fallback(self.selector.as_ref(), dialogue_type).to_string(),
                    dialogue_type,
                    is_ai: false,
                })
            }
        }
    }
}

pub fn render_prompt(dialogue_type: DialogueType, request: &DialogueRequest) -> String {
    let student_name = request
        .student_name
        .as_deref()
        .unwrap_or(DEFAULT_STUDENT_NAME);

    match dialogue_type {
        DialogueType::WrongAnswer => wrong_answer_prompt(
            student_name,
            &request.question,
            &request.wrong_answer,
            &request.correct_answer,
        ),
        DialogueType::CorrectAnswer => correct_answer_prompt(),
        DialogueType::MentalBreak => mental_break_prompt(student_name),
        DialogueType::Combo3 => combo_3_prompt(request.combo),
        DialogueType::ComboBroken => combo_broken_prompt(request.combo),
    }
}
