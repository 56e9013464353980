pub mod dialogue_prompts;
pub mod quiz_prompt;
