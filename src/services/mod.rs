pub mod completion_provider;
pub mod dialogue_service;
pub mod fallback;
pub mod quiz_service;
pub mod response_parser;
