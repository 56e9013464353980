pub mod dialogue_type;
pub mod quiz;
pub use dialogue_type::DialogueType;
pub use quiz::Quiz;
