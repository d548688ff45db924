pub mod types;
pub mod error;
pub mod layout;
pub mod engine;
pub mod lesson;
pub mod keystroke;

pub use types::*;

// Re-export commonly used types
pub use error::{Error, Result};
pub use layout::{KeyTable, E_VOWEL};
pub use engine::{correct_prefix_length, next_char, EngineOutput, KeyInput, TypingSession};
pub use lesson::{LessonError, Lessons};
pub use keystroke::KeyStroke;
