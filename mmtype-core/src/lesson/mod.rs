//! Lesson data: level -> lesson -> target strings

mod error;
mod loader;

pub use error::LessonError;
pub use loader::{lesson_number, normalize_target, Lessons};
