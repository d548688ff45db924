//! Error types for the typing tutor core

use thiserror::Error;

use crate::types::KeyCode;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Duplicate key code in layout: {0}")]
    DuplicateKeyCode(KeyCode),

    #[error("Lesson error: {0}")]
    Lesson(#[from] crate::lesson::LessonError),
}

pub type Result<T> = std::result::Result<T, Error>;
