use thiserror::Error;

#[derive(Error, Debug)]
pub enum LessonError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid lesson JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown level: {0}")]
    UnknownLevel(String),

    #[error("Unknown lesson {lesson} in level {level}")]
    UnknownLesson { level: String, lesson: String },
}

pub type Result<T> = std::result::Result<T, LessonError>;
