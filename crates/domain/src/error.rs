use crate::{SessionExerciseID, SessionID, SetID, TemplateID};

#[derive(thiserror::Error, Debug)]
pub enum StorageError {
    #[error("storage unavailable")]
    Unavailable,
    #[error("invalid data for key \"{key}\": {reason}")]
    InvalidData { key: String, reason: String },
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error + Send + Sync>),
}

impl From<std::io::Error> for StorageError {
    fn from(value: std::io::Error) -> Self {
        StorageError::Other(Box::new(value))
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum TemplateError {
    #[error("template {0} not found")]
    NotFound(TemplateID),
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum SessionError {
    #[error("no active session")]
    NoActiveSession,
    #[error("session {0} is not the active session")]
    StaleSession(SessionID),
    #[error("session {0} not found")]
    NotFound(SessionID),
    #[error("exercise {0} not found in session")]
    ExerciseNotFound(SessionExerciseID),
    #[error("set {0} not found in exercise")]
    SetNotFound(SetID),
}

#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    #[error("no connection")]
    NoConnection,
    #[error("request rejected: {0}")]
    Rejected(String),
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error + Send + Sync>),
}
