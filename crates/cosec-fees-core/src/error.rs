use thiserror::Error;

#[derive(Debug, Error)]
pub enum CosecFeesError {
    #[error("Invalid input: {field} — {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Unknown service category: {0}")]
    UnknownCategory(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for CosecFeesError {
    fn from(e: serde_json::Error) -> Self {
        CosecFeesError::SerializationError(e.to_string())
    }
}
