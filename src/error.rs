use serde::Serialize;
use std::fmt;

/// Error types for the input boundary.
///
/// No store operation is fatal; unknown mutation targets are benign no-ops
/// there. Errors only arise when form input fails validation or parsing.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", content = "message")]
pub enum AppError {
    /// Errors related to input validation (empty message, bad dimensions)
    Validation(String),
    /// Errors related to parsing user-supplied values (times, intents)
    Parse(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Validation(msg) => write!(f, "Validation error: {}", msg),
            AppError::Parse(msg) => write!(f, "Parse error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

// Conversion to String for presentation-layer return types
impl From<AppError> for String {
    fn from(error: AppError) -> Self {
        error.to_string()
    }
}

// Convenience constructors
impl AppError {
    pub fn validation<S: Into<String>>(msg: S) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn parse<S: Into<String>>(msg: S) -> Self {
        AppError::Parse(msg.into())
    }
}

/// Result type alias for the input boundary
pub type AppResult<T> = Result<T, AppError>;
