//! Error types for field specifications.

use thiserror::Error;

/// Result type alias for spec operations.
pub type SpecResult<T> = Result<T, SpecError>;

/// Errors that can occur while validating a field specification.
#[derive(Error, Debug)]
pub enum SpecError {
    #[error("Field name cannot be empty")]
    EmptyName,

    #[error("Invalid field name '{name}': {message}")]
    InvalidName { name: String, message: String },

    #[error("Duplicate field name: {0}")]
    DuplicateName(String),

    #[error("Field '{field}' of kind '{kind}' requires options")]
    MissingOptions { field: String, kind: String },

    #[error("Field '{field}' of kind '{kind}' does not accept options")]
    UnexpectedOptions { field: String, kind: String },

    #[error("Default value for field '{field}' does not match kind '{kind}': expected {expected}")]
    DefaultMismatch {
        field: String,
        kind: String,
        expected: String,
    },

    #[error("Invalid validation pattern for field '{field}': {message}")]
    InvalidPattern { field: String, message: String },

    #[error("Invalid length bounds for field '{field}': min {min} exceeds max {max}")]
    InvalidRange { field: String, min: u32, max: u32 },

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SpecError {
    /// Name of the field the error concerns, when there is one.
    pub fn field(&self) -> Option<&str> {
        match self {
            SpecError::InvalidName { name, .. } | SpecError::DuplicateName(name) => Some(name),
            SpecError::MissingOptions { field, .. }
            | SpecError::UnexpectedOptions { field, .. }
            | SpecError::DefaultMismatch { field, .. }
            | SpecError::InvalidPattern { field, .. }
            | SpecError::InvalidRange { field, .. } => Some(field),
            _ => None,
        }
    }
}
