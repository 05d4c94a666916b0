//! Error types for template assembly.

use thiserror::Error;

/// Result type alias for template operations.
pub type TemplateResult<T> = Result<T, TemplateError>;

/// Errors that can occur during template assembly and substitution.
///
/// Every failure is a data-carrying value returned to the caller; an
/// `assemble` call either fully succeeds or produces no output.
#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("Unknown template family: {0}")]
    UnknownFamily(String),

    #[error("Invalid field '{field}': {reason}")]
    InvalidField { field: String, reason: String },

    #[error("No value supplied for declared token: {0}")]
    Unfilled(String),

    #[error("Value supplied for undeclared token: {0}")]
    Unexpected(String),

    #[error("Token '{token}' declared as {expected} but supplied as {actual}")]
    Cardinality {
        token: String,
        expected: String,
        actual: String,
    },

    #[error("Template family '{family}' could not place token '{token}'")]
    TemplateMismatch { family: String, token: String },

    #[error("Invalid skeleton '{family}': {message}")]
    InvalidSkeleton { family: String, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Spec error: {0}")]
    Spec(#[from] formfab_spec::SpecError),
}
