use thiserror::Error;

/// Unified error type for semver-tool operations
#[derive(Error, Debug)]
pub enum SemverToolError {
    #[error("{0} is not valid semantic version")]
    InvalidVersionFormat(String),
}

/// Convenience type alias for Results in semver-tool
pub type Result<T> = std::result::Result<T, SemverToolError>;

impl SemverToolError {
    /// Create a format error carrying the offending input
    pub fn invalid_version(input: impl Into<String>) -> Self {
        SemverToolError::InvalidVersionFormat(input.into())
    }
}
