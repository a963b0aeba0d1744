//! Error types for campaign generation

use thiserror::Error;

/// Result type alias for adgenius operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while generating, rendering or storing campaigns
#[derive(Error, Debug)]
pub enum Error {
    /// Full generation failed or the copy did not match the content schema
    #[error("Generation failed: {0}")]
    Generation(String),

    /// A single poster background could not be regenerated
    #[error("Image regeneration failed: {0}")]
    Regeneration(String),

    /// History slot could not be read or written
    #[error("Persistence error: {0}")]
    Persistence(String),

    /// Clipboard write failed
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    /// The strategy form did not validate
    #[error("Invalid strategy: {0}")]
    InvalidStrategy(String),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Transport-level failure talking to the generation backend
    #[error("Network error: {0}")]
    Network(String),

    /// The operation is not allowed in the controller's current stage
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Whether this error should be shown to the user as a blocking notice.
    pub fn is_blocking(&self) -> bool {
        !matches!(self, Error::Regeneration(_) | Error::Persistence(_) | Error::Clipboard(_))
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Persistence(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Other(format!("JSON error: {}", err))
    }
}

#[cfg(feature = "gemini")]
impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Error::Network(format!("request timed out: {}", err))
        } else {
            Error::Network(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regeneration_is_a_light_notice() {
        assert!(!Error::Regeneration("no image".into()).is_blocking());
        assert!(Error::Generation("boom".into()).is_blocking());
    }
}
