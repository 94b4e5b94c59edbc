//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

/// Public key validation errors
///
/// The messages are shown verbatim next to the search box.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "details")]
pub enum KeyValidationError {
    /// Nothing left after trimming
    #[error("Please enter a public key")]
    EmptyInput,

    /// Trimmed length is not exactly 52 characters
    #[error("Public key must be exactly 52 characters long")]
    WrongLength { actual: usize },

    /// Contains a character outside the z-base-32 alphabet
    #[error("Invalid public key format. Must be z-base-32 encoded")]
    InvalidCharset { found: char },
}

/// Core layer error type
#[derive(Error, Debug, Clone, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// Public key failed validation
    #[error("{0}")]
    Validation(#[from] KeyValidationError),

    /// The resolution client could not be constructed
    #[error("{0}")]
    ClientInitialization(String),

    /// Client construction attempted outside an async runtime
    #[error("Client initialization requires a running async runtime")]
    UnsupportedEnvironment,

    /// The resolution call itself failed
    #[error("Resolution error: {0}")]
    Resolution(String),

    /// Storage layer error
    #[error("Storage error: {0}")]
    Storage(String),

    /// serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Clipboard read/write failed
    #[error("Clipboard error: {0}")]
    Clipboard(String),
}

impl CoreError {
    /// Whether it is expected behavior (user input, resource does not exist, etc.) is used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method simultaneously when new variants are added. **
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::Validation(_) | Self::Resolution(_) | Self::Clipboard(_) => true,
            Self::ClientInitialization(_)
            | Self::UnsupportedEnvironment
            | Self::Storage(_)
            | Self::Serialization(_) => false,
        }
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl From<std::io::Error> for CoreError {
    fn from(err: std::io::Error) -> Self {
        Self::Storage(err.to_string())
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_messages_match_search_box_copy() {
        assert_eq!(
            KeyValidationError::EmptyInput.to_string(),
            "Please enter a public key"
        );
        assert_eq!(
            KeyValidationError::WrongLength { actual: 3 }.to_string(),
            "Public key must be exactly 52 characters long"
        );
        assert_eq!(
            CoreError::from(KeyValidationError::InvalidCharset { found: 'l' }).to_string(),
            "Invalid public key format. Must be z-base-32 encoded"
        );
    }

    #[test]
    fn test_is_expected_classification() {
        assert!(CoreError::Resolution("timeout".into()).is_expected());
        assert!(CoreError::Validation(KeyValidationError::EmptyInput).is_expected());
        assert!(!CoreError::UnsupportedEnvironment.is_expected());
        assert!(!CoreError::ClientInitialization("boom".into()).is_expected());
    }

    #[test]
    fn test_serialize_tagged() {
        let json = serde_json::to_value(CoreError::Storage("disk full".into())).unwrap();
        assert_eq!(json["code"], "Storage");
        assert_eq!(json["details"], "disk full");
    }
}
