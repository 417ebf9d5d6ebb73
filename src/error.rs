//! Error types for the cyrcipher library.

use thiserror::Error;

/// Errors produced by the cyrcipher library.
///
/// Both kinds are raised before any transformation work begins, so a failed
/// call never yields partial output.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CipherError {
    /// Key rejected at construction time: non-positive column count, empty
    /// keyword, or keyword with a letter outside the alphabet.
    #[error("Invalid key: {0}")]
    InvalidKey(String),
    /// Text rejected at encode/decode time: empty, or (polyalphabetic only)
    /// containing a character outside the alphabet.
    #[error("Invalid text: {0}")]
    InvalidText(String),
}

impl CipherError {
    /// Returns `true` for [`CipherError::InvalidKey`].
    pub fn is_key_error(&self) -> bool {
        matches!(self, CipherError::InvalidKey(_))
    }

    /// Returns `true` for [`CipherError::InvalidText`].
    pub fn is_text_error(&self) -> bool {
        matches!(self, CipherError::InvalidText(_))
    }

    /// Human-readable reason without the kind prefix.
    pub fn reason(&self) -> &str {
        match self {
            CipherError::InvalidKey(reason) | CipherError::InvalidText(reason) => reason,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_invalid_key() {
        let err = CipherError::InvalidKey("empty key".to_string());
        assert_eq!(format!("{}", err), "Invalid key: empty key");
    }

    #[test]
    fn test_display_invalid_text() {
        let err = CipherError::InvalidText("empty text".to_string());
        assert_eq!(format!("{}", err), "Invalid text: empty text");
    }

    #[test]
    fn test_kind_predicates() {
        let key = CipherError::InvalidKey("x".to_string());
        let text = CipherError::InvalidText("x".to_string());
        assert!(key.is_key_error());
        assert!(!key.is_text_error());
        assert!(text.is_text_error());
        assert!(!text.is_key_error());
    }

    #[test]
    fn test_reason() {
        let err = CipherError::InvalidText("empty text".to_string());
        assert_eq!(err.reason(), "empty text");
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(
            CipherError::InvalidKey("a".to_string()),
            CipherError::InvalidKey("a".to_string())
        );
        assert_ne!(
            CipherError::InvalidKey("a".to_string()),
            CipherError::InvalidText("a".to_string())
        );
    }
}
