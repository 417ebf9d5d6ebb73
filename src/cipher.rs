//! Common interface shared by both ciphers.

use std::fmt;
use std::str::FromStr;

use crate::error::CipherError;

/// Which way a cipher is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Plain text to cipher text.
    Encrypt,
    /// Cipher text to plain text.
    Decrypt,
}

impl FromStr for Direction {
    type Err = String;

    /// Accepts `encode`/`encrypt`/`e` and `decode`/`decrypt`/`d`, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "encode" | "encrypt" | "e" => Ok(Direction::Encrypt),
            "decode" | "decrypt" | "d" => Ok(Direction::Decrypt),
            other => Err(format!("unknown direction '{}'", other)),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Encrypt => write!(f, "encrypt"),
            Direction::Decrypt => write!(f, "decrypt"),
        }
    }
}

/// A reversible keyed text transformation.
///
/// Implementations bind their key at construction; `encipher` and
/// `decipher` validate the text and fail fast with
/// [`CipherError::InvalidText`] before producing any output.
pub trait TextCipher {
    /// Transforms plain text into cipher text.
    fn encipher(&self, text: &str) -> Result<String, CipherError>;

    /// Transforms cipher text back into plain text.
    fn decipher(&self, text: &str) -> Result<String, CipherError>;

    /// Dispatches to [`encipher`](Self::encipher) or
    /// [`decipher`](Self::decipher).
    fn apply(&self, direction: Direction, text: &str) -> Result<String, CipherError> {
        match direction {
            Direction::Encrypt => self.encipher(text),
            Direction::Decrypt => self.decipher(text),
        }
    }
}
