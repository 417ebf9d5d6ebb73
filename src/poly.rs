//! PolyalphabeticCipher: keyword-driven modular shift (Gronsfeld/Vigenère).
//!
//! Each letter's alphabet position is shifted by the position of the
//! corresponding letter of a repeating keyword, modulo [`ALPHABET_SIZE`].
//! Input is case-insensitive; output is always uppercase.

use tracing::trace;

use crate::alphabet::{self, ALPHABET_SIZE};
use crate::cipher::{Direction, TextCipher};
use crate::error::CipherError;

/// Polyalphabetic substitution cipher keyed by a word.
///
/// # Examples
///
/// ```
/// use cyrcipher::PolyalphabeticCipher;
///
/// let cipher = PolyalphabeticCipher::new("ключ").unwrap();
/// let encrypted = cipher.encrypt("Привет").unwrap();
/// assert_eq!(cipher.decrypt(&encrypted).unwrap(), "ПРИВЕТ");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolyalphabeticCipher {
    keyword: String,
    key: Vec<usize>,
}

impl PolyalphabeticCipher {
    /// Builds the key sequence from `keyword`, folded to uppercase.
    ///
    /// # Errors
    /// Returns [`CipherError::InvalidKey`] if the keyword is empty or has a
    /// character outside the alphabet.
    ///
    /// ```
    /// use cyrcipher::PolyalphabeticCipher;
    ///
    /// assert!(PolyalphabeticCipher::new("").is_err());
    /// assert!(PolyalphabeticCipher::new("ключ1").is_err());
    /// ```
    pub fn new(keyword: &str) -> Result<Self, CipherError> {
        if keyword.is_empty() {
            return Err(CipherError::InvalidKey("empty key".to_string()));
        }
        let key = alphabet::positions(keyword).map_err(|c| {
            CipherError::InvalidKey(format!("key contains '{}' outside the alphabet", c))
        })?;
        Ok(PolyalphabeticCipher {
            keyword: alphabet::fold(keyword),
            key,
        })
    }

    /// Returns the folded keyword.
    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    /// Returns the key as alphabet positions.
    pub fn key(&self) -> &[usize] {
        &self.key
    }

    /// Encrypts `open_text`: `c[i] = (p[i] + k[i mod m]) mod 33`.
    ///
    /// # Errors
    /// Returns [`CipherError::InvalidText`] if the text is empty or has a
    /// character outside the alphabet after uppercasing.
    pub fn encrypt(&self, open_text: &str) -> Result<String, CipherError> {
        self.shift(open_text, Direction::Encrypt)
    }

    /// Decrypts `cipher_text`: `p[i] = (c[i] + 33 - k[i mod m]) mod 33`.
    ///
    /// # Errors
    /// Same validation as [`encrypt`](Self::encrypt).
    pub fn decrypt(&self, cipher_text: &str) -> Result<String, CipherError> {
        self.shift(cipher_text, Direction::Decrypt)
    }

    fn shift(&self, text: &str, direction: Direction) -> Result<String, CipherError> {
        let mut work = valid_text(text)?;
        trace!(len = work.len(), %direction, "shifting text");
        for (i, pos) in work.iter_mut().enumerate() {
            let k = self.key[i % self.key.len()];
            // Key positions are < ALPHABET_SIZE, so the decrypt sum stays non-negative.
            *pos = match direction {
                Direction::Encrypt => (*pos + k) % ALPHABET_SIZE,
                Direction::Decrypt => (*pos + ALPHABET_SIZE - k) % ALPHABET_SIZE,
            };
        }
        Ok(alphabet::to_text(&work))
    }
}

fn valid_text(text: &str) -> Result<Vec<usize>, CipherError> {
    if text.is_empty() {
        return Err(CipherError::InvalidText("empty text".to_string()));
    }
    alphabet::positions(text).map_err(|c| {
        CipherError::InvalidText(format!("text contains '{}' outside the alphabet", c))
    })
}

impl TextCipher for PolyalphabeticCipher {
    fn encipher(&self, text: &str) -> Result<String, CipherError> {
        self.encrypt(text)
    }

    fn decipher(&self, text: &str) -> Result<String, CipherError> {
        self.decrypt(text)
    }
}
