//! Classical ciphers over the Russian alphabet.
//!
//! cyrcipher implements two reversible, keyed text transformations:
//! a route (columnar) transposition cipher and a polyalphabetic
//! substitution cipher keyed by a word. Both validate their key at
//! construction and their text on every call, failing fast with a
//! [`CipherError`] before producing any output.
//!
//! These ciphers are teaching material and offer no real confidentiality.
//!
//! # Architecture
//!
//! ```text
//! alphabet                  (33 letters А..Я incl. Ё, letter <-> position)
//!     ↓ validation + arithmetic
//! PolyalphabeticCipher      (position shift by a repeating keyword, mod 33)
//!
//! RouteTranspositionCipher  (row-major write / column-major read, any chars)
//!
//! TextCipher                (common encipher/decipher interface for both)
//! ```
//!
//! # Examples
//!
//! Route transposition with five columns:
//!
//! ```
//! use cyrcipher::RouteTranspositionCipher;
//!
//! let cipher = RouteTranspositionCipher::new(5).unwrap();
//! let encoded = cipher.encode("pROceSsIng").unwrap();
//! assert_eq!(cipher.decode(&encoded).unwrap(), "pROceSsIng");
//! ```
//!
//! Polyalphabetic substitution, through the shared trait:
//!
//! ```
//! use cyrcipher::{Direction, PolyalphabeticCipher, TextCipher};
//!
//! let cipher = PolyalphabeticCipher::new("Б").unwrap();
//! assert_eq!(cipher.apply(Direction::Encrypt, "а").unwrap(), "Б");
//! assert_eq!(cipher.apply(Direction::Decrypt, "Б").unwrap(), "А");
//! ```

#![deny(clippy::all)]

pub mod alphabet;
pub mod error;

mod cipher;
mod poly;
mod route;

pub use cipher::{Direction, TextCipher};
pub use error::CipherError;
pub use poly::PolyalphabeticCipher;
pub use route::{RouteTranspositionCipher, MAX_GRID_CELLS, PAD};
