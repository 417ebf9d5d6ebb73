//! AlphabetIndex: the fixed 33-letter Russian alphabet.
//!
//! Provides a bidirectional mapping between each uppercase Cyrillic letter
//! and its zero-based position. The letter-to-position map is built once on
//! first use and shared read-only by the whole process.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Number of letters in the alphabet.
pub const ALPHABET_SIZE: usize = 33;

/// The alphabet in positional order. `Ё` sits between `Е` and `Ж`.
pub const ALPHABET: [char; ALPHABET_SIZE] = [
    'А', 'Б', 'В', 'Г', 'Д', 'Е', 'Ё', 'Ж', 'З', 'И', 'Й', 'К', 'Л', 'М', 'Н', 'О', 'П', 'Р',
    'С', 'Т', 'У', 'Ф', 'Х', 'Ц', 'Ч', 'Ш', 'Щ', 'Ъ', 'Ы', 'Ь', 'Э', 'Ю', 'Я',
];

static POSITIONS: LazyLock<HashMap<char, usize>> = LazyLock::new(|| {
    ALPHABET
        .iter()
        .enumerate()
        .map(|(pos, &letter)| (letter, pos))
        .collect()
});

/// Returns the position of an uppercase letter, or `None` if it is not part
/// of the alphabet. No case folding is applied.
///
/// # Examples
///
/// ```
/// use cyrcipher::alphabet;
///
/// assert_eq!(alphabet::position('А'), Some(0));
/// assert_eq!(alphabet::position('Я'), Some(32));
/// assert_eq!(alphabet::position('я'), None);
/// ```
pub fn position(letter: char) -> Option<usize> {
    POSITIONS.get(&letter).copied()
}

/// Returns the letter at `pos`, or `None` if `pos >= ALPHABET_SIZE`.
pub fn letter(pos: usize) -> Option<char> {
    ALPHABET.get(pos).copied()
}

/// Uppercase-folds `text`.
pub fn fold(text: &str) -> String {
    text.to_uppercase()
}

/// Returns `true` if `c`, once uppercased, is an alphabet letter.
pub fn is_valid_letter(c: char) -> bool {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => position(u).is_some(),
        _ => false,
    }
}

/// Folds `text` and maps every character to its position.
///
/// # Returns
/// The position sequence, or `Err(c)` carrying the first folded character
/// that is not in the alphabet.
pub fn positions(text: &str) -> Result<Vec<usize>, char> {
    fold(text)
        .chars()
        .map(|c| position(c).ok_or(c))
        .collect()
}

/// Maps a position sequence back to letters.
///
/// Every position is reduced modulo [`ALPHABET_SIZE`], so callers doing
/// modular arithmetic can hand over already-reduced values directly.
pub fn to_text(positions: &[usize]) -> String {
    positions
        .iter()
        .map(|&pos| ALPHABET[pos % ALPHABET_SIZE])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphabet_letters_are_distinct() {
        let mut seen = std::collections::HashSet::new();
        for c in ALPHABET {
            assert!(seen.insert(c), "duplicate letter {}", c);
        }
        assert_eq!(seen.len(), ALPHABET_SIZE);
    }

    #[test]
    fn test_position_letter_bijection() {
        for (pos, &c) in ALPHABET.iter().enumerate() {
            assert_eq!(position(c), Some(pos));
            assert_eq!(letter(pos), Some(c));
        }
    }

    #[test]
    fn test_yo_position() {
        assert_eq!(position('Е'), Some(5));
        assert_eq!(position('Ё'), Some(6));
        assert_eq!(position('Ж'), Some(7));
    }

    #[test]
    fn test_letter_out_of_range() {
        assert_eq!(letter(ALPHABET_SIZE), None);
    }

    #[test]
    fn test_position_rejects_lowercase_and_latin() {
        assert_eq!(position('а'), None);
        assert_eq!(position('A'), None);
        assert_eq!(position(' '), None);
    }

    #[test]
    fn test_fold_lowercase_cyrillic() {
        assert_eq!(fold("привет ёж"), "ПРИВЕТ ЁЖ");
    }

    #[test]
    fn test_is_valid_letter() {
        assert!(is_valid_letter('ё'));
        assert!(is_valid_letter('Я'));
        assert!(!is_valid_letter('z'));
        assert!(!is_valid_letter('1'));
        assert!(!is_valid_letter('ß'));
    }

    #[test]
    fn test_positions_ok() {
        assert_eq!(positions("абв"), Ok(vec![0, 1, 2]));
    }

    #[test]
    fn test_positions_reports_first_bad_char() {
        assert_eq!(positions("аб в"), Err(' '));
        assert_eq!(positions("аQб"), Err('Q'));
    }

    #[test]
    fn test_to_text_reduces_modulo() {
        assert_eq!(to_text(&[0, 33, 65]), "ААЯ");
    }
}
