//! ROT13 substitution cipher.
//!
//! Each ASCII letter is shifted 13 positions through its own case's
//! alphabet, every other character passes through untouched. The output is
//! always built into a fresh `String`, one char emitted per input char, so
//! already rotated letters are never rotated twice.

use crate::error::Result;
use crate::transforms::Transform;

const ALPHABET_LEN: u8 = 26;
const SHIFT: u8 = 13;

/// Rotates a single character by 13 positions, keeping its case.
///
/// # Examples
///
/// ```
/// use strkit::cipher::rot13_char;
///
/// assert_eq!(rot13_char('a'), 'n');
/// assert_eq!(rot13_char('N'), 'A');
/// assert_eq!(rot13_char('?'), '?');
/// ```
pub fn rot13_char(c: char) -> char {
    let base = match c {
        'a'..='z' => b'a',
        'A'..='Z' => b'A',
        _ => return c,
    };
    ((c as u8 - base + SHIFT) % ALPHABET_LEN + base) as char
}

/// Encodes (or decodes, it is its own inverse) the given text with ROT13.
///
/// # Examples
///
/// ```
/// use strkit::cipher::rot13;
///
/// assert_eq!(rot13("hello"), "uryyb");
/// assert_eq!(rot13("Gb trg gb gur bgure fvqr!"), "To get to the other side!");
/// ```
pub fn rot13(text: &str) -> String {
    text.chars().map(rot13_char).collect()
}

/// ROT13 as a transform in the processing chain
#[derive(Debug, Default)]
pub struct Rot13;

impl Rot13 {
    pub fn new() -> Self {
        Self
    }
}

impl Transform for Rot13 {
    fn transform(&self, text: &str) -> Result<String> {
        Ok(rot13(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: [&str; 7] = [
        "",
        "hello",
        "Why did the chicken cross the road?",
        "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz",
        "1234 !@# \t\n",
        "Ünïcödé 🦀 ß ΣΑΣ こんにちは",
        "mixed: Rust 2021, é & z/A",
    ];

    #[test]
    fn test_rot13_examples() {
        assert_eq!(rot13("hello"), "uryyb");
        assert_eq!(rot13("uryyb"), "hello");
        assert_eq!(rot13(""), "");
        assert_eq!(
            rot13("Why did the chicken cross the road?"),
            "Jul qvq gur puvpxra pebff gur ebnq?"
        );
        assert_eq!(
            rot13("Gb trg gb gur bgure fvqr!"),
            "To get to the other side!"
        );
        assert_eq!(
            rot13("ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz"),
            "NOPQRSTUVWXYZABCDEFGHIJKLMnopqrstuvwxyzabcdefghijklm"
        );
    }

    #[test]
    fn test_rot13_alphabet_bounds() {
        assert_eq!(rot13("amnz"), "nzam");
        assert_eq!(rot13("AMNZ"), "NZAM");
        // Neighbours of the alphabet ranges are left alone
        assert_eq!(rot13("@[`{"), "@[`{");
    }

    #[test]
    fn test_rot13_is_involution() {
        for s in SAMPLES {
            assert_eq!(rot13(&rot13(s)), s, "involution failed for {:?}", s);
        }
    }

    #[test]
    fn test_rot13_preserves_length_and_case() {
        for s in SAMPLES {
            let encoded = rot13(s);
            assert_eq!(encoded.chars().count(), s.chars().count());

            for (before, after) in s.chars().zip(encoded.chars()) {
                if before.is_ascii_lowercase() {
                    assert!(after.is_ascii_lowercase());
                } else if before.is_ascii_uppercase() {
                    assert!(after.is_ascii_uppercase());
                } else {
                    assert_eq!(before, after, "non-letter changed in {:?}", s);
                }
            }
        }
    }

    #[test]
    fn test_rot13_does_not_reapply_to_rewritten_letters() {
        // 'a' -> 'n' must not be turned back into 'a' by a later 'n' substitution
        assert_eq!(rot13("an"), "na");
        assert_eq!(rot13("aaannn"), "nnnaaa");
    }

    #[test]
    fn test_rot13_transform() {
        let transform = Rot13::new();
        assert_eq!(transform.transform("Hello, World!").unwrap(), "Uryyb, Jbeyq!");
    }
}
