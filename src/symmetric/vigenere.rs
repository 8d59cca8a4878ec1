// Vigenere Cipher
// Letter-wise shift by a repeating keyword; output is uppercase

use tracing::warn;

use crate::error::{Result, ValidationError};

#[derive(Clone, Copy)]
enum Direction {
    Encrypt,
    Decrypt,
}

/// Encrypt text: C_i = (P_i + K_i) mod 26
pub fn encrypt(text: &str, keyword: &str) -> Result<String> {
    transform(text, keyword, Direction::Encrypt)
}

/// Decrypt text: P_i = (C_i - K_i + 26) mod 26
pub fn decrypt(text: &str, keyword: &str) -> Result<String> {
    transform(text, keyword, Direction::Decrypt)
}

fn transform(text: &str, keyword: &str, direction: Direction) -> Result<String> {
    let shifts = keyword_shifts(keyword)?;
    let mut key = shifts.iter().cycle();
    let mut output = String::with_capacity(text.len());

    for ch in text.chars() {
        if !ch.is_ascii_alphabetic() {
            // non-letters keep their position and do not consume the key
            output.push(ch);
            continue;
        }

        let letter = ch.to_ascii_uppercase() as u8 - b'A';
        let shift = key.next().copied().unwrap_or_default();
        let shifted = match direction {
            Direction::Encrypt => (letter + shift) % 26,
            Direction::Decrypt => (letter + 26 - shift) % 26,
        };
        output.push(char::from(b'A' + shifted));
    }

    Ok(output)
}

/// Shifts 0..26 for each keyword letter, case-insensitive
fn keyword_shifts(keyword: &str) -> Result<Vec<u8>> {
    if keyword.is_empty() {
        return Err(ValidationError::EmptyKeyword.into());
    }
    if !keyword.chars().all(|ch| ch.is_ascii_alphabetic()) {
        warn!("keyword contains non-letter characters");
        return Err(ValidationError::NonAlphabeticKeyword.into());
    }

    Ok(keyword.bytes().map(|b| b.to_ascii_uppercase() - b'A').collect())
}
