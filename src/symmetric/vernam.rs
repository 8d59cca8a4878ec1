// Vernam Cipher (one-time pad over decimal digits)
// Text -> 3-digit code points -> digit-wise arithmetic modulo 10

use rand::Rng;
use tracing::debug;

use crate::error::{DecodeError, Error, Result, ValidationError};

const CELL_WIDTH: usize = 3;
const MAX_CELL_CODE: u32 = 999;

/// Expand text to its 3-digit decimal code points, e.g. "HI" -> "072073"
pub fn text_to_digits(text: &str) -> Result<String> {
    let mut digits = String::with_capacity(text.len() * CELL_WIDTH);
    for ch in text.chars() {
        let code = u32::from(ch);
        if code > MAX_CELL_CODE {
            return Err(ValidationError::CodePointTooWide { ch, code }.into());
        }
        digits.push_str(&format!("{:03}", code));
    }
    Ok(digits)
}

/// Read a digit string back as 3-digit code points
pub fn digits_to_text(digits: &str) -> Result<String> {
    if !is_numeric(digits) {
        return Err(ValidationError::NonNumericCiphertext.into());
    }
    if digits.len() % CELL_WIDTH != 0 {
        return Err(DecodeError::TruncatedDigits(digits.len()).into());
    }

    digits
        .as_bytes()
        .chunks(CELL_WIDTH)
        .map(|cell| {
            let code = cell.iter().fold(0u32, |acc, &d| acc * 10 + u32::from(d - b'0'));
            // 0..=999 never reaches the surrogate range
            char::from_u32(code).ok_or_else(|| Error::from(DecodeError::InvalidCodePoint(code.into())))
        })
        .collect()
}

/// Produce `length` independent uniformly random digits (not a CSPRNG pad)
pub fn generate_key(length: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..length)
        .map(|_| char::from(b'0' + rng.gen_range(0..10u8)))
        .collect()
}

/// Encrypt text with a numeric key exactly as long as its digit expansion:
/// c_i = (a_i - k_i + 10) mod 10
pub fn encrypt(text: &str, key: &str) -> Result<String> {
    let digits = text_to_digits(text)?;
    check_key(key, digits.len())?;

    let ciphertext = combine(&digits, key, |a, k| (a + 10 - k) % 10);
    debug!(digits = ciphertext.len(), "vernam encrypted");
    Ok(ciphertext)
}

/// Encrypt with a freshly generated key; returns (key, ciphertext)
pub fn encrypt_with_generated_key(text: &str) -> Result<(String, String)> {
    let key = generate_key(text_to_digits(text)?.len());
    let ciphertext = encrypt(text, &key)?;
    Ok((key, ciphertext))
}

/// Decrypt a numeric ciphertext with an equal-length numeric key:
/// a_i = (c_i + k_i) mod 10, then read back as 3-digit code points
pub fn decrypt(ciphertext: &str, key: &str) -> Result<String> {
    if !is_numeric(ciphertext) {
        return Err(ValidationError::NonNumericCiphertext.into());
    }
    check_key(key, ciphertext.len())?;

    let digits = combine(ciphertext, key, |c, k| (c + k) % 10);
    digits_to_text(&digits)
}

fn check_key(key: &str, expected: usize) -> Result<()> {
    if !is_numeric(key) {
        return Err(ValidationError::NonNumericKey.into());
    }
    if key.len() != expected {
        return Err(ValidationError::KeyLengthMismatch {
            expected,
            actual: key.len(),
        }
        .into());
    }
    Ok(())
}

fn is_numeric(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

// Both inputs are ASCII digit strings of equal length.
fn combine(left: &str, right: &str, op: impl Fn(u8, u8) -> u8) -> String {
    left.bytes()
        .zip(right.bytes())
        .map(|(a, b)| char::from(b'0' + op(a - b'0', b - b'0')))
        .collect()
}
