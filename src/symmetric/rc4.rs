// RC4 Stream Cipher
// Key scheduling + keystream generation; encryption and decryption are the same XOR

use tracing::debug;

use crate::error::{Result, ValidationError};

/// RC4 cipher state: a permutation of 0..=255 and the two running indices
#[derive(Clone)]
pub struct Rc4 {
    s: [u8; 256],
    i: u8,
    j: u8,
}

impl Rc4 {
    /// Run the key-scheduling algorithm over a non-empty key
    pub fn new(key: &[u8]) -> Result<Self> {
        if key.is_empty() {
            return Err(ValidationError::EmptyKey.into());
        }

        let mut s = [0u8; 256];
        for (k, slot) in s.iter_mut().enumerate() {
            *slot = k as u8;
        }

        let mut j = 0u8;
        for k in 0..256 {
            j = j.wrapping_add(s[k]).wrapping_add(key[k % key.len()]);
            s.swap(k, usize::from(j));
        }

        Ok(Self { s, i: 0, j: 0 })
    }

    /// Advance the state and emit the next keystream byte
    pub fn next_byte(&mut self) -> u8 {
        self.i = self.i.wrapping_add(1);
        self.j = self.j.wrapping_add(self.s[usize::from(self.i)]);
        self.s.swap(usize::from(self.i), usize::from(self.j));

        let index = self.s[usize::from(self.i)].wrapping_add(self.s[usize::from(self.j)]);
        self.s[usize::from(index)]
    }

    /// XOR the keystream into `data` in place
    pub fn apply_keystream(&mut self, data: &mut [u8]) {
        for byte in data.iter_mut() {
            *byte ^= self.next_byte();
        }
    }
}

/// Encrypt or decrypt raw bytes
pub fn rc4_bytes(key: &[u8], data: &[u8]) -> Result<Vec<u8>> {
    let mut cipher = Rc4::new(key)?;
    let mut output = data.to_vec();
    cipher.apply_keystream(&mut output);
    debug!(bytes = output.len(), "rc4 applied");
    Ok(output)
}

/// Encrypt or decrypt text one character at a time
///
/// The key is scheduled from each key character's code point modulo 256, and each
/// keystream byte is XORed into the low 8 bits of a text code point. Surrogates
/// occupy whole 256-aligned blocks, so the result is always a valid character.
pub fn rc4_text(key: &str, text: &str) -> Result<String> {
    let key: Vec<u8> = key.chars().map(|ch| (u32::from(ch) & 0xff) as u8).collect();
    let mut cipher = Rc4::new(&key)?;
    let output: String = text
        .chars()
        .map(|ch| {
            let code = u32::from(ch) ^ u32::from(cipher.next_byte());
            char::from_u32(code).unwrap_or(char::REPLACEMENT_CHARACTER)
        })
        .collect();
    debug!(chars = output.chars().count(), "rc4 applied to text");
    Ok(output)
}
