// RSA Encoding
// Per-character textbook RSA: c_i = code_point(char_i)^e mod n

use tracing::{debug, warn};

use super::keygen::RsaPublicKey;
use crate::error::{Result, ValidationError};
use crate::number::{mod_exp, BigNum};

/// Encode a string with the public key, one integer per character
///
/// Every code point must be below n; a larger one would be reduced modulo n and
/// could never be recovered, so it is rejected instead.
pub fn encode(plaintext: &str, public_key: &RsaPublicKey) -> Result<Vec<BigNum>> {
    // Validate every character before any exponentiation
    if let Some(ch) = plaintext.chars().find(|&ch| BigNum::from(u32::from(ch)) >= public_key.n) {
        warn!(n = %public_key.n, "code point does not fit below the modulus");
        return Err(ValidationError::CodePointTooLarge {
            ch,
            code: u32::from(ch),
            n: public_key.n.clone(),
        }
        .into());
    }

    let ciphertext = plaintext
        .chars()
        .map(|ch| mod_exp(&BigNum::from(u32::from(ch)), &public_key.e, &public_key.n))
        .collect::<Result<Vec<_>>>()?;

    debug!(chars = ciphertext.len(), "message encoded");
    Ok(ciphertext)
}

/// Encode a string and render the ciphertext as space-separated decimals
pub fn encode_to_string(plaintext: &str, public_key: &RsaPublicKey) -> Result<String> {
    encode(plaintext, public_key).map(|ciphertext| format_ciphertext(&ciphertext))
}

/// Render ciphertext integers as space-separated decimal tokens
pub fn format_ciphertext(ciphertext: &[BigNum]) -> String {
    ciphertext
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
