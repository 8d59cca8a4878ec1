// RSA Decoding
// Recovers characters from ciphertext integers: m_i = c_i^d mod n

use std::str::FromStr;

use num_traits::ToPrimitive;
use tracing::debug;

use super::keygen::RsaPrivateKey;
use crate::error::{DecodeError, Error, Result};
use crate::number::{mod_exp, BigNum};

/// Decode ciphertext integers with the private key
///
/// A well-formed but wrong key yields the wrong text, not an error; only values
/// that are not valid characters fail.
pub fn decode(ciphertext: &[BigNum], private_key: &RsaPrivateKey) -> Result<String> {
    let mut plaintext = String::with_capacity(ciphertext.len());

    for c in ciphertext {
        let m = mod_exp(c, &private_key.d, &private_key.n)?;
        let ch = m
            .to_u32()
            .and_then(char::from_u32)
            .ok_or_else(|| DecodeError::InvalidCodePoint(m.clone()))?;
        plaintext.push(ch);
    }

    debug!(chars = ciphertext.len(), "message decoded");
    Ok(plaintext)
}

/// Parse whitespace-separated decimal tokens into ciphertext integers
pub fn parse_ciphertext(input: &str) -> Result<Vec<BigNum>> {
    input
        .split_whitespace()
        .map(|token| {
            BigNum::from_str(token).map_err(|_| Error::from(DecodeError::InvalidToken(token.to_string())))
        })
        .collect()
}

/// Parse and decode a space-separated ciphertext string
pub fn decode_str(input: &str, private_key: &RsaPrivateKey) -> Result<String> {
    let ciphertext = parse_ciphertext(input)?;
    decode(&ciphertext, private_key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::number::from_u64;
    use crate::rsa::keygen::RsaKeyPair;

    fn textbook_pair() -> RsaKeyPair {
        RsaKeyPair::from_primes(&from_u64(61), &from_u64(53), &from_u64(17)).unwrap()
    }

    #[test]
    fn test_decode_known_value() {
        let key = RsaPrivateKey::new(from_u64(2753), from_u64(3233));
        assert_eq!(decode(&[from_u64(2790)], &key).unwrap(), "A");
    }

    #[test]
    fn test_roundtrip_keeps_spaces_and_case() {
        let keypair = textbook_pair();
        let message = "Hello, RSA World!";

        let ciphertext = keypair.public_key.encode(message).unwrap();
        let decoded = keypair.private_key.decode(&ciphertext).unwrap();

        assert_eq!(decoded, message);
    }

    #[test]
    fn test_decode_str() {
        let keypair = textbook_pair();
        assert_eq!(decode_str("  2790\t2790\n", &keypair.private_key).unwrap(), "AA");
        assert_eq!(decode_str("", &keypair.private_key).unwrap(), "");
    }

    #[test]
    fn test_rejects_non_integer_tokens() {
        let keypair = textbook_pair();
        for input in ["2790 abc", "12.5", "-3"] {
            let err = decode_str(input, &keypair.private_key).unwrap_err();
            assert!(matches!(err, Error::Decode(DecodeError::InvalidToken(_))), "{}", input);
        }
    }

    #[test]
    fn test_rejects_invalid_code_point() {
        // d = 1 leaves the value untouched; 0xD800 is a surrogate
        let key = RsaPrivateKey::new(from_u64(1), from_u64(1 << 20));
        let err = decode(&[from_u64(0xD800)], &key).unwrap_err();
        assert_eq!(err, DecodeError::InvalidCodePoint(from_u64(0xD800)).into());
    }

    #[test]
    fn test_wrong_key_decodes_silently() {
        let keypair = textbook_pair();
        let other = RsaKeyPair::from_primes(&from_u64(61), &from_u64(53), &from_u64(7)).unwrap();

        let ciphertext = keypair.public_key.encode("secret").unwrap();
        // every m_i < 3233 is a valid char, so the wrong key cannot fail
        let decoded = other.private_key.decode(&ciphertext).unwrap();
        assert_ne!(decoded, "secret");
    }
}
