// Block Cipher Capability
// Raw-bytes-in / raw-bytes-out contract for an externally provided block cipher

use crate::error::Result;

/// A block cipher supplied by an external library
///
/// The toolkit only passes key material and bytes through; it never implements the
/// cipher itself.
pub trait BlockCipher {
    /// Encrypt `plaintext` under `key`
    fn encrypt_block(&self, key: &[u8], plaintext: &[u8]) -> Result<Vec<u8>>;

    /// Decrypt bytes produced by `encrypt_block` under the same key
    fn decrypt_block(&self, key: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>>;
}

#[cfg(feature = "aes")]
pub use self::gcm::Aes256GcmCipher;

#[cfg(feature = "aes")]
mod gcm {
    use aes_gcm::aead::{Aead, KeyInit, OsRng};
    use aes_gcm::{AeadCore, Aes256Gcm, Nonce};
    use tracing::debug;

    use super::BlockCipher;
    use crate::error::{ComputationFailure, DecodeError, Error, Result, ValidationError};

    const KEY_SIZE: usize = 32;
    const NONCE_SIZE: usize = 12;
    const TAG_SIZE: usize = 16;

    /// AES-256-GCM from the `aes-gcm` crate
    /// Output layout: nonce (12) || ciphertext || tag (16)
    #[derive(Debug, Clone, Copy, Default)]
    pub struct Aes256GcmCipher;

    impl Aes256GcmCipher {
        /// Generate a random 32-byte key
        pub fn generate_key() -> Vec<u8> {
            Aes256Gcm::generate_key(&mut OsRng).to_vec()
        }

        fn cipher(key: &[u8]) -> Result<Aes256Gcm> {
            if key.len() != KEY_SIZE {
                return Err(ValidationError::BlockKeyLength {
                    expected: KEY_SIZE,
                    actual: key.len(),
                }
                .into());
            }
            Aes256Gcm::new_from_slice(key)
                .map_err(|e| Error::from(ComputationFailure::BlockCipher(e.to_string())))
        }
    }

    impl BlockCipher for Aes256GcmCipher {
        fn encrypt_block(&self, key: &[u8], plaintext: &[u8]) -> Result<Vec<u8>> {
            let cipher = Self::cipher(key)?;
            let nonce = Aes256Gcm::generate_nonce(&mut OsRng);
            let sealed = cipher
                .encrypt(&nonce, plaintext)
                .map_err(|e| ComputationFailure::BlockCipher(e.to_string()))?;

            let mut output = Vec::with_capacity(NONCE_SIZE + sealed.len());
            output.extend_from_slice(nonce.as_slice());
            output.extend_from_slice(&sealed);
            debug!(bytes = output.len(), "block encrypted");
            Ok(output)
        }

        fn decrypt_block(&self, key: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>> {
            let cipher = Self::cipher(key)?;
            if ciphertext.len() < NONCE_SIZE + TAG_SIZE {
                return Err(DecodeError::Authentication.into());
            }

            let (nonce, sealed) = ciphertext.split_at(NONCE_SIZE);
            cipher
                .decrypt(Nonce::from_slice(nonce), sealed)
                .map_err(|_| Error::from(DecodeError::Authentication))
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_roundtrip() {
            let key = Aes256GcmCipher::generate_key();
            let cipher = Aes256GcmCipher;

            let sealed = cipher.encrypt_block(&key, b"attack at dawn").unwrap();
            assert_eq!(sealed.len(), NONCE_SIZE + 14 + TAG_SIZE);
            assert_eq!(cipher.decrypt_block(&key, &sealed).unwrap(), b"attack at dawn");
        }

        #[test]
        fn test_rejects_wrong_key_length() {
            let err = Aes256GcmCipher.encrypt_block(&[0u8; 16], b"data").unwrap_err();
            assert_eq!(
                err,
                ValidationError::BlockKeyLength { expected: 32, actual: 16 }.into()
            );
        }

        #[test]
        fn test_tampering_fails_authentication() {
            let key = Aes256GcmCipher::generate_key();
            let mut sealed = Aes256GcmCipher.encrypt_block(&key, b"payload").unwrap();
            let last = sealed.len() - 1;
            sealed[last] ^= 0x01;

            let err = Aes256GcmCipher.decrypt_block(&key, &sealed).unwrap_err();
            assert!(matches!(err, Error::Decode(DecodeError::Authentication)));

            let err = Aes256GcmCipher.decrypt_block(&key, &sealed[..10]).unwrap_err();
            assert!(matches!(err, Error::Decode(DecodeError::Authentication)));
        }
    }
}
