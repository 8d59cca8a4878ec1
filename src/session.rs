// Session Context
// The one value a caller carries between operations: the last agreed secret

use tracing::debug;

use crate::dh::SharedSecret;
use crate::error::{Result, ValidationError};
use crate::symmetric::vigenere;

/// Caller-owned state that survives between interactions
#[derive(Debug, Clone, Default)]
pub struct Session {
    shared_secret: Option<SharedSecret>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remember a freshly agreed secret, replacing any earlier one
    pub fn record(&mut self, secret: SharedSecret) {
        debug!("shared secret recorded");
        self.shared_secret = Some(secret);
    }

    pub fn shared_secret(&self) -> Option<&SharedSecret> {
        self.shared_secret.as_ref()
    }

    /// Forget the stored secret
    pub fn clear(&mut self) {
        self.shared_secret = None;
    }

    /// Vigenere-encrypt under the key derived from the stored secret
    pub fn encrypt_text(&self, text: &str) -> Result<String> {
        let key = self.derived_key(text)?;
        vigenere::encrypt(text, &key)
    }

    /// Vigenere-decrypt under the key derived from the stored secret
    pub fn decrypt_text(&self, text: &str) -> Result<String> {
        let key = self.derived_key(text)?;
        vigenere::decrypt(text, &key)
    }

    // At least one letter long so an empty message still yields a valid keyword.
    fn derived_key(&self, text: &str) -> Result<String> {
        let secret = self
            .shared_secret
            .as_ref()
            .ok_or(ValidationError::MissingSharedSecret)?;
        Ok(secret.derive_key(text.chars().count().max(1)).into_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::number::from_u64;

    #[test]
    fn test_requires_recorded_secret() {
        let session = Session::new();
        assert_eq!(
            session.encrypt_text("hello").unwrap_err(),
            ValidationError::MissingSharedSecret.into()
        );
    }

    #[test]
    fn test_roundtrip_with_secret() {
        let mut session = Session::new();
        session.record(SharedSecret::new(from_u64(18)));

        // key "bi..." shifts by 1, 8, 1, 8, ...
        let ciphertext = session.encrypt_text("hello").unwrap();
        assert_eq!(ciphertext, "IMMTP");
        assert_eq!(session.decrypt_text(&ciphertext).unwrap(), "HELLO");
    }

    #[test]
    fn test_clear_forgets_secret() {
        let mut session = Session::new();
        session.record(SharedSecret::new(from_u64(2)));
        assert!(session.shared_secret().is_some());

        session.clear();
        assert!(session.shared_secret().is_none());
        assert!(session.decrypt_text("abc").is_err());
    }

    #[test]
    fn test_empty_text() {
        let mut session = Session::new();
        session.record(SharedSecret::new(from_u64(7)));
        assert_eq!(session.encrypt_text("").unwrap(), "");
    }
}
