// Key Derivation
// Turns an agreed numeric secret into an alphabetic Vigenere key

use std::fmt;

use super::exchange::SharedSecret;

/// Alphabetic key derived from the decimal digits of a shared secret
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedKey(String);

impl DerivedKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for DerivedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Map each decimal digit d of the secret to 'a' + (d mod 26), then repeat the
/// resulting letters and truncate to `length`
pub fn derive_key(secret: &SharedSecret, length: usize) -> DerivedKey {
    let letters: Vec<char> = secret
        .value()
        .to_str_radix(10)
        .bytes()
        .map(|digit| char::from(b'a' + (digit - b'0') % 26))
        .collect();

    DerivedKey(letters.iter().cycle().take(length).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::number::from_u64;

    #[test]
    fn test_digits_map_to_letters() {
        let secret = SharedSecret::new(from_u64(18));
        assert_eq!(derive_key(&secret, 2).as_str(), "bi");
    }

    #[test]
    fn test_key_repeats_and_truncates() {
        let secret = SharedSecret::new(from_u64(2));
        assert_eq!(derive_key(&secret, 5).as_str(), "ccccc");

        let secret = SharedSecret::new(from_u64(9051));
        assert_eq!(derive_key(&secret, 6).as_str(), "jafbja");
        assert_eq!(derive_key(&secret, 3).as_str(), "jaf");
    }

    #[test]
    fn test_zero_length_and_zero_secret() {
        let secret = SharedSecret::new(from_u64(0));
        assert!(derive_key(&secret, 0).is_empty());
        assert_eq!(derive_key(&secret, 3).as_str(), "aaa");
    }
}
