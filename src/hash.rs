// Hashing
// Message digests in four modes, rendered as lowercase hex

use std::fmt;
use std::str::FromStr;

use md5::Md5;
use ripemd::Ripemd160;
use sha2::{Digest, Sha256};
use sha3::Sha3_256;

use crate::error::{Error, ValidationError};

/// Supported digest algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HashAlgorithm {
    #[default]
    Sha256,
    Md5,
    Sha3_256,
    Ripemd160,
}

impl HashAlgorithm {
    pub const ALL: [HashAlgorithm; 4] = [
        HashAlgorithm::Sha256,
        HashAlgorithm::Md5,
        HashAlgorithm::Sha3_256,
        HashAlgorithm::Ripemd160,
    ];

    /// Digest size in bytes
    pub fn output_len(self) -> usize {
        match self {
            HashAlgorithm::Sha256 | HashAlgorithm::Sha3_256 => 32,
            HashAlgorithm::Md5 => 16,
            HashAlgorithm::Ripemd160 => 20,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            HashAlgorithm::Sha256 => "sha256",
            HashAlgorithm::Md5 => "md5",
            HashAlgorithm::Sha3_256 => "sha3-256",
            HashAlgorithm::Ripemd160 => "ripemd160",
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HashAlgorithm {
    type Err = Error;

    // "SHA-3(256)", "sha3_256" and "sha3-256" all name the same mode.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(char::is_ascii_alphanumeric)
            .map(|c| c.to_ascii_lowercase())
            .collect();

        match normalized.as_str() {
            "sha256" => Ok(HashAlgorithm::Sha256),
            "md5" => Ok(HashAlgorithm::Md5),
            "sha3256" | "sha3" => Ok(HashAlgorithm::Sha3_256),
            "ripemd160" | "ripemd" => Ok(HashAlgorithm::Ripemd160),
            _ => Err(ValidationError::UnknownHashAlgorithm(s.to_string()).into()),
        }
    }
}

/// Digest of `data` under `algorithm` as lowercase hex
pub fn hash_hex(algorithm: HashAlgorithm, data: &[u8]) -> String {
    match algorithm {
        HashAlgorithm::Sha256 => hex::encode(Sha256::digest(data)),
        HashAlgorithm::Md5 => hex::encode(Md5::digest(data)),
        HashAlgorithm::Sha3_256 => hex::encode(Sha3_256::digest(data)),
        HashAlgorithm::Ripemd160 => hex::encode(Ripemd160::digest(data)),
    }
}

/// SHA-256 digest of `data` as 64 lowercase hex characters
pub fn sha256_hex(data: &[u8]) -> String {
    hash_hex(HashAlgorithm::Sha256, data)
}
