// Toolkit Errors
// Validation, computation and decode failures reported by every primitive

use crate::number::BigNum;
use thiserror::Error;

/// Result type for toolkit operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by the toolkit primitives
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("computation failure: {0}")]
    Computation(#[from] ComputationFailure),

    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),
}

/// Malformed or out-of-constraint input, detected before any arithmetic runs
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{name} = {value} is not prime")]
    NotPrime { name: &'static str, value: BigNum },

    #[error("{g} is not a primitive root modulo {p}")]
    NotPrimitiveRoot { g: BigNum, p: BigNum },

    #[error("modulus {p} exceeds the primitive root search limit {limit}")]
    ModulusTooLarge { p: BigNum, limit: u64 },

    #[error("modulus must be non-zero")]
    ZeroModulus,

    #[error("private exponent must be at least 1")]
    InvalidPrivateKey,

    #[error("p and q must be distinct primes")]
    IdenticalPrimes,

    #[error("exponent e = {e} must satisfy 1 < e < {t}")]
    ExponentOutOfRange { e: BigNum, t: BigNum },

    #[error("e = {e} is not coprime with t = {t}")]
    NotCoprime { e: BigNum, t: BigNum },

    #[error("bit length {0} must be even and within 16..=4096")]
    InvalidBitLength(u32),

    #[error("prime bit length {0} must be at least 2")]
    PrimeBitLength(u32),

    #[error("unknown hash algorithm {0:?}; expected sha256, md5, sha3-256 or ripemd160")]
    UnknownHashAlgorithm(String),

    #[error("character {ch:?} (code point {code}) is not below the modulus {n}")]
    CodePointTooLarge { ch: char, code: u32, n: BigNum },

    #[error("character {ch:?} (code point {code}) does not fit a 3-digit cell")]
    CodePointTooWide { ch: char, code: u32 },

    #[error("key must not be empty")]
    EmptyKey,

    #[error("keyword must not be empty")]
    EmptyKeyword,

    #[error("keyword must contain letters only")]
    NonAlphabeticKeyword,

    #[error("key must contain digits only")]
    NonNumericKey,

    #[error("ciphertext must contain digits only")]
    NonNumericCiphertext,

    #[error("key length mismatch: expected {expected} digits, got {actual}")]
    KeyLengthMismatch { expected: usize, actual: usize },

    #[error("block cipher key must be {expected} bytes, got {actual}")]
    BlockKeyLength { expected: usize, actual: usize },

    #[error("no shared secret has been agreed in this session")]
    MissingSharedSecret,
}

/// Valid input for which the algorithm still cannot produce a result
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ComputationFailure {
    #[error("no modular inverse of {e} modulo {t}")]
    NoInverse { e: BigNum, t: BigNum },

    #[error("block cipher failure: {0}")]
    BlockCipher(String),
}

/// A correct computation whose output cannot be read back as text
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("ciphertext token {0:?} is not an integer")]
    InvalidToken(String),

    #[error("recovered value {0} is not a valid character")]
    InvalidCodePoint(BigNum),

    #[error("digit string of length {0} is not a multiple of 3")]
    TruncatedDigits(usize),

    #[error("block ciphertext failed authentication")]
    Authentication,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_families_convert_into_error() {
        let err: Error = ValidationError::EmptyKey.into();
        assert!(matches!(err, Error::Validation(ValidationError::EmptyKey)));

        let err: Error = DecodeError::TruncatedDigits(4).into();
        assert_eq!(err.to_string(), "decode error: digit string of length 4 is not a multiple of 3");
    }

    #[test]
    fn test_messages_name_the_constraint() {
        let err = ValidationError::KeyLengthMismatch { expected: 15, actual: 3 };
        assert_eq!(err.to_string(), "key length mismatch: expected 15 digits, got 3");

        let err = ValidationError::NotPrime { name: "p", value: BigNum::from(21u8) };
        assert_eq!(err.to_string(), "p = 21 is not prime");
    }
}
