// RSA Module - Main module file
// Textbook key generation and the per-character codec

pub mod decrypt;
pub mod encrypt;
pub mod keygen;

pub use decrypt::{decode, decode_str, parse_ciphertext};
pub use encrypt::{encode, encode_to_string, format_ciphertext};
pub use keygen::{RsaKeyPair, RsaPrivateKey, RsaPublicKey};
