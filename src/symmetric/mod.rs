// Symmetric Module
// RC4 keystream, classical ciphers and the external block cipher capability

pub mod block;
pub mod caesar;
pub mod rc4;
pub mod vernam;
pub mod vigenere;

pub use block::BlockCipher;
#[cfg(feature = "aes")]
pub use block::Aes256GcmCipher;
pub use rc4::{rc4_bytes, rc4_text, Rc4};
