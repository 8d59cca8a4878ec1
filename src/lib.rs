//! Number-theory and symmetric cipher primitives for teaching and experiments.
//!
//! - [`number`]: primality, modular exponentiation and inversion, primitive roots
//! - [`dh`]: Diffie-Hellman key agreement and key derivation for Vigenere
//! - [`rsa`]: textbook RSA key pairs and a per-character codec
//! - [`symmetric`]: RC4, Vigenere, Vernam, Caesar and the block cipher capability
//!
//! Nothing here is constant-time or hardened; it favours readable, checkable arithmetic.
//!
//! ```
//! use cipher_toolkit::dh::DhParams;
//! use cipher_toolkit::number::from_u64;
//!
//! let params = DhParams::new(from_u64(23), from_u64(5))?;
//! let alice = params.with_private_key(from_u64(6))?;
//! let bob = params.with_private_key(from_u64(15))?;
//!
//! assert_eq!(alice.shared_secret(bob.public_key()), bob.shared_secret(alice.public_key()));
//! # Ok::<(), cipher_toolkit::Error>(())
//! ```

pub mod config;
pub mod dh;
pub mod error;
pub mod hash;
pub mod number;
pub mod rsa;
pub mod session;
pub mod symmetric;
pub mod ui;
pub mod util;

pub use config::ToolkitConfig;
pub use error::{ComputationFailure, DecodeError, Error, Result, ValidationError};
pub use session::Session;
