// Diffie-Hellman Module
// Key agreement over a prime field plus numeric -> alphabetic key derivation

pub mod derive;
pub mod exchange;

pub use derive::{derive_key, DerivedKey};
pub use exchange::{publish_key, shared_secret, DhParams, DhParty, SharedSecret};
