// Diffie-Hellman Key Agreement
// Validated parameters -> party with private exponent -> shared secret

use std::fmt;

use num_traits::Zero;
use tracing::{debug, warn};

use super::derive::{derive_key, DerivedKey};
use crate::config::ToolkitConfig;
use crate::error::{Result, ValidationError};
use crate::number::bigint::{mod_exp, square_and_multiply, BigNum};
use crate::number::is_primitive_root_with_config;

/// Public group parameters: prime modulus p and primitive root g
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DhParams {
    p: BigNum,
    g: BigNum,
}

/// One side of the exchange, holding its private exponent
#[derive(Clone)]
pub struct DhParty {
    params: DhParams,
    private_key: BigNum,
    public_key: BigNum,
}

/// The value both parties arrive at independently
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharedSecret(BigNum);

impl DhParams {
    /// Validate p and g with the default configuration
    pub fn new(p: BigNum, g: BigNum) -> Result<Self> {
        Self::with_config(p, g, &ToolkitConfig::default())
    }

    /// Validate that p is prime and g is a primitive root modulo p
    pub fn with_config(p: BigNum, g: BigNum, config: &ToolkitConfig) -> Result<Self> {
        if !is_primitive_root_with_config(&g, &p, config)? {
            warn!(p = %p, g = %g, "rejected generator");
            return Err(ValidationError::NotPrimitiveRoot { g, p }.into());
        }
        debug!(p = %p, g = %g, "parameters accepted");
        Ok(Self { p, g })
    }

    pub fn p(&self) -> &BigNum {
        &self.p
    }

    pub fn g(&self) -> &BigNum {
        &self.g
    }

    /// Choose a private exponent (>= 1) and publish A = g^a mod p
    pub fn with_private_key(&self, private_key: BigNum) -> Result<DhParty> {
        if private_key.is_zero() {
            return Err(ValidationError::InvalidPrivateKey.into());
        }
        let public_key = square_and_multiply(&self.g, &private_key, &self.p);
        debug!(public_key = %public_key, "public key published");

        Ok(DhParty {
            params: self.clone(),
            private_key,
            public_key,
        })
    }
}

impl DhParty {
    pub fn params(&self) -> &DhParams {
        &self.params
    }

    pub fn public_key(&self) -> &BigNum {
        &self.public_key
    }

    /// Combine the peer's public value: s = B^a mod p
    pub fn shared_secret(&self, peer_public: &BigNum) -> SharedSecret {
        SharedSecret(square_and_multiply(peer_public, &self.private_key, &self.params.p))
    }
}

impl fmt::Debug for DhParty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DhParty")
            .field("params", &self.params)
            .field("private_key", &"[redacted]")
            .field("public_key", &self.public_key)
            .finish()
    }
}

impl SharedSecret {
    pub fn new(value: BigNum) -> Self {
        Self(value)
    }

    pub fn value(&self) -> &BigNum {
        &self.0
    }

    /// Alphabetic key of exactly `length` letters for the Vigenere cipher
    pub fn derive_key(&self, length: usize) -> DerivedKey {
        derive_key(self, length)
    }
}

impl fmt::Display for SharedSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validate (p, g) and compute the public value A = g^a mod p
pub fn publish_key(p: &BigNum, g: &BigNum, private_key: &BigNum) -> Result<BigNum> {
    let params = DhParams::new(p.clone(), g.clone())?;
    let party = params.with_private_key(private_key.clone())?;
    Ok(party.public_key)
}

/// Compute s = B^a mod p from the peer's public value
pub fn shared_secret(p: &BigNum, private_key: &BigNum, peer_public: &BigNum) -> Result<SharedSecret> {
    mod_exp(peer_public, private_key, p).map(SharedSecret)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::number::from_u64;

    #[test]
    fn test_textbook_exchange() {
        let params = DhParams::new(from_u64(23), from_u64(5)).unwrap();
        let alice = params.with_private_key(from_u64(6)).unwrap();
        let bob = params.with_private_key(from_u64(15)).unwrap();

        assert_eq!(alice.public_key(), &from_u64(8));
        assert_eq!(bob.public_key(), &from_u64(19));

        let s_alice = alice.shared_secret(bob.public_key());
        let s_bob = bob.shared_secret(alice.public_key());
        assert_eq!(s_alice, s_bob);
        assert_eq!(s_alice.value(), &from_u64(2));
    }

    #[test]
    fn test_free_functions_agree_with_party() {
        let a = publish_key(&from_u64(23), &from_u64(5), &from_u64(6)).unwrap();
        assert_eq!(a, from_u64(8));

        let s = shared_secret(&from_u64(23), &from_u64(6), &from_u64(19)).unwrap();
        assert_eq!(s.value(), &from_u64(2));
    }

    #[test]
    fn test_rejects_composite_modulus() {
        let err = DhParams::new(from_u64(24), from_u64(5)).unwrap_err();
        assert!(matches!(err, Error::Validation(ValidationError::NotPrime { .. })));
    }

    #[test]
    fn test_rejects_non_primitive_generator() {
        let err = publish_key(&from_u64(23), &from_u64(2), &from_u64(6)).unwrap_err();
        assert_eq!(
            err,
            ValidationError::NotPrimitiveRoot { g: from_u64(2), p: from_u64(23) }.into()
        );
    }

    #[test]
    fn test_rejects_zero_private_key() {
        let params = DhParams::new(from_u64(23), from_u64(5)).unwrap();
        let err = params.with_private_key(from_u64(0)).unwrap_err();
        assert_eq!(err, ValidationError::InvalidPrivateKey.into());
    }

    #[test]
    fn test_shared_secret_zero_modulus() {
        let err = shared_secret(&from_u64(0), &from_u64(6), &from_u64(19)).unwrap_err();
        assert_eq!(err, ValidationError::ZeroModulus.into());
    }

    #[test]
    fn test_debug_hides_private_key() {
        let params = DhParams::new(from_u64(23), from_u64(5)).unwrap();
        let party = params.with_private_key(from_u64(13)).unwrap();
        let rendered = format!("{:?}", party);
        assert!(rendered.contains("[redacted]"));
        assert!(!rendered.contains("13"));
    }
}
