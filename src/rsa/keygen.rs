// RSA Key Generation
// Builds a textbook key pair from caller-supplied or randomly generated primes

use num_traits::One;
use tracing::{debug, warn};

use crate::config::ToolkitConfig;
use crate::error::{ComputationFailure, Error, Result, ValidationError};
use crate::number::{gcd, is_prime, mod_inverse, random_prime, BigNum};

const MIN_BIT_LENGTH: u32 = 16;
const MAX_BIT_LENGTH: u32 = 4096;
const MAX_GENERATION_ATTEMPTS: u32 = 64;

/// RSA Public Key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsaPublicKey {
    pub e: BigNum, // Public exponent
    pub n: BigNum, // Modulus
}

/// RSA Private Key
#[derive(Clone, PartialEq, Eq)]
pub struct RsaPrivateKey {
    pub d: BigNum, // Private exponent
    pub n: BigNum, // Modulus (same as public)
}

/// RSA Key Pair (both keys plus the totient they were derived from)
#[derive(Debug, Clone)]
pub struct RsaKeyPair {
    pub public_key: RsaPublicKey,
    pub private_key: RsaPrivateKey,
    pub totient: BigNum,
}

impl RsaPublicKey {
    pub fn new(e: BigNum, n: BigNum) -> Self {
        Self { e, n }
    }

    /// Get the bit length of the modulus
    pub fn bit_length(&self) -> u64 {
        self.n.bits()
    }

    /// Encode a message one character at a time
    pub fn encode(&self, plaintext: &str) -> Result<Vec<BigNum>> {
        super::encrypt::encode(plaintext, self)
    }
}

impl RsaPrivateKey {
    pub fn new(d: BigNum, n: BigNum) -> Self {
        Self { d, n }
    }

    /// Get the bit length of the modulus
    pub fn bit_length(&self) -> u64 {
        self.n.bits()
    }

    /// Decode a sequence of ciphertext integers back to text
    pub fn decode(&self, ciphertext: &[BigNum]) -> Result<String> {
        super::decrypt::decode(ciphertext, self)
    }
}

impl std::fmt::Debug for RsaPrivateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RsaPrivateKey")
            .field("d", &"[redacted]")
            .field("n", &self.n)
            .finish()
    }
}

impl RsaKeyPair {
    /// Build a key pair from primes p, q and public exponent e
    ///
    /// Fails if p or q is not prime, p == q, e is outside (1, t), or
    /// gcd(e, t) != 1, where t = (p-1)(q-1).
    pub fn from_primes(p: &BigNum, q: &BigNum, e: &BigNum) -> Result<Self> {
        if !is_prime(p) {
            warn!(p = %p, "rejected non-prime p");
            return Err(ValidationError::NotPrime { name: "p", value: p.clone() }.into());
        }
        if !is_prime(q) {
            warn!(q = %q, "rejected non-prime q");
            return Err(ValidationError::NotPrime { name: "q", value: q.clone() }.into());
        }
        build_keypair(p, q, e)
    }

    /// Generate a key pair with random primes, using the default configuration
    pub fn generate(bit_length: u32, e: u64) -> Result<Self> {
        Self::generate_with_config(bit_length, e, &ToolkitConfig::default())
    }

    /// Generate a key pair whose modulus has roughly `bit_length` bits
    /// bit_length: even, 16..=4096
    /// e: Public exponent (common values: 3, 17, 65537)
    pub fn generate_with_config(bit_length: u32, e: u64, config: &ToolkitConfig) -> Result<Self> {
        if !(MIN_BIT_LENGTH..=MAX_BIT_LENGTH).contains(&bit_length) || bit_length % 2 != 0 {
            return Err(ValidationError::InvalidBitLength(bit_length).into());
        }

        let e = BigNum::from(e);
        let half_bits = bit_length / 2;
        let mut attempt = 0;

        loop {
            attempt += 1;

            // Step 1: Generate two distinct random primes p and q
            let p = random_prime(half_bits, config.prime_test_rounds)?;
            let q = random_prime(half_bits, config.prime_test_rounds)?;
            if p == q {
                continue;
            }

            // Step 2: Derive n, t and d; retry when e happens to share a factor with t
            match build_keypair(&p, &q, &e) {
                Err(Error::Validation(ValidationError::NotCoprime { .. }))
                    if attempt < MAX_GENERATION_ATTEMPTS =>
                {
                    debug!(attempt, "e not coprime with t, drawing new primes");
                }
                result => return result,
            }
        }
    }

    /// Modulus n = p * q
    pub fn n(&self) -> &BigNum {
        &self.public_key.n
    }

    /// Public exponent e
    pub fn e(&self) -> &BigNum {
        &self.public_key.e
    }

    /// Private exponent d
    pub fn d(&self) -> &BigNum {
        &self.private_key.d
    }

    /// Totient t = (p-1)(q-1)
    pub fn t(&self) -> &BigNum {
        &self.totient
    }
}

// Primality of p and q is the caller's responsibility.
fn build_keypair(p: &BigNum, q: &BigNum, e: &BigNum) -> Result<RsaKeyPair> {
    if p == q {
        return Err(ValidationError::IdenticalPrimes.into());
    }

    // Step 1: Compute n = p * q
    let n = p * q;

    // Step 2: Compute t = (p-1)(q-1)
    let t = (p - 1u8) * (q - 1u8);

    // Step 3: Check 1 < e < t
    if e <= &BigNum::one() || e >= &t {
        return Err(ValidationError::ExponentOutOfRange { e: e.clone(), t }.into());
    }

    // Step 4: Verify e and t are coprime
    if !gcd(e, &t).is_one() {
        return Err(ValidationError::NotCoprime { e: e.clone(), t }.into());
    }

    // Step 5: Compute d = e^(-1) mod t
    let d = match mod_inverse(e, &t) {
        Some(d) => d,
        None => return Err(ComputationFailure::NoInverse { e: e.clone(), t }.into()),
    };

    debug!(n = %n, t = %t, e = %e, "key pair generated");

    Ok(RsaKeyPair {
        public_key: RsaPublicKey::new(e.clone(), n.clone()),
        private_key: RsaPrivateKey::new(d, n),
        totient: t,
    })
}
