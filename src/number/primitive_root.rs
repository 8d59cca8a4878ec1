// Primitive Root Verification
// Checks that the powers of g cover every non-zero residue modulo a prime p

use num_traits::ToPrimitive;
use tracing::debug;

use super::bigint::{is_probable_prime, BigNum};
use super::prime::is_prime_u64;
use crate::config::ToolkitConfig;
use crate::error::{Result, ValidationError};

/// Check whether g is a primitive root modulo the prime p
///
/// Fails if p is not prime, or is a prime above the default search limit.
pub fn is_primitive_root(g: &BigNum, p: &BigNum) -> Result<bool> {
    is_primitive_root_with_config(g, p, &ToolkitConfig::default())
}

/// Check whether {g^k mod p : k in 1..p} equals {1, ..., p-1}
///
/// Walks the powers of g once, O(p) time and memory, so p is capped by
/// `config.primitive_root_limit`. Primality is judged first: a composite p of
/// any size is `NotPrime`, only a prime above the cap is `ModulusTooLarge`.
pub fn is_primitive_root_with_config(g: &BigNum, p: &BigNum, config: &ToolkitConfig) -> Result<bool> {
    // a composite verdict from Miller-Rabin is certain
    if !is_probable_prime(p, config.prime_test_rounds) {
        return Err(ValidationError::NotPrime { name: "p", value: p.clone() }.into());
    }

    let p_small = match p.to_u64() {
        Some(p_small) if p_small <= config.primitive_root_limit => p_small,
        _ => {
            return Err(ValidationError::ModulusTooLarge {
                p: p.clone(),
                limit: config.primitive_root_limit,
            }
            .into())
        }
    };

    if !is_prime_u64(p_small) {
        return Err(ValidationError::NotPrime { name: "p", value: p.clone() }.into());
    }

    // p fits in u64, so the remainder does too
    let g_small = (g % p).to_u64().unwrap_or_default();
    let modulus = u128::from(p_small);

    let mut seen = vec![false; p_small as usize];
    let mut power = 1u128;
    for _ in 1..p_small {
        power = power * u128::from(g_small) % modulus;
        let residue = power as usize;
        if residue == 0 || seen[residue] {
            debug!(g = %g, p = p_small, "powers of g repeat before covering all residues");
            return Ok(false);
        }
        seen[residue] = true;
    }

    Ok(true)
}
