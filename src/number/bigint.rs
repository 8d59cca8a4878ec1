// Big Integer Operations
// Wrapper around num-bigint for modular arithmetic shared by DH and RSA

use num_bigint::{BigInt, BigUint, RandBigInt};
use num_integer::Integer;
use num_traits::{One, Zero};
use rand::thread_rng;
use tracing::debug;

use crate::error::{Result, ValidationError};

/// Arbitrary precision natural number used for every modulus and exponent
pub type BigNum = BigUint;

/// Create a big integer from u64
pub fn from_u64(n: u64) -> BigNum {
    BigNum::from(n)
}

/// Modular exponentiation: base^exp mod modulus
/// Uses square-and-multiply, reducing after every multiplication
///
/// A zero modulus is rejected; modulus 1 always yields 0.
pub fn mod_exp(base: &BigNum, exp: &BigNum, modulus: &BigNum) -> Result<BigNum> {
    if modulus.is_zero() {
        return Err(ValidationError::ZeroModulus.into());
    }
    Ok(square_and_multiply(base, exp, modulus))
}

// Caller guarantees a non-zero modulus.
pub(crate) fn square_and_multiply(base: &BigNum, exp: &BigNum, modulus: &BigNum) -> BigNum {
    if modulus.is_one() {
        return BigNum::zero();
    }

    let mut result = BigNum::one();
    let mut base = base % modulus;
    let mut exp = exp.clone();

    while !exp.is_zero() {
        if exp.is_odd() {
            result = (&result * &base) % modulus;
        }
        base = (&base * &base) % modulus;
        exp >>= 1;
    }

    result
}

/// Extended Euclidean Algorithm
/// Returns (gcd, x, y) such that a*x + b*y = gcd = gcd(a, b)
pub fn extended_gcd(a: &BigInt, b: &BigInt) -> (BigInt, BigInt, BigInt) {
    if b.is_zero() {
        return (a.clone(), BigInt::one(), BigInt::zero());
    }

    let (gcd, x1, y1) = extended_gcd(b, &(a % b));
    let x = y1.clone();
    let y = x1 - (a / b) * &y1;

    (gcd, x, y)
}

/// Compute modular inverse: a^(-1) mod m
/// Returns None if inverse doesn't exist (gcd(a, m) != 1 or m <= 1)
pub fn mod_inverse(a: &BigNum, m: &BigNum) -> Option<BigNum> {
    if m <= &BigNum::one() {
        return None;
    }

    let a_signed = BigInt::from(a.clone());
    let m_signed = BigInt::from(m.clone());
    let (gcd, x, _) = extended_gcd(&a_signed, &m_signed);

    if !gcd.is_one() {
        return None;
    }

    // x may be negative; normalise into [0, m)
    x.mod_floor(&m_signed).to_biguint()
}

/// Greatest common divisor
pub fn gcd(a: &BigNum, b: &BigNum) -> BigNum {
    a.gcd(b)
}

/// Miller-Rabin primality test
/// Returns true if n is probably prime
pub fn is_probable_prime(n: &BigNum, iterations: u32) -> bool {
    let two = BigNum::from(2u8);
    if n < &two {
        return false;
    }
    if n == &two || n == &BigNum::from(3u8) {
        return true;
    }
    if n.is_even() {
        return false;
    }

    // Write n-1 as d * 2^s with d odd
    let n_minus_one = n - 1u8;
    let mut d = n_minus_one.clone();
    let mut s = 0u32;
    while d.is_even() {
        d >>= 1;
        s += 1;
    }

    let mut rng = thread_rng();
    let n_minus_two = n - &two;

    'witness: for _ in 0..iterations {
        // Pick random witness a in [2, n-2)
        let a = if n_minus_two > two {
            rng.gen_biguint_range(&two, &n_minus_two)
        } else {
            two.clone()
        };

        let mut x = square_and_multiply(&a, &d, n);
        if x.is_one() || x == n_minus_one {
            continue;
        }

        for _ in 1..s {
            x = square_and_multiply(&x, &two, n);
            if x == n_minus_one {
                continue 'witness;
            }
        }

        // Composite
        return false;
    }

    // Probably prime
    true
}

/// Generate a random probable prime of exactly `bit_length` bits (>= 2)
pub fn random_prime(bit_length: u32, rounds: u32) -> Result<BigNum> {
    if bit_length < 2 {
        return Err(ValidationError::PrimeBitLength(bit_length).into());
    }

    let mut rng = thread_rng();
    let lower = BigNum::one() << (bit_length - 1);
    let upper = (BigNum::one() << bit_length) - 1u8;
    let mut attempts = 0u32;

    loop {
        attempts += 1;
        let mut candidate = rng.gen_biguint_range(&lower, &upper);

        // Make it odd
        if candidate.is_even() {
            candidate += 1u8;
        }

        if is_probable_prime(&candidate, rounds) {
            debug!(bit_length, attempts, "random prime found");
            return Ok(candidate);
        }
    }
}
