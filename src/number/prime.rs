// Deterministic Primality
// 6k±1 trial division, with a machine-word fast path

use num_integer::Integer;
use num_traits::{ToPrimitive, Zero};

use super::bigint::BigNum;

/// Trial division over u64: 2, 3, then 6k±1 up to sqrt(n)
pub fn is_prime_u64(n: u64) -> bool {
    if n <= 1 {
        return false;
    }
    if n <= 3 {
        return true;
    }
    if n % 2 == 0 || n % 3 == 0 {
        return false;
    }

    let mut i = 5u64;
    // i <= n / i avoids overflowing i * i near u64::MAX
    while i <= n / i {
        if n % i == 0 || n % (i + 2) == 0 {
            return false;
        }
        i += 6;
    }
    true
}

/// Deterministic primality test, O(sqrt(n))
///
/// Values that fit in a u64 take the word-sized path; larger values run the same
/// trial division on big integers, which is only practical for modest inputs.
pub fn is_prime(n: &BigNum) -> bool {
    if let Some(small) = n.to_u64() {
        return is_prime_u64(small);
    }

    if n.is_even() || (n % 3u8).is_zero() {
        return false;
    }

    let mut i = BigNum::from(5u8);
    while &i * &i <= *n {
        if (n % &i).is_zero() || (n % (&i + 2u8)).is_zero() {
            return false;
        }
        i += 6u8;
    }
    true
}
