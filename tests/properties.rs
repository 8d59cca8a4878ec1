//! Property tests over the primitives' algebraic guarantees.

use cipher_toolkit::dh::DhParams;
use cipher_toolkit::number::{from_u64, gcd, is_prime, is_prime_u64, is_primitive_root, is_probable_prime, mod_exp};
use cipher_toolkit::rsa::RsaKeyPair;
use cipher_toolkit::symmetric::{rc4, vernam, vigenere};
use cipher_toolkit::{Error, ValidationError};
use num_traits::One;
use proptest::prelude::*;

const DH_PRIMES: [u64; 6] = [7, 11, 23, 101, 1009, 7919];
const RSA_PRIMES: [u64; 8] = [53, 61, 101, 103, 257, 263, 1009, 1013];

fn smallest_primitive_root(p: u64) -> u64 {
    (2..p)
        .find(|&g| is_primitive_root(&from_u64(g), &from_u64(p)).unwrap())
        .unwrap()
}

proptest! {
    #[test]
    fn prop_trial_division_agrees_with_miller_rabin(n in 0u64..1_000_000) {
        let big = from_u64(n);
        let expected = is_probable_prime(&big, 20);
        prop_assert_eq!(is_prime(&big), expected);
        prop_assert_eq!(is_prime_u64(n), expected);
    }

    #[test]
    fn prop_wide_products_are_composite(a in 256u64..1000, b in 1u64 << 56..u64::MAX) {
        // a * b exceeds u64, so is_prime takes the arbitrary-precision path; the
        // small factor a keeps trial division short
        let product = from_u64(a) * from_u64(b);
        prop_assert!(!is_prime(&product));
    }

    #[test]
    fn prop_dh_both_sides_agree(
        p in prop::sample::select(DH_PRIMES.to_vec()),
        a_seed in 1u64..u64::MAX,
        b_seed in 1u64..u64::MAX,
    ) {
        let g = smallest_primitive_root(p);
        let a = 1 + a_seed % (p - 1);
        let b = 1 + b_seed % (p - 1);
        let (p_big, g_big) = (from_u64(p), from_u64(g));

        let big_a = mod_exp(&g_big, &from_u64(a), &p_big).unwrap();
        let big_b = mod_exp(&g_big, &from_u64(b), &p_big).unwrap();
        prop_assert_eq!(
            mod_exp(&big_a, &from_u64(b), &p_big).unwrap(),
            mod_exp(&big_b, &from_u64(a), &p_big).unwrap()
        );

        let params = DhParams::new(p_big, g_big).unwrap();
        let alice = params.with_private_key(from_u64(a)).unwrap();
        let bob = params.with_private_key(from_u64(b)).unwrap();
        prop_assert_eq!(alice.shared_secret(bob.public_key()), bob.shared_secret(alice.public_key()));
    }

    #[test]
    fn prop_rsa_roundtrip(
        p_index in 0usize..RSA_PRIMES.len(),
        q_offset in 1usize..RSA_PRIMES.len(),
        e_seed in 0u64..1000,
        message in "[ -~]{0,40}",
    ) {
        let p = RSA_PRIMES[p_index];
        let q = RSA_PRIMES[(p_index + q_offset) % RSA_PRIMES.len()];
        let t = from_u64((p - 1) * (q - 1));

        // smallest exponent >= 3 + seed that is coprime with t; t >= 3120 keeps it in range
        let mut e = 3 + e_seed;
        while !gcd(&from_u64(e), &t).is_one() {
            e += 1;
        }

        let keypair = RsaKeyPair::from_primes(&from_u64(p), &from_u64(q), &from_u64(e)).unwrap();
        prop_assert!((keypair.e() * keypair.d()) % keypair.t() == from_u64(1));

        let ciphertext = keypair.public_key.encode(&message).unwrap();
        prop_assert_eq!(ciphertext.len(), message.chars().count());
        prop_assert_eq!(keypair.private_key.decode(&ciphertext).unwrap(), message);
    }

    #[test]
    fn prop_rc4_bytes_involution(
        key in prop::collection::vec(any::<u8>(), 1..64),
        data in prop::collection::vec(any::<u8>(), 0..512),
    ) {
        let once = rc4::rc4_bytes(&key, &data).unwrap();
        prop_assert_eq!(rc4::rc4_bytes(&key, &once).unwrap(), data);
    }

    #[test]
    fn prop_rc4_text_involution(key in ".{1,16}", text in ".{0,64}") {
        let once = rc4::rc4_text(&key, &text).unwrap();
        prop_assert_eq!(rc4::rc4_text(&key, &once).unwrap(), text);
    }

    #[test]
    fn prop_vigenere_roundtrip(text in "[ -~]{0,80}", keyword in "[a-zA-Z]{1,12}") {
        let ciphertext = vigenere::encrypt(&text, &keyword).unwrap();
        prop_assert_eq!(ciphertext.len(), text.len());
        for (original, encrypted) in text.chars().zip(ciphertext.chars()) {
            if !original.is_ascii_alphabetic() {
                prop_assert_eq!(original, encrypted);
            }
        }
        prop_assert_eq!(vigenere::decrypt(&ciphertext, &keyword).unwrap(), text.to_ascii_uppercase());
    }

    #[test]
    fn prop_vernam_roundtrip(text in "[ -~]{0,40}", seed in prop::collection::vec(0u8..10, 120)) {
        let key: String = seed[..text.len() * 3].iter().map(|d| char::from(b'0' + d)).collect();
        let ciphertext = vernam::encrypt(&text, &key).unwrap();
        prop_assert_eq!(ciphertext.len(), key.len());
        prop_assert_eq!(vernam::decrypt(&ciphertext, &key).unwrap(), text);
    }

    #[test]
    fn prop_vernam_rejects_mismatched_key(text in "[ -~]{1,20}", extra in 1usize..5) {
        let key = "7".repeat(text.len() * 3 + extra);
        let err = vernam::encrypt(&text, &key).unwrap_err();
        let is_mismatch = matches!(err, Error::Validation(ValidationError::KeyLengthMismatch { .. }));
        prop_assert!(is_mismatch);
    }
}
