// Number Theory Module
// Primality, modular exponentiation and inversion, primitive roots

pub mod bigint;
pub mod prime;
pub mod primitive_root;

pub use bigint::{from_u64, gcd, is_probable_prime, mod_exp, mod_inverse, random_prime, BigNum};
pub use prime::{is_prime, is_prime_u64};
pub use primitive_root::{is_primitive_root, is_primitive_root_with_config};
