//! Inner Product Functional Encryption over safe-prime groups
//!
//! This crate provides a readable, pragmatic implementation of two
//! inner-product functional encryption schemes working in the prime-order
//! subgroup of `Z_p*` for a safe prime `p = 2q + 1`:
//!
//! - [`Ddh`]: the scheme of Abdalla, Bourse, De Caro and Pointcheval,
//!   "Simple Functional Encryption Schemes for Inner Products"
//!   (selectively secure under DDH)
//! - [`Damgard`]: the DDH variant of Agrawal, Libert and Stehle,
//!   "Fully secure functional encryption for inner products, from standard
//!   assumptions" (adaptively secure, two independent generators)
//!
//! Design choices:
//! - Arithmetic on `num-bigint-dig` big integers; plaintext vectors are
//!   signed and bounded coordinate-wise by the scheme bound
//! - Group parameters are either generated freshly (safe prime plus
//!   generator of the quadratic-residue subgroup) or loaded from a fixed,
//!   interoperable table for the common modulus lengths
//! - Decryption recovers the inner product from `g^<x,y>` with a bounded
//!   baby-step giant-step search that also covers negative exponents
//! - Not constant-time beyond what the big-integer library provides; do
//!   not use for production without a security review
//!
//! Minimal API, via the [`FunctionalEncryption`] trait each scheme
//! implements: `generate_master_keys`, `derive_key`, `encrypt`, `decrypt`.

pub mod damgard;
pub mod dlog;
pub mod error;
pub mod group;
mod precomp;
pub mod sample;
pub mod scheme;
pub mod simple;
pub mod util;

pub use damgard::{Damgard, DamgardCiphertext, DamgardDerivedKey, DamgardParams, DamgardSecKey};
pub use dlog::DlogCalculator;
pub use error::Error;
pub use group::ElGamalGroup;
pub use scheme::FunctionalEncryption;
pub use simple::{Ddh, DdhCiphertext, DdhParams};

// Re-exported so callers can build vectors without depending on the
// big-integer crate directly.
pub use num_bigint_dig::{BigInt, BigUint};
