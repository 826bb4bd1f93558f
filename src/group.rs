use num_bigint_dig::prime::probably_prime;
use num_bigint_dig::{BigUint, RandPrime};
use num_traits::One;
use rand::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::sample;

/// Minimal modulus length accepted by [`ElGamalGroup::generate`]; anything
/// shorter cannot host a safe prime with a non-trivial subgroup.
const MIN_MODULUS_BITS: usize = 16;

/// Number of Miller-Rabin rounds used to validate candidate safe primes.
const PRIME_WITNESSES: usize = 20;

/// ElGamal-style group parameters: a safe prime modulus `p = 2q + 1` and a
/// generator `g` of the subgroup of quadratic residues, which has prime
/// order `q`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElGamalGroup {
    pub p: BigUint,
    pub q: BigUint,
    pub g: BigUint,
}

impl ElGamalGroup {
    /// Generates a fresh group with a modulus of `modulus_bits` bits.
    ///
    /// The safe prime is found by drawing random primes `q` of
    /// `modulus_bits - 1` bits until `p = 2q + 1` passes a Miller-Rabin
    /// test. The generator is the square of a random element of `Z_p*`;
    /// squaring lands in the subgroup of quadratic residues, whose order
    /// `q` is prime, so any square other than 1 generates it.
    pub fn generate<R: RngCore + CryptoRng>(
        modulus_bits: usize,
        rng: &mut R,
    ) -> Result<Self, Error> {
        if modulus_bits < MIN_MODULUS_BITS {
            return Err(Error::Setup("modulus length is too short for a safe prime"));
        }

        let p = loop {
            let q = rng.gen_prime(modulus_bits - 1);
            let candidate = (&q << 1) + BigUint::one();
            if probably_prime(&candidate, PRIME_WITNESSES) {
                break candidate;
            }
        };
        let q = (&p - BigUint::one()) >> 1;

        let one = BigUint::one();
        let two = BigUint::from(2u32);
        let upper = &p - BigUint::one();
        let g = loop {
            let a = sample::uniform_range(&two, &upper, rng)?;
            let g = a.modpow(&two, &p);
            if g != one {
                break g;
            }
        };

        Ok(Self { p, q, g })
    }
}
