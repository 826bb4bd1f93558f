use num_bigint_dig::{BigInt, BigUint};
use num_traits::{One, Zero};
use rand::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};

use crate::dlog::DlogCalculator;
use crate::error::Error;
use crate::group::ElGamalGroup;
use crate::precomp;
use crate::sample;
use crate::scheme::FunctionalEncryption;
use crate::util::{
    check_bound, check_group_order, exponent_inner_product, inv_mod, mod_exp_signed, reduce_mod,
};

/// Configuration parameters for a [`Damgard`] scheme instance.
///
/// Like [`DdhParams`] with a second generator `h` of the same order-q
/// subgroup, sampled independently of `g`.
///
/// [`DdhParams`]: crate::simple::DdhParams
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DamgardParams {
    pub l: usize,
    pub bound: BigInt,
    pub g: BigUint,
    pub h: BigUint,
    pub p: BigUint,
    pub q: BigUint,
}

/// Master secret key of the Damgard scheme: two exponent vectors, one per
/// generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DamgardSecKey {
    pub s: Vec<BigUint>,
    pub t: Vec<BigUint>,
}

/// Functional key for a vector `y`: `key1 = <s, y> mod q` and
/// `key2 = <t, y> mod q`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DamgardDerivedKey {
    pub key1: BigUint,
    pub key2: BigUint,
}

/// Ciphertext of the Damgard scheme: `c = g^r`, `d = h^r` and
/// `e[i] = h_i^r * g^x_i`, all modulo `p`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DamgardCiphertext {
    pub c: BigUint,
    pub d: BigUint,
    pub e: Vec<BigUint>,
}

/// Inner-product encryption scheme from the DDH variant of Agrawal, Libert
/// and Stehle, "Fully secure functional encryption for inner products,
/// from standard assumptions": adaptively secure thanks to the second
/// independent generator `h`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Damgard {
    pub params: DamgardParams,
}

impl Damgard {
    /// Configures a new scheme instance over a freshly generated safe-prime
    /// group of `modulus_bits` bits.
    ///
    /// The second generator is sampled as `h = g^r` for `r` uniform in
    /// `[2, q)`, which always has order q. Candidates where `(p - 1)` is
    /// divisible by `h` or by `h^-1` are rejected to avoid some known
    /// attacks.
    pub fn new<R: RngCore + CryptoRng>(
        l: usize,
        modulus_bits: usize,
        bound: &BigInt,
        rng: &mut R,
    ) -> Result<Self, Error> {
        let group = ElGamalGroup::generate(modulus_bits, rng)?;
        check_group_order(l, bound, &group.q)?;

        let two = BigUint::from(2u32);
        let p_minus_1 = &group.p - BigUint::one();
        let h = loop {
            let r = sample::uniform_range(&two, &group.q, rng)?;
            let h = group.g.modpow(&r, &group.p);

            if (&p_minus_1 % &h).is_zero() {
                continue;
            }
            let h_inv = inv_mod(&h, &group.p);
            if (&p_minus_1 % &h_inv).is_zero() {
                continue;
            }
            break h;
        };

        Ok(Self {
            params: DamgardParams {
                l,
                bound: bound.clone(),
                g: group.g,
                h,
                p: group.p,
                q: group.q,
            },
        })
    }

    /// Configures a new scheme instance on the precomputed group for
    /// `modulus_bits`, which must be one of 1024, 1536, 2048, 2560, 3072
    /// or 4096. Draws no randomness.
    pub fn new_precomp(l: usize, modulus_bits: usize, bound: &BigInt) -> Result<Self, Error> {
        let (g, h, p) = precomp::precomputed_group(modulus_bits)?;
        let q = (&p - BigUint::one()) >> 1;
        check_group_order(l, bound, &q)?;

        Ok(Self {
            params: DamgardParams {
                l,
                bound: bound.clone(),
                g,
                h,
                p,
                q,
            },
        })
    }

    /// Reconstructs a scheme instance from existing configuration
    /// parameters. The caller is responsible for their validity.
    pub fn from_params(params: DamgardParams) -> Self {
        Self { params }
    }
}

impl FunctionalEncryption for Damgard {
    type MasterSecretKey = DamgardSecKey;
    type MasterPublicKey = Vec<BigUint>;
    type DerivedKey = DamgardDerivedKey;
    type Ciphertext = DamgardCiphertext;

    /// Samples the exponent vectors `s` and `t` with entries uniform in
    /// `[2, q)` and publishes `h_i = g^s_i * h^t_i mod p`.
    fn generate_master_keys<R: RngCore + CryptoRng>(
        &self,
        rng: &mut R,
    ) -> Result<(DamgardSecKey, Vec<BigUint>), Error> {
        let two = BigUint::from(2u32);
        let mut msk = DamgardSecKey {
            s: Vec::with_capacity(self.params.l),
            t: Vec::with_capacity(self.params.l),
        };
        let mut mpk = Vec::with_capacity(self.params.l);

        for _ in 0..self.params.l {
            let s = sample::uniform_range(&two, &self.params.q, rng)?;
            let t = sample::uniform_range(&two, &self.params.q, rng)?;

            let y1 = self.params.g.modpow(&s, &self.params.p);
            let y2 = self.params.h.modpow(&t, &self.params.p);
            mpk.push(y1 * y2 % &self.params.p);

            msk.s.push(s);
            msk.t.push(t);
        }
        Ok((msk, mpk))
    }

    /// Functional key for `y`: `(<s, y> mod q, <t, y> mod q)`.
    fn derive_key(&self, msk: &DamgardSecKey, y: &[BigInt]) -> Result<DamgardDerivedKey, Error> {
        check_bound(y, &self.params.bound)?;

        let key1 = exponent_inner_product(&msk.s, y)?;
        let key2 = exponent_inner_product(&msk.t, y)?;

        Ok(DamgardDerivedKey {
            key1: reduce_mod(&key1, &self.params.q),
            key2: reduce_mod(&key2, &self.params.q),
        })
    }

    /// Encrypts `x` with fresh randomness `r` drawn from `[2, q)`:
    /// `c = g^r`, `d = h^r`, `e[i] = h_i^r * g^x_i`.
    fn encrypt<R: RngCore + CryptoRng>(
        &self,
        x: &[BigInt],
        mpk: &Vec<BigUint>,
        rng: &mut R,
    ) -> Result<DamgardCiphertext, Error> {
        check_bound(x, &self.params.bound)?;
        if x.len() != mpk.len() {
            return Err(Error::Dimension {
                expected: mpk.len(),
                got: x.len(),
            });
        }

        let two = BigUint::from(2u32);
        let r = sample::uniform_range(&two, &self.params.q, rng)?;

        let c = self.params.g.modpow(&r, &self.params.p);
        let d = self.params.h.modpow(&r, &self.params.p);

        let mut e = Vec::with_capacity(x.len());
        for (hi, xi) in mpk.iter().zip(x.iter()) {
            let t1 = hi.modpow(&r, &self.params.p);
            let t2 = mod_exp_signed(&self.params.g, xi, &self.params.p);
            e.push(t1 * t2 % &self.params.p);
        }

        Ok(DamgardCiphertext { c, d, e })
    }

    /// Recovers `<x, y>` from the ciphertext and the key for `y`.
    ///
    /// Computes `prod(e[i]^y_i) / (c^key1 * d^key2) = g^<x,y> mod p` and
    /// searches the exponent over `[-l * bound^2, l * bound^2]` with
    /// baby-step giant-step to base `g`.
    fn decrypt(
        &self,
        cipher: &DamgardCiphertext,
        key: &DamgardDerivedKey,
        y: &[BigInt],
    ) -> Result<BigInt, Error> {
        check_bound(y, &self.params.bound)?;
        if cipher.e.len() != y.len() {
            return Err(Error::Dimension {
                expected: cipher.e.len(),
                got: y.len(),
            });
        }

        let p = &self.params.p;
        let mut num = BigUint::one();
        for (ei, yi) in cipher.e.iter().zip(y.iter()) {
            num = num * mod_exp_signed(ei, yi, p) % p;
        }

        let t1 = cipher.c.modpow(&key.key1, p);
        let t2 = cipher.d.modpow(&key.key2, p);
        let denom = t1 * t2 % p;
        let target = num * inv_mod(&denom, p) % p;

        let dlog_bound = (BigInt::from(self.params.l as u64) * (&self.params.bound * &self.params.bound))
            .to_biguint()
            .expect("scheme bound is positive");
        DlogCalculator::in_zp(p, &self.params.q)
            .with_neg()
            .with_bound(&dlog_bound)
            .baby_step_giant_step(&target, &self.params.g)
    }
}
