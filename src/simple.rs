use num_bigint_dig::{BigInt, BigUint};
use num_traits::One;
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

/// Configuration parameters for a [`Ddh`] scheme instance.
///
/// `l` is the length of the input vectors, `bound` the absolute bound on
/// their coordinates, and `(g, p, q)` the order-q subgroup of `Z_p*` the
/// scheme operates in. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DdhParams {
    pub l: usize,
    pub bound: BigInt,
    pub g: BigUint,
    pub p: BigUint,
    pub q: BigUint,
}

/// Ciphertext of the simple DDH scheme: `c0 = g^r` and
/// `cx[i] = h_i^r * g^x_i`, all modulo `p`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DdhCiphertext {
    pub c0: BigUint,
    pub cx: Vec<BigUint>,
}

/// Inner-product encryption scheme of Abdalla, Bourse, De Caro and
/// Pointcheval, "Simple Functional Encryption Schemes for Inner Products":
/// selectively secure under the DDH assumption in the order-q subgroup of
/// `Z_p*`.
///
/// A holder of the key derived for `y` learns `<x, y>` from an encryption
/// of `x` and nothing else about `x`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ddh {
    pub params: DdhParams,
}

impl Ddh {
    /// Configures a new scheme instance over a freshly generated safe-prime
    /// group of `modulus_bits` bits.
    ///
    /// Fails with [`Error::Setup`] if the group cannot be generated and
    /// with [`Error::Precondition`] if `2 * l * bound^2` exceeds the group
    /// order, in which case inner products could wrap around and become
    /// unrecoverable.
    pub fn new<R: RngCore + CryptoRng>(
        l: usize,
        modulus_bits: usize,
        bound: &BigInt,
        rng: &mut R,
    ) -> Result<Self, Error> {
        let group = ElGamalGroup::generate(modulus_bits, rng)?;
        check_group_order(l, bound, &group.q)?;

        Ok(Self {
            params: DdhParams {
                l,
                bound: bound.clone(),
                g: group.g,
                p: group.p,
                q: group.q,
            },
        })
    }

    /// Configures a new scheme instance on the precomputed group for
    /// `modulus_bits`, which must be one of 1024, 1536, 2048, 2560, 3072
    /// or 4096. Draws no randomness.
    pub fn new_precomp(l: usize, modulus_bits: usize, bound: &BigInt) -> Result<Self, Error> {
        let (g, _, p) = precomp::precomputed_group(modulus_bits)?;
        let q = (&p - BigUint::one()) >> 1;
        check_group_order(l, bound, &q)?;

        Ok(Self {
            params: DdhParams {
                l,
                bound: bound.clone(),
                g,
                p,
                q,
            },
        })
    }

    /// Reconstructs a scheme instance from existing configuration
    /// parameters. The caller is responsible for their validity.
    pub fn from_params(params: DdhParams) -> Self {
        Self { params }
    }
}

impl FunctionalEncryption for Ddh {
    type MasterSecretKey = Vec<BigUint>;
    type MasterPublicKey = Vec<BigUint>;
    type DerivedKey = BigUint;
    type Ciphertext = DdhCiphertext;

    /// Samples the master secret key `s` with `s_i` uniform in `[2, q)`
    /// and publishes `h_i = g^s_i mod p`.
    fn generate_master_keys<R: RngCore + CryptoRng>(
        &self,
        rng: &mut R,
    ) -> Result<(Vec<BigUint>, Vec<BigUint>), Error> {
        let two = BigUint::from(2u32);
        let mut msk = Vec::with_capacity(self.params.l);
        let mut mpk = Vec::with_capacity(self.params.l);

        for _ in 0..self.params.l {
            let s = sample::uniform_range(&two, &self.params.q, rng)?;
            mpk.push(self.params.g.modpow(&s, &self.params.p));
            msk.push(s);
        }
        Ok((msk, mpk))
    }

    /// Functional key for `y`: the scalar `<s, y> mod q`.
    fn derive_key(&self, msk: &Vec<BigUint>, y: &[BigInt]) -> Result<BigUint, Error> {
        check_bound(y, &self.params.bound)?;
        let key = exponent_inner_product(msk, y)?;
        Ok(reduce_mod(&key, &self.params.q))
    }

    /// Encrypts `x` with fresh randomness `r` drawn from `[2, q)`:
    /// `c0 = g^r`, `cx[i] = h_i^r * g^x_i`.
    fn encrypt<R: RngCore + CryptoRng>(
        &self,
        x: &[BigInt],
        mpk: &Vec<BigUint>,
        rng: &mut R,
    ) -> Result<DdhCiphertext, Error> {
        check_bound(x, &self.params.bound)?;
        if x.len() != mpk.len() {
            return Err(Error::Dimension {
                expected: mpk.len(),
                got: x.len(),
            });
        }

        let two = BigUint::from(2u32);
        let r = sample::uniform_range(&two, &self.params.q, rng)?;
        let c0 = self.params.g.modpow(&r, &self.params.p);

        let mut cx = Vec::with_capacity(x.len());
        for (hi, xi) in mpk.iter().zip(x.iter()) {
            let t1 = hi.modpow(&r, &self.params.p);
            let t2 = mod_exp_signed(&self.params.g, xi, &self.params.p);
            cx.push(t1 * t2 % &self.params.p);
        }

        Ok(DdhCiphertext { c0, cx })
    }

    /// Recovers `<x, y>` from the ciphertext and the key for `y`.
    ///
    /// Computes `prod(cx[i]^y_i) / c0^key = g^<x,y> mod p` and searches the
    /// exponent over `[-l * bound^2, l * bound^2]` with baby-step
    /// giant-step. An inner product outside that interval surfaces as
    /// [`Error::DlogNotFound`].
    fn decrypt(
        &self,
        cipher: &DdhCiphertext,
        key: &BigUint,
        y: &[BigInt],
    ) -> Result<BigInt, Error> {
        check_bound(y, &self.params.bound)?;
        if cipher.cx.len() != y.len() {
            return Err(Error::Dimension {
                expected: cipher.cx.len(),
                got: y.len(),
            });
        }

        let p = &self.params.p;
        let mut num = BigUint::one();
        for (ci, yi) in cipher.cx.iter().zip(y.iter()) {
            num = num * mod_exp_signed(ci, yi, p) % p;
        }

        let denom = cipher.c0.modpow(key, p);
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::inner_product;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    // Toy safe-prime group: p = 2039 = 2 * 1019 + 1, g = 4 of order 1019.
    fn toy_scheme(l: usize, bound: i64) -> Ddh {
        Ddh::from_params(DdhParams {
            l,
            bound: BigInt::from(bound),
            g: BigUint::from(4u32),
            p: BigUint::from(2039u32),
            q: BigUint::from(1019u32),
        })
    }

    fn to_vec(v: &[i64]) -> Vec<BigInt> {
        v.iter().map(|&c| BigInt::from(c)).collect()
    }

    #[test]
    fn round_trip() {
        let mut rng = StdRng::seed_from_u64(42);
        let scheme = toy_scheme(3, 10);
        let (msk, mpk) = scheme.generate_master_keys(&mut rng).unwrap();

        let x = to_vec(&[1, 2, 3]);
        let y = to_vec(&[4, 5, 6]);

        let cipher = scheme.encrypt(&x, &mpk, &mut rng).unwrap();
        let key = scheme.derive_key(&msk, &y).unwrap();
        let result = scheme.decrypt(&cipher, &key, &y).unwrap();

        assert_eq!(result, inner_product(&x, &y).unwrap());
        assert_eq!(result, BigInt::from(32));
    }

    #[test]
    fn round_trip_negative_inner_product() {
        let mut rng = StdRng::seed_from_u64(7);
        let scheme = toy_scheme(2, 10);
        let (msk, mpk) = scheme.generate_master_keys(&mut rng).unwrap();

        let x = to_vec(&[-5, 3]);
        let y = to_vec(&[2, 1]);

        let cipher = scheme.encrypt(&x, &mpk, &mut rng).unwrap();
        let key = scheme.derive_key(&msk, &y).unwrap();

        assert_eq!(
            scheme.decrypt(&cipher, &key, &y).unwrap(),
            BigInt::from(-7)
        );
    }

    #[test]
    fn rejects_out_of_bound_vectors() {
        let mut rng = StdRng::seed_from_u64(3);
        let scheme = toy_scheme(3, 10);
        let (msk, mpk) = scheme.generate_master_keys(&mut rng).unwrap();

        let over = to_vec(&[11, 0, 0]);
        let ok = to_vec(&[1, 0, 0]);

        assert!(matches!(
            scheme.encrypt(&over, &mpk, &mut rng),
            Err(Error::Bound)
        ));
        assert!(matches!(scheme.derive_key(&msk, &over), Err(Error::Bound)));

        let cipher = scheme.encrypt(&ok, &mpk, &mut rng).unwrap();
        let key = scheme.derive_key(&msk, &ok).unwrap();
        assert!(matches!(
            scheme.decrypt(&cipher, &key, &over),
            Err(Error::Bound)
        ));
    }

    #[test]
    fn derive_key_is_deterministic() {
        let mut rng = StdRng::seed_from_u64(11);
        let scheme = toy_scheme(3, 10);
        let (msk, _) = scheme.generate_master_keys(&mut rng).unwrap();

        let y = to_vec(&[4, -5, 6]);
        assert_eq!(
            scheme.derive_key(&msk, &y).unwrap(),
            scheme.derive_key(&msk, &y).unwrap()
        );
    }

    #[test]
    fn encryption_is_randomized() {
        let mut rng = StdRng::seed_from_u64(13);
        let scheme = toy_scheme(2, 10);
        let (_, mpk) = scheme.generate_master_keys(&mut rng).unwrap();

        let x = to_vec(&[1, 2]);
        let ciphers: Vec<_> = (0..5)
            .map(|_| scheme.encrypt(&x, &mpk, &mut rng).unwrap())
            .collect();
        assert!(
            ciphers.iter().any(|c| c != &ciphers[0]),
            "five encryptions of the same vector collided"
        );
    }

    #[test]
    fn precondition_rejects_oversized_bound() {
        // 2 * l * bound^2 > q for the 1024-bit precomputed group
        let bound = BigInt::from(1) << 520;
        assert!(matches!(
            Ddh::new_precomp(1, 1024, &bound),
            Err(Error::Precondition)
        ));
    }
}
