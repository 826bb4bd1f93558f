use std::collections::HashMap;

use num_bigint_dig::{BigInt, BigUint};
use num_integer::Roots;
use num_traits::{One, ToPrimitive};

use crate::error::Error;
use crate::util::inv_mod;

/// Bounded discrete-logarithm calculator for the order-q subgroup of Z_p*.
///
/// Finds the unique integer `e` with `base^e = target (mod p)` and
/// `|e| <= bound` using baby-step giant-step: O(sqrt(bound)) time and a
/// table of about sqrt(bound) entries. The search bound defaults to the
/// subgroup order and is usually narrowed with [`with_bound`]; the
/// negative branch must be enabled explicitly with [`with_neg`] before
/// exponents below zero can be recovered.
///
/// [`with_bound`]: DlogCalculator::with_bound
/// [`with_neg`]: DlogCalculator::with_neg
#[derive(Debug, Clone)]
pub struct DlogCalculator {
    pub modulus: BigUint,
    pub order: BigUint,
    pub bound: BigUint,
    pub neg: bool,
}

impl DlogCalculator {
    /// Calculator for the subgroup of order `order` inside `Z_modulus*`.
    pub fn in_zp(modulus: &BigUint, order: &BigUint) -> Self {
        Self {
            modulus: modulus.clone(),
            order: order.clone(),
            bound: order.clone(),
            neg: false,
        }
    }

    /// Narrows the search interval to `[-bound, bound]`.
    pub fn with_bound(mut self, bound: &BigUint) -> Self {
        self.bound = bound.clone();
        self
    }

    /// Enables the negative branch of the search.
    pub fn with_neg(mut self) -> Self {
        self.neg = true;
        self
    }

    /// Searches for `e` with `base^e = target (mod p)` and `|e| <= bound`.
    ///
    /// The positive interval is searched first: with `m = ceil(sqrt(bound)) + 1`,
    /// a table of `base^j` for `j < m` is probed against
    /// `target * base^(-m*i)` for `i <= m`, yielding `e = i*m + j` on a hit.
    /// If the positive branch misses and the negative capability is
    /// enabled, the same walk is repeated from `target^-1` and the hit is
    /// returned negated. Exhausting both branches means the exponent lies
    /// outside the bound.
    pub fn baby_step_giant_step(
        &self,
        target: &BigUint,
        base: &BigUint,
    ) -> Result<BigInt, Error> {
        let floor = self.bound.sqrt();
        let ceil = if &floor * &floor == self.bound {
            floor
        } else {
            floor + BigUint::one()
        };
        let m = (ceil + BigUint::one())
            .to_u64()
            .expect("baby-step table exceeds addressable memory");

        // Baby steps: base^j -> j for j = 0..m. The running power ends the
        // loop at base^m, which the giant step reuses for the stride.
        let mut table: HashMap<BigUint, u64> = HashMap::with_capacity(m as usize);
        let mut cur = BigUint::one();
        for j in 0..m {
            table.insert(cur.clone(), j);
            cur = &cur * base % &self.modulus;
        }
        let stride = inv_mod(&cur, &self.modulus);

        if let Some(e) = giant_steps(target, &stride, &table, m, &self.modulus) {
            return Ok(e);
        }
        if self.neg {
            let target_inv = inv_mod(target, &self.modulus);
            if let Some(e) = giant_steps(&target_inv, &stride, &table, m, &self.modulus) {
                return Ok(-e);
            }
        }
        Err(Error::DlogNotFound)
    }
}

/// Walks `target * stride^i` for `i = 0..=m` against the baby-step table.
fn giant_steps(
    target: &BigUint,
    stride: &BigUint,
    table: &HashMap<BigUint, u64>,
    m: u64,
    modulus: &BigUint,
) -> Option<BigInt> {
    let mut gamma = target.clone();
    for i in 0..=m {
        if let Some(&j) = table.get(&gamma) {
            return Some(BigInt::from(i) * BigInt::from(m) + BigInt::from(j));
        }
        gamma = &gamma * stride % modulus;
    }
    None
}
