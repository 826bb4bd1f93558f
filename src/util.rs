use num_bigint_dig::{BigInt, BigUint, ModInverse};
use num_integer::Integer;
use num_traits::{Signed, Zero};

use crate::error::Error;

/// Modular exponentiation with a signed exponent.
///
/// For `exp >= 0` this is plain `base^exp mod modulus`. For negative `exp`
/// the result is `(base^|exp|)^-1 mod modulus`, so the identity
/// `mod_exp_signed(g, -x, p) = mod_exp_signed(g, x, p)^-1` holds whenever
/// `base` is invertible. Every exponentiation by a plaintext coordinate in
/// the schemes goes through this function.
pub fn mod_exp_signed(base: &BigUint, exp: &BigInt, modulus: &BigUint) -> BigUint {
    let magnitude = exp
        .abs()
        .to_biguint()
        .expect("absolute value is non-negative");
    let pow = base.modpow(&magnitude, modulus);
    if exp.is_negative() {
        inv_mod(&pow, modulus)
    } else {
        pow
    }
}

/// Modular inverse of a unit modulo a prime. Elements handled here are
/// members of Z_p*, for which the inverse always exists; a failure is an
/// internal invariant violation, not a user error.
pub fn inv_mod(a: &BigUint, modulus: &BigUint) -> BigUint {
    a.mod_inverse(modulus)
        .and_then(|inv| inv.to_biguint())
        .expect("modular inverse of a unit mod a prime")
}

/// Checks that every coordinate of `v` lies in `[-bound, bound]`.
pub fn check_bound(v: &[BigInt], bound: &BigInt) -> Result<(), Error> {
    for coord in v {
        if coord.abs() > *bound {
            return Err(Error::Bound);
        }
    }
    Ok(())
}

/// Inner product of two signed vectors over the integers.
pub fn inner_product(x: &[BigInt], y: &[BigInt]) -> Result<BigInt, Error> {
    if x.len() != y.len() {
        return Err(Error::Dimension {
            expected: x.len(),
            got: y.len(),
        });
    }
    Ok(x.iter()
        .zip(y.iter())
        .fold(BigInt::zero(), |acc, (a, b)| acc + a * b))
}

/// Inner product of a secret exponent vector with a signed plaintext vector.
pub(crate) fn exponent_inner_product(s: &[BigUint], y: &[BigInt]) -> Result<BigInt, Error> {
    if s.len() != y.len() {
        return Err(Error::Dimension {
            expected: s.len(),
            got: y.len(),
        });
    }
    Ok(s.iter()
        .zip(y.iter())
        .fold(BigInt::zero(), |acc, (si, yi)| {
            acc + BigInt::from(si.clone()) * yi
        }))
}

/// Reduces a signed integer into `[0, modulus)`.
pub(crate) fn reduce_mod(v: &BigInt, modulus: &BigUint) -> BigUint {
    let m = BigInt::from(modulus.clone());
    v.mod_floor(&m)
        .to_biguint()
        .expect("mod_floor by a positive modulus is non-negative")
}

/// Construction precondition shared by both schemes: `2 * l * bound^2` must
/// not exceed the group order, otherwise inner products can wrap around
/// modulo q and become unrecoverable.
pub(crate) fn check_group_order(l: usize, bound: &BigInt, q: &BigUint) -> Result<(), Error> {
    let prod = BigInt::from(2u64 * l as u64) * (bound * bound);
    if prod > BigInt::from(q.clone()) {
        return Err(Error::Precondition);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::One;

    #[test]
    fn signed_exponent_matches_inverse() {
        let p = BigUint::from(2039u32);
        let g = BigUint::from(4u32);

        let pos = mod_exp_signed(&g, &BigInt::from(5), &p);
        let neg = mod_exp_signed(&g, &BigInt::from(-5), &p);

        assert_eq!((&pos * &neg) % &p, BigUint::one());
        assert_eq!(pos, g.modpow(&BigUint::from(5u32), &p));
    }

    #[test]
    fn zero_exponent_is_identity() {
        let p = BigUint::from(2039u32);
        let g = BigUint::from(4u32);
        assert_eq!(mod_exp_signed(&g, &BigInt::zero(), &p), BigUint::one());
    }

    #[test]
    fn bound_check_is_inclusive() {
        let bound = BigInt::from(10);
        let inside = [BigInt::from(10), BigInt::from(-10), BigInt::zero()];
        let outside = [BigInt::from(11)];
        let outside_neg = [BigInt::from(-11)];

        assert!(check_bound(&inside, &bound).is_ok());
        assert!(matches!(check_bound(&outside, &bound), Err(Error::Bound)));
        assert!(matches!(
            check_bound(&outside_neg, &bound),
            Err(Error::Bound)
        ));
    }

    #[test]
    fn inner_product_signed() {
        let x = [BigInt::from(-5), BigInt::from(3)];
        let y = [BigInt::from(2), BigInt::from(1)];
        assert_eq!(inner_product(&x, &y).unwrap(), BigInt::from(-7));
    }

    #[test]
    fn inner_product_rejects_mismatched_lengths() {
        let x = [BigInt::one()];
        let y = [BigInt::one(), BigInt::one()];
        assert!(matches!(
            inner_product(&x, &y),
            Err(Error::Dimension {
                expected: 1,
                got: 2
            })
        ));
    }

    #[test]
    fn group_order_precondition() {
        let q = BigUint::from(1019u32);
        // 2 * 3 * 10^2 = 600 <= 1019
        assert!(check_group_order(3, &BigInt::from(10), &q).is_ok());
        // 2 * 6 * 10^2 = 1200 > 1019
        assert!(matches!(
            check_group_order(6, &BigInt::from(10), &q),
            Err(Error::Precondition)
        ));
    }
}
