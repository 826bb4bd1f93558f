use num_bigint_dig::BigUint;
use rand::{CryptoRng, RngCore};

use crate::error::Error;

/// Draws an integer uniformly from `[min, max)` by rejection sampling.
///
/// Candidates of `ceil(log2(max - min))` bits are drawn from the random
/// source and rejected until one falls below the interval width, so the
/// expected number of draws is below two. A failing random source surfaces
/// as [`Error::Sampling`]; the sampler never retries a failed draw.
pub fn uniform_range<R: RngCore + CryptoRng>(
    min: &BigUint,
    max: &BigUint,
    rng: &mut R,
) -> Result<BigUint, Error> {
    debug_assert!(min < max, "empty sampling interval");
    let width = max - min;
    let bits = width.bits();
    let bytes = (bits + 7) / 8;
    // Mask the most significant byte down to the top bit of the width.
    let mask = if bits % 8 == 0 {
        0xffu8
    } else {
        (1u8 << (bits % 8)) - 1
    };

    let mut buf = vec![0u8; bytes];
    loop {
        rng.try_fill_bytes(&mut buf)?;
        buf[0] &= mask;
        let candidate = BigUint::from_bytes_be(&buf);
        if candidate < width {
            return Ok(min + candidate);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn samples_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        let min = BigUint::from(2u32);
        let max = BigUint::from(1019u32);

        for _ in 0..1000 {
            let s = uniform_range(&min, &max, &mut rng).unwrap();
            assert!(s >= min && s < max);
        }
    }

    #[test]
    fn narrow_interval() {
        let mut rng = StdRng::seed_from_u64(7);
        let min = BigUint::from(5u32);
        let max = BigUint::from(6u32);

        for _ in 0..10 {
            assert_eq!(uniform_range(&min, &max, &mut rng).unwrap(), min);
        }
    }

    #[test]
    fn covers_the_interval() {
        let mut rng = StdRng::seed_from_u64(1);
        let min = BigUint::from(0u32);
        let max = BigUint::from(8u32);
        let mut seen = [false; 8];

        for _ in 0..200 {
            let s = uniform_range(&min, &max, &mut rng).unwrap();
            let digits = s.to_bytes_be();
            seen[digits[digits.len() - 1] as usize] = true;
        }
        assert!(seen.iter().all(|&b| b), "sampler missed a value in [0,8)");
    }
}
