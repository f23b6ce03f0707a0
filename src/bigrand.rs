//! Randomization of big integers
#![cfg(feature = "rand")]
#![cfg_attr(docsrs, doc(cfg(feature = "rand")))]

use rand::prelude::*;

use crate::Bignum;
use crate::Integer;
use crate::magnitude::{LimbBuf, cmp_slice, limb_buffer, normalize};

use num_integer::Integer as _;

/// A trait for sampling random big integers.
///
/// The `rand` feature must be enabled to use this. See crate-level documentation for details.
pub trait RandBignum {
    /// Generate a random [`Bignum`] of the given bit size, with a random sign.
    fn gen_bignum(&mut self, bit_size: u64) -> Bignum;

    /// Generate a random [`Integer`] of the given bit size, demoted when
    /// it fits a fixnum.
    fn gen_integer(&mut self, bit_size: u64) -> Integer;

    /// Generate a random non-negative [`Bignum`] less than the given bound.
    /// Fails when the bound is not positive.
    fn gen_bignum_below(&mut self, bound: &Bignum) -> Bignum;

    /// Generate a random [`Integer`] within the given range. The lower
    /// bound is inclusive; the upper bound is exclusive. Fails when
    /// the upper bound is not greater than the lower bound.
    fn gen_integer_range(&mut self, lbound: &Integer, ubound: &Integer) -> Integer;
}

fn gen_limbs<R: Rng + ?Sized>(rng: &mut R, bit_size: u64) -> LimbBuf {
    let (limbs, rem) = bit_size.div_rem(&64);
    let len = (limbs + u64::from(rem > 0)) as usize;

    let mut data = limb_buffer(len);
    rng.fill(&mut data[..]);
    if rem > 0 {
        data[len - 1] >>= 64 - rem;
    }
    normalize(&mut data);
    data
}

impl<R: Rng + ?Sized> RandBignum for R {
    fn gen_bignum(&mut self, bit_size: u64) -> Bignum {
        loop {
            let mag = gen_limbs(self, bit_size);
            // Zero has only one sign, so redraw half of them.
            if mag.is_empty() && self.random() {
                continue;
            }
            return Bignum::from_buf(self.random(), mag);
        }
    }

    fn gen_integer(&mut self, bit_size: u64) -> Integer {
        self.gen_bignum(bit_size).demote()
    }

    fn gen_bignum_below(&mut self, bound: &Bignum) -> Bignum {
        assert!(bound.is_positive());
        let bits = bound.bits();
        loop {
            let mag = gen_limbs(self, bits);
            if cmp_slice(&mag, bound.magnitude()).is_lt() {
                return Bignum::from_buf(false, mag);
            }
        }
    }

    fn gen_integer_range(&mut self, lbound: &Integer, ubound: &Integer) -> Integer {
        assert!(*lbound < *ubound);
        let delta = ubound - lbound;
        let offset = self.gen_bignum_below(&delta.promote());
        lbound + &Integer::from(offset)
    }
}

/// A random distribution for [`Bignum`] and [`Integer`] values of a particular bit size.
///
/// The `rand` feature must be enabled to use this. See crate-level documentation for details.
#[derive(Clone, Copy, Debug)]
pub struct RandomBits {
    bits: u64,
}

impl RandomBits {
    /// A distribution over values of at most `bits` significant bits.
    #[inline]
    pub fn new(bits: u64) -> RandomBits {
        RandomBits { bits }
    }
}

impl Distribution<Bignum> for RandomBits {
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Bignum {
        rng.gen_bignum(self.bits)
    }
}

impl Distribution<Integer> for RandomBits {
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Integer {
        rng.gen_integer(self.bits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand_xorshift::XorShiftRng;

    #[test]
    fn test_gen_bignum_respects_bit_size() {
        let mut rng = XorShiftRng::from_seed([1u8; 16]);
        for bits in [1u64, 63, 64, 65, 200] {
            for _ in 0..50 {
                let b = rng.gen_bignum(bits);
                assert!(b.bits() <= bits);
            }
        }
        assert!(rng.gen_bignum(0).is_zero());
    }

    #[test]
    fn test_gen_integer_is_canonical() {
        let mut rng = XorShiftRng::from_seed([2u8; 16]);
        for _ in 0..100 {
            let n = rng.gen_integer(40);
            assert!(n.is_fixnum());
            let n = rng.gen_integer(300);
            assert_eq!(n.clone().canonicalize().is_fixnum(), n.is_fixnum());
        }
    }

    #[test]
    fn test_gen_range() {
        let mut rng = XorShiftRng::from_seed([3u8; 16]);
        let lo: Integer = "-100000000000000000000000".parse().unwrap();
        let hi: Integer = "100000000000000000000000".parse().unwrap();
        for _ in 0..200 {
            let n = rng.gen_integer_range(&lo, &hi);
            assert!(lo <= n && n < hi);
        }

        let bound = Bignum::from(10);
        for _ in 0..100 {
            let n = rng.gen_bignum_below(&bound);
            assert!(!n.is_negative() && n < bound);
        }
    }

    #[test]
    fn test_random_bits_distribution() {
        let mut rng = XorShiftRng::from_seed([4u8; 16]);
        let dist = RandomBits::new(128);
        let n: Integer = rng.sample(dist);
        assert!(n.integer_length() <= 128);
        let b: Bignum = rng.sample(dist);
        assert!(b.bits() <= 128);
    }
}
