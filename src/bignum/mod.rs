//! The sign-magnitude [`Bignum`] value type.

use crate::big_digit::Limb;
use crate::fixnum::{Fixnum, MOST_NEGATIVE_FIXNUM, MOST_POSITIVE_FIXNUM};
use crate::integer::Integer;
use crate::magnitude::{self, LimbBuf};

mod arith;
pub(crate) mod builder;
mod convert;

#[cfg(feature = "zeroize")]
mod zeroize;

pub(crate) use self::builder::BignumBuilder;

/// An arbitrary-precision signed integer.
///
/// The value is stored as a magnitude of little-endian [`Limb`]s plus a
/// signed limb count: the sign of `count` is the sign of the value and
/// `|count|` is the number of limbs. Values are always canonical, so zero has
/// `count == 0` and a non-zero value never carries a high zero limb. Two
/// `Bignum`s are therefore equal exactly when their representations are.
///
/// Arithmetic on `Bignum` hands back an [`Integer`], demoted to a
/// [`Fixnum`] whenever the result fits one.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Default)]
pub struct Bignum {
    limbs: LimbBuf,
    count: isize,
}

impl Bignum {
    /// The canonical zero: no limbs, `count == 0`.
    #[inline]
    pub fn zero() -> Bignum {
        BignumBuilder::from_magnitude(false, LimbBuf::new()).finish()
    }

    /// Build a value from a sign and a little-endian magnitude. High zero
    /// limbs are dropped and a zero magnitude is never negative.
    pub fn from_limbs(negative: bool, limbs: &[Limb]) -> Bignum {
        BignumBuilder::from_magnitude(negative, LimbBuf::from_slice(limbs)).finish()
    }

    #[inline]
    pub(crate) fn from_buf(negative: bool, limbs: LimbBuf) -> Bignum {
        BignumBuilder::from_magnitude(negative, limbs).finish()
    }

    /// The magnitude, least significant limb first.
    #[inline]
    pub fn magnitude(&self) -> &[Limb] {
        &self.limbs
    }

    /// The signed limb count.
    #[inline]
    pub fn count(&self) -> isize {
        self.count
    }

    /// Number of limbs in the magnitude, `|count|`.
    #[inline]
    pub fn len(&self) -> usize {
        self.count.unsigned_abs()
    }

    /// Whether the value is zero, i.e. has no limbs.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.count == 0
    }

    /// Whether the value is below zero.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.count < 0
    }

    /// Whether the value is above zero.
    #[inline]
    pub fn is_positive(&self) -> bool {
        self.count > 0
    }

    /// `-1`, `0` or `1` according to the sign.
    #[inline]
    pub fn signum(&self) -> i32 {
        self.count.signum() as i32
    }

    /// Number of significant bits of the magnitude.
    #[inline]
    pub fn bits(&self) -> u64 {
        magnitude::bits(&self.limbs)
    }

    /// Whether the value is even. Zero is even.
    #[inline]
    pub fn is_even(&self) -> bool {
        self.limbs.first().is_none_or(|&low| low & 1 == 0)
    }

    /// Whether the value is odd.
    #[inline]
    pub fn is_odd(&self) -> bool {
        !self.is_even()
    }

    /// The value as a fixnum, if it lies in the fixnum range.
    ///
    /// The negative side allows one extra unit of magnitude, so `-2^61`
    /// qualifies while `2^61` does not.
    pub fn to_fixnum(&self) -> Option<Fixnum> {
        match self.limbs[..] {
            [] => Some(Fixnum::ZERO),
            [limb] if self.is_negative() => {
                if limb <= MOST_NEGATIVE_FIXNUM.unsigned_abs() {
                    Fixnum::new((limb as i64).wrapping_neg())
                } else {
                    None
                }
            }
            [limb] => {
                if limb <= MOST_POSITIVE_FIXNUM as Limb {
                    Fixnum::new(limb as i64)
                } else {
                    None
                }
            }
            _ => None,
        }
    }

    /// Return a [`Fixnum`] when the value fits one, else `self` unchanged.
    pub fn demote(self) -> Integer {
        match self.to_fixnum() {
            Some(n) => Integer::Fixnum(n),
            None => Integer::Bignum(self),
        }
    }
}
