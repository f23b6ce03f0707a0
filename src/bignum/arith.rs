//! Sign-aware arithmetic over [`Bignum`].
//!
//! The `*_big` helpers return a raw [`Bignum`] so that multi-step callers can
//! chain them; the public methods route every result through
//! [`Bignum::demote`].

use core::cmp::Ordering;

use crate::algorithms;
use crate::big_digit::Limb;
use crate::error::ArithmeticError;
use crate::integer::Integer;
use crate::magnitude::{
    __add2, __sub2, add, cmp_slice, div_rem, mul, shifted_out_nonzero, shl, shr, sub,
};

use super::{Bignum, BignumBuilder};

/// `(-1)^a_neg * a + (-1)^b_neg * b`.
fn add_signed(a_neg: bool, a: &[Limb], b_neg: bool, b: &[Limb]) -> Bignum {
    if a_neg == b_neg {
        return Bignum::from_buf(a_neg, add(a, b));
    }

    // Signs differ: the larger magnitude wins the sign.
    match cmp_slice(a, b) {
        Ordering::Greater => Bignum::from_buf(a_neg, sub(a, b)),
        Ordering::Less => Bignum::from_buf(b_neg, sub(b, a)),
        Ordering::Equal => Bignum::zero(),
    }
}

/// `|b| += 1`, growing by one limb when the carry runs off the top.
fn increment_magnitude(b: &mut BignumBuilder) {
    let len = b.limbs_mut().len();
    if len == 0 || __add2(b.limbs_mut(), &[1]) != 0 {
        // Every limb wrapped to zero: the magnitude is now 2^(64 * len).
        b.grow_and_reinit(len + 1);
        b.limbs_mut()[len] = 1;
    }
}

/// `|b| -= 1` for a non-zero magnitude.
fn decrement_magnitude(b: &mut BignumBuilder) {
    let borrow = __sub2(b.limbs_mut(), &[1]);
    debug_assert!(borrow == 0);
}

impl Bignum {
    pub(crate) fn add_big(&self, other: &Bignum) -> Bignum {
        add_signed(
            self.is_negative(),
            &self.limbs,
            other.is_negative(),
            &other.limbs,
        )
    }

    pub(crate) fn sub_big(&self, other: &Bignum) -> Bignum {
        add_signed(
            self.is_negative(),
            &self.limbs,
            !other.is_negative(),
            &other.limbs,
        )
    }

    pub(crate) fn neg_big(&self) -> Bignum {
        let mut b = BignumBuilder::from_bignum(self);
        b.negate_in_place();
        b.finish()
    }

    pub(crate) fn abs_big(&self) -> Bignum {
        let mut b = BignumBuilder::from_bignum(self);
        b.abs_in_place();
        b.finish()
    }

    /// Step by one unit towards `+inf` (`up`) or `-inf`.
    pub(crate) fn step_big(&self, up: bool) -> Bignum {
        if self.is_zero() {
            return Bignum::from_limbs(!up, &[1]);
        }

        let mut b = BignumBuilder::from_bignum(self);
        if self.is_negative() != up {
            increment_magnitude(&mut b);
        } else {
            // Moving towards zero; a magnitude of one lands on zero and
            // `finish` drops the sign.
            decrement_magnitude(&mut b);
        }
        b.finish()
    }

    pub(crate) fn mul_big(&self, other: &Bignum) -> Bignum {
        if self.is_zero() || other.is_zero() {
            return Bignum::zero();
        }
        Bignum::from_buf(
            self.is_negative() != other.is_negative(),
            mul(&self.limbs, &other.limbs),
        )
    }

    /// Truncating division of two bignums.
    pub(crate) fn div_rem_big(&self, other: &Bignum) -> Result<(Bignum, Bignum), ArithmeticError> {
        if other.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }

        let (q, r) = div_rem(&self.limbs, &other.limbs);
        let q = Bignum::from_buf(self.is_negative() != other.is_negative(), q);
        let r = Bignum::from_buf(self.is_negative(), r);
        Ok((q, r))
    }

    pub(crate) fn div_floor_big(
        &self,
        other: &Bignum,
    ) -> Result<(Bignum, Bignum), ArithmeticError> {
        let (q, r) = self.div_rem_big(other)?;
        if !r.is_zero() && r.is_negative() != other.is_negative() {
            Ok((q.step_big(false), r.add_big(other)))
        } else {
            Ok((q, r))
        }
    }

    pub(crate) fn div_ceil_big(
        &self,
        other: &Bignum,
    ) -> Result<(Bignum, Bignum), ArithmeticError> {
        let (q, r) = self.div_rem_big(other)?;
        if !r.is_zero() && r.is_negative() == other.is_negative() {
            Ok((q.step_big(true), r.sub_big(other)))
        } else {
            Ok((q, r))
        }
    }

    pub(crate) fn gcd_big(&self, other: &Bignum) -> Bignum {
        Bignum::from_buf(false, algorithms::gcd(&self.limbs, &other.limbs))
    }

    pub(crate) fn lcm_big(&self, other: &Bignum) -> Bignum {
        if self.is_zero() || other.is_zero() {
            return Bignum::zero();
        }
        let g = algorithms::gcd(&self.limbs, &other.limbs);
        let (q, _) = div_rem(&self.limbs, &g);
        Bignum::from_buf(false, mul(&q, &other.limbs))
    }

    /// `self * 2^bits`, rounding towards `-inf` when `bits` is negative.
    pub(crate) fn ash_big(&self, bits: i64) -> Bignum {
        let negative = self.is_negative();
        let n = bits.unsigned_abs();

        if bits >= 0 {
            return Bignum::from_buf(negative, shl(&self.limbs, n));
        }

        let mut b = BignumBuilder::from_magnitude(negative, shr(&self.limbs, n));
        if negative && shifted_out_nonzero(&self.limbs, n) {
            increment_magnitude(&mut b);
        }
        b.finish()
    }

    /// Sum of two bignums.
    #[allow(clippy::should_implement_trait)]
    pub fn add(&self, other: &Bignum) -> Integer {
        self.add_big(other).demote()
    }

    /// Difference of two bignums.
    #[allow(clippy::should_implement_trait)]
    pub fn sub(&self, other: &Bignum) -> Integer {
        self.sub_big(other).demote()
    }

    /// Flip the sign. Zero stays zero.
    pub fn negate(&self) -> Integer {
        self.neg_big().demote()
    }

    /// Absolute value.
    pub fn abs(&self) -> Integer {
        self.abs_big().demote()
    }

    /// `self + 1`.
    pub fn one_plus(&self) -> Integer {
        self.step_big(true).demote()
    }

    /// `self - 1`.
    pub fn one_minus(&self) -> Integer {
        self.step_big(false).demote()
    }

    /// Product of two bignums. A zero operand short-circuits.
    pub fn multiply(&self, other: &Bignum) -> Integer {
        self.mul_big(other).demote()
    }

    /// Truncating division, returning `(quotient, remainder)`.
    ///
    /// The quotient is rounded towards zero, so its sign is the product of
    /// the operand signs, and the remainder takes the sign of `self`.
    ///
    /// # Errors
    ///
    /// [`ArithmeticError::DivisionByZero`] if `other` is zero.
    pub fn divide(&self, other: &Bignum) -> Result<(Integer, Integer), ArithmeticError> {
        let (q, r) = self.div_rem_big(other)?;
        Ok((q.demote(), r.demote()))
    }

    /// Division rounding the quotient towards `-inf`; the remainder takes
    /// the sign of `other`.
    pub fn floor_divide(&self, other: &Bignum) -> Result<(Integer, Integer), ArithmeticError> {
        let (q, r) = self.div_floor_big(other)?;
        Ok((q.demote(), r.demote()))
    }

    /// Division rounding the quotient towards `+inf`.
    pub fn ceiling_divide(&self, other: &Bignum) -> Result<(Integer, Integer), ArithmeticError> {
        let (q, r) = self.div_ceil_big(other)?;
        Ok((q.demote(), r.demote()))
    }

    /// Greatest common divisor, never negative. `gcd(a, 0) == |a|`.
    pub fn gcd(&self, other: &Bignum) -> Integer {
        self.gcd_big(other).demote()
    }

    /// Least common multiple, never negative. Zero if either operand is.
    pub fn lcm(&self, other: &Bignum) -> Integer {
        self.lcm_big(other).demote()
    }

    /// Total order on values: `Less` means `self < other`.
    pub fn compare(&self, other: &Bignum) -> Ordering {
        match (self.is_negative(), other.is_negative()) {
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
            (false, false) => cmp_slice(&self.limbs, &other.limbs),
            (true, true) => cmp_slice(&other.limbs, &self.limbs),
        }
    }

    /// Arithmetic shift: `self * 2^bits` for positive `bits`, `floor(self /
    /// 2^-bits)` otherwise. Negative values shift towards `-inf`, so `-1`
    /// shifted right stays `-1`.
    pub fn shift_arith(&self, bits: i64) -> Integer {
        self.ash_big(bits).demote()
    }
}

impl PartialOrd for Bignum {
    #[inline]
    fn partial_cmp(&self, other: &Bignum) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Bignum {
    #[inline]
    fn cmp(&self, other: &Bignum) -> Ordering {
        self.compare(other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(n: i128) -> Bignum {
        Bignum::from(n)
    }

    #[test]
    fn test_add_signs() {
        assert_eq!(big(5).add_big(&big(-7)), big(-2));
        assert_eq!(big(-5).add_big(&big(7)), big(2));
        assert_eq!(big(-5).add_big(&big(5)), Bignum::zero());
        assert_eq!(big(-5).sub_big(&big(5)), big(-10));

        let max = Bignum::from(u64::MAX);
        assert_eq!(max.add_big(&big(1)).magnitude(), &[0, 1]);
    }

    #[test]
    fn test_negate_and_abs_keep_canonical_count() {
        let b = Bignum::from_limbs(false, &[3, 0, 7]);
        let n = b.neg_big();
        assert_eq!(n.count(), -3);
        assert_eq!(n.magnitude(), b.magnitude());
        assert_eq!(n.neg_big(), b);
        assert_eq!(n.abs_big(), b);
        assert_eq!(Bignum::zero().neg_big().count(), 0);
        assert!(!Bignum::zero().neg_big().is_negative());
    }

    #[test]
    fn test_step_carries_and_collapses() {
        let all_ones = Bignum::from_limbs(false, &[Limb::MAX, Limb::MAX]);
        assert_eq!(all_ones.step_big(true).magnitude(), &[0, 0, 1]);

        let neg = Bignum::from_limbs(true, &[Limb::MAX, Limb::MAX]);
        let stepped = neg.step_big(false);
        assert_eq!(stepped.count(), -3);

        let borrow = Bignum::from_limbs(false, &[0, 0, 1]);
        assert_eq!(borrow.step_big(false).magnitude(), &[Limb::MAX, Limb::MAX]);

        assert_eq!(big(-1).step_big(true), Bignum::zero());
        assert_eq!(big(1).step_big(false), Bignum::zero());
        assert_eq!(big(-1).step_big(false), big(-2));
        assert_eq!(Bignum::zero().step_big(false), big(-1));
    }

    #[test]
    fn test_div_rem_signs() {
        for &(n, d) in &[(7, 2), (-7, 2), (7, -2), (-7, -2), (6, 3), (-6, 3)] {
            let (q, r) = big(n).div_rem_big(&big(d)).unwrap();
            assert_eq!((q, r), (big(n / d), big(n % d)), "{} / {}", n, d);
        }
        assert_eq!(
            big(1).div_rem_big(&Bignum::zero()),
            Err(ArithmeticError::DivisionByZero)
        );
    }

    #[test]
    fn test_floor_and_ceiling() {
        let cases: &[(i128, i128, i128, i128, i128, i128)] = &[
            // n, d, floor q, floor r, ceil q, ceil r
            (7, 2, 3, 1, 4, -1),
            (-7, 2, -4, 1, -3, -1),
            (7, -2, -4, -1, -3, 1),
            (-7, -2, 3, -1, 4, 1),
            (6, 3, 2, 0, 2, 0),
        ];
        for &(n, d, fq, fr, cq, cr) in cases {
            assert_eq!(
                big(n).div_floor_big(&big(d)).unwrap(),
                (big(fq), big(fr)),
                "floor {} / {}",
                n,
                d
            );
            assert_eq!(
                big(n).div_ceil_big(&big(d)).unwrap(),
                (big(cq), big(cr)),
                "ceiling {} / {}",
                n,
                d
            );
        }
    }

    #[test]
    fn test_ash_floor_semantics() {
        assert_eq!(big(-1).ash_big(-1), big(-1));
        assert_eq!(big(-1).ash_big(-1000), big(-1));
        assert_eq!(big(-4).ash_big(-1), big(-2));
        assert_eq!(big(-5).ash_big(-1), big(-3));
        assert_eq!(big(5).ash_big(-1), big(2));
        assert_eq!(big(3).ash_big(64).magnitude(), &[0, 3]);
        assert_eq!(big(1).ash_big(-1), Bignum::zero());

        // -(2^128 - 1) >> 64 rounds away from zero to -2^64
        let x = Bignum::from_limbs(true, &[Limb::MAX, Limb::MAX]);
        assert_eq!(x.ash_big(-64), Bignum::from_limbs(true, &[0, 1]));
    }

    #[test]
    fn test_compare() {
        assert_eq!(big(-5).compare(&big(3)), Ordering::Less);
        assert_eq!(big(3).compare(&big(-5)), Ordering::Greater);
        assert_eq!(big(-5).compare(&big(-3)), Ordering::Less);
        assert_eq!(big(0).compare(&big(-3)), Ordering::Greater);
        assert_eq!(big(0).compare(&big(0)), Ordering::Equal);
        assert!(Bignum::from_limbs(false, &[0, 1]) > big(i128::from(u64::MAX)));
    }

    #[test]
    fn test_gcd_lcm() {
        assert_eq!(big(-270).gcd_big(&big(192)), big(6));
        assert_eq!(big(0).gcd_big(&big(-9)), big(9));
        assert_eq!(big(-4).lcm_big(&big(6)), big(12));
        assert_eq!(big(0).lcm_big(&big(6)), Bignum::zero());
    }

    #[test]
    fn test_multiply_zero_short_circuit() {
        let x = Bignum::from_limbs(true, &[1, 2, 3]);
        assert_eq!(x.mul_big(&Bignum::zero()), Bignum::zero());
        assert_eq!(x.multiply(&Bignum::zero()).as_fixnum(), Some(0));
        assert_eq!(big(-3).mul_big(&big(4)), big(-12));
    }
}
