//! The closed union of [`Fixnum`] and [`Bignum`].

use alloc::borrow::Cow;
use alloc::string::String;
use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::str::FromStr;

use crate::algorithms::gcd_limb;
use crate::bignum::Bignum;
use crate::error::{ArithmeticError, ParseBignumError, TryFromBignumError};
use crate::fixnum::Fixnum;

mod num;
mod ops;

/// An integer of any size: a [`Fixnum`] when the value fits one, a
/// [`Bignum`] otherwise.
///
/// Every operation in this crate returns the canonical variant. A
/// hand-built `Integer::Bignum` holding a small value still compares, hashes
/// and prints like the equivalent fixnum.
#[derive(Clone, Debug)]
pub enum Integer {
    /// The small-integer fast path.
    Fixnum(Fixnum),
    /// Anything outside the fixnum range.
    Bignum(Bignum),
}

impl Default for Integer {
    #[inline]
    fn default() -> Integer {
        Integer::Fixnum(Fixnum::ZERO)
    }
}

impl Integer {
    /// Canonical integer for a native value.
    pub(crate) fn from_i128(n: i128) -> Integer {
        match i64::try_from(n).ok().and_then(Fixnum::new) {
            Some(f) => Integer::Fixnum(f),
            None => Integer::Bignum(Bignum::from(n)),
        }
    }

    /// Promote to a bignum, borrowing when the value already is one.
    pub(crate) fn promote(&self) -> Cow<'_, Bignum> {
        match self {
            Integer::Fixnum(n) => Cow::Owned(Bignum::from(n.get())),
            Integer::Bignum(b) => Cow::Borrowed(b),
        }
    }

    /// Convert into a [`Bignum`], whatever the variant.
    pub fn into_bignum(self) -> Bignum {
        match self {
            Integer::Fixnum(n) => Bignum::from(n.get()),
            Integer::Bignum(b) => b,
        }
    }

    /// Whether this is the fixnum variant.
    #[inline]
    pub fn is_fixnum(&self) -> bool {
        matches!(self, Integer::Fixnum(_))
    }

    /// Whether this is the bignum variant.
    #[inline]
    pub fn is_bignum(&self) -> bool {
        matches!(self, Integer::Bignum(_))
    }

    /// The native value of a fixnum, `None` for the bignum variant.
    #[inline]
    pub fn as_fixnum(&self) -> Option<i64> {
        match self {
            Integer::Fixnum(n) => Some(n.get()),
            Integer::Bignum(_) => None,
        }
    }

    /// The bignum variant, if that is what this is.
    #[inline]
    pub fn as_bignum(&self) -> Option<&Bignum> {
        match self {
            Integer::Fixnum(_) => None,
            Integer::Bignum(b) => Some(b),
        }
    }

    /// Demote a bignum variant that fits a fixnum.
    pub fn canonicalize(self) -> Integer {
        match self {
            Integer::Bignum(b) => b.demote(),
            fixnum => fixnum,
        }
    }

    /// Whether the value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        match self {
            Integer::Fixnum(n) => n.get() == 0,
            Integer::Bignum(b) => b.is_zero(),
        }
    }

    /// Whether the value is below zero.
    #[inline]
    pub fn is_negative(&self) -> bool {
        match self {
            Integer::Fixnum(n) => n.get() < 0,
            Integer::Bignum(b) => b.is_negative(),
        }
    }

    /// Whether the value is above zero.
    #[inline]
    pub fn is_positive(&self) -> bool {
        match self {
            Integer::Fixnum(n) => n.get() > 0,
            Integer::Bignum(b) => b.is_positive(),
        }
    }

    /// Whether the value is even. Zero is even.
    pub fn is_even(&self) -> bool {
        match self {
            Integer::Fixnum(n) => n.get() & 1 == 0,
            Integer::Bignum(b) => b.is_even(),
        }
    }

    /// Whether the value is odd.
    #[inline]
    pub fn is_odd(&self) -> bool {
        !self.is_even()
    }

    /// `-self`.
    pub fn negate(&self) -> Integer {
        match self {
            Integer::Fixnum(n) => Integer::from_i128(-i128::from(n.get())),
            Integer::Bignum(b) => b.negate(),
        }
    }

    /// `|self|`.
    pub fn abs(&self) -> Integer {
        match self {
            Integer::Fixnum(n) => Integer::from_i128(i128::from(n.get()).abs()),
            Integer::Bignum(b) => b.abs(),
        }
    }

    /// `-1`, `0` or `1`.
    pub fn signum(&self) -> Integer {
        let s = match self {
            Integer::Fixnum(n) => n.get().signum(),
            Integer::Bignum(b) => i64::from(b.signum()),
        };
        Integer::from(s)
    }

    /// `self + 1`.
    pub fn one_plus(&self) -> Integer {
        match self {
            Integer::Fixnum(n) => Integer::from_i128(i128::from(n.get()) + 1),
            Integer::Bignum(b) => b.one_plus(),
        }
    }

    /// `self - 1`.
    pub fn one_minus(&self) -> Integer {
        match self {
            Integer::Fixnum(n) => Integer::from_i128(i128::from(n.get()) - 1),
            Integer::Bignum(b) => b.one_minus(),
        }
    }

    pub(crate) fn add_ref(&self, other: &Integer) -> Integer {
        match (self, other) {
            (Integer::Fixnum(a), Integer::Fixnum(b)) => {
                Integer::from_i128(i128::from(a.get()) + i128::from(b.get()))
            }
            _ => self.promote().add(&other.promote()),
        }
    }

    pub(crate) fn sub_ref(&self, other: &Integer) -> Integer {
        match (self, other) {
            (Integer::Fixnum(a), Integer::Fixnum(b)) => {
                Integer::from_i128(i128::from(a.get()) - i128::from(b.get()))
            }
            _ => self.promote().sub(&other.promote()),
        }
    }

    /// Product. A zero operand short-circuits to zero.
    pub fn multiply(&self, other: &Integer) -> Integer {
        match (self, other) {
            (Integer::Fixnum(a), Integer::Fixnum(b)) => {
                Integer::from_i128(i128::from(a.get()) * i128::from(b.get()))
            }
            _ if self.is_zero() || other.is_zero() => Integer::default(),
            _ => self.promote().multiply(&other.promote()),
        }
    }

    /// Truncating division: `(quotient, remainder)` with the quotient
    /// rounded towards zero and the remainder signed like `self`.
    ///
    /// # Errors
    ///
    /// [`ArithmeticError::DivisionByZero`] if `other` is zero.
    pub fn divide(&self, other: &Integer) -> Result<(Integer, Integer), ArithmeticError> {
        match (self, other) {
            _ if other.is_zero() => Err(ArithmeticError::DivisionByZero),
            (Integer::Fixnum(a), Integer::Fixnum(b)) => {
                let (a, b) = (i128::from(a.get()), i128::from(b.get()));
                Ok((Integer::from_i128(a / b), Integer::from_i128(a % b)))
            }
            _ => self.promote().divide(&other.promote()),
        }
    }

    /// Division with the quotient rounded towards `-inf`; the remainder
    /// takes the sign of `other`.
    pub fn floor_divide(&self, other: &Integer) -> Result<(Integer, Integer), ArithmeticError> {
        match (self, other) {
            _ if other.is_zero() => Err(ArithmeticError::DivisionByZero),
            (Integer::Fixnum(a), Integer::Fixnum(b)) => {
                let (a, b) = (i128::from(a.get()), i128::from(b.get()));
                let (q, r) = num_integer::Integer::div_mod_floor(&a, &b);
                Ok((Integer::from_i128(q), Integer::from_i128(r)))
            }
            _ => self.promote().floor_divide(&other.promote()),
        }
    }

    /// Division with the quotient rounded towards `+inf`.
    pub fn ceiling_divide(&self, other: &Integer) -> Result<(Integer, Integer), ArithmeticError> {
        match (self, other) {
            _ if other.is_zero() => Err(ArithmeticError::DivisionByZero),
            (Integer::Fixnum(a), Integer::Fixnum(b)) => {
                let (a, b) = (i128::from(a.get()), i128::from(b.get()));
                let q = num_integer::Integer::div_ceil(&a, &b);
                Ok((Integer::from_i128(q), Integer::from_i128(a - q * b)))
            }
            _ => self.promote().ceiling_divide(&other.promote()),
        }
    }

    /// Greatest common divisor, never negative.
    pub fn gcd(&self, other: &Integer) -> Integer {
        match (self, other) {
            (Integer::Fixnum(a), Integer::Fixnum(b)) => {
                let g = gcd_limb(a.get().unsigned_abs(), b.get().unsigned_abs());
                Integer::from_i128(i128::from(g))
            }
            _ => self.promote().gcd(&other.promote()),
        }
    }

    /// Least common multiple, never negative.
    pub fn lcm(&self, other: &Integer) -> Integer {
        match (self, other) {
            (Integer::Fixnum(a), Integer::Fixnum(b)) => {
                let (a, b) = (i128::from(a.get()), i128::from(b.get()));
                Integer::from_i128(num_integer::Integer::lcm(&a, &b))
            }
            _ => self.promote().lcm(&other.promote()),
        }
    }

    /// Total order on values: `Less` means `self < other`.
    pub fn compare(&self, other: &Integer) -> Ordering {
        match (self, other) {
            (Integer::Fixnum(a), Integer::Fixnum(b)) => a.cmp(b),
            _ => self.promote().compare(&other.promote()),
        }
    }

    /// `self * 2^bits`; negative `bits` shift right rounding towards `-inf`.
    pub fn shift_arith(&self, bits: i64) -> Integer {
        match self {
            Integer::Fixnum(n) if bits <= 0 => {
                let shift = bits.unsigned_abs().min(63) as u32;
                Integer::from_i128(i128::from(n.get() >> shift))
            }
            Integer::Fixnum(n) if bits <= 64 => {
                Integer::from_i128(i128::from(n.get()) << bits)
            }
            _ => self.promote().shift_arith(bits),
        }
    }

    /// Bits needed for the two's-complement value, sign bit excluded.
    ///
    /// `integer_length(-1) == 0` and `integer_length(-2^k) == k`.
    pub fn integer_length(&self) -> u64 {
        match self {
            Integer::Fixnum(n) => {
                let n = n.get();
                let n = if n < 0 { !n } else { n };
                u64::from(i64::BITS - n.leading_zeros())
            }
            Integer::Bignum(b) if b.is_negative() => b.abs_big().step_big(false).bits(),
            Integer::Bignum(b) => b.bits(),
        }
    }

    /// Bit `index` of the two's-complement value.
    #[inline]
    pub fn logbitp(&self, index: u64) -> bool {
        crate::boole::logbitp(index, self)
    }

    /// Parse a numeral in `radix`, see [`Bignum::from_str_radix`].
    pub fn from_str_radix(s: &str, radix: u32) -> Result<Integer, ParseBignumError> {
        Bignum::from_str_radix(s, radix).map(Bignum::demote)
    }

    /// Render in `radix`, letters upper case.
    pub fn to_str_radix(&self, radix: u32) -> String {
        self.promote().to_str_radix(radix)
    }

    /// Convert to `f64`, losing precision beyond 53 bits.
    pub fn to_f64(&self) -> f64 {
        match self {
            Integer::Fixnum(n) => n.get() as f64,
            Integer::Bignum(b) => b.to_f64(),
        }
    }

    /// Convert to `f32`.
    pub fn to_f32(&self) -> f32 {
        match self {
            Integer::Fixnum(n) => n.get() as f32,
            Integer::Bignum(b) => b.to_f32(),
        }
    }

    /// Truncate a finite float towards zero. `None` for NaN and infinities.
    pub fn from_f64(x: f64) -> Option<Integer> {
        Bignum::from_f64(x).map(Bignum::demote)
    }
}

impl PartialEq for Integer {
    #[inline]
    fn eq(&self, other: &Integer) -> bool {
        self.compare(other) == Ordering::Equal
    }
}

impl Eq for Integer {}

impl PartialOrd for Integer {
    #[inline]
    fn partial_cmp(&self, other: &Integer) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Integer {
    #[inline]
    fn cmp(&self, other: &Integer) -> Ordering {
        self.compare(other)
    }
}

impl Hash for Integer {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let fixnum = match self {
            Integer::Fixnum(n) => Some(*n),
            Integer::Bignum(b) => b.to_fixnum(),
        };
        match fixnum {
            Some(n) => n.hash(state),
            None => self.promote().hash(state),
        }
    }
}

impl From<Fixnum> for Integer {
    #[inline]
    fn from(n: Fixnum) -> Integer {
        Integer::Fixnum(n)
    }
}

impl From<Bignum> for Integer {
    #[inline]
    fn from(b: Bignum) -> Integer {
        b.demote()
    }
}

impl From<Integer> for Bignum {
    #[inline]
    fn from(n: Integer) -> Bignum {
        n.into_bignum()
    }
}

macro_rules! impl_integer_from {
    ($($T:ty),*) => {$(
        impl From<$T> for Integer {
            #[inline]
            fn from(n: $T) -> Integer {
                Integer::from_i128(n as i128)
            }
        }
    )*};
}

impl_integer_from!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, usize);

impl From<u128> for Integer {
    #[inline]
    fn from(n: u128) -> Integer {
        match i128::try_from(n) {
            Ok(n) => Integer::from_i128(n),
            Err(_) => Integer::Bignum(Bignum::from(n)),
        }
    }
}

macro_rules! impl_try_from_integer {
    ($($T:ty),*) => {$(
        impl TryFrom<&Integer> for $T {
            type Error = TryFromBignumError;

            fn try_from(n: &Integer) -> Result<$T, TryFromBignumError> {
                match n {
                    Integer::Fixnum(f) => <$T>::try_from(f.get()).map_err(|_| {
                        TryFromBignumError::new(
                            stringify!($T),
                            <$T>::MIN as i128,
                            <$T>::MAX as u128,
                        )
                    }),
                    Integer::Bignum(b) => <$T>::try_from(b),
                }
            }
        }

        impl TryFrom<Integer> for $T {
            type Error = TryFromBignumError;

            #[inline]
            fn try_from(n: Integer) -> Result<$T, TryFromBignumError> {
                <$T>::try_from(&n)
            }
        }
    )*};
}

impl_try_from_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl FromStr for Integer {
    type Err = ParseBignumError;

    #[inline]
    fn from_str(s: &str) -> Result<Integer, ParseBignumError> {
        Integer::from_str_radix(s, 10)
    }
}

impl fmt::Display for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Integer::Fixnum(n) => fmt::Display::fmt(n, f),
            Integer::Bignum(b) => fmt::Display::fmt(b, f),
        }
    }
}

macro_rules! impl_radix_fmt {
    ($($Trait:ident),*) => {$(
        impl fmt::$Trait for Integer {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::$Trait::fmt(&*self.promote(), f)
            }
        }
    )*};
}

impl_radix_fmt!(LowerHex, UpperHex, Binary, Octal);
