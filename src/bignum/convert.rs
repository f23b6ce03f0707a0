use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use num_traits::float::FloatCore;

use crate::big_digit::{Limb, from_double_limb, to_double_limb};
use crate::error::{ParseBignumError, TryFromBignumError};
use crate::magnitude::radix::{digit_char, digit_value, from_radix_digits_be, to_radix_digits_le};
use crate::magnitude::{shifted_out_nonzero, shl, shr};

use super::Bignum;

impl Bignum {
    fn from_u128_parts(negative: bool, mag: u128) -> Bignum {
        let (hi, lo) = from_double_limb(mag);
        Bignum::from_limbs(negative, &[lo, hi])
    }

    /// The magnitude as a `u128`, if it has at most two limbs.
    fn magnitude_u128(&self) -> Option<u128> {
        match self.limbs[..] {
            [] => Some(0),
            [lo] => Some(u128::from(lo)),
            [lo, hi] => Some(to_double_limb(hi, lo)),
            _ => None,
        }
    }

    /// Parse a numeral in `radix`: an optional leading `-`, then one or more
    /// digits `0-9` and letters `a-z` in either case.
    ///
    /// # Errors
    ///
    /// Fails if `radix` is outside `2..=36`, if the digit run is empty or if a
    /// character is not a digit of `radix`. The reported position is a byte
    /// offset into `s`.
    pub fn from_str_radix(s: &str, radix: u32) -> Result<Bignum, ParseBignumError> {
        if !(2..=36).contains(&radix) {
            return Err(ParseBignumError::invalid_radix(radix));
        }

        let (negative, body, offset) = match s.strip_prefix('-') {
            Some(rest) => (true, rest, 1),
            None => (false, s, 0),
        };
        if body.is_empty() {
            return Err(ParseBignumError::empty());
        }

        let mut digits = Vec::with_capacity(body.len());
        for (i, c) in body.char_indices() {
            match u8::try_from(c).ok().and_then(|b| digit_value(b, radix)) {
                Some(d) => digits.push(d),
                None => return Err(ParseBignumError::invalid_digit(offset + i, c)),
            }
        }

        Ok(Bignum::from_buf(negative, from_radix_digits_be(&digits, radix)))
    }

    /// Render in `radix`, letters upper case. Zero is `"0"`.
    ///
    /// # Panics
    ///
    /// Panics if `radix` is outside `2..=36`.
    pub fn to_str_radix(&self, radix: u32) -> String {
        assert!(
            (2..=36).contains(&radix),
            "radix must be in the range 2..=36"
        );

        let digits = self.magnitude_str(radix);
        let mut s = String::with_capacity(digits.len() + 1);
        if self.is_negative() {
            s.push('-');
        }
        s.push_str(&digits);
        s
    }

    fn magnitude_str(&self, radix: u32) -> String {
        to_radix_digits_le(&self.limbs, radix)
            .into_iter()
            .rev()
            .map(|d| char::from(digit_char(d)))
            .collect()
    }

    /// The top 64 significant bits of the magnitude and the power of two
    /// that scales them back. The low bit is forced on when any discarded
    /// bit is set, so a single float conversion rounds correctly.
    fn float_parts(&self) -> (u64, i32) {
        let bits = self.bits();
        if bits <= 64 {
            return (self.limbs.first().copied().unwrap_or(0), 0);
        }
        let shift = bits - 64;
        let top = shr(&self.limbs, shift)[0];
        let sticky = u64::from(shifted_out_nonzero(&self.limbs, shift));
        (top | sticky, i32::try_from(shift).unwrap_or(i32::MAX))
    }

    /// Convert to the nearest `f64`, ties to even. Values beyond `f64::MAX`
    /// become infinite.
    pub fn to_f64(&self) -> f64 {
        let (top, shift) = self.float_parts();
        let mag = top as f64 * FloatCore::powi(2.0f64, shift);
        if self.is_negative() { -mag } else { mag }
    }

    /// Convert to the nearest `f32`, see [`Bignum::to_f64`].
    pub fn to_f32(&self) -> f32 {
        let (top, shift) = self.float_parts();
        let mag = top as f32 * FloatCore::powi(2.0f32, shift);
        if self.is_negative() { -mag } else { mag }
    }

    /// Truncate a finite float towards zero. `None` for NaN and infinities.
    pub fn from_f64(x: f64) -> Option<Bignum> {
        if !x.is_finite() {
            return None;
        }

        let bits = x.to_bits();
        let negative = bits >> 63 != 0;
        let exponent = ((bits >> 52) & 0x7ff) as i64;
        if exponent == 0 {
            // zero or subnormal, |x| < 1
            return Some(Bignum::zero());
        }

        let mantissa: Limb = (bits & ((1 << 52) - 1)) | (1 << 52);
        // x = mantissa * 2^(exponent - 1075)
        let shift = exponent - 1075;
        let mag = if shift >= 0 {
            shl(&[mantissa], shift as u64)
        } else {
            shr(&[mantissa], shift.unsigned_abs())
        };
        Some(Bignum::from_buf(negative, mag))
    }

    /// Truncate a finite `f32` towards zero.
    pub fn from_f32(x: f32) -> Option<Bignum> {
        Bignum::from_f64(f64::from(x))
    }
}

macro_rules! impl_from_signed {
    ($($T:ty),*) => {$(
        impl From<$T> for Bignum {
            #[inline]
            fn from(n: $T) -> Bignum {
                Bignum::from_u128_parts(n < 0, n.unsigned_abs() as u128)
            }
        }
    )*};
}

macro_rules! impl_from_unsigned {
    ($($T:ty),*) => {$(
        impl From<$T> for Bignum {
            #[inline]
            fn from(n: $T) -> Bignum {
                Bignum::from_u128_parts(false, n as u128)
            }
        }
    )*};
}

impl_from_signed!(i8, i16, i32, i64, i128, isize);
impl_from_unsigned!(u8, u16, u32, u64, u128, usize);

macro_rules! impl_try_from_bignum {
    ($($T:ty),*) => {$(
        impl TryFrom<&Bignum> for $T {
            type Error = TryFromBignumError;

            fn try_from(b: &Bignum) -> Result<$T, TryFromBignumError> {
                let err = || {
                    TryFromBignumError::new(stringify!($T), <$T>::MIN as i128, <$T>::MAX as u128)
                };
                let mag = b.magnitude_u128().ok_or_else(err)?;
                if b.is_negative() {
                    let value = 0i128.checked_sub_unsigned(mag).ok_or_else(err)?;
                    <$T>::try_from(value).map_err(|_| err())
                } else {
                    <$T>::try_from(mag).map_err(|_| err())
                }
            }
        }

        impl TryFrom<Bignum> for $T {
            type Error = TryFromBignumError;

            #[inline]
            fn try_from(b: Bignum) -> Result<$T, TryFromBignumError> {
                <$T>::try_from(&b)
            }
        }
    )*};
}

impl_try_from_bignum!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl FromStr for Bignum {
    type Err = ParseBignumError;

    #[inline]
    fn from_str(s: &str) -> Result<Bignum, ParseBignumError> {
        Bignum::from_str_radix(s, 10)
    }
}

impl fmt::Display for Bignum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.is_negative(), "", &self.magnitude_str(10))
    }
}

impl fmt::LowerHex for Bignum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.magnitude_str(16).to_ascii_lowercase();
        f.pad_integral(!self.is_negative(), "0x", &s)
    }
}

impl fmt::UpperHex for Bignum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.is_negative(), "0x", &self.magnitude_str(16))
    }
}

impl fmt::Binary for Bignum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.is_negative(), "0b", &self.magnitude_str(2))
    }
}

impl fmt::Octal for Bignum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.is_negative(), "0o", &self.magnitude_str(8))
    }
}
