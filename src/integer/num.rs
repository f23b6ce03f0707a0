use num_traits::{FromPrimitive, Num, One, Signed, ToPrimitive, Zero};

use crate::error::ParseBignumError;

use super::Integer;

impl Zero for Integer {
    #[inline]
    fn zero() -> Integer {
        Integer::default()
    }

    #[inline]
    fn is_zero(&self) -> bool {
        Integer::is_zero(self)
    }
}

impl One for Integer {
    #[inline]
    fn one() -> Integer {
        Integer::from(1)
    }
}

impl Num for Integer {
    type FromStrRadixErr = ParseBignumError;

    #[inline]
    fn from_str_radix(s: &str, radix: u32) -> Result<Integer, ParseBignumError> {
        Integer::from_str_radix(s, radix)
    }
}

impl Signed for Integer {
    #[inline]
    fn abs(&self) -> Integer {
        Integer::abs(self)
    }

    fn abs_sub(&self, other: &Integer) -> Integer {
        if self <= other {
            Integer::default()
        } else {
            self.sub_ref(other)
        }
    }

    #[inline]
    fn signum(&self) -> Integer {
        Integer::signum(self)
    }

    #[inline]
    fn is_positive(&self) -> bool {
        Integer::is_positive(self)
    }

    #[inline]
    fn is_negative(&self) -> bool {
        Integer::is_negative(self)
    }
}

impl ToPrimitive for Integer {
    #[inline]
    fn to_i64(&self) -> Option<i64> {
        i64::try_from(self).ok()
    }

    #[inline]
    fn to_i128(&self) -> Option<i128> {
        i128::try_from(self).ok()
    }

    #[inline]
    fn to_u64(&self) -> Option<u64> {
        u64::try_from(self).ok()
    }

    #[inline]
    fn to_u128(&self) -> Option<u128> {
        u128::try_from(self).ok()
    }

    #[inline]
    fn to_f32(&self) -> Option<f32> {
        Some(Integer::to_f32(self))
    }

    #[inline]
    fn to_f64(&self) -> Option<f64> {
        Some(Integer::to_f64(self))
    }
}

impl FromPrimitive for Integer {
    #[inline]
    fn from_i64(n: i64) -> Option<Integer> {
        Some(Integer::from(n))
    }

    #[inline]
    fn from_i128(n: i128) -> Option<Integer> {
        Some(Integer::from(n))
    }

    #[inline]
    fn from_u64(n: u64) -> Option<Integer> {
        Some(Integer::from(n))
    }

    #[inline]
    fn from_u128(n: u128) -> Option<Integer> {
        Some(Integer::from(n))
    }

    #[inline]
    fn from_f64(n: f64) -> Option<Integer> {
        Integer::from_f64(n)
    }
}

impl num_integer::Integer for Integer {
    #[inline]
    fn div_floor(&self, other: &Integer) -> Integer {
        num_integer::Integer::div_mod_floor(self, other).0
    }

    #[inline]
    fn mod_floor(&self, other: &Integer) -> Integer {
        num_integer::Integer::div_mod_floor(self, other).1
    }

    fn div_mod_floor(&self, other: &Integer) -> (Integer, Integer) {
        match self.floor_divide(other) {
            Ok(qr) => qr,
            Err(e) => panic!("{}", e),
        }
    }

    fn div_ceil(&self, other: &Integer) -> Integer {
        match self.ceiling_divide(other) {
            Ok((q, _)) => q,
            Err(e) => panic!("{}", e),
        }
    }

    #[inline]
    fn gcd(&self, other: &Integer) -> Integer {
        Integer::gcd(self, other)
    }

    #[inline]
    fn lcm(&self, other: &Integer) -> Integer {
        Integer::lcm(self, other)
    }

    fn is_multiple_of(&self, other: &Integer) -> bool {
        if other.is_zero() {
            return self.is_zero();
        }
        match self.divide(other) {
            Ok((_, r)) => r.is_zero(),
            Err(_) => false,
        }
    }

    #[inline]
    fn is_even(&self) -> bool {
        Integer::is_even(self)
    }

    #[inline]
    fn is_odd(&self) -> bool {
        Integer::is_odd(self)
    }

    fn div_rem(&self, other: &Integer) -> (Integer, Integer) {
        match self.divide(other) {
            Ok(qr) => qr,
            Err(e) => panic!("{}", e),
        }
    }
}
