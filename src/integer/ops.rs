//! Operator impls for [`Integer`].
//!
//! Division operators panic on a zero divisor like the primitive integers;
//! [`Integer::divide`] is the checked entry point.

use core::iter::{Product, Sum};
use core::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div,
    DivAssign, Mul, MulAssign, Neg, Not, Rem, RemAssign, Shl, Shr, Sub, SubAssign,
};

use crate::boole;

use super::Integer;

fn div_trunc(a: &Integer, b: &Integer) -> Integer {
    match a.divide(b) {
        Ok((q, _)) => q,
        Err(e) => panic!("{}", e),
    }
}

fn rem_trunc(a: &Integer, b: &Integer) -> Integer {
    match a.divide(b) {
        Ok((_, r)) => r,
        Err(e) => panic!("{}", e),
    }
}

macro_rules! forward_binop {
    (impl $Trait:ident, $method:ident, $AssignTrait:ident, $assign:ident => $f:expr) => {
        impl $Trait<&Integer> for &Integer {
            type Output = Integer;

            #[inline]
            fn $method(self, other: &Integer) -> Integer {
                $f(self, other)
            }
        }

        impl $Trait<Integer> for &Integer {
            type Output = Integer;

            #[inline]
            fn $method(self, other: Integer) -> Integer {
                $f(self, &other)
            }
        }

        impl $Trait<&Integer> for Integer {
            type Output = Integer;

            #[inline]
            fn $method(self, other: &Integer) -> Integer {
                $f(&self, other)
            }
        }

        impl $Trait<Integer> for Integer {
            type Output = Integer;

            #[inline]
            fn $method(self, other: Integer) -> Integer {
                $f(&self, &other)
            }
        }

        impl $AssignTrait<&Integer> for Integer {
            #[inline]
            fn $assign(&mut self, other: &Integer) {
                *self = $f(&*self, other);
            }
        }

        impl $AssignTrait<Integer> for Integer {
            #[inline]
            fn $assign(&mut self, other: Integer) {
                *self = $f(&*self, &other);
            }
        }
    };
}

forward_binop!(impl Add, add, AddAssign, add_assign => Integer::add_ref);
forward_binop!(impl Sub, sub, SubAssign, sub_assign => Integer::sub_ref);
forward_binop!(impl Mul, mul, MulAssign, mul_assign => Integer::multiply);
forward_binop!(impl Div, div, DivAssign, div_assign => div_trunc);
forward_binop!(impl Rem, rem, RemAssign, rem_assign => rem_trunc);
forward_binop!(impl BitAnd, bitand, BitAndAssign, bitand_assign => boole::logand);
forward_binop!(impl BitOr, bitor, BitOrAssign, bitor_assign => boole::logior);
forward_binop!(impl BitXor, bitxor, BitXorAssign, bitxor_assign => boole::logxor);

impl Neg for Integer {
    type Output = Integer;

    #[inline]
    fn neg(self) -> Integer {
        self.negate()
    }
}

impl Neg for &Integer {
    type Output = Integer;

    #[inline]
    fn neg(self) -> Integer {
        self.negate()
    }
}

impl Not for Integer {
    type Output = Integer;

    #[inline]
    fn not(self) -> Integer {
        boole::lognot(&self)
    }
}

impl Not for &Integer {
    type Output = Integer;

    #[inline]
    fn not(self) -> Integer {
        boole::lognot(self)
    }
}

impl Shl<i64> for &Integer {
    type Output = Integer;

    #[inline]
    fn shl(self, bits: i64) -> Integer {
        self.shift_arith(bits)
    }
}

impl Shl<i64> for Integer {
    type Output = Integer;

    #[inline]
    fn shl(self, bits: i64) -> Integer {
        self.shift_arith(bits)
    }
}

impl Shr<i64> for &Integer {
    type Output = Integer;

    #[inline]
    fn shr(self, bits: i64) -> Integer {
        self.shift_arith(bits.saturating_neg())
    }
}

impl Shr<i64> for Integer {
    type Output = Integer;

    #[inline]
    fn shr(self, bits: i64) -> Integer {
        self.shift_arith(bits.saturating_neg())
    }
}

impl<'a> Sum<&'a Integer> for Integer {
    fn sum<I: Iterator<Item = &'a Integer>>(iter: I) -> Integer {
        iter.fold(Integer::default(), |acc, n| acc.add_ref(n))
    }
}

impl Sum for Integer {
    fn sum<I: Iterator<Item = Integer>>(iter: I) -> Integer {
        iter.fold(Integer::default(), |acc, n| acc.add_ref(&n))
    }
}

impl<'a> Product<&'a Integer> for Integer {
    fn product<I: Iterator<Item = &'a Integer>>(iter: I) -> Integer {
        iter.fold(Integer::from(1), |acc, n| acc.multiply(n))
    }
}

impl Product for Integer {
    fn product<I: Iterator<Item = Integer>>(iter: I) -> Integer {
        iter.fold(Integer::from(1), |acc, n| acc.multiply(&n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec::Vec;

    #[test]
    fn test_operators_mix_ownership() {
        let a = Integer::from(1_000_000_007);
        let b: Integer = "-98765432109876543210".parse().unwrap();

        assert_eq!((&a + &b).to_string(), "-98765432108876543203");
        assert_eq!((a.clone() - &b).to_string(), "98765432110876543217");
        assert_eq!(&b * Integer::from(-1), -&b);
        assert_eq!(&b / &a * &a + &b % &a, b);

        let mut acc = a.clone();
        acc *= &a;
        acc -= Integer::from(1);
        assert_eq!(acc.to_string(), "1000000014000000048");
    }

    #[test]
    fn test_bit_operators() {
        let x = Integer::from(-6);
        let y = Integer::from(3);
        assert_eq!(&x & &y, Integer::from(-6 & 3));
        assert_eq!(&x | &y, Integer::from(-6 | 3));
        assert_eq!(&x ^ &y, Integer::from(-6 ^ 3));
        assert_eq!(!x.clone(), Integer::from(5));
        assert_eq!(&x << 2, Integer::from(-24));
        assert_eq!(&x >> 2, Integer::from(-2));
    }

    #[test]
    #[should_panic(expected = "attempt to divide by zero")]
    fn test_div_by_zero_panics() {
        let _ = Integer::from(1) / Integer::from(0);
    }

    #[test]
    fn test_sum_and_product() {
        let values: Vec<Integer> = (1..=25).map(Integer::from).collect();
        let sum: Integer = values.iter().sum();
        assert_eq!(sum, Integer::from(325));

        // 25! does not fit a fixnum.
        let product: Integer = values.into_iter().product();
        assert!(product.is_bignum());
        assert_eq!(product.to_string(), "15511210043330985984000000");
    }
}
