use crate::boole::{self, BooleOp};
use crate::{Bignum, Integer};

/// Common Lisp's `ash`: multiply by a power of two, or divide by one
/// rounding towards negative infinity.
///
/// ```
/// use limbnum::{ArithmeticShift, Integer};
///
/// assert_eq!(Integer::from(-1).ash(-1), Integer::from(-1));
/// assert_eq!(Integer::from(-5).ash(-1), Integer::from(-3));
/// assert_eq!(Integer::from(3).ash(2), Integer::from(12));
/// ```
pub trait ArithmeticShift {
    /// `self * 2^bits`, with negative `bits` shifting right.
    fn ash(&self, bits: i64) -> Integer;
}

/// The two's-complement logical operators, as methods.
pub trait Logical {
    /// Apply `op` with `self` as the first operand.
    fn boole(&self, op: BooleOp, other: &Self) -> Integer;

    /// `-self - 1`.
    fn lognot(&self) -> Integer;

    /// Bit `index` of the two's-complement value.
    fn logbitp(&self, index: u64) -> bool;
}

impl ArithmeticShift for Integer {
    #[inline]
    fn ash(&self, bits: i64) -> Integer {
        self.shift_arith(bits)
    }
}

impl ArithmeticShift for Bignum {
    #[inline]
    fn ash(&self, bits: i64) -> Integer {
        self.shift_arith(bits)
    }
}

impl Logical for Integer {
    #[inline]
    fn boole(&self, op: BooleOp, other: &Integer) -> Integer {
        boole::boole(op, self, other)
    }

    #[inline]
    fn lognot(&self) -> Integer {
        boole::lognot(self)
    }

    #[inline]
    fn logbitp(&self, index: u64) -> bool {
        boole::logbitp(index, self)
    }
}

impl Logical for Bignum {
    fn boole(&self, op: BooleOp, other: &Bignum) -> Integer {
        let x = Integer::from(self.clone());
        let y = Integer::from(other.clone());
        boole::boole(op, &x, &y)
    }

    fn lognot(&self) -> Integer {
        boole::lognot(&Integer::from(self.clone()))
    }

    fn logbitp(&self, index: u64) -> bool {
        boole::logbitp(index, &Integer::from(self.clone()))
    }
}
