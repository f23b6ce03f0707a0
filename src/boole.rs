//! The sixteen dyadic logical operators, in two's-complement semantics.
//!
//! Integers behave as if they were infinitely sign-extended two's-complement
//! bit strings, while a [`Bignum`] stores a sign and a magnitude. The
//! bignum paths bridge the two with
//!
//! ```text
//! -x == !(x - 1)        for x > 0
//! ```
//!
//! so every operand becomes a magnitude plus a "complemented" flag, and the
//! flag algebra below turns each operator into a single magnitude
//! combinator:
//!
//! | operands   | AND                 | IOR                 | XOR         |
//! |------------|---------------------|---------------------|-------------|
//! | `a`, `b`   | `a & b`             | `a \| b`            | `a ^ b`     |
//! | `a`, `!B`  | `a & !B`            | `!(B & !a)`         | `!(a ^ B)`  |
//! | `!A`, `b`  | `b & !A`            | `!(A & !b)`         | `!(A ^ b)`  |
//! | `!A`, `!B` | `!(A \| B)`         | `!(A & B)`          | `A ^ B`     |
//!
//! All other operators are a complement of one of these, or of an operand.

use core::fmt;

use crate::bignum::Bignum;
use crate::integer::Integer;
use crate::magnitude::{self, LimbBuf, add_limb, and, and_not, or, sub_limb, xor};

/// A dyadic logical operator, numbered like Common Lisp's `boole-*`
/// constants.
///
/// Bit `k` of the code is the result for the operand bit pair
/// `(x, y) = [(1, 1), (1, 0), (0, 1), (0, 0)][k]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum BooleOp {
    /// Always `0`.
    Clr = 0,
    /// `x & y`.
    And = 1,
    /// `x & !y`.
    Andc2 = 2,
    /// `x`.
    One = 3,
    /// `!x & y`.
    Andc1 = 4,
    /// `y`.
    Two = 5,
    /// `x ^ y`.
    Xor = 6,
    /// `x | y`.
    Ior = 7,
    /// `!(x | y)`.
    Nor = 8,
    /// `!(x ^ y)`.
    Eqv = 9,
    /// `!y`.
    C2 = 10,
    /// `x | !y`.
    Orc2 = 11,
    /// `!x`.
    C1 = 12,
    /// `!x | y`.
    Orc1 = 13,
    /// `!(x & y)`.
    Nand = 14,
    /// Always `-1`.
    Set = 15,
}

impl BooleOp {
    /// Every operator, in code order.
    pub const ALL: [BooleOp; 16] = [
        BooleOp::Clr,
        BooleOp::And,
        BooleOp::Andc2,
        BooleOp::One,
        BooleOp::Andc1,
        BooleOp::Two,
        BooleOp::Xor,
        BooleOp::Ior,
        BooleOp::Nor,
        BooleOp::Eqv,
        BooleOp::C2,
        BooleOp::Orc2,
        BooleOp::C1,
        BooleOp::Orc1,
        BooleOp::Nand,
        BooleOp::Set,
    ];

    /// Look an operator up by its numeric code.
    pub fn from_code(code: i64) -> Result<BooleOp, BooleOpError> {
        usize::try_from(code)
            .ok()
            .and_then(|i| BooleOp::ALL.get(i).copied())
            .ok_or(BooleOpError(code))
    }

    /// The numeric code, `0..=15`.
    #[inline]
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Apply the truth table to two native words, bit by bit.
    #[inline]
    pub fn apply_i64(self, x: i64, y: i64) -> i64 {
        let code = self.code();
        let mut r = 0;
        if code & 1 != 0 {
            r |= x & y;
        }
        if code & 2 != 0 {
            r |= x & !y;
        }
        if code & 4 != 0 {
            r |= !x & y;
        }
        if code & 8 != 0 {
            r |= !x & !y;
        }
        r
    }
}

/// An operator code outside `0..=15`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BooleOpError(pub i64);

impl fmt::Display for BooleOpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "boole operator code {} is outside 0..=15", self.0)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BooleOpError {}

impl TryFrom<i64> for BooleOp {
    type Error = BooleOpError;

    #[inline]
    fn try_from(code: i64) -> Result<BooleOp, BooleOpError> {
        BooleOp::from_code(code)
    }
}

/// An infinite two's-complement bit string: `mag`, or `!mag` when
/// `complement` is set.
struct Bits {
    complement: bool,
    mag: LimbBuf,
}

impl Bits {
    fn of(x: &Integer) -> Bits {
        let b = x.promote();
        if b.is_negative() {
            Bits {
                complement: true,
                mag: sub_limb(b.magnitude(), 1),
            }
        } else {
            Bits {
                complement: false,
                mag: LimbBuf::from_slice(b.magnitude()),
            }
        }
    }

    fn not(self) -> Bits {
        Bits {
            complement: !self.complement,
            mag: self.mag,
        }
    }

    fn and(&self, other: &Bits) -> Bits {
        let (a, b) = (&self.mag[..], &other.mag[..]);
        match (self.complement, other.complement) {
            (false, false) => Bits::plain(and(a, b)),
            (false, true) => Bits::plain(and_not(a, b)),
            (true, false) => Bits::plain(and_not(b, a)),
            (true, true) => Bits::complemented(or(a, b)),
        }
    }

    fn ior(&self, other: &Bits) -> Bits {
        let (a, b) = (&self.mag[..], &other.mag[..]);
        match (self.complement, other.complement) {
            (false, false) => Bits::plain(or(a, b)),
            (false, true) => Bits::complemented(and_not(b, a)),
            (true, false) => Bits::complemented(and_not(a, b)),
            (true, true) => Bits::complemented(and(a, b)),
        }
    }

    fn xor(&self, other: &Bits) -> Bits {
        Bits {
            complement: self.complement != other.complement,
            mag: xor(&self.mag, &other.mag),
        }
    }

    fn plain(mag: LimbBuf) -> Bits {
        Bits {
            complement: false,
            mag,
        }
    }

    fn complemented(mag: LimbBuf) -> Bits {
        Bits {
            complement: true,
            mag,
        }
    }

    fn into_integer(self) -> Integer {
        if self.complement {
            // !m == -(m + 1)
            Bignum::from_buf(true, add_limb(&self.mag, 1)).demote()
        } else {
            Bignum::from_buf(false, self.mag).demote()
        }
    }
}

fn boole_bits(op: BooleOp, x: &Integer, y: &Integer) -> Integer {
    let bits = match op {
        BooleOp::Clr => return Integer::from(0),
        BooleOp::Set => return Integer::from(-1),
        BooleOp::One => return x.clone(),
        BooleOp::Two => return y.clone(),
        BooleOp::C1 => Bits::of(x).not(),
        BooleOp::C2 => Bits::of(y).not(),
        BooleOp::And => Bits::of(x).and(&Bits::of(y)),
        BooleOp::Ior => Bits::of(x).ior(&Bits::of(y)),
        BooleOp::Xor => Bits::of(x).xor(&Bits::of(y)),
        BooleOp::Eqv => Bits::of(x).xor(&Bits::of(y)).not(),
        BooleOp::Nand => Bits::of(x).and(&Bits::of(y)).not(),
        BooleOp::Nor => Bits::of(x).ior(&Bits::of(y)).not(),
        BooleOp::Andc1 => Bits::of(x).not().and(&Bits::of(y)),
        BooleOp::Andc2 => Bits::of(x).and(&Bits::of(y).not()),
        BooleOp::Orc1 => Bits::of(x).not().ior(&Bits::of(y)),
        BooleOp::Orc2 => Bits::of(x).ior(&Bits::of(y).not()),
    };
    bits.into_integer()
}

/// Apply a dyadic logical operator to two integers.
///
/// ```
/// use limbnum::{boole::boole, BooleOp, Integer};
///
/// let x = Integer::from(-6);
/// let y = Integer::from(3);
/// assert_eq!(boole(BooleOp::Andc1, &x, &y), Integer::from(!-6 & 3));
/// ```
pub fn boole(op: BooleOp, x: &Integer, y: &Integer) -> Integer {
    match (x, y) {
        (Integer::Fixnum(a), Integer::Fixnum(b)) => Integer::from(op.apply_i64(a.get(), b.get())),
        _ => boole_bits(op, x, y),
    }
}

/// `!x`, i.e. `-x - 1`.
pub fn lognot(x: &Integer) -> Integer {
    match x {
        Integer::Fixnum(n) => Integer::from(!n.get()),
        Integer::Bignum(_) => Bits::of(x).not().into_integer(),
    }
}

macro_rules! binary_log_fns {
    ($($(#[$doc:meta])* $name:ident => $op:ident;)*) => {$(
        $(#[$doc])*
        #[inline]
        pub fn $name(x: &Integer, y: &Integer) -> Integer {
            boole(BooleOp::$op, x, y)
        }
    )*};
}

binary_log_fns! {
    /// `x & y`.
    logand => And;
    /// `x | y`.
    logior => Ior;
    /// `x ^ y`.
    logxor => Xor;
    /// `!(x ^ y)`.
    logeqv => Eqv;
    /// `!(x & y)`.
    lognand => Nand;
    /// `!(x | y)`.
    lognor => Nor;
    /// `!x & y`.
    logandc1 => Andc1;
    /// `x & !y`.
    logandc2 => Andc2;
    /// `!x | y`.
    logorc1 => Orc1;
    /// `x | !y`.
    logorc2 => Orc2;
}

fn fold_op<'a, I>(op: BooleOp, identity: i64, values: I) -> Integer
where
    I: IntoIterator<Item = &'a Integer>,
{
    values
        .into_iter()
        .fold(Integer::from(identity), |acc, x| boole(op, &acc, x))
}

/// AND of any number of integers; `-1` for none.
pub fn logand_all<'a, I: IntoIterator<Item = &'a Integer>>(values: I) -> Integer {
    fold_op(BooleOp::And, -1, values)
}

/// IOR of any number of integers; `0` for none.
pub fn logior_all<'a, I: IntoIterator<Item = &'a Integer>>(values: I) -> Integer {
    fold_op(BooleOp::Ior, 0, values)
}

/// XOR of any number of integers; `0` for none.
pub fn logxor_all<'a, I: IntoIterator<Item = &'a Integer>>(values: I) -> Integer {
    fold_op(BooleOp::Xor, 0, values)
}

/// EQV of any number of integers; `-1` for none.
pub fn logeqv_all<'a, I: IntoIterator<Item = &'a Integer>>(values: I) -> Integer {
    fold_op(BooleOp::Eqv, -1, values)
}

/// Bit `index` of the two's-complement value of `x`. Bits past the
/// magnitude repeat the sign.
pub fn logbitp(index: u64, x: &Integer) -> bool {
    match x {
        Integer::Fixnum(n) => {
            let n = n.get();
            if index >= u64::from(i64::BITS) {
                n < 0
            } else {
                (n >> index) & 1 == 1
            }
        }
        Integer::Bignum(b) if b.is_negative() => {
            !magnitude::bit(&sub_limb(b.magnitude(), 1), index)
        }
        Integer::Bignum(b) => magnitude::bit(b.magnitude(), index),
    }
}
