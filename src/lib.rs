//! Sign-magnitude arbitrary-precision integers built on machine-word limbs.
//!
//! The crate is organised in layers, leaves first:
//!
//! - [`magnitude`]: unsigned algorithms over `&[Limb]` slices (add, sub,
//!   compare, multiply, divide, shifts and the bitwise combinators).
//! - [`Bignum`]: an owned limb buffer plus a signed limb count. The sign of the
//!   count is the sign of the value, its absolute value is the number of limbs.
//!   Every `Bignum` is canonical: zero has no limbs and a non-zero value never
//!   has a leading zero limb.
//! - [`Integer`]: the closed union of [`Fixnum`] (the host's small-integer fast
//!   path) and [`Bignum`]. Public operations always hand back the canonical
//!   variant, so a value that fits in a fixnum is never returned as a bignum.
//! - [`boole`]: the sixteen dyadic logical operators with two's-complement
//!   semantics, layered over the sign-magnitude storage.
//!
//! ## Example
//!
//! ```rust
//! use limbnum::Integer;
//!
//! let a: Integer = "99999999999999999999".parse().unwrap();
//! let b = Integer::from(1);
//! assert_eq!((&a + &b).to_string(), "100000000000000000000");
//!
//! // Results that fit a fixnum are demoted.
//! let g = Integer::from(270).gcd(&Integer::from(192));
//! assert!(g.is_fixnum());
//! assert_eq!(g, Integer::from(6));
//! ```
//!
//! ## Features
//!
//! - `std` (default): implements `std::error::Error` for the error types.
//!   Without it the crate is `no_std` and only needs `alloc`.
//! - `rand`: random bignum generation via [`RandBignum`].
//! - `zeroize`: wiping of limb buffers.

#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod error;
mod fixnum;
mod integer;
mod traits;

pub mod algorithms;
pub mod bignum;
pub mod boole;
pub mod magnitude;

#[cfg(feature = "rand")]
mod bigrand;

pub use crate::bignum::Bignum;
pub use crate::boole::{BooleOp, BooleOpError};
pub use crate::error::{ArithmeticError, ParseBignumError, ParseErrorKind, TryFromBignumError};
pub use crate::fixnum::{FIXNUM_BITS, Fixnum, MOST_NEGATIVE_FIXNUM, MOST_POSITIVE_FIXNUM};
pub use crate::integer::Integer;
pub use crate::traits::{ArithmeticShift, Logical};

#[cfg(feature = "rand")]
pub use crate::bigrand::{RandBignum, RandomBits};

/// Limb width and the double-width type used for carries and products.
pub mod big_digit {
    /// One machine word of a magnitude, base `2^BITS`.
    pub type Limb = u64;

    /// Double-width type holding a full limb product or a carry pair.
    pub type DoubleLimb = u128;

    /// Number of bits in a [`Limb`].
    pub const BITS: usize = 64;

    /// Number of limbs kept inline before a magnitude spills to the heap.
    pub const INLINE_LIMBS: usize = 4;

    const LO_MASK: DoubleLimb = (1 << BITS) - 1;

    #[inline]
    fn get_hi(n: DoubleLimb) -> Limb {
        (n >> BITS) as Limb
    }

    #[inline]
    fn get_lo(n: DoubleLimb) -> Limb {
        (n & LO_MASK) as Limb
    }

    /// Split one [`DoubleLimb`] into a high and a low [`Limb`].
    #[inline]
    pub fn from_double_limb(n: DoubleLimb) -> (Limb, Limb) {
        (get_hi(n), get_lo(n))
    }

    /// Join two [`Limb`]s into one [`DoubleLimb`].
    #[inline]
    pub fn to_double_limb(hi: Limb, lo: Limb) -> DoubleLimb {
        (DoubleLimb::from(hi) << BITS) | DoubleLimb::from(lo)
    }
}
