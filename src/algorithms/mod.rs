//! Low-level algorithms for big integer arithmetic.
//!
//! This module re-exports the limb-slice primitives of [`magnitude`]
//! alongside the algorithms built on top of them, so callers can work on raw
//! magnitudes without going through [`Bignum`](crate::Bignum).
//!
//! [`magnitude`]: crate::magnitude

// --- addition ---
pub use crate::magnitude::{__add2, adc, add2};

// --- subtraction ---
pub use crate::magnitude::{__sub2, sbb, sub2};

// --- multiplication ---
pub use crate::magnitude::mac_with_carry;

// --- division ---
pub use crate::magnitude::{div_rem, div_rem_digit};

// --- shift ---
pub use crate::magnitude::{shl, shr};

// --- comparison ---
pub use crate::magnitude::cmp_slice;

mod gcd;

pub use self::gcd::*;
