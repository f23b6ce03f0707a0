//! Unsigned algorithms over little-endian limb sequences.
//!
//! Every function here treats its operands as plain magnitudes: the sign of
//! a [`Bignum`](crate::Bignum) is layered on top by the caller. Inputs may be
//! any limb slice; outputs are [`LimbBuf`]s with no high zero limb, so an
//! empty buffer is zero.

use core::cmp::Ordering;

use smallvec::SmallVec;

use crate::big_digit::{BITS, INLINE_LIMBS, Limb};

mod addition;
mod bitwise;
mod division;
mod multiplication;
mod shift;
mod subtraction;

pub mod radix;

pub use self::addition::{__add2, adc, add, add2, add_limb};
pub use self::bitwise::{and, and_not, nand, nor, or, or_not, xnor, xor};
pub use self::division::{div_rem, div_rem_digit};
pub use self::multiplication::{mac_with_carry, mul, mul_limb};
pub use self::shift::{shifted_out_nonzero, shl, shr};
pub use self::subtraction::{__sub2, sbb, sub, sub2, sub_limb};

/// Owned limb storage. Short magnitudes stay inline.
pub type LimbBuf = SmallVec<[Limb; INLINE_LIMBS]>;

/// Allocate a zeroed buffer of `len` limbs.
#[inline]
pub fn limb_buffer(len: usize) -> LimbBuf {
    SmallVec::from_elem(0, len)
}

/// Drop high zero limbs. Idempotent; an all-zero buffer becomes empty.
#[inline]
pub fn normalize(buf: &mut LimbBuf) {
    let len = normalized_len(buf);
    buf.truncate(len);
}

/// Length of `a` once its high zero limbs are ignored.
#[inline]
pub fn normalized_len(a: &[Limb]) -> usize {
    a.iter().rposition(|&limb| limb != 0).map_or(0, |i| i + 1)
}

/// Copy `a` into a fresh, normalized buffer.
#[inline]
pub(crate) fn from_slice(a: &[Limb]) -> LimbBuf {
    let mut buf = LimbBuf::from_slice(a);
    normalize(&mut buf);
    buf
}

/// Compare two magnitudes: by normalized length first, then limb by limb
/// starting from the most significant one.
pub fn cmp_slice(a: &[Limb], b: &[Limb]) -> Ordering {
    let a = &a[..normalized_len(a)];
    let b = &b[..normalized_len(b)];

    match Ord::cmp(&a.len(), &b.len()) {
        Ordering::Equal => Iterator::cmp(a.iter().rev(), b.iter().rev()),
        other => other,
    }
}

/// Number of trailing zero bits of a non-zero magnitude, `None` for zero.
pub fn trailing_zeros(a: &[Limb]) -> Option<u64> {
    let i = a.iter().position(|&limb| limb != 0)?;
    Some((i * BITS) as u64 + u64::from(a[i].trailing_zeros()))
}

/// Number of significant bits of a magnitude; zero has none.
pub fn bits(a: &[Limb]) -> u64 {
    let len = normalized_len(a);
    if len == 0 {
        return 0;
    }
    let zeros = u64::from(a[len - 1].leading_zeros());
    (len * BITS) as u64 - zeros
}

/// Test bit `index` of a magnitude.
#[inline]
pub fn bit(a: &[Limb], index: u64) -> bool {
    let limb = (index / BITS as u64) as usize;
    match a.get(limb) {
        Some(&l) => (l >> (index % BITS as u64)) & 1 == 1,
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_is_idempotent() {
        let mut buf: LimbBuf = smallvec::smallvec![5, 0, 7, 0, 0];
        normalize(&mut buf);
        assert_eq!(&buf[..], &[5, 0, 7]);
        normalize(&mut buf);
        assert_eq!(&buf[..], &[5, 0, 7]);

        let mut zero: LimbBuf = smallvec::smallvec![0, 0, 0];
        normalize(&mut zero);
        assert!(zero.is_empty());
    }

    #[test]
    fn test_cmp_slice() {
        assert_eq!(cmp_slice(&[], &[]), Ordering::Equal);
        assert_eq!(cmp_slice(&[1], &[]), Ordering::Greater);
        assert_eq!(cmp_slice(&[0, 1], &[Limb::MAX]), Ordering::Greater);
        assert_eq!(cmp_slice(&[3, 2], &[4, 2]), Ordering::Less);
        assert_eq!(cmp_slice(&[3, 2, 0], &[3, 2]), Ordering::Equal);
    }

    #[test]
    fn test_bit_queries() {
        assert_eq!(trailing_zeros(&[]), None);
        assert_eq!(trailing_zeros(&[0, 8]), Some(67));
        assert_eq!(bits(&[]), 0);
        assert_eq!(bits(&[1]), 1);
        assert_eq!(bits(&[0, 1]), 65);
        assert!(bit(&[0, 2], 65));
        assert!(!bit(&[0, 2], 64));
        assert!(!bit(&[0, 2], 500));
    }
}
