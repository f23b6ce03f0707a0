use crate::big_digit::Limb;

use super::{LimbBuf, cmp_slice, from_slice, normalize};

/// Subtract with borrow: returns the low limb of `a - b - borrow` and stores
/// the new borrow (0 or 1) back into `borrow`.
#[inline]
pub fn sbb(a: Limb, b: Limb, borrow: &mut Limb) -> Limb {
    let (d1, o1) = a.overflowing_sub(b);
    let (d2, o2) = d1.overflowing_sub(*borrow);
    *borrow = Limb::from(o1 || o2);
    d2
}

/// `a -= b` over raw slices, returning the final borrow.
///
/// The caller must ensure `a.len() >= b.len()`.
pub fn __sub2(a: &mut [Limb], b: &[Limb]) -> Limb {
    debug_assert!(a.len() >= b.len());

    let mut borrow = 0;
    let (a_lo, a_hi) = a.split_at_mut(b.len());

    for (a, b) in a_lo.iter_mut().zip(b) {
        *a = sbb(*a, *b, &mut borrow);
    }

    if borrow != 0 {
        for a in a_hi {
            *a = sbb(*a, 0, &mut borrow);
            if borrow == 0 {
                break;
            }
        }
    }

    borrow
}

/// `a -= b` where the caller guarantees `a >= b`.
pub fn sub2(a: &mut [Limb], b: &[Limb]) {
    let b = &b[..super::normalized_len(b)];
    let borrow = __sub2(a, b);

    debug_assert!(borrow == 0, "cannot subtract b from a because b is larger than a");
}

/// `|a| - |b|`, defined only for `|a| >= |b|`.
pub fn sub(a: &[Limb], b: &[Limb]) -> LimbBuf {
    debug_assert!(cmp_slice(a, b).is_ge());

    let mut out = from_slice(a);
    sub2(&mut out, b);
    normalize(&mut out);
    out
}

/// `|a| - n` for a single limb `n`, with `|a| >= n`.
pub fn sub_limb(a: &[Limb], n: Limb) -> LimbBuf {
    sub(a, &[n])
}
