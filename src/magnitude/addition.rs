use crate::big_digit::{BITS, DoubleLimb, Limb};

use super::{LimbBuf, limb_buffer, normalize};

/// Add with carry: returns the low limb of `a + b + acc` and leaves the
/// carry in `acc`.
#[inline]
pub fn adc(a: Limb, b: Limb, acc: &mut DoubleLimb) -> Limb {
    *acc += DoubleLimb::from(a);
    *acc += DoubleLimb::from(b);
    let lo = *acc as Limb;
    *acc >>= BITS;
    lo
}

/// Two argument addition of raw slices, `a += b`, returning the carry.
///
/// The caller must ensure `a.len() >= b.len()`.
pub fn __add2(a: &mut [Limb], b: &[Limb]) -> Limb {
    debug_assert!(a.len() >= b.len());

    let mut carry = 0;
    let (a_lo, a_hi) = a.split_at_mut(b.len());

    for (a, b) in a_lo.iter_mut().zip(b) {
        *a = adc(*a, *b, &mut carry);
    }

    if carry != 0 {
        for a in a_hi {
            *a = adc(*a, 0, &mut carry);
            if carry == 0 {
                break;
            }
        }
    }

    carry as Limb
}

/// `a += b`, where the caller guarantees the sum fits in `a`.
pub fn add2(a: &mut [Limb], b: &[Limb]) {
    let carry = __add2(a, b);

    debug_assert!(carry == 0);
}

/// `|a| + |b|`.
///
/// The output is sized `max(len(a), len(b)) + 1` so a trailing carry always
/// has room, then normalized.
pub fn add(a: &[Limb], b: &[Limb]) -> LimbBuf {
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };

    let mut out = limb_buffer(long.len() + 1);
    out[..long.len()].copy_from_slice(long);
    add2(&mut out, short);
    normalize(&mut out);
    out
}

/// `|a| + n` for a single limb `n`, growing by one limb on carry-out.
pub fn add_limb(a: &[Limb], n: Limb) -> LimbBuf {
    add(a, &[n])
}
