use crate::big_digit::{BITS, DoubleLimb, Limb};

use super::{LimbBuf, limb_buffer, normalize};

/// Multiply-accumulate: returns the low limb of `a + b * c + acc` and leaves
/// the high part in `acc`.
#[inline]
pub fn mac_with_carry(a: Limb, b: Limb, c: Limb, acc: &mut DoubleLimb) -> Limb {
    *acc += DoubleLimb::from(a);
    *acc += DoubleLimb::from(b) * DoubleLimb::from(c);
    let lo = *acc as Limb;
    *acc >>= BITS;
    lo
}

/// `acc += b * c`; `acc` must be long enough to absorb the final carry.
fn mac_digit(acc: &mut [Limb], b: &[Limb], c: Limb) {
    if c == 0 {
        return;
    }

    let mut carry = 0;
    let (a_lo, a_hi) = acc.split_at_mut(b.len());

    for (a, &b) in a_lo.iter_mut().zip(b) {
        *a = mac_with_carry(*a, b, c, &mut carry);
    }

    for a in a_hi {
        if carry == 0 {
            break;
        }
        *a = super::adc(*a, 0, &mut carry);
    }

    debug_assert!(carry == 0, "carry overflow during multiplication");
}

/// Schoolbook product `|a| * |b|`.
///
/// The result buffer holds `len(a) + len(b)` limbs; the possible excess
/// leading zero limb is removed before returning.
pub fn mul(a: &[Limb], b: &[Limb]) -> LimbBuf {
    let a = &a[..super::normalized_len(a)];
    let b = &b[..super::normalized_len(b)];
    if a.is_empty() || b.is_empty() {
        return LimbBuf::new();
    }

    // Iterate over the shorter operand so each mac_digit pass is long.
    let (x, y) = if a.len() <= b.len() { (a, b) } else { (b, a) };

    let mut prod = limb_buffer(x.len() + y.len());
    for (i, &xi) in x.iter().enumerate() {
        mac_digit(&mut prod[i..], y, xi);
    }

    normalize(&mut prod);
    prod
}

/// `|a| * n` for a single limb `n`.
pub fn mul_limb(a: &[Limb], n: Limb) -> LimbBuf {
    mul(a, &[n])
}
