use core::cmp::Ordering;
use core::mem;

use crate::big_digit::Limb;
use crate::magnitude::{LimbBuf, cmp_slice, from_slice, shl, shr, sub, trailing_zeros};

/// Binary GCD of two magnitudes.
///
/// Common factors of two are stripped up front and shifted back into the
/// result at the end. In between both operands are odd: the smaller one is
/// subtracted from the larger and the (even) difference is shifted right
/// until it is odd again. Once both operands fit in a single limb the
/// reduction finishes with [`gcd_limb`].
///
/// `gcd(0, b) = b` and `gcd(a, 0) = a`; `gcd(0, 0) = 0`.
pub fn gcd(a: &[Limb], b: &[Limb]) -> LimbBuf {
    let Some(za) = trailing_zeros(a) else {
        return from_slice(b);
    };
    let Some(zb) = trailing_zeros(b) else {
        return from_slice(a);
    };
    let shift = za.min(zb);

    let mut a = shr(a, za);
    let mut b = shr(b, zb);

    loop {
        if a.len() == 1 && b.len() == 1 {
            return shl(&[gcd_limb(a[0], b[0])], shift);
        }

        match cmp_slice(&a, &b) {
            Ordering::Equal => break,
            Ordering::Less => mem::swap(&mut a, &mut b),
            Ordering::Greater => {}
        }

        // a > b, both odd: the difference is even and non-zero.
        let diff = sub(&a, &b);
        let tz = trailing_zeros(&diff).unwrap_or(0);
        a = shr(&diff, tz);
    }

    shl(&a, shift)
}

/// Binary GCD of two limbs. `gcd_limb(0, b) = b`.
pub fn gcd_limb(mut a: Limb, mut b: Limb) -> Limb {
    if a == 0 {
        return b;
    }
    if b == 0 {
        return a;
    }

    let shift = (a | b).trailing_zeros();
    a >>= a.trailing_zeros();

    loop {
        b >>= b.trailing_zeros();
        if a > b {
            mem::swap(&mut a, &mut b);
        }
        b -= a;
        if b == 0 {
            break;
        }
    }

    a << shift
}
