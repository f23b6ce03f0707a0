use core::cmp::Ordering;

use crate::big_digit::{BITS, DoubleLimb, Limb, to_double_limb};

use super::{LimbBuf, cmp_slice, from_slice, limb_buffer, normalize, normalized_len};

/// Divide a two limb numerator `hi:lo` by a single limb divisor, returning
/// the quotient and remainder. Requires `hi < divisor` so the quotient fits.
#[inline]
fn div_wide(hi: Limb, lo: Limb, divisor: Limb) -> (Limb, Limb) {
    debug_assert!(hi < divisor);

    let lhs = to_double_limb(hi, lo);
    let rhs = DoubleLimb::from(divisor);
    ((lhs / rhs) as Limb, (lhs % rhs) as Limb)
}

/// Divide a magnitude by a single non-zero limb.
pub fn div_rem_digit(a: &[Limb], b: Limb) -> (LimbBuf, Limb) {
    assert!(b != 0, "attempt to divide by zero");

    let mut q = from_slice(a);
    let mut rem = 0;

    for d in q.iter_mut().rev() {
        let (qi, ri) = div_wide(rem, *d, b);
        *d = qi;
        rem = ri;
    }

    normalize(&mut q);
    (q, rem)
}

/// Truncating division of magnitudes: returns `(q, r)` with `n = q * d + r`
/// and `r < d`.
///
/// Panics if `d` is zero; the signed layers check for that first.
pub fn div_rem(n: &[Limb], d: &[Limb]) -> (LimbBuf, LimbBuf) {
    let n = &n[..normalized_len(n)];
    let d = &d[..normalized_len(d)];
    assert!(!d.is_empty(), "attempt to divide by zero");

    if n.is_empty() {
        return (LimbBuf::new(), LimbBuf::new());
    }

    if d.len() == 1 {
        let (q, r) = div_rem_digit(n, d[0]);
        let mut rem = LimbBuf::new();
        if r != 0 {
            rem.push(r);
        }
        return (q, rem);
    }

    match cmp_slice(n, d) {
        Ordering::Less => return (LimbBuf::new(), from_slice(n)),
        Ordering::Equal => return (smallvec::smallvec![1], LimbBuf::new()),
        Ordering::Greater => {}
    }

    div_rem_knuth(n, d)
}

/// Knuth, TAOCP vol. 2, 4.3.1, Algorithm D. Requires `d.len() >= 2` and
/// `n > d`, both normalized.
fn div_rem_knuth(n: &[Limb], d: &[Limb]) -> (LimbBuf, LimbBuf) {
    let dl = d.len();
    let m = n.len() - dl;

    // D1: scale so the top divisor limb has its high bit set. The scaled
    // divisor keeps its length; the numerator gains a limb.
    let shift = d[dl - 1].leading_zeros();
    let v = scale(d, shift, dl);
    let mut u = scale(n, shift, n.len() + 1);

    let v_top = DoubleLimb::from(v[dl - 1]);
    let v_next = DoubleLimb::from(v[dl - 2]);
    let base: DoubleLimb = 1 << BITS;

    let mut q = limb_buffer(m + 1);

    for j in (0..=m).rev() {
        // D3: estimate the quotient limb from the top two limbs.
        let num = to_double_limb(u[j + dl], u[j + dl - 1]);
        let mut qhat = num / v_top;
        let mut rhat = num % v_top;

        while qhat >= base || qhat * v_next > ((rhat << BITS) | DoubleLimb::from(u[j + dl - 2])) {
            qhat -= 1;
            rhat += v_top;
            if rhat >= base {
                break;
            }
        }

        // D4: multiply and subtract.
        let mut carry: DoubleLimb = 0;
        let mut borrow: Limb = 0;
        for i in 0..dl {
            let p = qhat * DoubleLimb::from(v[i]) + carry;
            carry = p >> BITS;
            u[i + j] = super::sbb(u[i + j], p as Limb, &mut borrow);
        }
        u[j + dl] = super::sbb(u[j + dl], carry as Limb, &mut borrow);

        // D6: the estimate was one too large, add the divisor back.
        if borrow != 0 {
            qhat -= 1;
            let mut c: DoubleLimb = 0;
            for i in 0..dl {
                u[i + j] = super::adc(u[i + j], v[i], &mut c);
            }
            u[j + dl] = u[j + dl].wrapping_add(c as Limb);
        }

        q[j] = qhat as Limb;
    }

    // D8: unscale the remainder.
    let mut r = limb_buffer(dl);
    for i in 0..dl {
        r[i] = if shift == 0 {
            u[i]
        } else {
            (u[i] >> shift) | (u[i + 1] << (BITS as u32 - shift))
        };
    }

    normalize(&mut q);
    normalize(&mut r);
    (q, r)
}

/// Left shift by fewer than `BITS` bits into a buffer of `len` limbs.
fn scale(a: &[Limb], shift: u32, len: usize) -> LimbBuf {
    let mut out = limb_buffer(len);
    if shift == 0 {
        out[..a.len()].copy_from_slice(a);
        return out;
    }

    let mut carry = 0;
    for (o, &x) in out.iter_mut().zip(a) {
        *o = (x << shift) | carry;
        carry = x >> (BITS as u32 - shift);
    }
    if a.len() < len {
        out[a.len()] = carry;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::magnitude::{add, mul};

    fn check(n: &[Limb], d: &[Limb]) {
        let (q, r) = div_rem(n, d);
        assert_eq!(cmp_slice(&r, d), Ordering::Less);
        let back = add(&mul(&q, d), &r);
        assert_eq!(cmp_slice(&back, n), Ordering::Equal, "n = {:?}, d = {:?}", n, d);
    }

    #[test]
    fn test_div_rem_digit() {
        let (q, r) = div_rem_digit(&[0, 1], 3);
        // 2^64 = 3 * 6148914691236517205 + 1
        assert_eq!(&q[..], &[6_148_914_691_236_517_205]);
        assert_eq!(r, 1);
    }

    #[test]
    #[should_panic(expected = "attempt to divide by zero")]
    fn test_div_rem_by_zero_panics() {
        let _ = div_rem(&[1], &[]);
    }

    #[test]
    fn test_div_rem_small_quotients() {
        let (q, r) = div_rem(&[5, 1], &[7, 1]);
        assert!(q.is_empty());
        assert_eq!(&r[..], &[5, 1]);

        let (q, r) = div_rem(&[7, 1], &[7, 1]);
        assert_eq!(&q[..], &[1]);
        assert!(r.is_empty());
    }

    #[test]
    fn test_div_rem_knuth_identity() {
        check(&[0, 0, 1], &[1, 1]);
        check(&[Limb::MAX, Limb::MAX, Limb::MAX], &[Limb::MAX, 1]);
        check(&[0, 0, 0, 0x8000_0000_0000_0000], &[1, 0x8000_0000_0000_0000]);
        check(&[3, 0, 0, 7, 9], &[Limb::MAX, Limb::MAX, 2]);
        check(&[12345, 678, 0, 0, Limb::MAX], &[0, 1]);
        // Divisor already scaled: top limb at the half-base boundary.
        check(&[0, Limb::MAX - 1, 0x7FFF_FFFF_FFFF_FFFF], &[1, 0x8000_0000_0000_0000]);
    }

    #[test]
    fn test_div_rem_knuth_add_back() {
        // 2^192 / (2^128 + 1): the two-limb estimate overshoots by one and
        // the divisor is added back.
        let (q, r) = div_rem(&[0, 0, 0, 1], &[1, 0, 1]);
        assert_eq!(&q[..], &[Limb::MAX]);
        assert_eq!(&r[..], &[1, Limb::MAX]);
        check(&[0, 0, 0, 1], &[1, 0, 1]);

        // Same overshoot with an unscaled divisor.
        let (q, _) = div_rem(&[0, 0, 0, Limb::MAX], &[1, 0, Limb::MAX]);
        assert_eq!(&q[..], &[Limb::MAX]);
        check(&[0, 0, 0, Limb::MAX], &[1, 0, Limb::MAX]);
        check(&[0, 1, 0, Limb::MAX], &[1, 0, 1]);
    }

    #[test]
    fn test_div_rem_structured_limbs() {
        use rand::prelude::*;
        use rand_xorshift::XorShiftRng;

        const POOL: [Limb; 7] = [
            0,
            1,
            Limb::MAX,
            Limb::MAX - 1,
            1 << 63,
            (1 << 63) + 1,
            (1 << 63) - 1,
        ];

        fn pick<R: Rng>(rng: &mut R, len: usize) -> LimbBuf {
            let mut limbs: LimbBuf = (0..len).map(|_| *POOL.choose(rng).unwrap()).collect();
            if let Some(top) = limbs.last_mut() {
                if *top == 0 {
                    *top = 1;
                }
            }
            limbs
        }

        let mut rng = XorShiftRng::from_seed([5u8; 16]);
        for _ in 0..5000 {
            let dl = rng.random_range(2..=4);
            let nl = dl + rng.random_range(1..=3);
            let d = pick(&mut rng, dl);
            let n = pick(&mut rng, nl);
            check(&n, &d);
        }
    }
}
