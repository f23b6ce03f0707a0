use crate::big_digit::{BITS, Limb};

use super::{LimbBuf, limb_buffer, normalize, normalized_len};

#[inline]
fn split_shift(n: u64) -> (usize, u32) {
    ((n / BITS as u64) as usize, (n % BITS as u64) as u32)
}

/// Logical left shift of a magnitude by `n` bits.
pub fn shl(a: &[Limb], n: u64) -> LimbBuf {
    let a = &a[..normalized_len(a)];
    if a.is_empty() {
        return LimbBuf::new();
    }

    let (digits, bits) = split_shift(n);
    let mut out = limb_buffer(digits + a.len() + 1);

    if bits == 0 {
        out[digits..digits + a.len()].copy_from_slice(a);
    } else {
        let mut carry = 0;
        for (o, &x) in out[digits..].iter_mut().zip(a) {
            *o = (x << bits) | carry;
            carry = x >> (BITS as u32 - bits);
        }
        out[digits + a.len()] = carry;
    }

    normalize(&mut out);
    out
}

/// Logical right shift of a magnitude by `n` bits, truncating.
pub fn shr(a: &[Limb], n: u64) -> LimbBuf {
    let a = &a[..normalized_len(a)];
    let (digits, bits) = split_shift(n);
    if digits >= a.len() {
        return LimbBuf::new();
    }

    let src = &a[digits..];
    let mut out = LimbBuf::from_slice(src);

    if bits > 0 {
        let mut borrow = 0;
        for x in out.iter_mut().rev() {
            let next = *x << (BITS as u32 - bits);
            *x = (*x >> bits) | borrow;
            borrow = next;
        }
    }

    normalize(&mut out);
    out
}

/// Whether `shr(a, n)` discards at least one set bit.
pub fn shifted_out_nonzero(a: &[Limb], n: u64) -> bool {
    let (digits, bits) = split_shift(n);
    let whole = digits.min(a.len());

    if a[..whole].iter().any(|&limb| limb != 0) {
        return true;
    }

    match a.get(digits) {
        Some(&limb) if bits > 0 => limb & ((1 << bits) - 1) != 0,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shl() {
        assert!(shl(&[], 100).is_empty());
        assert_eq!(&shl(&[1], 0)[..], &[1]);
        assert_eq!(&shl(&[1], 64)[..], &[0, 1]);
        assert_eq!(&shl(&[Limb::MAX], 4)[..], &[Limb::MAX << 4, 0xF]);
        assert_eq!(&shl(&[3], 129)[..], &[0, 0, 6]);
    }

    #[test]
    fn test_shr() {
        assert_eq!(&shr(&[0, 1], 1)[..], &[1 << 63]);
        assert_eq!(&shr(&[0, 0, 6], 129)[..], &[3]);
        assert!(shr(&[5], 64).is_empty());
        assert!(shr(&[5], 3).is_empty());
        assert_eq!(&shr(&[Limb::MAX << 4, 0xF], 4)[..], &[Limb::MAX]);
    }

    #[test]
    fn test_shifted_out_nonzero() {
        assert!(!shifted_out_nonzero(&[8], 3));
        assert!(shifted_out_nonzero(&[9], 3));
        assert!(shifted_out_nonzero(&[1, 4], 64));
        assert!(!shifted_out_nonzero(&[0, 4], 66));
        assert!(shifted_out_nonzero(&[0, 4], 67));
        assert!(shifted_out_nonzero(&[0, 4], 1000));
        assert!(!shifted_out_nonzero(&[], 1000));
    }
}
