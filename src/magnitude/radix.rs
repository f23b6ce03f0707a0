//! String-to-limbs and limbs-to-digits primitives.
//!
//! Digits are plain values in `0..radix`, not ASCII. The signed layer in
//! [`crate::bignum`] maps characters to digit values and back.

use alloc::vec::Vec;

use crate::big_digit::{BITS, DoubleLimb, Limb};

use super::{LimbBuf, div_rem_digit, from_slice, mac_with_carry, normalize};

/// Largest power of `radix` that fits in a limb, with its exponent.
#[inline]
pub fn radix_base(radix: u32) -> (Limb, usize) {
    debug_assert!((2..=36).contains(&radix));

    let radix = Limb::from(radix);
    let mut base = radix;
    let mut power = 1;
    while let Some(next) = base.checked_mul(radix) {
        base = next;
        power += 1;
    }
    (base, power)
}

/// Upper bound on the limbs needed for `len` digits of `radix`.
#[inline]
pub fn limbs_for_digits(len: usize, radix: u32) -> usize {
    let bits_per_digit = (u32::BITS - (radix - 1).leading_zeros()) as usize;
    (len * bits_per_digit).div_ceil(BITS) + 1
}

/// Value of an ASCII digit in `radix`: `0-9`, then letters in either case.
#[inline]
pub fn digit_value(c: u8, radix: u32) -> Option<u8> {
    let d = match c {
        b'0'..=b'9' => c - b'0',
        b'a'..=b'z' => c - b'a' + 10,
        b'A'..=b'Z' => c - b'A' + 10,
        _ => return None,
    };
    if u32::from(d) < radix { Some(d) } else { None }
}

/// ASCII character for a digit value, letters upper case.
#[inline]
pub fn digit_char(d: u8) -> u8 {
    debug_assert!(d < 36);
    if d < 10 { b'0' + d } else { b'A' + d - 10 }
}

/// `data = data * mul + add`, pushing a limb on carry-out.
fn mul_add_limb(data: &mut LimbBuf, mul: Limb, add: Limb) {
    let mut carry = DoubleLimb::from(add);
    for d in data.iter_mut() {
        *d = mac_with_carry(0, *d, mul, &mut carry);
    }
    if carry != 0 {
        data.push(carry as Limb);
    }
}

/// Build a magnitude from digit values, most significant first.
pub fn from_radix_digits_be(digits: &[u8], radix: u32) -> LimbBuf {
    debug_assert!(digits.iter().all(|&d| u32::from(d) < radix));

    let mut data = LimbBuf::with_capacity(limbs_for_digits(digits.len(), radix));

    if radix.is_power_of_two() {
        from_bitwise_digits_be(&mut data, digits, radix.trailing_zeros());
    } else {
        let (base, power) = radix_base(radix);
        let radix = Limb::from(radix);

        let head_len = match digits.len() % power {
            0 => power,
            n => n,
        };
        let (head, tail) = digits.split_at(head_len.min(digits.len()));

        let fold = |chunk: &[u8]| chunk.iter().fold(0, |acc: Limb, &d| acc * radix + Limb::from(d));

        mul_add_limb(&mut data, base, fold(head));
        for chunk in tail.chunks(power) {
            mul_add_limb(&mut data, base, fold(chunk));
        }
    }

    normalize(&mut data);
    data
}

fn from_bitwise_digits_be(data: &mut LimbBuf, digits: &[u8], bits: u32) {
    let mut acc: Limb = 0;
    let mut filled = 0;

    for &d in digits.iter().rev() {
        let d = Limb::from(d);
        acc |= d << filled;
        filled += bits;
        if filled >= BITS as u32 {
            data.push(acc);
            filled -= BITS as u32;
            acc = if filled > 0 { d >> (bits - filled) } else { 0 };
        }
    }

    if filled > 0 {
        data.push(acc);
    }
}

/// Digit values of a magnitude in `radix`, least significant first.
/// Zero yields a single `0` digit.
pub fn to_radix_digits_le(a: &[Limb], radix: u32) -> Vec<u8> {
    let n = from_slice(a);
    if n.is_empty() {
        return alloc::vec![0];
    }

    if radix.is_power_of_two() {
        return to_bitwise_digits_le(&n, radix.trailing_zeros());
    }

    let (base, power) = radix_base(radix);
    let radix = Limb::from(radix);
    let mut digits = Vec::with_capacity((n.len() + 1) * power);

    // Each division by `base` peels off `power` digits at once.
    let mut n = n;
    while n.len() > 1 {
        let (q, mut r) = div_rem_digit(&n, base);
        for _ in 0..power {
            digits.push((r % radix) as u8);
            r /= radix;
        }
        n = q;
    }

    let mut r = n[0];
    while r != 0 {
        digits.push((r % radix) as u8);
        r /= radix;
    }

    digits
}

fn to_bitwise_digits_le(a: &[Limb], bits: u32) -> Vec<u8> {
    let total = super::bits(a);
    let mask: Limb = (1 << bits) - 1;
    let mut digits = Vec::with_capacity(total.div_ceil(u64::from(bits)) as usize);

    let mut pos = 0u64;
    while pos < total {
        let limb = (pos / BITS as u64) as usize;
        let offset = (pos % BITS as u64) as u32;
        let mut d = a[limb] >> offset;
        if offset + bits > BITS as u32 && limb + 1 < a.len() {
            d |= a[limb + 1] << (BITS as u32 - offset);
        }
        digits.push((d & mask) as u8);
        pos += u64::from(bits);
    }

    digits
}
