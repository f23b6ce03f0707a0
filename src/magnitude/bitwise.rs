//! Limb-wise logical combinators.
//!
//! Operands are zero-padded to the longer length. The combinators that
//! complement (`or_not`, `nand`, `nor`, `xnor`) are therefore bounded to that
//! width: they describe a finite magnitude, not a two's-complement value.
//! Signed semantics live in [`crate::boole`], which only needs `and`, `or`,
//! `xor` and `and_not`; the complementing forms here are the raw
//! width-bounded ones.

use crate::big_digit::Limb;

use super::{LimbBuf, limb_buffer, normalize};

#[inline]
fn zip_padded(a: &[Limb], b: &[Limb], op: impl Fn(Limb, Limb) -> Limb) -> LimbBuf {
    let len = a.len().max(b.len());
    let mut out = limb_buffer(len);

    for (i, o) in out.iter_mut().enumerate() {
        let x = a.get(i).copied().unwrap_or(0);
        let y = b.get(i).copied().unwrap_or(0);
        *o = op(x, y);
    }

    normalize(&mut out);
    out
}

/// `a & b`.
pub fn and(a: &[Limb], b: &[Limb]) -> LimbBuf {
    let len = a.len().min(b.len());
    zip_padded(&a[..len], &b[..len], |x, y| x & y)
}

/// `a | b`.
pub fn or(a: &[Limb], b: &[Limb]) -> LimbBuf {
    zip_padded(a, b, |x, y| x | y)
}

/// `a ^ b`.
pub fn xor(a: &[Limb], b: &[Limb]) -> LimbBuf {
    zip_padded(a, b, |x, y| x ^ y)
}

/// `a & !b`. Never wider than `a`.
pub fn and_not(a: &[Limb], b: &[Limb]) -> LimbBuf {
    zip_padded(a, &b[..b.len().min(a.len())], |x, y| x & !y)
}

/// `a | !b`, bounded to the longer operand.
pub fn or_not(a: &[Limb], b: &[Limb]) -> LimbBuf {
    zip_padded(a, b, |x, y| x | !y)
}

/// `!(a & b)`, bounded to the longer operand.
pub fn nand(a: &[Limb], b: &[Limb]) -> LimbBuf {
    zip_padded(a, b, |x, y| !(x & y))
}

/// `!(a | b)`, bounded to the longer operand.
pub fn nor(a: &[Limb], b: &[Limb]) -> LimbBuf {
    zip_padded(a, b, |x, y| !(x | y))
}

/// `!(a ^ b)`, bounded to the longer operand.
pub fn xnor(a: &[Limb], b: &[Limb]) -> LimbBuf {
    zip_padded(a, b, |x, y| !(x ^ y))
}
