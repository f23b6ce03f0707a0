use crate::big_digit::Limb;
use crate::magnitude::{LimbBuf, normalize};

use super::Bignum;

/// A privately owned, still mutable result under construction.
///
/// Every [`Bignum`] leaves the crate through [`BignumBuilder::finish`], which
/// normalizes the buffer, so the public type only ever holds canonical values.
#[derive(Debug)]
pub(crate) struct BignumBuilder {
    limbs: LimbBuf,
    negative: bool,
}

impl BignumBuilder {
    /// Take ownership of a magnitude and its sign.
    #[inline]
    pub(crate) fn from_magnitude(negative: bool, limbs: LimbBuf) -> Self {
        BignumBuilder { limbs, negative }
    }

    /// Start from a copy of an existing value.
    #[inline]
    pub(crate) fn from_bignum(b: &Bignum) -> Self {
        BignumBuilder {
            limbs: b.limbs.clone(),
            negative: b.is_negative(),
        }
    }

    #[inline]
    pub(crate) fn negate_in_place(&mut self) {
        self.negative = !self.negative;
    }

    #[inline]
    pub(crate) fn abs_in_place(&mut self) {
        self.negative = false;
    }

    /// Resize to `len` limbs, all zero. The sign is kept.
    pub(crate) fn grow_and_reinit(&mut self, len: usize) {
        self.limbs.clear();
        self.limbs.resize(len, 0);
    }

    #[inline]
    pub(crate) fn limbs_mut(&mut self) -> &mut LimbBuf {
        &mut self.limbs
    }

    #[inline]
    pub(crate) fn normalize(&mut self) {
        normalize(&mut self.limbs);
    }

    /// Normalize and publish.
    pub(crate) fn finish(mut self) -> Bignum {
        self.normalize();

        let len = self.limbs.len() as isize;
        let count = if self.negative { -len } else { len };
        let b = Bignum {
            limbs: self.limbs,
            count,
        };

        debug_assert!((b.count == 0) == b.limbs.is_empty());
        debug_assert!(b.limbs.last().is_none_or(|&top: &Limb| top != 0));
        b
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finish_normalizes() {
        let mut b = BignumBuilder::from_magnitude(false, smallvec::smallvec![0, 0, 0]);
        b.limbs_mut()[0] = 9;
        b.negate_in_place();
        let b = b.finish();
        assert_eq!(b.count(), -1);
        assert_eq!(b.magnitude(), &[9]);
    }

    #[test]
    fn test_negative_zero_collapses() {
        let mut b = BignumBuilder::from_magnitude(false, smallvec::smallvec![0, 0]);
        b.negate_in_place();
        let b = b.finish();
        assert_eq!(b.count(), 0);
        assert!(b.is_zero());
        assert!(!b.is_negative());
    }

    #[test]
    fn test_grow_and_reinit_keeps_sign() {
        let mut b = BignumBuilder::from_magnitude(true, smallvec::smallvec![7, 7]);
        b.grow_and_reinit(3);
        b.limbs_mut()[2] = 1;
        let b = b.finish();
        assert_eq!(b.count(), -3);
        assert_eq!(b.magnitude(), &[0, 0, 1]);

        let mut c = BignumBuilder::from_bignum(&b);
        c.abs_in_place();
        assert_eq!(c.finish().count(), 3);
    }
}
