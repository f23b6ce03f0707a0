#![cfg(feature = "zeroize")]

use super::Bignum;

impl zeroize::Zeroize for Bignum {
    fn zeroize(&mut self) {
        self.limbs.as_mut_slice().zeroize();
        *self = Bignum::zero();
    }
}
