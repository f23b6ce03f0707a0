use core::fmt;

/// Number of value bits in a [`Fixnum`], sign included.
pub const FIXNUM_BITS: u32 = 62;

/// Largest value representable as a [`Fixnum`], `2^61 - 1`.
pub const MOST_POSITIVE_FIXNUM: i64 = (1 << (FIXNUM_BITS - 1)) - 1;

/// Smallest value representable as a [`Fixnum`], `-2^61`.
pub const MOST_NEGATIVE_FIXNUM: i64 = -(1 << (FIXNUM_BITS - 1));

/// A small immediate integer in `MOST_NEGATIVE_FIXNUM..=MOST_POSITIVE_FIXNUM`.
///
/// The range leaves headroom in an `i64`, so the sum, difference or negation
/// of two fixnums never overflows the native type.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Fixnum(i64);

impl Fixnum {
    /// Zero.
    pub const ZERO: Fixnum = Fixnum(0);

    /// Wrap `value` if it lies in the fixnum range.
    #[inline]
    pub const fn new(value: i64) -> Option<Fixnum> {
        if value >= MOST_NEGATIVE_FIXNUM && value <= MOST_POSITIVE_FIXNUM {
            Some(Fixnum(value))
        } else {
            None
        }
    }

    /// The wrapped value.
    #[inline]
    pub const fn get(self) -> i64 {
        self.0
    }

    /// Whether a native value would fit.
    #[inline]
    pub const fn fits(value: i128) -> bool {
        value >= MOST_NEGATIVE_FIXNUM as i128 && value <= MOST_POSITIVE_FIXNUM as i128
    }
}

impl fmt::Debug for Fixnum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fixnum({})", self.0)
    }
}

impl fmt::Display for Fixnum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<Fixnum> for i64 {
    #[inline]
    fn from(n: Fixnum) -> i64 {
        n.0
    }
}

macro_rules! impl_fixnum_from_narrow {
    ($($T:ty),*) => {$(
        impl From<$T> for Fixnum {
            #[inline]
            fn from(n: $T) -> Fixnum {
                Fixnum(i64::from(n))
            }
        }
    )*};
}

impl_fixnum_from_narrow!(i8, i16, i32, u8, u16, u32);
