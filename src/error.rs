use core::fmt;

/// The error returned when a numeral string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseBignumError {
    kind: ParseErrorKind,
}

/// What went wrong while parsing a numeral string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseErrorKind {
    /// The digit run after the optional sign was empty.
    Empty,
    /// A character is not a digit of the requested radix.
    InvalidDigit {
        /// Byte offset of the offending character in the input.
        position: usize,
        /// The offending character.
        digit: char,
    },
    /// The radix is outside `2..=36`.
    InvalidRadix(u32),
}

impl ParseBignumError {
    pub(crate) fn empty() -> Self {
        ParseBignumError {
            kind: ParseErrorKind::Empty,
        }
    }

    pub(crate) fn invalid_digit(position: usize, digit: char) -> Self {
        ParseBignumError {
            kind: ParseErrorKind::InvalidDigit { position, digit },
        }
    }

    pub(crate) fn invalid_radix(radix: u32) -> Self {
        ParseBignumError {
            kind: ParseErrorKind::InvalidRadix(radix),
        }
    }

    /// Returns the reason parsing failed.
    pub fn kind(&self) -> &ParseErrorKind {
        &self.kind
    }
}

impl fmt::Display for ParseBignumError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ParseErrorKind::Empty => f.write_str("cannot parse integer from empty digit run"),
            ParseErrorKind::InvalidDigit { position, digit } => {
                write!(f, "invalid digit {:?} at position {}", digit, position)
            }
            ParseErrorKind::InvalidRadix(radix) => {
                write!(f, "radix must be in the range 2..=36, got {}", radix)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseBignumError {}

/// The error returned when a big integer does not fit a native integer type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TryFromBignumError {
    target: &'static str,
    min: i128,
    max: u128,
}

impl TryFromBignumError {
    pub(crate) fn new(target: &'static str, min: i128, max: u128) -> Self {
        TryFromBignumError { target, min, max }
    }

    /// Name of the native type the conversion targeted.
    pub fn target(&self) -> &'static str {
        self.target
    }

    /// Smallest value the target type can hold.
    pub fn min(&self) -> i128 {
        self.min
    }

    /// Largest value the target type can hold.
    pub fn max(&self) -> u128 {
        self.max
    }
}

impl fmt::Display for TryFromBignumError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "value out of range for {}, expected an integer in {}..={}",
            self.target, self.min, self.max
        )
    }
}

#[cfg(feature = "std")]
impl std::error::Error for TryFromBignumError {}

/// Errors raised by the checked arithmetic entry points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ArithmeticError {
    /// The divisor of a division or modulo was zero.
    DivisionByZero,
}

impl fmt::Display for ArithmeticError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArithmeticError::DivisionByZero => f.write_str("attempt to divide by zero"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ArithmeticError {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_parse_error_display() {
        assert_eq!(
            ParseBignumError::empty().to_string(),
            "cannot parse integer from empty digit run"
        );
        assert_eq!(
            ParseBignumError::invalid_digit(3, 'z').to_string(),
            "invalid digit 'z' at position 3"
        );
        assert_eq!(
            ParseBignumError::invalid_radix(37).to_string(),
            "radix must be in the range 2..=36, got 37"
        );
    }

    #[test]
    fn test_range_error_reports_bounds() {
        let err = TryFromBignumError::new("i8", -128, 127);
        assert_eq!(err.target(), "i8");
        assert_eq!(err.min(), -128);
        assert_eq!(err.max(), 127);
        assert_eq!(
            err.to_string(),
            "value out of range for i8, expected an integer in -128..=127"
        );
    }
}
