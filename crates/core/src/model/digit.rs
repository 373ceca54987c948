use std::fmt;

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DigitError {
    #[error("digit value out of range: {0}")]
    OutOfRange(u8),

    #[error("not a decimal digit: {0:?}")]
    NotADigit(char),
}

/// A single decimal digit, 0 through 9.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Digit(u8);

impl Digit {
    /// Creates a `Digit` from its numeric value.
    ///
    /// # Errors
    ///
    /// Returns `DigitError::OutOfRange` for values above 9.
    pub fn new(value: u8) -> Result<Self, DigitError> {
        if value > 9 {
            return Err(DigitError::OutOfRange(value));
        }
        Ok(Self(value))
    }

    /// Returns the numeric value.
    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }

    /// Returns the ASCII character for this digit.
    #[must_use]
    pub fn as_char(self) -> char {
        char::from(b'0' + self.0)
    }
}

impl TryFrom<char> for Digit {
    type Error = DigitError;

    fn try_from(ch: char) -> Result<Self, Self::Error> {
        ch.to_digit(10)
            .and_then(|value| u8::try_from(value).ok())
            .map(Self)
            .ok_or(DigitError::NotADigit(ch))
    }
}

impl TryFrom<u8> for Digit {
    type Error = DigitError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Debug for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digit({})", self.0)
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
