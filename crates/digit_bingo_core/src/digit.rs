//! Digits and four-digit codes.
//!
//! A [`Code`] is the shared shape of secrets and guesses: exactly
//! [`CODE_LENGTH`] decimal digits in order. Parsing only checks shape;
//! the leading-zero rule is enforced where codes are produced (the
//! generator and the entry buffer).

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Number of digits in every secret and guess.
pub const CODE_LENGTH: usize = 4;

/// A single decimal digit (0-9).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Digit(u8);

impl Digit {
    /// The digit zero, which may never lead a code.
    pub const ZERO: Digit = Digit(0);

    /// Creates a digit from its numeric value.
    ///
    /// Returns `None` for values above 9.
    pub fn new(value: u8) -> Option<Self> {
        (value <= 9).then_some(Self(value))
    }

    /// Parses a digit from an ASCII character.
    pub fn from_char(c: char) -> Option<Self> {
        c.to_digit(10).map(|d| Self(d as u8))
    }

    /// Returns the numeric value.
    pub fn value(self) -> u8 {
        self.0
    }

    /// Returns the ASCII character for this digit.
    pub fn as_char(self) -> char {
        char::from(b'0' + self.0)
    }

    /// True for the digit zero.
    pub fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl TryFrom<u8> for Digit {
    type Error = CodeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(CodeError::NotADigit(char::from(b'0'.saturating_add(value))))
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> Self {
        digit.0
    }
}

impl std::fmt::Display for Digit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// An ordered sequence of exactly four digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Code([Digit; CODE_LENGTH]);

impl Code {
    /// Creates a code from four digits.
    pub fn new(digits: [Digit; CODE_LENGTH]) -> Self {
        Self(digits)
    }

    /// Returns the digits in slot order.
    pub fn digits(&self) -> &[Digit; CODE_LENGTH] {
        &self.0
    }

    /// Returns the digit at `slot`, or `None` past the end.
    pub fn get(&self, slot: usize) -> Option<Digit> {
        self.0.get(slot).copied()
    }

    /// True if `digit` appears anywhere in the code.
    pub fn contains(&self, digit: Digit) -> bool {
        self.0.contains(&digit)
    }

    /// True if the first digit is zero.
    pub fn has_leading_zero(&self) -> bool {
        self.0[0].is_zero()
    }

    /// True if all four digits are pairwise distinct.
    pub fn has_distinct_digits(&self) -> bool {
        self.0
            .iter()
            .enumerate()
            .all(|(i, d)| !self.0[i + 1..].contains(d))
    }
}

impl std::str::FromStr for Code {
    type Err = CodeError;

    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.trim().chars().collect();
        if chars.len() != CODE_LENGTH {
            return Err(CodeError::WrongLength(chars.len()));
        }

        let mut digits = [Digit::ZERO; CODE_LENGTH];
        for (slot, c) in chars.into_iter().enumerate() {
            digits[slot] = Digit::from_char(c).ok_or(CodeError::NotADigit(c))?;
        }
        Ok(Self(digits))
    }
}

impl TryFrom<String> for Code {
    type Error = CodeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Code> for String {
    fn from(code: Code) -> Self {
        code.to_string()
    }
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for digit in &self.0 {
            write!(f, "{}", digit)?;
        }
        Ok(())
    }
}

/// Error produced when text cannot be read as a code.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum CodeError {
    /// The text did not have exactly four characters.
    #[display("Code must have 4 digits, got {}", _0)]
    WrongLength(usize),

    /// A character was not a decimal digit.
    #[display("'{}' is not a digit", _0)]
    NotADigit(char),
}

impl std::error::Error for CodeError {}
