//! Digit-at-a-time code entry.

use crate::digit::{CODE_LENGTH, Code, Digit};
use tracing::{instrument, trace};

/// Result of pressing a digit key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// The digit was appended.
    Accepted,
    /// The buffer already holds four digits.
    Full,
    /// Zero cannot start a code.
    LeadingZero,
    /// The buffer forbids repeats and already holds this digit.
    Repeated,
}

impl KeyOutcome {
    /// True if the buffer changed.
    pub fn is_accepted(self) -> bool {
        matches!(self, Self::Accepted)
    }
}

/// A code being composed, 0-4 digits long.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeBuffer {
    digits: Vec<Digit>,
    reject_repeats: bool,
}

impl CodeBuffer {
    /// An empty buffer that accepts repeated digits.
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty buffer that ignores a digit it already holds.
    pub fn distinct() -> Self {
        Self {
            digits: Vec::with_capacity(CODE_LENGTH),
            reject_repeats: true,
        }
    }

    /// Appends `digit` unless a rule forbids it.
    #[instrument(skip(self), fields(len = self.digits.len()))]
    pub fn push(&mut self, digit: Digit) -> KeyOutcome {
        let outcome = if self.digits.len() >= CODE_LENGTH {
            KeyOutcome::Full
        } else if self.digits.is_empty() && digit.is_zero() {
            KeyOutcome::LeadingZero
        } else if self.reject_repeats && self.digits.contains(&digit) {
            KeyOutcome::Repeated
        } else {
            self.digits.push(digit);
            KeyOutcome::Accepted
        };
        trace!(?outcome, "Digit key handled");
        outcome
    }

    /// Removes the last digit. Returns false if the buffer was empty.
    pub fn backspace(&mut self) -> bool {
        self.digits.pop().is_some()
    }

    /// Number of digits entered.
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    /// True when nothing has been entered.
    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// True when four digits have been entered.
    pub fn is_complete(&self) -> bool {
        self.digits.len() == CODE_LENGTH
    }

    /// Digits entered so far.
    pub fn digits(&self) -> &[Digit] {
        &self.digits
    }

    /// The finished code, if four digits have been entered.
    pub fn code(&self) -> Option<Code> {
        let digits: [Digit; CODE_LENGTH] = self.digits.as_slice().try_into().ok()?;
        Some(Code::new(digits))
    }

    /// Takes the finished code and empties the buffer. Leaves the buffer
    /// untouched if it is not complete.
    pub fn take(&mut self) -> Option<Code> {
        let code = self.code()?;
        self.digits.clear();
        Some(code)
    }

    /// Replaces the contents with `code`.
    pub fn restore(&mut self, code: &Code) {
        self.digits = code.digits().to_vec();
    }
}

impl std::fmt::Display for CodeBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for slot in 0..CODE_LENGTH {
            match self.digits.get(slot) {
                Some(d) => write!(f, "{}", d)?,
                None => write!(f, "_")?,
            }
        }
        Ok(())
    }
}
