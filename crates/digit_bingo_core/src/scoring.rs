//! Bulls-and-cows scoring.

use crate::digit::{CODE_LENGTH, Code};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Bulls and cows for one guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Getters)]
pub struct Feedback {
    /// Digits right in both value and position.
    bulls: u8,
    /// Digits present in the secret at another position.
    cows: u8,
}

impl Feedback {
    /// Creates feedback from raw counts.
    ///
    /// Callers keep `bulls + cows <= 4`; the scorer and the marker
    /// set can never produce more.
    pub fn new(bulls: u8, cows: u8) -> Self {
        Self { bulls, cows }
    }

    /// True when every slot is a bull.
    pub fn is_solved(&self) -> bool {
        usize::from(self.bulls) == CODE_LENGTH
    }

    /// Total number of digits accounted for.
    pub fn total(&self) -> u8 {
        self.bulls + self.cows
    }
}

impl std::fmt::Display for Feedback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}B {}C", self.bulls, self.cows)
    }
}

/// Scores `guess` against `secret`.
///
/// A slot whose digits match is a bull. Otherwise the slot is a cow if
/// the guess digit appears anywhere in the secret. Secret digits are not
/// consumed, so a guess that repeats a digit the secret holds once scores
/// a cow for every non-matching repeat: `1122` against `1234` is one bull
/// and three cows.
#[instrument(skip_all)]
pub fn score(guess: &Code, secret: &Code) -> Feedback {
    let mut feedback = Feedback::default();
    for (g, s) in guess.digits().iter().zip(secret.digits()) {
        if g == s {
            feedback.bulls += 1;
        } else if secret.contains(*g) {
            feedback.cows += 1;
        }
    }
    feedback
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(s: &str) -> Code {
        s.parse().unwrap()
    }

    #[test]
    fn test_self_match_is_four_bulls() {
        let fb = score(&code("5170"), &code("5170"));
        assert_eq!(fb, Feedback::new(4, 0));
        assert!(fb.is_solved());
    }

    #[test]
    fn test_reversed_is_all_cows() {
        assert_eq!(score(&code("1234"), &code("4321")), Feedback::new(0, 4));
    }

    #[test]
    fn test_mixed_bulls_and_cows() {
        assert_eq!(score(&code("1243"), &code("1234")), Feedback::new(2, 2));
    }

    #[test]
    fn test_repeated_guess_digits_are_not_consumed() {
        assert_eq!(score(&code("1122"), &code("1234")), Feedback::new(1, 3));
    }

    #[test]
    fn test_no_overlap() {
        assert_eq!(score(&code("5678"), &code("1234")), Feedback::new(0, 0));
    }
}
