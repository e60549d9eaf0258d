//! Invariants that hold for every round after every scored guess.
//!
//! They are checked in debug builds after each turn and can be tested
//! on their own.

use crate::digit::CODE_LENGTH;
use crate::record::RecordSink;
use crate::round::{Outcome, Round};
use tracing::{instrument, warn};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants checked together. Implemented for tuples.
pub trait InvariantSet<S> {
    /// Returns every violated invariant, or `Ok(())` if all hold.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }
        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }
        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }
        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Every history entry accounts for at most four digits.
pub struct BoundedFeedbackInvariant;

impl<K: RecordSink> Invariant<Round<K>> for BoundedFeedbackInvariant {
    fn holds(round: &Round<K>) -> bool {
        round
            .history
            .iter()
            .all(|e| usize::from(e.feedback().total()) <= CODE_LENGTH)
    }

    fn description() -> &'static str {
        "Bulls plus cows never exceed four"
    }
}

/// Every revealed slot was placed there by some guess.
pub struct RevealedFromHistoryInvariant;

impl<K: RecordSink> Invariant<Round<K>> for RevealedFromHistoryInvariant {
    fn holds(round: &Round<K>) -> bool {
        round
            .revealed
            .slots()
            .iter()
            .enumerate()
            .all(|(slot, revealed)| match revealed {
                None => true,
                Some(digit) => round
                    .history
                    .iter()
                    .any(|e| e.guess().get(slot) == Some(*digit)),
            })
    }

    fn description() -> &'static str {
        "Revealed slots come from submitted guesses"
    }
}

/// A won round counts every guess as an attempt and ends on four bulls.
pub struct WinMatchesHistoryInvariant;

impl<K: RecordSink> Invariant<Round<K>> for WinMatchesHistoryInvariant {
    fn holds(round: &Round<K>) -> bool {
        match round.outcome() {
            Some(Outcome::Won(victory)) => {
                *victory.attempts() as usize == round.history.len()
                    && round
                        .history
                        .first()
                        .is_some_and(|e| e.feedback().is_solved())
            }
            _ => true,
        }
    }

    fn description() -> &'static str {
        "Won rounds have attempts equal to history length and a solved last guess"
    }
}

/// All round invariants as a composable set.
pub type RoundInvariants = (
    BoundedFeedbackInvariant,
    RevealedFromHistoryInvariant,
    WinMatchesHistoryInvariant,
);

/// Asserts that all round invariants hold (panics on violation in debug builds).
#[instrument(skip(round))]
pub fn assert_invariants<K: RecordSink>(round: &Round<K>) {
    if let Err(violations) = RoundInvariants::check_all(round) {
        for v in &violations {
            warn!(description = %v.description, "Round invariant violated");
        }
        debug_assert!(violations.is_empty(), "Round invariants violated: {violations:?}");
    }
}
