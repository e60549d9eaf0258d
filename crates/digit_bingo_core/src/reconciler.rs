//! Duel feedback reconciliation.
//!
//! In a duel the secret lives in the opponent's head, so feedback for a
//! guess either comes from a code typed into this device ([`FeedbackStrategy::Auto`])
//! or is marked digit by digit by the players ([`FeedbackStrategy::Manual`]).

use crate::digit::Code;
use crate::marker::{Marker, MarkerSet};
use crate::scoring::Feedback;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// How duel guesses get their feedback.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum FeedbackStrategy {
    /// Score against the locally entered code.
    #[default]
    Auto,
    /// Collect per-digit markers and derive the score from them.
    Manual,
}

/// A guess waiting for its markers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingFeedback {
    guess: Code,
    markers: MarkerSet,
}

impl PendingFeedback {
    fn new(guess: Code) -> Self {
        Self {
            guess,
            markers: MarkerSet::new(),
        }
    }

    /// The guess being marked.
    pub fn guess(&self) -> &Code {
        &self.guess
    }

    /// Markers placed so far.
    pub fn markers(&self) -> &MarkerSet {
        &self.markers
    }

    /// Advances the marker at `slot`.
    pub fn cycle(&mut self, slot: usize) -> Option<Marker> {
        self.markers.cycle(slot)
    }
}

/// Outcome of handing a guess to the reconciler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reconciliation {
    /// Feedback is known now.
    Scored {
        /// The bulls and cows.
        feedback: Feedback,
        /// Slot-level view of the same result.
        markers: MarkerSet,
    },
    /// Feedback must be marked before the guess can be scored.
    AwaitingMarks(PendingFeedback),
}

/// Produces feedback for duel guesses under a fixed strategy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuelReconciler {
    strategy: FeedbackStrategy,
}

impl DuelReconciler {
    /// Creates a reconciler for the round's strategy.
    #[instrument]
    pub fn new(strategy: FeedbackStrategy) -> Self {
        Self { strategy }
    }

    /// The strategy chosen at round setup.
    pub fn strategy(&self) -> FeedbackStrategy {
        self.strategy
    }

    /// Starts reconciliation of `guess` against the locally entered `code`.
    #[instrument(skip_all, fields(strategy = %self.strategy))]
    pub fn reconcile(&self, guess: Code, code: &Code) -> Reconciliation {
        match self.strategy {
            FeedbackStrategy::Auto => {
                let markers = MarkerSet::scored(&guess, code);
                let feedback = markers.feedback();
                debug!(%feedback, "Guess auto-scored");
                Reconciliation::Scored { feedback, markers }
            }
            FeedbackStrategy::Manual => {
                debug!("Guess awaiting manual markers");
                Reconciliation::AwaitingMarks(PendingFeedback::new(guess))
            }
        }
    }

    /// Finishes a manual reconciliation, returning the guess and its feedback.
    #[instrument(skip_all)]
    pub fn confirm(pending: PendingFeedback) -> (Code, MarkerSet, Feedback) {
        let feedback = pending.markers.feedback();
        debug!(%feedback, "Manual markers confirmed");
        (pending.guess, pending.markers, feedback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(s: &str) -> Code {
        s.parse().unwrap()
    }

    #[test]
    fn test_auto_strategy_scores_immediately() {
        let reconciler = DuelReconciler::new(FeedbackStrategy::Auto);
        match reconciler.reconcile(code("1243"), &code("1234")) {
            Reconciliation::Scored { feedback, markers } => {
                assert_eq!(feedback, Feedback::new(2, 2));
                assert!(markers.is_correct(0));
                assert!(!markers.is_correct(2));
            }
            other => panic!("expected scored result, got {other:?}"),
        }
    }

    #[test]
    fn test_manual_strategy_defers_to_markers() {
        let reconciler = DuelReconciler::new(FeedbackStrategy::Manual);
        let Reconciliation::AwaitingMarks(mut pending) =
            reconciler.reconcile(code("5678"), &code("1234"))
        else {
            panic!("manual strategy must wait for markers");
        };

        assert_eq!(pending.guess(), &code("5678"));
        pending.cycle(0);
        pending.cycle(0);
        pending.cycle(2);

        let (guess, markers, feedback) = DuelReconciler::confirm(pending);
        assert_eq!(guess, code("5678"));
        assert!(markers.is_correct(0));
        assert_eq!(feedback, Feedback::new(1, 1));
    }

    #[test]
    fn test_strategy_parses_from_config_text() {
        assert_eq!("manual".parse::<FeedbackStrategy>(), Ok(FeedbackStrategy::Manual));
        assert_eq!(FeedbackStrategy::Auto.to_string(), "auto");
    }
}
