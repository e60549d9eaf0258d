//! Digit Bingo core - pure round logic for a four-digit code breaker.
//!
//! Secrets are four decimal digits with no leading zero. Each guess
//! scores bulls (right digit, right slot) and cows (right digit, other
//! slot). Two modes share one [`Round`] state machine:
//!
//! - **Solo**: the round draws the secret under a [`RepeatPolicy`] and
//!   scores guesses itself.
//! - **Duel**: the secret belongs to a human opponent. Guesses are scored
//!   against a locally typed code ([`FeedbackStrategy::Auto`]) or from
//!   per-digit markers ([`FeedbackStrategy::Manual`]).
//!
//! Won rounds are handed to a [`RecordSink`].
//!
//! # Example
//!
//! ```
//! use digit_bingo_core::{DiscardRecords, RepeatPolicy, Round, Submission};
//!
//! let mut round = Round::solo(DiscardRecords);
//! round.choose_policy(RepeatPolicy::NoRepeats).unwrap();
//!
//! let secret = *round.secret().unwrap();
//! for digit in secret.digits() {
//!     round.press_digit(*digit).unwrap();
//! }
//! let Submission::Scored(report) = round.submit().unwrap() else {
//!     unreachable!("solo guesses are scored immediately")
//! };
//! assert_eq!(report.victory().map(|v| *v.attempts()), Some(1));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod clock;
mod digit;
mod entry;
mod generator;
mod invariants;
mod marker;
mod reconciler;
mod record;
mod round;
mod scoring;

pub use clock::{RoundClock, format_clock};
pub use digit::{CODE_LENGTH, Code, CodeError, Digit};
pub use entry::{CodeBuffer, KeyOutcome};
pub use generator::{RepeatPolicy, generate_secret, generate_secret_with};
pub use invariants::{
    BoundedFeedbackInvariant, Invariant, InvariantSet, InvariantViolation,
    RevealedFromHistoryInvariant, RoundInvariants, WinMatchesHistoryInvariant,
};
pub use marker::{Marker, MarkerSet};
pub use reconciler::{DuelReconciler, FeedbackStrategy, PendingFeedback, Reconciliation};
pub use record::{DiscardRecords, Mode, RecordEntry, RecordSink};
pub use round::{
    HistoryEntry, Outcome, Phase, RevealedDigits, Round, RoundError, RoundEvent, Submission,
    TurnReport, Victory,
};
pub use scoring::{Feedback, score};
