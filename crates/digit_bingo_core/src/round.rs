//! Round state machine.
//!
//! A [`Round`] owns everything one play session needs: the secret (or,
//! in a duel, the locally entered code), the guess buffer, history,
//! revealed slots, the clock and the outcome. Every mutation happens in
//! response to a discrete input (digit, backspace, submit, pause, ...)
//! or a clock tick, so the round needs no locking.
//!
//! ```text
//! solo:  Setup ──choose_policy──▶ Playing ◀──▶ Paused
//! duel:  EnteringCode ──submit──▶ Playing ◀──▶ Paused
//!                                   │  ▲
//!          (manual feedback)  submit│  │confirm / cancel
//!                                   ▼  │
//!                             AwaitingFeedback
//! Playing ──4 bulls──▶ Resolved(Won)
//! Playing ──claim──▶ Resolved(OpponentClaimedWin) ──dismiss──▶ Playing
//! any ──restart──▶ Playing (solo, policy chosen) | EnteringCode (duel)
//! ```

use crate::clock::RoundClock;
use crate::digit::{CODE_LENGTH, Code, Digit};
use crate::entry::{CodeBuffer, KeyOutcome};
use crate::generator::{RepeatPolicy, generate_secret_with};
use crate::invariants::assert_invariants;
use crate::marker::{Marker, MarkerSet};
use crate::reconciler::{DuelReconciler, FeedbackStrategy, PendingFeedback, Reconciliation};
use crate::record::{Mode, RecordEntry, RecordSink};
use crate::scoring::Feedback;
use derive_getters::Getters;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Round data
// ─────────────────────────────────────────────────────────────

/// Where a round is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Phase {
    /// Solo round waiting for a repeat policy.
    #[strum(to_string = "choosing a repeat policy")]
    Setup,
    /// Duel round waiting for the local code.
    #[strum(to_string = "entering the duel code")]
    EnteringCode,
    /// Guesses are accepted.
    #[strum(to_string = "playing")]
    Playing,
    /// A duel guess is waiting for manual markers.
    #[strum(to_string = "awaiting feedback")]
    AwaitingFeedback,
    /// Play is suspended.
    #[strum(to_string = "paused")]
    Paused,
    /// The round has an outcome.
    #[strum(to_string = "resolved")]
    Resolved,
}

/// A cracked code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
pub struct Victory {
    /// Guesses submitted, including the winning one.
    attempts: u32,
    /// Seconds on the clock when the code was cracked.
    elapsed: u32,
}

/// How a round was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// This player cracked the code.
    Won(Victory),
    /// The duel opponent says they cracked theirs first.
    OpponentClaimedWin,
}

/// One scored guess.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct HistoryEntry {
    /// Sequence number within the round, starting at 1.
    id: u32,
    /// The submitted guess.
    guess: Code,
    /// Its bulls and cows.
    feedback: Feedback,
}

impl HistoryEntry {
    /// Bulls scored by this guess.
    pub fn bulls(&self) -> u8 {
        *self.feedback.bulls()
    }

    /// Cows scored by this guess.
    pub fn cows(&self) -> u8 {
        *self.feedback.cows()
    }
}

/// Slots confirmed correct so far. Slots fill once and stay filled until
/// the round restarts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RevealedDigits([Option<Digit>; CODE_LENGTH]);

impl RevealedDigits {
    /// The digit revealed at `slot`, if any.
    pub fn get(&self, slot: usize) -> Option<Digit> {
        self.0.get(slot).copied().flatten()
    }

    /// All slots in order.
    pub fn slots(&self) -> &[Option<Digit>; CODE_LENGTH] {
        &self.0
    }

    /// Number of revealed slots.
    pub fn count(&self) -> usize {
        self.0.iter().flatten().count()
    }

    fn reveal(&mut self, slot: usize, digit: Digit) -> bool {
        match self.0.get_mut(slot) {
            Some(cell @ None) => {
                *cell = Some(digit);
                true
            }
            _ => false,
        }
    }
}

impl std::fmt::Display for RevealedDigits {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for slot in &self.0 {
            match slot {
                Some(d) => write!(f, "{}", d)?,
                None => write!(f, "?")?,
            }
        }
        Ok(())
    }
}

/// Notification for presentation code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundEvent {
    /// A slot was confirmed for the first time this round.
    SlotRevealed {
        /// Slot index (0-3).
        slot: usize,
        /// The confirmed digit.
        digit: Digit,
    },
    /// The code was cracked.
    Won(Victory),
}

/// What a scored guess changed.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct TurnReport {
    /// The new history entry.
    entry: HistoryEntry,
    /// Reveals and the win, in order.
    events: Vec<RoundEvent>,
}

impl TurnReport {
    /// The victory, if this guess won the round.
    pub fn victory(&self) -> Option<Victory> {
        self.events.iter().find_map(|e| match e {
            RoundEvent::Won(v) => Some(*v),
            RoundEvent::SlotRevealed { .. } => None,
        })
    }
}

/// Result of [`Round::submit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// The duel code was locked in and play started.
    CodeLocked,
    /// The guess was scored.
    Scored(TurnReport),
    /// The guess is waiting for manual markers.
    AwaitingFeedback,
}

/// Error for an input the round cannot take right now. The round is
/// unchanged whenever one is returned.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum RoundError {
    /// The operation is not available in this phase.
    #[display("Cannot {} while {}", operation, phase)]
    WrongPhase {
        /// The rejected operation.
        operation: &'static str,
        /// The phase the round was in.
        phase: Phase,
    },

    /// Submit needs four digits.
    #[display("Code has {} of 4 digits", _0)]
    IncompleteCode(usize),

    /// A marker index past the last slot.
    #[display("Slot {} is out of range", _0)]
    SlotOutOfRange(usize),

    /// The operation only exists in the other mode.
    #[display("Cannot {} in a {} round", operation, mode)]
    WrongMode {
        /// The rejected operation.
        operation: &'static str,
        /// The round's mode.
        mode: Mode,
    },
}

impl std::error::Error for RoundError {}

#[derive(Debug, Clone)]
enum Rules {
    Solo { policy: Option<RepeatPolicy> },
    Duel { reconciler: DuelReconciler },
}

// ─────────────────────────────────────────────────────────────
//  Round
// ─────────────────────────────────────────────────────────────

/// One live round, solo or duel.
#[derive(Debug)]
pub struct Round<S> {
    rules: Rules,
    phase: Phase,
    outcome: Option<Outcome>,
    /// Solo: the generated secret. Duel: the locally entered code.
    pub(crate) secret: Option<Code>,
    buffer: CodeBuffer,
    pub(crate) history: Vec<HistoryEntry>,
    pub(crate) revealed: RevealedDigits,
    clock: RoundClock,
    pending: Option<PendingFeedback>,
    next_entry_id: u32,
    rng: StdRng,
    sink: S,
}

impl<S: RecordSink> Round<S> {
    /// A solo round waiting for its repeat policy.
    #[instrument(skip(sink))]
    pub fn solo(sink: S) -> Self {
        Self::solo_with_rng(sink, StdRng::from_entropy())
    }

    /// A solo round drawing secrets from `rng`.
    #[instrument(skip_all)]
    pub fn solo_with_rng(sink: S, rng: StdRng) -> Self {
        info!("New solo round");
        Self::with_rules(Rules::Solo { policy: None }, Phase::Setup, sink, rng)
    }

    /// A duel round waiting for the local code.
    #[instrument(skip(sink))]
    pub fn duel(strategy: FeedbackStrategy, sink: S) -> Self {
        info!(%strategy, "New duel round");
        let rules = Rules::Duel {
            reconciler: DuelReconciler::new(strategy),
        };
        Self::with_rules(rules, Phase::EnteringCode, sink, StdRng::from_entropy())
    }

    fn with_rules(rules: Rules, phase: Phase, sink: S, rng: StdRng) -> Self {
        Self {
            rules,
            phase,
            outcome: None,
            secret: None,
            buffer: CodeBuffer::new(),
            history: Vec::new(),
            revealed: RevealedDigits::default(),
            clock: RoundClock::new(),
            pending: None,
            next_entry_id: 1,
            rng,
            sink,
        }
    }

    // ── Accessors ────────────────────────────────────────────

    /// Solo or duel.
    pub fn mode(&self) -> Mode {
        match self.rules {
            Rules::Solo { .. } => Mode::Solo,
            Rules::Duel { .. } => Mode::Duel,
        }
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The outcome, once resolved.
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// The victory, if the code was cracked.
    pub fn victory(&self) -> Option<Victory> {
        match self.outcome {
            Some(Outcome::Won(v)) => Some(v),
            _ => None,
        }
    }

    /// The solo repeat policy, once chosen.
    pub fn policy(&self) -> Option<RepeatPolicy> {
        match self.rules {
            Rules::Solo { policy } => policy,
            Rules::Duel { .. } => None,
        }
    }

    /// The duel feedback strategy.
    pub fn strategy(&self) -> Option<FeedbackStrategy> {
        match &self.rules {
            Rules::Solo { .. } => None,
            Rules::Duel { reconciler } => Some(reconciler.strategy()),
        }
    }

    /// The code guesses are scored against: the solo secret or the duel code.
    pub fn secret(&self) -> Option<&Code> {
        self.secret.as_ref()
    }

    /// The code being typed: the guess, or the duel code before play starts.
    pub fn buffer(&self) -> &CodeBuffer {
        &self.buffer
    }

    /// Scored guesses, newest first.
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Slots confirmed so far.
    pub fn revealed(&self) -> &RevealedDigits {
        &self.revealed
    }

    /// The round clock.
    pub fn clock(&self) -> &RoundClock {
        &self.clock
    }

    /// Seconds elapsed.
    pub fn elapsed(&self) -> u32 {
        self.clock.elapsed()
    }

    /// The guess waiting for markers, in manual duel rounds.
    pub fn pending(&self) -> Option<&PendingFeedback> {
        self.pending.as_ref()
    }

    /// Digits of the most recent guess per slot.
    pub fn last_guess_digits(&self) -> [Option<Digit>; CODE_LENGTH] {
        let mut digits = [None; CODE_LENGTH];
        if let Some(entry) = self.history.first() {
            for (slot, d) in entry.guess().digits().iter().enumerate() {
                digits[slot] = Some(*d);
            }
        }
        digits
    }

    // ── Setup ────────────────────────────────────────────────

    /// Chooses the solo repeat policy, draws the secret and starts the clock.
    ///
    /// # Errors
    ///
    /// [`RoundError::WrongMode`] for duel rounds, [`RoundError::WrongPhase`]
    /// once a policy has been chosen.
    #[instrument(skip(self), fields(phase = %self.phase))]
    pub fn choose_policy(&mut self, policy: RepeatPolicy) -> Result<(), RoundError> {
        self.require_mode(Mode::Solo, "choose a repeat policy")?;
        self.require_phase(&[Phase::Setup], "choose a repeat policy")?;

        self.rules = Rules::Solo {
            policy: Some(policy),
        };
        self.start_solo(policy);
        Ok(())
    }

    fn start_solo(&mut self, policy: RepeatPolicy) {
        self.secret = Some(generate_secret_with(policy, &mut self.rng));
        self.buffer = if policy.allows_repeats() {
            CodeBuffer::new()
        } else {
            CodeBuffer::distinct()
        };
        self.clear_progress();
        self.clock.restart();
        self.phase = Phase::Playing;
        info!(%policy, "Solo round started");
    }

    fn clear_progress(&mut self) {
        self.history.clear();
        self.revealed = RevealedDigits::default();
        self.pending = None;
        self.outcome = None;
        self.next_entry_id = 1;
    }

    // ── Input ────────────────────────────────────────────────

    /// Appends a digit to the code being typed.
    ///
    /// Returns how the key was handled; a full buffer, a leading zero, or
    /// (in no-repeat solo rounds) a repeated digit leave the buffer as is.
    ///
    /// # Errors
    ///
    /// [`RoundError::WrongPhase`] unless the round is taking input.
    #[instrument(skip(self), fields(phase = %self.phase))]
    pub fn press_digit(&mut self, digit: Digit) -> Result<KeyOutcome, RoundError> {
        self.require_phase(&[Phase::EnteringCode, Phase::Playing], "enter digits")?;
        Ok(self.buffer.push(digit))
    }

    /// Removes the last typed digit. Returns false if there was none.
    ///
    /// # Errors
    ///
    /// [`RoundError::WrongPhase`] unless the round is taking input.
    #[instrument(skip(self), fields(phase = %self.phase))]
    pub fn backspace(&mut self) -> Result<bool, RoundError> {
        self.require_phase(&[Phase::EnteringCode, Phase::Playing], "delete digits")?;
        Ok(self.buffer.backspace())
    }

    /// Submits the typed code.
    ///
    /// While entering a duel code this locks the code in and starts play.
    /// While playing it scores the guess, or in manual duel rounds parks it
    /// until [`Round::confirm_feedback`].
    ///
    /// # Errors
    ///
    /// [`RoundError::IncompleteCode`] with fewer than four digits,
    /// [`RoundError::WrongPhase`] outside code entry and play.
    #[instrument(skip(self), fields(phase = %self.phase, mode = %self.mode()))]
    pub fn submit(&mut self) -> Result<Submission, RoundError> {
        self.require_phase(&[Phase::EnteringCode, Phase::Playing], "submit")?;
        if !self.buffer.is_complete() {
            return Err(RoundError::IncompleteCode(self.buffer.len()));
        }
        let Some(code) = self.buffer.take() else {
            return Err(RoundError::IncompleteCode(self.buffer.len()));
        };

        if self.phase == Phase::EnteringCode {
            self.secret = Some(code);
            self.clock.restart();
            self.phase = Phase::Playing;
            info!("Duel code locked in");
            return Ok(Submission::CodeLocked);
        }

        let Some(secret) = self.secret else {
            warn!("Playing without a code to score against");
            self.buffer.restore(&code);
            return Err(RoundError::WrongPhase {
                operation: "submit",
                phase: self.phase,
            });
        };

        let reconciliation = match &self.rules {
            Rules::Solo { .. } => Reconciliation::Scored {
                markers: MarkerSet::scored(&code, &secret),
                feedback: crate::scoring::score(&code, &secret),
            },
            Rules::Duel { reconciler } => reconciler.reconcile(code, &secret),
        };

        match reconciliation {
            Reconciliation::Scored { feedback, markers } => {
                Ok(Submission::Scored(self.apply_turn(code, markers, feedback)))
            }
            Reconciliation::AwaitingMarks(pending) => {
                self.pending = Some(pending);
                self.phase = Phase::AwaitingFeedback;
                Ok(Submission::AwaitingFeedback)
            }
        }
    }

    // ── Manual duel feedback ─────────────────────────────────

    /// Advances the marker for `slot` on the pending guess.
    ///
    /// # Errors
    ///
    /// [`RoundError::WrongPhase`] with no pending guess,
    /// [`RoundError::SlotOutOfRange`] for a slot past 3.
    #[instrument(skip(self))]
    pub fn cycle_marker(&mut self, slot: usize) -> Result<Marker, RoundError> {
        let phase = self.phase;
        let pending = self.pending.as_mut().ok_or(RoundError::WrongPhase {
            operation: "mark feedback",
            phase,
        })?;
        pending.cycle(slot).ok_or(RoundError::SlotOutOfRange(slot))
    }

    /// Scores the pending guess from its markers.
    ///
    /// # Errors
    ///
    /// [`RoundError::WrongPhase`] with no pending guess.
    #[instrument(skip(self))]
    pub fn confirm_feedback(&mut self) -> Result<TurnReport, RoundError> {
        let pending = self.pending.take().ok_or(RoundError::WrongPhase {
            operation: "confirm feedback",
            phase: self.phase,
        })?;
        let (guess, markers, feedback) = DuelReconciler::confirm(pending);
        self.phase = Phase::Playing;
        Ok(self.apply_turn(guess, markers, feedback))
    }

    /// Drops the pending markers and puts the guess back in the buffer.
    ///
    /// # Errors
    ///
    /// [`RoundError::WrongPhase`] with no pending guess.
    #[instrument(skip(self))]
    pub fn cancel_feedback(&mut self) -> Result<(), RoundError> {
        let pending = self.pending.take().ok_or(RoundError::WrongPhase {
            operation: "cancel feedback",
            phase: self.phase,
        })?;
        self.buffer.restore(pending.guess());
        self.phase = Phase::Playing;
        debug!("Manual feedback cancelled");
        Ok(())
    }

    fn apply_turn(&mut self, guess: Code, markers: MarkerSet, feedback: Feedback) -> TurnReport {
        let entry = HistoryEntry {
            id: self.next_entry_id,
            guess,
            feedback,
        };
        self.next_entry_id += 1;
        self.history.insert(0, entry.clone());

        let mut events = Vec::new();
        for (slot, digit) in guess.digits().iter().enumerate() {
            if markers.is_correct(slot) && self.revealed.reveal(slot, *digit) {
                events.push(RoundEvent::SlotRevealed {
                    slot,
                    digit: *digit,
                });
            }
        }

        debug!(
            entry_id = entry.id,
            %feedback,
            revealed = self.revealed.count(),
            "Guess scored"
        );

        if feedback.is_solved() {
            self.clock.stop();
            let victory = Victory {
                attempts: self.history.len() as u32,
                elapsed: self.clock.elapsed(),
            };
            self.outcome = Some(Outcome::Won(victory));
            self.phase = Phase::Resolved;
            info!(
                attempts = victory.attempts,
                elapsed = victory.elapsed,
                mode = %self.mode(),
                "Code cracked"
            );
            self.sink
                .add_record(RecordEntry::new(self.mode(), victory.attempts, victory.elapsed));
            events.push(RoundEvent::Won(victory));
        }

        assert_invariants(self);
        TurnReport { entry, events }
    }

    // ── Pause / resume ───────────────────────────────────────

    /// Suspends play and the clock.
    ///
    /// # Errors
    ///
    /// [`RoundError::WrongPhase`] unless playing.
    #[instrument(skip(self))]
    pub fn pause(&mut self) -> Result<(), RoundError> {
        self.require_phase(&[Phase::Playing], "pause")?;
        self.clock.stop();
        self.phase = Phase::Paused;
        debug!(elapsed = self.clock.elapsed(), "Paused");
        Ok(())
    }

    /// Resumes play and the clock from the retained time.
    ///
    /// # Errors
    ///
    /// [`RoundError::WrongPhase`] unless paused.
    #[instrument(skip(self))]
    pub fn resume(&mut self) -> Result<(), RoundError> {
        self.require_phase(&[Phase::Paused], "resume")?;
        self.clock.resume();
        self.phase = Phase::Playing;
        debug!(elapsed = self.clock.elapsed(), "Resumed");
        Ok(())
    }

    // ── Duel claims ──────────────────────────────────────────

    /// Records that the opponent says they cracked their code first.
    ///
    /// The clock keeps running and [`Round::dismiss_claim`] returns to play.
    ///
    /// # Errors
    ///
    /// [`RoundError::WrongMode`] in solo rounds, [`RoundError::WrongPhase`]
    /// unless playing.
    #[instrument(skip(self))]
    pub fn claim_opponent_win(&mut self) -> Result<(), RoundError> {
        self.require_mode(Mode::Duel, "claim an opponent win")?;
        self.require_phase(&[Phase::Playing], "claim an opponent win")?;
        self.outcome = Some(Outcome::OpponentClaimedWin);
        self.phase = Phase::Resolved;
        info!(attempts = self.history.len(), "Opponent claimed the win");
        Ok(())
    }

    /// Clears an opponent claim and keeps playing.
    ///
    /// # Errors
    ///
    /// [`RoundError::WrongPhase`] unless an opponent claim is showing.
    #[instrument(skip(self))]
    pub fn dismiss_claim(&mut self) -> Result<(), RoundError> {
        if self.outcome != Some(Outcome::OpponentClaimedWin) {
            return Err(RoundError::WrongPhase {
                operation: "dismiss a claim",
                phase: self.phase,
            });
        }
        self.outcome = None;
        self.phase = Phase::Playing;
        Ok(())
    }

    // ── Restart / clock ──────────────────────────────────────

    /// Starts over.
    ///
    /// Solo rounds with a chosen policy draw a fresh secret and restart the
    /// clock from zero; without a policy nothing changes. Duel rounds go
    /// back to entering a code with the clock stopped at zero.
    #[instrument(skip(self), fields(phase = %self.phase, mode = %self.mode()))]
    pub fn restart(&mut self) {
        match self.rules {
            Rules::Solo { policy: Some(policy) } => self.start_solo(policy),
            Rules::Solo { policy: None } => debug!("No policy yet, nothing to restart"),
            Rules::Duel { .. } => {
                self.secret = None;
                self.buffer = CodeBuffer::new();
                self.clear_progress();
                self.clock.reset();
                self.phase = Phase::EnteringCode;
                info!("Duel round reset");
            }
        }
    }

    /// Delivers one clock tick. Returns whether it was counted.
    pub fn tick(&mut self) -> bool {
        self.clock.tick()
    }

    /// Stops the clock, for when the round's screen goes away.
    #[instrument(skip(self))]
    pub fn close(&mut self) {
        self.clock.stop();
    }

    // ── Guards ───────────────────────────────────────────────

    fn require_phase(&self, allowed: &[Phase], operation: &'static str) -> Result<(), RoundError> {
        if allowed.contains(&self.phase) {
            Ok(())
        } else {
            Err(RoundError::WrongPhase {
                operation,
                phase: self.phase,
            })
        }
    }

    fn require_mode(&self, mode: Mode, operation: &'static str) -> Result<(), RoundError> {
        if self.mode() == mode {
            Ok(())
        } else {
            Err(RoundError::WrongMode {
                operation,
                mode: self.mode(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::DiscardRecords;

    fn d(v: u8) -> Digit {
        Digit::new(v).unwrap()
    }

    fn type_code(round: &mut Round<DiscardRecords>, code: &str) {
        for c in code.chars() {
            round.press_digit(Digit::from_char(c).unwrap()).unwrap();
        }
    }

    #[test]
    fn test_solo_starts_in_setup() {
        let mut round = Round::solo_with_rng(DiscardRecords, StdRng::seed_from_u64(1));
        assert_eq!(round.phase(), Phase::Setup);
        assert!(round.secret().is_none());
        assert!(round.press_digit(d(1)).is_err());

        round.choose_policy(RepeatPolicy::NoRepeats).unwrap();
        assert_eq!(round.phase(), Phase::Playing);
        assert!(round.clock().is_running());
        assert!(round.choose_policy(RepeatPolicy::AllowRepeats).is_err());
    }

    #[test]
    fn test_submit_requires_four_digits() {
        let mut round = Round::solo_with_rng(DiscardRecords, StdRng::seed_from_u64(2));
        round.choose_policy(RepeatPolicy::AllowRepeats).unwrap();
        type_code(&mut round, "123");
        assert_eq!(round.submit(), Err(RoundError::IncompleteCode(3)));
        assert_eq!(round.buffer().len(), 3);
        assert!(round.history().is_empty());
    }

    #[test]
    fn test_restart_without_policy_is_noop() {
        let mut round = Round::solo_with_rng(DiscardRecords, StdRng::seed_from_u64(3));
        round.restart();
        assert_eq!(round.phase(), Phase::Setup);
        assert!(!round.clock().is_running());
    }

    #[test]
    fn test_claims_are_duel_only() {
        let mut round = Round::solo_with_rng(DiscardRecords, StdRng::seed_from_u64(4));
        round.choose_policy(RepeatPolicy::NoRepeats).unwrap();
        assert!(matches!(
            round.claim_opponent_win(),
            Err(RoundError::WrongMode { mode: Mode::Solo, .. })
        ));
    }

    #[test]
    fn test_reveal_is_set_once() {
        let mut revealed = RevealedDigits::default();
        assert!(revealed.reveal(1, d(5)));
        assert!(!revealed.reveal(1, d(6)));
        assert_eq!(revealed.get(1), Some(d(5)));
        assert_eq!(revealed.to_string(), "?5??");
    }
}
