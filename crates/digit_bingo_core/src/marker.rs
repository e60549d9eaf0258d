//! Per-digit feedback markers for duel rounds.

use crate::digit::{CODE_LENGTH, Code};
use crate::scoring::Feedback;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// What the opponent says about one guessed digit.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Marker {
    /// Digit is not in the code.
    #[default]
    Absent,
    /// Digit is in the code at another slot.
    Present,
    /// Digit is in the code at this slot.
    Correct,
}

impl Marker {
    /// The marker after one more activation: Absent, Present, Correct, Absent, ...
    pub fn next(self) -> Self {
        match self {
            Self::Absent => Self::Present,
            Self::Present => Self::Correct,
            Self::Correct => Self::Absent,
        }
    }
}

/// Four markers, one per guessed slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MarkerSet([Marker; CODE_LENGTH]);

impl MarkerSet {
    /// All slots absent.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a set from explicit markers.
    pub fn from_markers(markers: [Marker; CODE_LENGTH]) -> Self {
        Self(markers)
    }

    /// Computes the markers a scorer would place for `guess` against `secret`.
    #[instrument(skip_all)]
    pub fn scored(guess: &Code, secret: &Code) -> Self {
        let mut markers = [Marker::Absent; CODE_LENGTH];
        for (slot, (g, s)) in guess.digits().iter().zip(secret.digits()).enumerate() {
            markers[slot] = if g == s {
                Marker::Correct
            } else if secret.contains(*g) {
                Marker::Present
            } else {
                Marker::Absent
            };
        }
        Self(markers)
    }

    /// Advances the marker at `slot`. Returns the new marker, or `None`
    /// if `slot` is out of range.
    pub fn cycle(&mut self, slot: usize) -> Option<Marker> {
        let marker = self.0.get_mut(slot)?;
        *marker = marker.next();
        Some(*marker)
    }

    /// Returns the markers in slot order.
    pub fn markers(&self) -> &[Marker; CODE_LENGTH] {
        &self.0
    }

    /// True if the marker at `slot` is [`Marker::Correct`].
    pub fn is_correct(&self, slot: usize) -> bool {
        matches!(self.0.get(slot), Some(Marker::Correct))
    }

    /// Counts correct markers as bulls and present markers as cows.
    ///
    /// Nothing checks that the markers are consistent with any real secret.
    pub fn feedback(&self) -> Feedback {
        let bulls = self.0.iter().filter(|m| **m == Marker::Correct).count() as u8;
        let cows = self.0.iter().filter(|m| **m == Marker::Present).count() as u8;
        Feedback::new(bulls, cows)
    }
}
