//! Secret generation by rejection sampling.

use crate::digit::{CODE_LENGTH, Code, Digit};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Whether a generated secret may repeat digits.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
pub enum RepeatPolicy {
    /// All four digits are pairwise distinct.
    #[strum(to_string = "No Repeats")]
    NoRepeats,
    /// Digits may repeat.
    #[strum(to_string = "Allow Repeats")]
    AllowRepeats,
}

impl RepeatPolicy {
    /// Maps the `allow_repeats` toggle onto a policy.
    pub fn from_allow_repeats(allow_repeats: bool) -> Self {
        if allow_repeats {
            Self::AllowRepeats
        } else {
            Self::NoRepeats
        }
    }

    /// True if repeated digits are allowed.
    pub fn allows_repeats(self) -> bool {
        matches!(self, Self::AllowRepeats)
    }
}

/// Draws a secret with the thread-local RNG.
#[instrument]
pub fn generate_secret(policy: RepeatPolicy) -> Code {
    generate_secret_with(policy, &mut rand::thread_rng())
}

/// Draws a secret from `rng`.
///
/// Digits are drawn uniformly and appended unless rejected: a zero is
/// rejected while the code is empty, and under [`RepeatPolicy::NoRepeats`]
/// a digit already placed is rejected. The loop ends once four digits
/// have been accepted.
#[instrument(skip(rng))]
pub fn generate_secret_with<R: Rng>(policy: RepeatPolicy, rng: &mut R) -> Code {
    let mut digits: Vec<Digit> = Vec::with_capacity(CODE_LENGTH);
    let mut rejected = 0usize;

    while digits.len() < CODE_LENGTH {
        let Some(draw) = Digit::new(rng.gen_range(0..10)) else {
            continue;
        };

        if digits.is_empty() && draw.is_zero() {
            rejected += 1;
            continue;
        }
        if !policy.allows_repeats() && digits.contains(&draw) {
            rejected += 1;
            continue;
        }
        digits.push(draw);
    }

    debug!(?policy, rejected, "Secret generated");
    Code::new([digits[0], digits[1], digits[2], digits[3]])
}
