//! Command-line interface for digit_bingo.

use clap::{Parser, Subcommand, ValueEnum};
use digit_bingo_core::{FeedbackStrategy, RepeatPolicy};
use std::path::PathBuf;

/// Digit Bingo - crack a four-digit code by bulls and cows
#[derive(Parser, Debug)]
#[command(name = "digit_bingo")]
#[command(about = "Four-digit bulls and cows, solo or against a friend", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults apply if it is missing)
    #[arg(short, long, default_value = "digit_bingo.toml", global = true)]
    pub config: PathBuf,

    /// Database file for records and settings (overrides the config file)
    #[arg(long, global = true)]
    pub db_path: Option<String>,

    /// Keep records and settings in memory only
    #[arg(long, global = true)]
    pub ephemeral: bool,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play against a code drawn by the computer
    Solo {
        /// Allow repeated digits in the secret
        #[arg(long, conflicts_with = "no_repeats")]
        repeats: bool,

        /// Use four distinct digits in the secret
        #[arg(long)]
        no_repeats: bool,
    },

    /// Play against a friend who holds the secret
    Duel {
        /// How guesses are scored: auto (against your typed code) or manual (per-digit marks)
        #[arg(long)]
        feedback: Option<FeedbackStrategy>,
    },

    /// List won rounds, newest first
    Records {
        /// Delete every stored record
        #[arg(long)]
        clear: bool,
    },

    /// Show or change settings
    Settings {
        /// Turn vibration feedback on or off
        #[arg(long)]
        vibration: Option<Switch>,
    },
}

impl Command {
    /// The repeat policy given on the command line for a solo round.
    pub fn repeat_policy(&self) -> Option<RepeatPolicy> {
        match self {
            Self::Solo {
                repeats,
                no_repeats,
            } if *repeats || *no_repeats => Some(RepeatPolicy::from_allow_repeats(*repeats)),
            _ => None,
        }
    }
}

/// An on/off flag value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Switch {
    /// Enabled.
    On,
    /// Disabled.
    Off,
}

impl Switch {
    /// True for [`Switch::On`].
    pub fn is_on(self) -> bool {
        self == Self::On
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solo_policy_flags() {
        let cli = Cli::parse_from(["digit_bingo", "solo", "--repeats"]);
        assert_eq!(cli.command.repeat_policy(), Some(RepeatPolicy::AllowRepeats));

        let cli = Cli::parse_from(["digit_bingo", "solo", "--no-repeats"]);
        assert_eq!(cli.command.repeat_policy(), Some(RepeatPolicy::NoRepeats));

        let cli = Cli::parse_from(["digit_bingo", "solo"]);
        assert_eq!(cli.command.repeat_policy(), None);

        let result = Cli::try_parse_from(["digit_bingo", "solo", "--repeats", "--no-repeats"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "digit_bingo",
            "duel",
            "--feedback",
            "manual",
            "--db-path",
            "other.db",
        ]);
        assert_eq!(cli.db_path.as_deref(), Some("other.db"));
        assert!(matches!(
            cli.command,
            Command::Duel {
                feedback: Some(FeedbackStrategy::Manual)
            }
        ));
    }

    #[test]
    fn test_settings_switch() {
        let cli = Cli::parse_from(["digit_bingo", "--ephemeral", "settings", "--vibration", "off"]);
        assert!(cli.ephemeral);
        assert!(matches!(
            cli.command,
            Command::Settings {
                vibration: Some(Switch::Off)
            }
        ));
    }
}
