//! Line-oriented terminal session driving one round.
//!
//! Each input line is parsed into an [`Input`], applied to the round, and
//! answered with a [`Reply`]. [`Session::run`] wires this to stdin and the
//! clock ticker.

use std::time::Duration;

use anyhow::Result;
use digit_bingo_core::{
    CODE_LENGTH, Digit, KeyOutcome, Marker, Outcome, Phase, RecordSink, RepeatPolicy, Round,
    RoundError, RoundEvent, Submission, TurnReport, format_clock,
};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{debug, info, instrument};

use crate::ticker::Ticker;

/// Commands understood by the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Type these digits.
    Digits(Vec<Digit>),
    /// Remove the last typed digit.
    Delete,
    /// Submit the typed code, or confirm pending marks.
    Submit,
    /// Pick the solo repeat policy.
    Policy(RepeatPolicy),
    /// Cycle the marker on a slot (0-based).
    Mark(usize),
    /// Drop pending marks and retype the guess.
    Cancel,
    /// Pause the round.
    Pause,
    /// Resume the round.
    Resume,
    /// Start over.
    Restart,
    /// The opponent says they won.
    Claim,
    /// Withdraw the opponent's claim.
    Dismiss,
    /// Show every guess so far.
    History,
    /// Show the command list.
    Help,
    /// Leave the session.
    Quit,
}

/// Error for a line the session does not understand.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum InputError {
    /// Not a known command.
    #[display("Unknown command '{}', type 'help' for the list", _0)]
    Unknown(String),

    /// `mark` without a slot from 1 to 4.
    #[display("Mark needs a slot from 1 to 4, got '{}'", _0)]
    BadSlot(String),
}

impl std::error::Error for InputError {}

/// Parses one input line.
///
/// An empty line submits. A line of digits types them.
///
/// # Errors
///
/// Returns [`InputError`] for anything else that is not a known command.
#[instrument]
pub fn parse_input(line: &str) -> Result<Input, InputError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(Input::Submit);
    }
    if line.chars().all(|c| c.is_ascii_digit()) {
        return Ok(Input::Digits(line.chars().filter_map(Digit::from_char).collect()));
    }

    let mut words = line.split_whitespace();
    let command = words.next().unwrap_or_default().to_lowercase();
    let input = match command.as_str() {
        "ok" | "go" => Input::Submit,
        "del" | "d" | "back" => Input::Delete,
        "unique" | "no-repeats" => Input::Policy(RepeatPolicy::NoRepeats),
        "repeats" => Input::Policy(RepeatPolicy::AllowRepeats),
        "mark" | "m" => {
            let arg = words.next().unwrap_or_default();
            match arg.parse::<usize>() {
                Ok(slot @ 1..=4) => Input::Mark(slot - 1),
                _ => return Err(InputError::BadSlot(arg.to_string())),
            }
        }
        "cancel" => Input::Cancel,
        "pause" | "p" => Input::Pause,
        "resume" | "r" => Input::Resume,
        "restart" => Input::Restart,
        "flag" | "claim" => Input::Claim,
        "dismiss" => Input::Dismiss,
        "history" | "h" => Input::History,
        "help" | "?" => Input::Help,
        "quit" | "q" | "exit" => Input::Quit,
        _ => return Err(InputError::Unknown(line.to_string())),
    };
    Ok(input)
}

/// Lines to show for one input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reply {
    lines: Vec<String>,
    quit: bool,
}

impl Reply {
    fn say(line: impl Into<String>) -> Self {
        Self {
            lines: vec![line.into()],
            quit: false,
        }
    }

    /// The lines to print.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Whether the session should end.
    pub fn quit(&self) -> bool {
        self.quit
    }
}

const HELP: &[&str] = &[
    "  1234        type digits (empty line or 'ok' submits)",
    "  del         delete the last digit",
    "  unique      solo: four distinct digits",
    "  repeats     solo: digits may repeat",
    "  mark N      duel: cycle slot N (absent, present, correct)",
    "  cancel      duel: drop the marks and retype the guess",
    "  pause       pause the clock",
    "  resume      continue",
    "  flag        duel: your friend cracked your code",
    "  dismiss     duel: keep playing after a flag",
    "  history     list every guess",
    "  restart     start over",
    "  quit        leave",
];

/// A round plus the presentation state around it.
#[derive(Debug)]
pub struct Session<S: RecordSink> {
    round: Round<S>,
    vibration: bool,
}

impl<S: RecordSink> Session<S> {
    /// Creates a session over `round`. With `vibration` on, wins ring the
    /// terminal bell.
    pub fn new(round: Round<S>, vibration: bool) -> Self {
        Self { round, vibration }
    }

    /// The round being played.
    pub fn round(&self) -> &Round<S> {
        &self.round
    }

    /// Delivers a clock tick to the round.
    pub fn tick(&mut self) -> bool {
        self.round.tick()
    }

    /// Parses and applies one line.
    #[instrument(skip(self), fields(phase = %self.round.phase()))]
    pub fn handle_line(&mut self, line: &str) -> Reply {
        match parse_input(line) {
            Ok(input) => self.apply(input),
            Err(e) => Reply::say(e.to_string()),
        }
    }

    /// Applies one input.
    #[instrument(skip(self), fields(phase = %self.round.phase()))]
    pub fn apply(&mut self, input: Input) -> Reply {
        match input {
            Input::Quit => {
                self.round.close();
                return Reply {
                    lines: vec!["Bye.".to_string()],
                    quit: true,
                };
            }
            Input::Help => {
                return Reply {
                    lines: HELP.iter().map(|l| l.to_string()).collect(),
                    quit: false,
                };
            }
            Input::History => return Reply::say(self.history()),
            _ => {}
        }

        let mut lines = Vec::new();
        if let Err(e) = self.apply_to_round(input, &mut lines) {
            debug!(error = %e, "Input rejected");
            lines.push(e.to_string());
        }
        lines.push(self.status());
        Reply { lines, quit: false }
    }

    fn apply_to_round(&mut self, input: Input, lines: &mut Vec<String>) -> Result<(), RoundError> {
        match input {
            Input::Digits(digits) => {
                for digit in digits {
                    match self.round.press_digit(digit)? {
                        KeyOutcome::Accepted => {}
                        KeyOutcome::Full => {
                            lines.push("Already four digits, submit or delete".to_string());
                            break;
                        }
                        KeyOutcome::LeadingZero => {
                            lines.push("A code cannot start with 0".to_string());
                        }
                        KeyOutcome::Repeated => {
                            lines.push(format!("{} is already in this guess", digit));
                        }
                    }
                }
            }
            Input::Delete => {
                self.round.backspace()?;
            }
            Input::Submit if self.round.phase() == Phase::AwaitingFeedback => {
                let report = self.round.confirm_feedback()?;
                self.describe_turn(&report, lines);
            }
            Input::Submit => match self.round.submit()? {
                Submission::CodeLocked => {
                    lines.push("Code locked in. Pass the device and start guessing.".to_string())
                }
                Submission::Scored(report) => self.describe_turn(&report, lines),
                Submission::AwaitingFeedback => lines.push(
                    "Ask your friend: 'mark N' for each slot, then 'ok' (or 'cancel')".to_string(),
                ),
            },
            Input::Policy(policy) => {
                self.round.choose_policy(policy)?;
                lines.push(format!("{} - the clock is running", policy));
            }
            Input::Mark(slot) => {
                let marker = self.round.cycle_marker(slot)?;
                lines.push(format!("Slot {} marked {}", slot + 1, marker_name(marker)));
            }
            Input::Cancel => self.round.cancel_feedback()?,
            Input::Pause => self.round.pause()?,
            Input::Resume => self.round.resume()?,
            Input::Restart => {
                self.round.restart();
                lines.push("New round".to_string());
            }
            Input::Claim => {
                self.round.claim_opponent_win()?;
                lines.push("Your friend cracked your code first!".to_string());
            }
            Input::Dismiss => self.round.dismiss_claim()?,
            Input::History | Input::Help | Input::Quit => {}
        }
        Ok(())
    }

    fn describe_turn(&self, report: &TurnReport, lines: &mut Vec<String>) {
        let entry = report.entry();
        lines.push(format!(
            "#{:<3} {}  {}",
            entry.id(),
            entry.guess(),
            entry.feedback()
        ));
        for event in report.events() {
            match event {
                RoundEvent::SlotRevealed { slot, digit } => {
                    lines.push(format!("Slot {} is {}", slot + 1, digit));
                }
                RoundEvent::Won(victory) => {
                    let bell = if self.vibration { "\x07" } else { "" };
                    lines.push(format!(
                        "{}Cracked in {} tries, {}!",
                        bell,
                        victory.attempts(),
                        format_clock(*victory.elapsed())
                    ));
                }
            }
        }
    }

    /// Every guess so far, newest first.
    pub fn history(&self) -> String {
        if self.round.history().is_empty() {
            return "No guesses yet".to_string();
        }
        self.round
            .history()
            .iter()
            .map(|e| format!("#{:<3} {}  {}", e.id(), e.guess(), e.feedback()))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// One-line summary of the round.
    pub fn status(&self) -> String {
        let clock = self.round.clock();
        match self.round.phase() {
            Phase::Setup => "Type 'unique' for distinct digits or 'repeats' to allow repeats".to_string(),
            Phase::EnteringCode => {
                let typed = self.round.buffer().len();
                format!(
                    "Your secret code: {}{}",
                    "*".repeat(typed),
                    "_".repeat(CODE_LENGTH - typed)
                )
            }
            Phase::Playing => format!(
                "[{}] {}  guess: {}",
                clock,
                self.round.revealed(),
                self.round.buffer()
            ),
            Phase::AwaitingFeedback => match self.round.pending() {
                Some(pending) => format!(
                    "[{}] {}  marks: {}",
                    clock,
                    pending.guess(),
                    pending
                        .markers()
                        .markers()
                        .iter()
                        .map(|m| marker_symbol(*m))
                        .collect::<String>()
                ),
                None => format!("[{}] awaiting feedback", clock),
            },
            Phase::Paused => format!("[{}] paused, 'resume' to continue", clock),
            Phase::Resolved => match self.round.outcome() {
                Some(Outcome::OpponentClaimedWin) => format!(
                    "[{}] friend claims the win, 'dismiss' or 'restart'",
                    clock
                ),
                _ => format!("[{}] solved, 'restart' for another round", clock),
            },
        }
    }

    /// Plays the round on stdin/stdout until quit or end of input.
    ///
    /// # Errors
    ///
    /// Returns an error if reading stdin or writing stdout fails.
    #[instrument(skip(self), fields(mode = %self.round.mode()))]
    pub async fn run(mut self, tick_period: Duration) -> Result<()> {
        let (mut ticker, mut ticks) = Ticker::new(tick_period);
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        let mut stdout = tokio::io::stdout();

        info!("Session started");
        write_lines(&mut stdout, &["Type 'help' for commands.".to_string(), self.status()])
            .await?;

        loop {
            ticker.sync(self.round.clock().is_running());
            tokio::select! {
                line = lines.next_line() => {
                    let Some(line) = line? else {
                        debug!("Input closed");
                        break;
                    };
                    let reply = self.handle_line(&line);
                    write_lines(&mut stdout, reply.lines()).await?;
                    if reply.quit() {
                        break;
                    }
                }
                Some(tick) = ticks.recv() => {
                    if ticker.is_current(tick) {
                        self.tick();
                    } else {
                        debug!(generation = tick.generation(), "Stale tick dropped");
                    }
                }
            }
        }

        ticker.stop();
        self.round.close();
        if self.round.phase() == Phase::Playing && !self.round.history().is_empty() {
            info!(guesses = self.round.history().len(), "Left an unfinished round");
        }
        info!("Session ended");
        Ok(())
    }
}

async fn write_lines(stdout: &mut tokio::io::Stdout, lines: &[String]) -> Result<()> {
    for line in lines {
        stdout.write_all(line.as_bytes()).await?;
        stdout.write_all(b"\n").await?;
    }
    stdout.flush().await?;
    Ok(())
}

fn marker_name(marker: Marker) -> &'static str {
    match marker {
        Marker::Absent => "absent",
        Marker::Present => "present",
        Marker::Correct => "correct",
    }
}

fn marker_symbol(marker: Marker) -> char {
    match marker {
        Marker::Absent => '.',
        Marker::Present => 'o',
        Marker::Correct => '*',
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(parse_input(""), Ok(Input::Submit));
        assert_eq!(parse_input("  OK "), Ok(Input::Submit));
        assert_eq!(parse_input("mark 4"), Ok(Input::Mark(3)));
        assert_eq!(parse_input("unique"), Ok(Input::Policy(RepeatPolicy::NoRepeats)));
        assert_eq!(
            parse_input("12"),
            Ok(Input::Digits(vec![
                Digit::new(1).unwrap(),
                Digit::new(2).unwrap()
            ]))
        );
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!(parse_input("mark 5"), Err(InputError::BadSlot("5".to_string())));
        assert_eq!(parse_input("mark"), Err(InputError::BadSlot(String::new())));
        assert!(matches!(parse_input("12ab"), Err(InputError::Unknown(_))));
    }
}
