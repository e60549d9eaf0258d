//! Tests for the terminal session driving duel rounds.

use digit_bingo::{MemoryStore, RecordBook, Session};
use digit_bingo_core::{FeedbackStrategy, Outcome, Phase, Round};

fn duel_session(strategy: FeedbackStrategy, store: &MemoryStore) -> Session<RecordBook<&MemoryStore>> {
    Session::new(Round::duel(strategy, RecordBook::new(store)), false)
}

#[test]
fn test_auto_duel_win_is_recorded() {
    let store = MemoryStore::new();
    let mut session = duel_session(FeedbackStrategy::Auto, &store);

    session.handle_line("4821");
    let reply = session.handle_line("");
    assert!(reply.lines()[0].starts_with("Code locked in"));
    assert_eq!(session.round().phase(), Phase::Playing);

    session.handle_line("4190");
    let reply = session.handle_line("ok");
    assert!(reply.lines().iter().any(|l| l.contains("1B 1C")), "{:?}", reply.lines());
    assert!(reply.lines().iter().any(|l| l == "Slot 1 is 4"));

    session.tick();
    session.handle_line("4821");
    let reply = session.handle_line("ok");
    assert!(
        reply.lines().iter().any(|l| l == "Cracked in 2 tries, 00:01!"),
        "{:?}",
        reply.lines()
    );
    assert_eq!(session.round().phase(), Phase::Resolved);

    let records = RecordBook::new(&store).get_records();
    assert_eq!(records.len(), 1);
    assert_eq!(*records[0].tries(), 2);
    assert_eq!(*records[0].time_sec(), 1);
}

#[test]
fn test_secret_entry_is_masked() {
    let store = MemoryStore::new();
    let mut session = duel_session(FeedbackStrategy::Auto, &store);

    let reply = session.handle_line("48");
    assert_eq!(reply.lines().last().unwrap(), "Your secret code: **__");

    let reply = session.handle_line("21");
    assert_eq!(reply.lines().last().unwrap(), "Your secret code: ****");
    assert!(reply.lines().iter().all(|l| !l.contains("4821")));
}

#[test]
fn test_manual_marks_and_cancel() {
    let store = MemoryStore::new();
    let mut session = duel_session(FeedbackStrategy::Manual, &store);
    session.handle_line("5678");
    session.handle_line("");

    session.handle_line("1234");
    let reply = session.handle_line("");
    assert!(reply.lines()[0].contains("mark N"));
    assert_eq!(session.round().phase(), Phase::AwaitingFeedback);

    let reply = session.handle_line("mark 2");
    assert_eq!(reply.lines()[0], "Slot 2 marked present");
    assert!(reply.lines()[1].ends_with("marks: .o.."), "{:?}", reply.lines());

    session.handle_line("cancel");
    assert_eq!(session.round().phase(), Phase::Playing);
    assert_eq!(session.round().buffer().to_string(), "1234");

    session.handle_line("");
    session.handle_line("mark 3");
    session.handle_line("mark 3");
    let reply = session.handle_line("");
    assert!(reply.lines().iter().any(|l| l.contains("1B 0C")), "{:?}", reply.lines());
    assert!(reply.lines().iter().any(|l| l == "Slot 3 is 3"));
    assert_eq!(session.round().history().len(), 1);
}

#[test]
fn test_flag_dismiss_and_rejected_input() {
    let store = MemoryStore::new();
    let mut session = duel_session(FeedbackStrategy::Auto, &store);

    let reply = session.handle_line("flag");
    assert!(reply.lines()[0].starts_with("Cannot claim an opponent win"));

    session.handle_line("9876");
    session.handle_line("");
    session.handle_line("flag");
    assert_eq!(session.round().outcome(), Some(Outcome::OpponentClaimedWin));

    let reply = session.handle_line("12");
    assert!(reply.lines()[0].starts_with("Cannot enter digits"));

    session.handle_line("dismiss");
    assert_eq!(session.round().phase(), Phase::Playing);

    let reply = session.handle_line("0");
    assert_eq!(reply.lines()[0], "A code cannot start with 0");

    let reply = session.handle_line("dance");
    assert_eq!(reply.lines().len(), 1);
    assert!(reply.lines()[0].starts_with("Unknown command"));
}

#[test]
fn test_pause_history_and_quit() {
    let store = MemoryStore::new();
    let mut session = duel_session(FeedbackStrategy::Auto, &store);
    assert_eq!(session.handle_line("history").lines(), ["No guesses yet"]);

    session.handle_line("1357");
    session.handle_line("");
    session.handle_line("2468");
    session.handle_line("");
    session.tick();

    let reply = session.handle_line("pause");
    assert!(reply.lines()[0].contains("paused"));
    assert!(!session.tick());
    session.handle_line("resume");
    assert_eq!(session.round().elapsed(), 1);

    assert!(session.handle_line("history").lines()[0].contains("2468"));

    let reply = session.handle_line("quit");
    assert!(reply.quit());
    assert!(!session.round().clock().is_running());
    assert!(RecordBook::new(&store).get_records().is_empty());
}
