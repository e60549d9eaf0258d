//! Tests for scoring, markers and secret generation through the public API.

use digit_bingo_core::{
    Code, DuelReconciler, Feedback, FeedbackStrategy, Marker, MarkerSet, Reconciliation,
    RepeatPolicy, generate_secret, score,
};
use strum::IntoEnumIterator;

fn code(s: &str) -> Code {
    s.parse().expect("valid code")
}

#[test]
fn test_reference_scores() {
    let cases = [
        ("1234", "1234", 4, 0),
        ("4321", "1234", 0, 4),
        ("1243", "1234", 2, 2),
        ("5678", "1234", 0, 0),
        ("1122", "1234", 1, 3),
        ("2211", "1122", 0, 4),
    ];
    for (guess, secret, bulls, cows) in cases {
        assert_eq!(
            score(&code(guess), &code(secret)),
            Feedback::new(bulls, cows),
            "{guess} against {secret}"
        );
    }
}

#[test]
fn test_marker_feedback_agrees_with_score() {
    for (guess, secret) in [("1243", "1234"), ("9034", "1234"), ("1111", "1234")] {
        let (guess, secret) = (code(guess), code(secret));
        let markers = MarkerSet::scored(&guess, &secret);
        assert_eq!(markers.feedback(), score(&guess, &secret));
    }
}

#[test]
fn test_markers_cycle_through_all_states() {
    let mut markers = MarkerSet::new();
    let seen: Vec<Marker> = (0..4).map(|_| markers.cycle(2).unwrap()).collect();
    assert_eq!(
        seen,
        vec![Marker::Present, Marker::Correct, Marker::Absent, Marker::Present]
    );
    assert_eq!(markers.cycle(9), None);
}

#[test]
fn test_auto_reconciler_scores_against_entered_code() {
    let reconciler = DuelReconciler::new(FeedbackStrategy::Auto);
    match reconciler.reconcile(code("1243"), &code("1234")) {
        Reconciliation::Scored { feedback, markers } => {
            assert_eq!(feedback, Feedback::new(2, 2));
            assert!(markers.is_correct(0));
            assert!(!markers.is_correct(2));
        }
        other => panic!("expected a score, got {other:?}"),
    }
}

#[test]
fn test_generated_secrets_respect_every_policy() {
    for policy in RepeatPolicy::iter() {
        for _ in 0..200 {
            let secret = generate_secret(policy);
            assert!(!secret.has_leading_zero(), "{secret} under {policy}");
            if !policy.allows_repeats() {
                assert!(secret.has_distinct_digits(), "{secret} under {policy}");
            }
        }
    }
}

#[test]
fn test_feedback_never_exceeds_four_digits() {
    for secret in ["1234", "1122", "9000", "7777"] {
        let secret = code(secret);
        for n in (1000..=9999).step_by(7) {
            let guess = code(&n.to_string());
            let feedback = score(&guess, &secret);
            assert!(feedback.total() <= 4, "{guess} against {secret}: {feedback}");
            assert_eq!(feedback.is_solved(), guess == secret);
        }
    }
}
