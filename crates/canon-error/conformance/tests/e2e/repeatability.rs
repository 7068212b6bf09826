//! E2E: accessors must answer the same way twice.

use crate::{failure, BOTH};
use canon_error_conformance::{
    BadGetMessage, CountingCause, CountingMessage, FlickeringCause, FlickeringMessage,
};
use canon_error_verifier::{
    ErrorClass, FailureKind, FixtureSet, ScenarioId, Strictness, Violation,
};

#[test]
fn counting_message_fails_both_levels() {
    for strictness in BOTH {
        let failure = failure::<CountingMessage>(strictness);
        assert_eq!(failure.kind(), FailureKind::InvariantViolation);
        assert_eq!(failure.label(), "(default; no-arg)");
    }
}

#[test]
fn counting_message_under_weak_is_caught_by_second_read() {
    let failure = failure::<CountingMessage>(Strictness::Weak);
    assert_eq!(
        failure.as_violation(),
        Some(&Violation::MessageNotRepeatable {
            first: Some("0".into()),
            second: Some("1".into()),
        })
    );
}

#[test]
fn flickering_message_fails_repeatability_both_levels() {
    for strictness in BOTH {
        let failure = failure::<FlickeringMessage>(strictness);
        assert_eq!(failure.label(), "(String message)");
        assert!(matches!(
            failure.as_violation(),
            Some(Violation::MessageNotRepeatable { second: None, .. })
        ));
    }
}

#[test]
fn counting_cause_fails_both_levels() {
    for strictness in BOTH {
        let failure = failure::<CountingCause>(strictness);
        assert_eq!(failure.kind(), FailureKind::InvariantViolation);
        assert_eq!(failure.label(), "(default; no-arg)");
    }
}

#[test]
fn flickering_cause_fails_repeatability_both_levels() {
    let expected = FixtureSet::shared().plain_cause().to_string();
    for strictness in BOTH {
        let failure = failure::<FlickeringCause>(strictness);
        assert_eq!(failure.kind(), FailureKind::InvariantViolation);
        assert_eq!(failure.label(), ScenarioId::Cause.label(ErrorClass::THROWABLE));
        assert_eq!(
            failure.as_violation(),
            Some(&Violation::CauseNotRepeatable {
                first: Some(expected.clone()),
                second: None,
            })
        );
    }
}

#[test]
fn panicking_accessor_fails_both_levels() {
    for strictness in BOTH {
        let failure = failure::<BadGetMessage>(strictness);
        assert_eq!(failure.kind(), FailureKind::AccessorPanicked);
        assert_eq!(failure.label(), "(default; no-arg)");
        assert!(failure.to_string().contains("illegal argument"));
    }
}
