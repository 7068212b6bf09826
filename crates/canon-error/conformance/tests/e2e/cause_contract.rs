//! E2E: cause storage and wrapper unwrapping.

use crate::{failure, verify, BOTH};
use canon_error_conformance::{CauseErasing, CauseReplacing, InvocationUnwrapping, MessageErasing};
use canon_error_verifier::{FailureKind, Strictness, Violation};

#[test]
fn unwrapped_invocation_cause_passes_weak() {
    assert!(verify::<InvocationUnwrapping>(Strictness::Weak).is_ok());
}

#[test]
fn unwrapped_invocation_cause_fails_strict() {
    let failure = failure::<InvocationUnwrapping>(Strictness::Strict);
    assert_eq!(failure.kind(), FailureKind::InvariantViolation);
    assert_eq!(
        failure.label(),
        "(Throwable cause = InvocationTargetException)"
    );
    assert!(matches!(
        failure.as_violation(),
        Some(Violation::CauseChanged { observed: Some(_), .. })
    ));
}

#[test]
fn replaced_cause_fails_both_levels() {
    for strictness in BOTH {
        let failure = failure::<CauseReplacing>(strictness);
        assert_eq!(failure.label(), "(Throwable cause)");
        assert!(matches!(
            failure.as_violation(),
            Some(Violation::CauseChanged { .. })
        ));
    }
}

#[test]
fn erased_cause_fails_both_levels() {
    for strictness in BOTH {
        let failure = failure::<CauseErasing>(strictness);
        assert_eq!(failure.label(), "(Throwable cause)");
        assert!(matches!(
            failure.as_violation(),
            Some(Violation::CauseChanged { observed: None, .. })
        ));
        assert!(failure.to_string().ends_with("got null)"));
    }
}

#[test]
fn erased_message_and_cause_stops_at_message() {
    // The message scenario runs before any cause scenario.
    for strictness in BOTH {
        let failure = failure::<MessageErasing>(strictness);
        assert_eq!(failure.label(), "(String message)");
    }
}
