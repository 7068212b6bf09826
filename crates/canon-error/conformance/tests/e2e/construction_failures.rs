//! E2E: constructors that fail and arguments that are rejected.

use crate::{failure, verify, BOTH};
use canon_error_conformance::{NullMessageSensitive, RuntimeCause, Throwing};
use canon_error_types::Throwable;
use canon_error_verifier::{ErrorClass, ErrorVerifier, FailureKind, Strictness, VerificationFailure};
use std::error::Error as _;

#[test]
fn throwing_cause_constructor_fails_both_levels() {
    for strictness in BOTH {
        let failure = failure::<Throwing>(strictness);
        assert_eq!(failure.kind(), FailureKind::ConstructionThrew);
        assert_eq!(failure.label(), "(Throwable cause)");
        assert!(failure.source().is_some());
    }
}

#[test]
fn construction_failure_keeps_the_raised_error() {
    match failure::<Throwing>(Strictness::Strict) {
        VerificationFailure::ConstructionThrew { thrown, .. } => {
            assert_eq!(thrown.cause().class(), ErrorClass::RUNTIME_EXCEPTION);
            assert!(thrown.cause().cause().is_some());
        }
        other => panic!("unexpected failure: {other}"),
    }
}

#[test]
fn null_message_sensitive_passes_weak() {
    assert!(verify::<NullMessageSensitive>(Strictness::Weak).is_ok());
}

#[test]
fn null_message_sensitive_fails_strict_on_null_message_scenario() {
    let failure = failure::<NullMessageSensitive>(Strictness::Strict);
    assert_eq!(failure.kind(), FailureKind::ConstructionThrew);
    assert_eq!(failure.label(), "(String message = null, Throwable cause)");
    assert!(failure.to_string().contains("message must not be null"));
}

#[test]
fn runtime_cause_rejects_invocation_wrapper() {
    for strictness in BOTH {
        let failure = ErrorVerifier::for_type::<RuntimeCause>()
            .with_cause_type(ErrorClass::RUNTIME_EXCEPTION)
            .with_strictness(strictness)
            .run()
            .unwrap_err();

        assert_eq!(failure.kind(), FailureKind::ArgumentRejected);
        assert_eq!(
            failure.label(),
            "(RuntimeException cause = InvocationTargetException)"
        );
        assert!(failure
            .to_string()
            .contains("rejected a InvocationTargetException argument"));
    }
}
