//! E2E: missing, hidden and uninstantiable constructors.

use crate::{failure, BOTH};
use canon_error_conformance::{
    AbstractError, ExceptionCause, GoodCitizen, HiddenConstructors, HiddenType, Stored,
};
use canon_error_verifier::{
    ConstructorTable, ErrorClass, ErrorVerifier, FailureKind, Strictness,
};

#[test]
fn hidden_constructors_are_inaccessible() {
    for strictness in BOTH {
        let failure = failure::<HiddenConstructors>(strictness);
        assert_eq!(failure.kind(), FailureKind::InaccessibleConstructor);
        assert_eq!(failure.label(), "(default; no-arg)");
        assert_eq!(
            failure.to_string(),
            "(default; no-arg) constructor is not accessible"
        );
    }
}

#[test]
fn hidden_type_is_inaccessible() {
    for strictness in BOTH {
        let failure = failure::<HiddenType>(strictness);
        assert_eq!(failure.kind(), FailureKind::InaccessibleConstructor);
        assert_eq!(failure.label(), "(default; no-arg)");
    }
}

#[test]
fn abstract_type_is_not_instantiable() {
    for strictness in BOTH {
        let failure = failure::<AbstractError>(strictness);
        assert_eq!(failure.kind(), FailureKind::NotInstantiable);
        assert_eq!(failure.label(), "(default; no-arg)");
    }
}

#[test]
fn missing_message_constructor_is_reported_with_its_label() {
    for strictness in BOTH {
        let table = ConstructorTable::new()
            .no_arg(|| Ok(GoodCitizen(Stored::default())))
            .cause(ErrorClass::THROWABLE, |c| Ok(GoodCitizen(Stored::cause(c))))
            .full(ErrorClass::THROWABLE, |m, c| Ok(GoodCitizen(Stored::new(m, c))));

        let failure = ErrorVerifier::for_table("NoMessage", table)
            .with_strictness(strictness)
            .run()
            .unwrap_err();
        assert_eq!(failure.kind(), FailureKind::MissingConstructor);
        assert_eq!(failure.label(), "(String message)");
        assert_eq!(failure.to_string(), "missing (String message) constructor");
    }
}

#[test]
fn missing_full_constructor_is_reported_after_earlier_scenarios_pass() {
    let table = ConstructorTable::new()
        .no_arg(|| Ok(GoodCitizen(Stored::default())))
        .message(|m| Ok(GoodCitizen(Stored::message(m))))
        .cause(ErrorClass::THROWABLE, |c| Ok(GoodCitizen(Stored::cause(c))));

    let failure = ErrorVerifier::for_table("NoFull", table)
        .with_strictness(Strictness::Weak)
        .run()
        .unwrap_err();
    assert_eq!(failure.kind(), FailureKind::MissingConstructor);
    assert_eq!(failure.label(), "(String message, Throwable cause)");
}

#[test]
fn declared_cause_type_must_match_exactly() {
    // Exception-declared constructors do not satisfy a Throwable lookup.
    for strictness in BOTH {
        let failure = failure::<ExceptionCause>(strictness);
        assert_eq!(failure.kind(), FailureKind::MissingConstructor);
        assert_eq!(failure.label(), "(Throwable cause)");
    }
}
