//! Property tests: a missing constructor is reported by the first planned
//! scenario that needs it, and a passing run executes exactly its plan.

use canon_error_conformance::{GoodCitizen, Stored};
use canon_error_types::ParamKind;
use canon_error_verifier::{
    ConstructorTable, ErrorClass, ErrorVerifier, FailureKind, ScenarioPlan, Strictness,
};
use proptest::prelude::*;

const SIGNATURES: [&[ParamKind]; 4] = [
    &[],
    &[ParamKind::Message],
    &[ParamKind::Cause],
    &[ParamKind::Message, ParamKind::Cause],
];

/// The canonical table with the constructors selected by `keep` only.
fn partial_table(keep: [bool; 4]) -> ConstructorTable<GoodCitizen> {
    let mut table = ConstructorTable::new();
    if keep[0] {
        table = table.no_arg(|| Ok(GoodCitizen(Stored::default())));
    }
    if keep[1] {
        table = table.message(|m| Ok(GoodCitizen(Stored::message(m))));
    }
    if keep[2] {
        table = table.cause(ErrorClass::THROWABLE, |c| Ok(GoodCitizen(Stored::cause(c))));
    }
    if keep[3] {
        table = table.full(ErrorClass::THROWABLE, |m, c| {
            Ok(GoodCitizen(Stored::new(m, c)))
        });
    }
    table
}

fn arb_strictness() -> impl Strategy<Value = Strictness> {
    prop_oneof![Just(Strictness::Weak), Just(Strictness::Strict)]
}

proptest! {
    #[test]
    fn first_missing_constructor_is_reported(
        keep in proptest::array::uniform4(any::<bool>()),
        strictness in arb_strictness(),
    ) {
        let plan = ScenarioPlan::for_strictness(strictness);
        let first_missing = plan.ids().iter().find(|id| {
            let index = SIGNATURES.iter().position(|sig| *sig == id.kinds());
            index.is_some_and(|i| !keep[i])
        });

        let result = ErrorVerifier::for_table("Partial", partial_table(keep))
            .with_strictness(strictness)
            .run();

        match first_missing {
            None => prop_assert!(result.is_ok()),
            Some(id) => {
                let failure = result.unwrap_err();
                prop_assert_eq!(failure.kind(), FailureKind::MissingConstructor);
                prop_assert_eq!(failure.label(), id.label(ErrorClass::THROWABLE));
            }
        }
    }

    #[test]
    fn passing_run_executes_its_plan(strictness in arb_strictness()) {
        let report = ErrorVerifier::for_table("Complete", partial_table([true; 4]))
            .with_strictness(strictness)
            .run_with_report()
            .unwrap();
        let plan = ScenarioPlan::for_strictness(strictness);
        let strict = ScenarioPlan::for_strictness(Strictness::Strict);

        prop_assert_eq!(report.scenarios.as_slice(), plan.ids());
        prop_assert!(report.scenarios.iter().all(|id| strict.contains(*id)));
    }
}
