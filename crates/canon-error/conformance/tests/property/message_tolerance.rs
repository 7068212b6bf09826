//! Property tests: WEAK tolerates embedded and re-cased messages, STRICT
//! demands the message verbatim.

use canon_error_conformance::Stored;
use canon_error_types::{Cause, ErrorClass, Throwable};
use canon_error_verifier::{
    ConstructorTable, ErrorVerifier, Strictness, Violation,
};
use proptest::prelude::*;
use std::sync::Arc;

#[derive(Debug)]
struct Rewritten(Stored);

impl Throwable for Rewritten {
    fn message(&self) -> Option<String> {
        self.0.message.clone()
    }

    fn cause(&self) -> Option<Cause> {
        self.0.cause.clone()
    }
}

/// Four constructors whose given messages pass through `rewrite`.
fn rewriting_table(
    rewrite: impl Fn(String) -> String + Send + Sync + 'static,
) -> ConstructorTable<Rewritten> {
    let rewrite = Arc::new(rewrite);
    let for_full = Arc::clone(&rewrite);
    ConstructorTable::new()
        .no_arg(|| Ok(Rewritten(Stored::default())))
        .message(move |m| Ok(Rewritten(Stored::message(m.map(|m| (*rewrite)(m))))))
        .cause(ErrorClass::THROWABLE, |c| Ok(Rewritten(Stored::cause(c))))
        .full(ErrorClass::THROWABLE, move |m, c| {
            Ok(Rewritten(Stored::new(m.map(|m| (*for_full)(m)), c)))
        })
}

fn arb_affix() -> impl Strategy<Value = String> {
    "[a-zA-Z!?: ]{1,12}"
}

proptest! {
    #[test]
    fn embedded_message_passes_weak_only(prefix in arb_affix(), suffix in "[a-z ]{0,8}") {
        let (p, s) = (prefix.clone(), suffix.clone());
        let weak = ErrorVerifier::for_table(
            "Embedding",
            rewriting_table(move |m| format!("{p}{m}{s}")),
        )
        .with_strictness(Strictness::Weak)
        .run();
        prop_assert!(weak.is_ok());

        let strict = ErrorVerifier::for_table(
            "Embedding",
            rewriting_table(move |m| format!("{prefix}{m}{suffix}")),
        )
        .run()
        .unwrap_err();
        prop_assert_eq!(strict.label(), "(String message)");
        let is_changed = matches!(strict.as_violation(), Some(Violation::MessageChanged { .. }));
        prop_assert!(is_changed);
    }

    #[test]
    fn recased_message_passes_weak_only(upper in any::<bool>()) {
        let recase = move |m: String| {
            if upper { m.to_uppercase() } else { m.to_lowercase().replacen('c', "C", 1) }
        };

        let weak = ErrorVerifier::for_table("Recasing", rewriting_table(recase))
            .with_strictness(Strictness::Weak)
            .run();
        prop_assert!(weak.is_ok());

        let strict = ErrorVerifier::for_table("Recasing", rewriting_table(recase))
            .run();
        prop_assert!(strict.is_err());
    }

    #[test]
    fn unrelated_message_fails_both(text in "[0-9]{1,10}") {
        for strictness in [Strictness::Strict, Strictness::Weak] {
            let t = text.clone();
            let failure = ErrorVerifier::for_table("Replacing", rewriting_table(move |_| t.clone()))
                .with_strictness(strictness)
                .run()
                .unwrap_err();
            prop_assert_eq!(failure.label(), "(String message)");
        }
    }
}
