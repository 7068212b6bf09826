//! Fixed inputs injected into every verification run.

use canon_error_types::{Cause, ErrorClass, ErrorValue};
use std::sync::{Arc, OnceLock};

/// Message passed to every message-accepting constructor.
pub const SENTINEL_MESSAGE: &str = "canonical error verifier sentinel message";

/// Process-wide sentinel values. Built once, never mutated, shared by every
/// run; cause identity checks rely on these being the same allocations.
#[derive(Debug)]
pub struct FixtureSet {
    message: &'static str,
    plain_cause: Cause,
    wrapped_cause: Cause,
}

impl FixtureSet {
    /// The shared fixture set.
    pub fn shared() -> &'static FixtureSet {
        static FIXTURES: OnceLock<FixtureSet> = OnceLock::new();
        FIXTURES.get_or_init(FixtureSet::build)
    }

    fn build() -> Self {
        let plain_cause = ErrorValue::runtime(SENTINEL_MESSAGE).into_cause();
        let wrapped_cause = ErrorValue::new(ErrorClass::INVOCATION_TARGET)
            .with_cause(Arc::clone(&plain_cause))
            .into_cause();
        Self {
            message: SENTINEL_MESSAGE,
            plain_cause,
            wrapped_cause,
        }
    }

    pub fn message(&self) -> &'static str {
        self.message
    }

    /// A `RuntimeException` carrying the sentinel message.
    pub fn plain_cause(&self) -> &Cause {
        &self.plain_cause
    }

    /// An `InvocationTargetException` whose cause is [`Self::plain_cause`].
    pub fn wrapped_cause(&self) -> &Cause {
        &self.wrapped_cause
    }
}
