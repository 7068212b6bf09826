//! Strictness-dependent assertion policy.
//!
//! Each check either passes or returns the run-aborting
//! [`VerificationFailure::InvariantViolation`]; nothing is collected.

use crate::error::{describe, VerificationFailure, VerificationResult, Violation};
use crate::scenario::{ExpectedCause, ExpectedMessage, Scenario};
use canon_error_types::{same_cause, Cause, ErrorClass, Strictness, Throwable};

/// Per-check tolerances for one strictness level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tolerance {
    /// A message from the no-argument constructor is only warned about.
    pub default_message_allowed: bool,
    /// Case-insensitive containment instead of exact message equality.
    pub message_containment: bool,
    /// A wrapper cause may be replaced by its inner cause.
    pub wrapper_unwrapping: bool,
}

impl Tolerance {
    pub fn for_strictness(strictness: Strictness) -> Self {
        match strictness {
            Strictness::Weak => Self {
                default_message_allowed: true,
                message_containment: true,
                wrapper_unwrapping: true,
            },
            Strictness::Strict => Self {
                default_message_allowed: false,
                message_containment: false,
                wrapper_unwrapping: false,
            },
        }
    }
}

/// Message and cause read twice from a freshly constructed instance.
#[derive(Debug, Clone)]
pub struct Observation {
    pub message: Option<String>,
    pub cause: Option<Cause>,
    pub message_again: Option<String>,
    pub cause_again: Option<Cause>,
}

impl Observation {
    /// Read both accessors twice, message first.
    pub fn observe<E: Throwable>(instance: &E) -> Self {
        let message = instance.message();
        let cause = instance.cause();
        let message_again = instance.message();
        let cause_again = instance.cause();
        Self {
            message,
            cause,
            message_again,
            cause_again,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct AssertionPolicy {
    strictness: Strictness,
    tolerance: Tolerance,
}

impl AssertionPolicy {
    pub fn for_strictness(strictness: Strictness) -> Self {
        Self {
            strictness,
            tolerance: Tolerance::for_strictness(strictness),
        }
    }

    /// Level this policy checks at.
    pub fn strictness(&self) -> Strictness {
        self.strictness
    }

    /// Relaxations in effect for the level.
    pub fn tolerance(&self) -> Tolerance {
        self.tolerance
    }

    /// Apply every check a scenario calls for: message, cause, then
    /// repeatability.
    pub fn check_scenario(
        &self,
        scenario: &Scenario,
        observed: &Observation,
    ) -> VerificationResult<()> {
        let label = scenario.label();

        match scenario.expected_message() {
            ExpectedMessage::Empty { from_no_arg } => {
                self.check_empty_message(observed.message.as_deref(), *from_no_arg, label)?
            }
            ExpectedMessage::Present(expected) => {
                self.check_message(Some(*expected), observed.message.as_deref(), label)?
            }
            ExpectedMessage::Unchecked => {}
        }

        match scenario.expected_cause() {
            ExpectedCause::Empty => self.check_empty_cause(observed.cause.as_ref(), label)?,
            ExpectedCause::Present(expected) => {
                self.check_cause(expected, observed.cause.as_ref(), label)?
            }
            ExpectedCause::Unchecked => {}
        }

        self.check_repeatable(observed, label)
    }

    /// The message must be absent. `from_no_arg` marks the no-argument
    /// constructor, whose message is tolerated under WEAK.
    pub fn check_empty_message(
        &self,
        observed: Option<&str>,
        from_no_arg: bool,
        label: &str,
    ) -> VerificationResult<()> {
        let Some(message) = observed else {
            return Ok(());
        };

        if from_no_arg && self.tolerance.default_message_allowed {
            tracing::warn!(
                observed = %message,
                constructor = %label,
                "non-null message from a message-less constructor; allowed, but counterintuitive"
            );
            return Ok(());
        }

        Err(VerificationFailure::violation(
            label,
            Violation::UnexpectedMessage {
                observed: message.to_string(),
            },
        ))
    }

    /// The message must carry `expected`: verbatim under STRICT,
    /// case-insensitively contained under WEAK. No expectation, no check.
    pub fn check_message(
        &self,
        expected: Option<&str>,
        observed: Option<&str>,
        label: &str,
    ) -> VerificationResult<()> {
        let Some(expected) = expected else {
            return Ok(());
        };

        let Some(message) = observed else {
            return Err(VerificationFailure::violation(
                label,
                Violation::MessageDropped {
                    expected: expected.to_string(),
                },
            ));
        };

        if self.tolerance.message_containment {
            if !message.to_lowercase().contains(&expected.to_lowercase()) {
                return Err(VerificationFailure::violation(
                    label,
                    Violation::MessageMangled {
                        expected: expected.to_string(),
                        observed: message.to_string(),
                    },
                ));
            }
        } else if message != expected {
            return Err(VerificationFailure::violation(
                label,
                Violation::MessageChanged {
                    expected: expected.to_string(),
                    observed: message.to_string(),
                },
            ));
        }

        Ok(())
    }

    /// The cause must be absent. Identical at both levels.
    pub fn check_empty_cause(&self, observed: Option<&Cause>, label: &str) -> VerificationResult<()> {
        match observed {
            None => Ok(()),
            Some(cause) => Err(VerificationFailure::violation(
                label,
                Violation::UnexpectedCause {
                    observed: cause.to_string(),
                },
            )),
        }
    }

    /// The cause must be `expected` itself. Under WEAK an invocation
    /// wrapper may also be replaced by the cause it wraps.
    pub fn check_cause(
        &self,
        expected: &Cause,
        observed: Option<&Cause>,
        label: &str,
    ) -> VerificationResult<()> {
        if same_cause(observed, Some(expected)) {
            return Ok(());
        }

        let unwrappable =
            self.tolerance.wrapper_unwrapping && expected.class().is_a(ErrorClass::INVOCATION_TARGET);

        if unwrappable {
            let inner = expected.cause();
            if inner.is_some() && same_cause(observed, inner.as_ref()) {
                tracing::debug!(constructor = %label, "accepted unwrapped invocation cause");
                return Ok(());
            }
            return Err(VerificationFailure::violation(
                label,
                Violation::CauseMangled {
                    expected: expected.to_string(),
                    observed: describe(observed),
                },
            ));
        }

        Err(VerificationFailure::violation(
            label,
            Violation::CauseChanged {
                expected: expected.to_string(),
                observed: describe(observed),
            },
        ))
    }

    /// Both accessors must report the same thing on a second read.
    /// Identical at both levels.
    pub fn check_repeatable(&self, observed: &Observation, label: &str) -> VerificationResult<()> {
        if observed.message != observed.message_again {
            return Err(VerificationFailure::violation(
                label,
                Violation::MessageNotRepeatable {
                    first: observed.message.clone(),
                    second: observed.message_again.clone(),
                },
            ));
        }

        if !same_cause(observed.cause.as_ref(), observed.cause_again.as_ref()) {
            return Err(VerificationFailure::violation(
                label,
                Violation::CauseNotRepeatable {
                    first: describe(observed.cause.as_ref()),
                    second: describe(observed.cause_again.as_ref()),
                },
            ));
        }

        Ok(())
    }
}
