//! Failure taxonomy for verification runs.
//!
//! Two channels feed a [`VerificationFailure`]:
//!
//! - invocation failures ([`LocateError`], [`ConstructError`]) are
//!   classified first and then attached to the scenario label with
//!   [`VerificationFailure::from_locate`] / [`VerificationFailure::from_construct`];
//! - contract checks produce [`VerificationFailure::InvariantViolation`]
//!   directly.
//!
//! Either way the run stops at the first failure.

use canon_error_types::Cause;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Result type for verification operations.
pub type VerificationResult<T> = Result<T, VerificationFailure>;

/// A value raised by a constructor body or accessor, kept for diagnostics.
#[derive(Debug, Clone)]
pub struct Thrown(pub Cause);

impl Thrown {
    pub fn cause(&self) -> &Cause {
        &self.0
    }
}

impl fmt::Display for Thrown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for Thrown {}

/// Render an optional cause the way violation messages show it.
pub(crate) fn describe(cause: Option<&Cause>) -> Option<String> {
    cause.map(|c| c.to_string())
}

/// Constructor lookup failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LocateError {
    #[error("no constructor with a matching signature")]
    Missing,

    #[error("constructor is not accessible")]
    Inaccessible,
}

/// Constructor invocation failures.
#[derive(Debug, Clone, Error)]
pub enum ConstructError {
    #[error("type cannot be instantiated")]
    NotInstantiable,

    #[error("{argument} argument is not a {parameter}")]
    ArgumentRejected {
        argument: &'static str,
        parameter: &'static str,
    },

    #[error("constructor body failed: {0}")]
    Threw(#[source] Thrown),
}

/// A broken contract check.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
    #[error("non-null message (\"{observed}\") where none was given")]
    UnexpectedMessage { observed: String },

    #[error("message set to null (expecting \"{expected}\")")]
    MessageDropped { expected: String },

    #[error("ignored or mangled message (expecting \"{expected}\", got \"{observed}\")")]
    MessageMangled { expected: String, observed: String },

    #[error("ignored or changed message (expecting \"{expected}\", got \"{observed}\")")]
    MessageChanged { expected: String, observed: String },

    #[error("passing a null cause did not produce a null cause (got {observed})")]
    UnexpectedCause { observed: String },

    #[error(
        "ignored or mangled cause (expecting {expected}, got {})",
        .observed.as_deref().unwrap_or("null")
    )]
    CauseMangled {
        expected: String,
        observed: Option<String>,
    },

    #[error(
        "ignored or changed cause (expecting {expected}, got {})",
        .observed.as_deref().unwrap_or("null")
    )]
    CauseChanged {
        expected: String,
        observed: Option<String>,
    },

    #[error(
        "message changed after a second read (first \"{}\", second \"{}\")",
        .first.as_deref().unwrap_or("null"),
        .second.as_deref().unwrap_or("null")
    )]
    MessageNotRepeatable {
        first: Option<String>,
        second: Option<String>,
    },

    #[error(
        "cause changed after a second read (first {}, second {})",
        .first.as_deref().unwrap_or("null"),
        .second.as_deref().unwrap_or("null")
    )]
    CauseNotRepeatable {
        first: Option<String>,
        second: Option<String>,
    },
}

/// Discriminant of a [`VerificationFailure`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    MissingConstructor,
    InaccessibleConstructor,
    NotInstantiable,
    ConstructionThrew,
    ArgumentRejected,
    AccessorPanicked,
    InvariantViolation,
}

/// The failure that aborted a verification run.
///
/// Every variant carries the parameter-form label of the scenario that
/// produced it, e.g. `(String message, Throwable cause = null)`.
#[derive(Debug, Clone, Error)]
pub enum VerificationFailure {
    #[error("missing {label} constructor")]
    MissingConstructor { label: String },

    #[error("{label} constructor is not accessible")]
    InaccessibleConstructor { label: String },

    #[error("{label} constructor is not instantiable")]
    NotInstantiable { label: String },

    #[error("{label} constructor failed with an error: {thrown}")]
    ConstructionThrew {
        label: String,
        #[source]
        thrown: Thrown,
    },

    #[error("{label} constructor rejected a {argument} argument for its {parameter} parameter")]
    ArgumentRejected {
        label: String,
        argument: &'static str,
        parameter: &'static str,
    },

    #[error("{label} verification failed: accessor panicked: {thrown}")]
    AccessorPanicked {
        label: String,
        #[source]
        thrown: Thrown,
    },

    #[error("{label} constructor {violation}")]
    InvariantViolation {
        label: String,
        #[source]
        violation: Violation,
    },
}

impl VerificationFailure {
    pub fn from_locate(err: LocateError, label: &str) -> Self {
        let label = label.to_string();
        match err {
            LocateError::Missing => Self::MissingConstructor { label },
            LocateError::Inaccessible => Self::InaccessibleConstructor { label },
        }
    }

    pub fn from_construct(err: ConstructError, label: &str) -> Self {
        let label = label.to_string();
        match err {
            ConstructError::NotInstantiable => Self::NotInstantiable { label },
            ConstructError::ArgumentRejected {
                argument,
                parameter,
            } => Self::ArgumentRejected {
                label,
                argument,
                parameter,
            },
            ConstructError::Threw(thrown) => Self::ConstructionThrew { label, thrown },
        }
    }

    pub fn violation(label: &str, violation: Violation) -> Self {
        Self::InvariantViolation {
            label: label.to_string(),
            violation,
        }
    }

    /// Parameter-form label of the failing scenario.
    pub fn label(&self) -> &str {
        match self {
            Self::MissingConstructor { label }
            | Self::InaccessibleConstructor { label }
            | Self::NotInstantiable { label }
            | Self::ConstructionThrew { label, .. }
            | Self::ArgumentRejected { label, .. }
            | Self::AccessorPanicked { label, .. }
            | Self::InvariantViolation { label, .. } => label,
        }
    }

    pub fn kind(&self) -> FailureKind {
        match self {
            Self::MissingConstructor { .. } => FailureKind::MissingConstructor,
            Self::InaccessibleConstructor { .. } => FailureKind::InaccessibleConstructor,
            Self::NotInstantiable { .. } => FailureKind::NotInstantiable,
            Self::ConstructionThrew { .. } => FailureKind::ConstructionThrew,
            Self::ArgumentRejected { .. } => FailureKind::ArgumentRejected,
            Self::AccessorPanicked { .. } => FailureKind::AccessorPanicked,
            Self::InvariantViolation { .. } => FailureKind::InvariantViolation,
        }
    }

    /// The broken check, for `InvariantViolation` failures.
    pub fn as_violation(&self) -> Option<&Violation> {
        match self {
            Self::InvariantViolation { violation, .. } => Some(violation),
            _ => None,
        }
    }
}
