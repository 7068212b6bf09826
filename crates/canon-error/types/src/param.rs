//! Constructor parameters and arguments.

use crate::class::ErrorClass;
use crate::throwable::Cause;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of a constructor parameter, before the cause class is fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParamKind {
    Message,
    Cause,
}

impl ParamKind {
    /// Resolve to a concrete parameter type, using `cause_type` for causes.
    pub fn resolve(self, cause_type: &'static ErrorClass) -> ParamType {
        match self {
            ParamKind::Message => ParamType::Message,
            ParamKind::Cause => ParamType::Cause(cause_type),
        }
    }
}

/// Declared type of a constructor parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamType {
    /// `String message`
    Message,
    /// A cause declared as the given class.
    Cause(&'static ErrorClass),
}

impl ParamType {
    /// Whether this parameter takes a message or a cause.
    pub fn kind(&self) -> ParamKind {
        match self {
            ParamType::Message => ParamKind::Message,
            ParamType::Cause(_) => ParamKind::Cause,
        }
    }
}

impl fmt::Display for ParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamType::Message => f.write_str("String"),
            ParamType::Cause(class) => write!(f, "{}", class),
        }
    }
}

/// Access level of a type or constructor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    #[default]
    Public,
    Protected,
    PackagePrivate,
    Private,
}

impl Visibility {
    /// Only public items can be reached by an external caller.
    pub fn is_accessible(&self) -> bool {
        matches!(self, Visibility::Public)
    }
}

/// Concrete values passed to a constructor. A `None` is a null argument;
/// parameters the constructor does not declare are ignored.
#[derive(Debug, Clone, Default)]
pub struct Arguments {
    pub message: Option<String>,
    pub cause: Option<Cause>,
}

impl Arguments {
    /// Message and cause to hand to a constructor.
    pub fn new(message: Option<String>, cause: Option<Cause>) -> Self {
        Self { message, cause }
    }

    /// No message and no cause.
    pub fn none() -> Self {
        Self::default()
    }
}
