//! Error class hierarchy.
//!
//! Constructor parameters are declared against an [`ErrorClass`], and a
//! cause argument is only accepted by a constructor when its class is the
//! declared class or one of its descendants.

use serde::{Serialize, Serializer};
use std::fmt;

/// A node in the single-inheritance error class hierarchy.
///
/// Classes are compared structurally (name and ancestry), so two
/// declarations of the same class are interchangeable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ErrorClass {
    name: &'static str,
    parent: Option<&'static ErrorClass>,
}

impl ErrorClass {
    /// Root of the hierarchy; the broadest cause type.
    pub const THROWABLE: &'static ErrorClass = &ErrorClass::root("Throwable");

    /// Recoverable errors.
    pub const EXCEPTION: &'static ErrorClass =
        &ErrorClass::new("Exception", ErrorClass::THROWABLE);

    /// Unchecked errors; class of the sentinel cause.
    pub const RUNTIME_EXCEPTION: &'static ErrorClass =
        &ErrorClass::new("RuntimeException", ErrorClass::EXCEPTION);

    /// Failures raised by reflective operations.
    pub const REFLECTIVE_OPERATION: &'static ErrorClass =
        &ErrorClass::new("ReflectiveOperationException", ErrorClass::EXCEPTION);

    /// Wrapper raised when an invoked body fails; carries the real failure
    /// as its cause.
    pub const INVOCATION_TARGET: &'static ErrorClass =
        &ErrorClass::new("InvocationTargetException", ErrorClass::REFLECTIVE_OPERATION);

    /// Every class known without registration.
    pub const BUILTIN: [&'static ErrorClass; 5] = [
        ErrorClass::THROWABLE,
        ErrorClass::EXCEPTION,
        ErrorClass::RUNTIME_EXCEPTION,
        ErrorClass::REFLECTIVE_OPERATION,
        ErrorClass::INVOCATION_TARGET,
    ];

    /// Declare a root class.
    pub const fn root(name: &'static str) -> Self {
        Self { name, parent: None }
    }

    /// Declare a class deriving from `parent`.
    pub const fn new(name: &'static str, parent: &'static ErrorClass) -> Self {
        Self {
            name,
            parent: Some(parent),
        }
    }

    /// Simple name, as used in parameter-form labels.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Direct superclass, `None` for the root.
    pub fn parent(&self) -> Option<&'static ErrorClass> {
        self.parent
    }

    /// Whether `self` is `other` or descends from it.
    pub fn is_a(&self, other: &ErrorClass) -> bool {
        let mut current = Some(self);
        while let Some(class) = current {
            if class == other {
                return true;
            }
            current = class.parent;
        }
        false
    }

    /// Resolve a class by simple name, consulting the built-in classes
    /// first and then `extra`.
    pub fn resolve(
        name: &str,
        extra: &[&'static ErrorClass],
    ) -> Option<&'static ErrorClass> {
        Self::BUILTIN
            .iter()
            .chain(extra.iter())
            .find(|class| class.name.eq_ignore_ascii_case(name))
            .copied()
    }
}

impl fmt::Display for ErrorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

impl Serialize for ErrorClass {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name)
    }
}
