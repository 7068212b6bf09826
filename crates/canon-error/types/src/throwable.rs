//! Observable error values.

use crate::class::ErrorClass;
use std::fmt;
use std::sync::Arc;

/// A shared, reference-counted cause.
pub type Cause = Arc<dyn Throwable>;

/// An error value whose message and cause can be observed.
///
/// Accessors take `&self` and may be called any number of times. A
/// conforming implementation returns equal messages and the identical
/// cause on every call.
pub trait Throwable: fmt::Debug + Send + Sync + 'static {
    /// Detail message, `None` when the error carries no message.
    fn message(&self) -> Option<String>;

    /// The error this one wraps, if any.
    fn cause(&self) -> Option<Cause>;

    /// Class of this error in the [`ErrorClass`] hierarchy.
    fn class(&self) -> &'static ErrorClass {
        ErrorClass::RUNTIME_EXCEPTION
    }
}

impl fmt::Display for dyn Throwable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.message() {
            Some(message) => write!(f, "{}: {}", self.class(), message),
            None => write!(f, "{}", self.class()),
        }
    }
}

/// Reference identity of two optional causes. Two absent causes are the
/// same; a present and an absent cause never are.
pub fn same_cause(a: Option<&Cause>, b: Option<&Cause>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b)),
        _ => false,
    }
}

/// General-purpose error value with a fixed class, message and cause.
#[derive(Debug, Clone)]
pub struct ErrorValue {
    class: &'static ErrorClass,
    message: Option<String>,
    cause: Option<Cause>,
}

impl ErrorValue {
    pub fn new(class: &'static ErrorClass) -> Self {
        Self {
            class,
            message: None,
            cause: None,
        }
    }

    /// A `RuntimeException`-class error carrying `message`.
    pub fn runtime(message: impl Into<String>) -> Self {
        Self::new(ErrorClass::RUNTIME_EXCEPTION).with_message(message)
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_cause(mut self, cause: Cause) -> Self {
        self.cause = Some(cause);
        self
    }

    /// Move into a shared [`Cause`].
    pub fn into_cause(self) -> Cause {
        Arc::new(self)
    }
}

impl Throwable for ErrorValue {
    fn message(&self) -> Option<String> {
        self.message.clone()
    }

    fn cause(&self) -> Option<Cause> {
        self.cause.clone()
    }

    fn class(&self) -> &'static ErrorClass {
        self.class
    }
}
