//! Specimen error types.
//!
//! [`GoodCitizen`] follows the canonical constructor contract. Every other
//! specimen breaks it in one specific way.

use canon_error_types::{Cause, ErrorClass, ErrorValue, Throwable, Visibility};
use canon_error_verifier::{
    CanonicalConstructors, Constructor, ConstructorSource, ConstructorTable,
};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Message and cause as handed to a constructor.
#[derive(Debug, Clone, Default)]
pub struct Stored {
    pub message: Option<String>,
    pub cause: Option<Cause>,
}

impl Stored {
    pub fn new(message: Option<String>, cause: Option<Cause>) -> Self {
        Self { message, cause }
    }

    pub fn message(message: Option<String>) -> Self {
        Self::new(message, None)
    }

    pub fn cause(cause: Option<Cause>) -> Self {
        Self::new(None, cause)
    }
}

/// Declare a specimen whose accessors return what its constructors stored.
macro_rules! stored_error {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug)]
        pub struct $name(pub Stored);

        impl Throwable for $name {
            fn message(&self) -> Option<String> {
                self.0.message.clone()
            }

            fn cause(&self) -> Option<Cause> {
                self.0.cause.clone()
            }
        }
    };
}

/// Table of four constructors that build `E` from [`Stored`] values.
fn stored_table<E: Throwable>(
    cause_type: &'static ErrorClass,
    build: fn(Stored) -> E,
) -> ConstructorTable<E> {
    ConstructorTable::new()
        .no_arg(move || Ok(build(Stored::default())))
        .message(move |message| Ok(build(Stored::message(message))))
        .cause(cause_type, move |cause| Ok(build(Stored::cause(cause))))
        .full(cause_type, move |message, cause| {
            Ok(build(Stored::new(message, cause)))
        })
}

fn unwrap_invocation(cause: Option<Cause>) -> Option<Cause> {
    match cause {
        Some(c) if c.class().is_a(ErrorClass::INVOCATION_TARGET) => c.cause(),
        other => other,
    }
}

stored_error!(
    /// Stores message and cause unchanged.
    GoodCitizen
);

impl CanonicalConstructors for GoodCitizen {
    fn canonical_default() -> Self {
        Self(Stored::default())
    }

    fn from_message(message: Option<String>) -> Self {
        Self(Stored::message(message))
    }

    fn from_cause(cause: Option<Cause>) -> Self {
        Self(Stored::cause(cause))
    }

    fn from_message_and_cause(message: Option<String>, cause: Option<Cause>) -> Self {
        Self(Stored::new(message, cause))
    }
}

impl ConstructorSource for GoodCitizen {
    fn constructors() -> ConstructorTable<Self> {
        ConstructorTable::canonical()
    }
}

stored_error!(
    /// Private no-arg constructor, protected cause constructor.
    HiddenConstructors
);

impl ConstructorSource for HiddenConstructors {
    fn constructors() -> ConstructorTable<Self> {
        ConstructorTable::new()
            .with(
                Constructor::no_arg(|| Ok(Self(Stored::default())))
                    .with_visibility(Visibility::Private),
            )
            .message(|message| Ok(Self(Stored::message(message))))
            .with(
                Constructor::cause(ErrorClass::THROWABLE, |cause| Ok(Self(Stored::cause(cause))))
                    .with_visibility(Visibility::Protected),
            )
            .full(ErrorClass::THROWABLE, |message, cause| {
                Ok(Self(Stored::new(message, cause)))
            })
    }
}

stored_error!(
    /// Conforming constructors on a type that is not itself public.
    HiddenType
);

impl ConstructorSource for HiddenType {
    fn constructors() -> ConstructorTable<Self> {
        stored_table(ErrorClass::THROWABLE, Self).with_type_visibility(Visibility::Private)
    }
}

stored_error!(
    /// The cause constructor always fails, wrapping the cause it was given.
    Throwing
);

impl ConstructorSource for Throwing {
    fn constructors() -> ConstructorTable<Self> {
        ConstructorTable::new()
            .no_arg(|| Ok(Self(Stored::default())))
            .message(|message| Ok(Self(Stored::message(message))))
            .cause(ErrorClass::THROWABLE, |cause| {
                let raised = ErrorValue::new(ErrorClass::RUNTIME_EXCEPTION);
                let raised = match cause {
                    Some(c) => raised.with_cause(c),
                    None => raised,
                };
                Err(raised.into_cause())
            })
            .full(ErrorClass::THROWABLE, |message, cause| {
                Ok(Self(Stored::new(message, cause)))
            })
    }
}

stored_error!(
    /// Prefixes every given message with `"bad! "`.
    Wrapping
);

/// Prefix [`Wrapping`] puts in front of messages.
pub const WRAPPING_PREFIX: &str = "bad! ";

fn prefixed(message: Option<String>) -> Option<String> {
    Some(format!("{}{}", WRAPPING_PREFIX, message.unwrap_or_else(|| "null".into())))
}

impl ConstructorSource for Wrapping {
    fn constructors() -> ConstructorTable<Self> {
        ConstructorTable::new()
            .no_arg(|| Ok(Self(Stored::default())))
            .message(|message| Ok(Self(Stored::message(prefixed(message)))))
            .cause(ErrorClass::THROWABLE, |cause| Ok(Self(Stored::cause(cause))))
            .full(ErrorClass::THROWABLE, |message, cause| {
                Ok(Self(Stored::new(prefixed(message), cause)))
            })
    }
}

stored_error!(
    /// Stores the inner cause of an invocation wrapper instead of the
    /// wrapper itself.
    InvocationUnwrapping
);

impl ConstructorSource for InvocationUnwrapping {
    fn constructors() -> ConstructorTable<Self> {
        ConstructorTable::new()
            .no_arg(|| Ok(Self(Stored::default())))
            .message(|message| Ok(Self(Stored::message(message))))
            .cause(ErrorClass::THROWABLE, |cause| {
                Ok(Self(Stored::cause(unwrap_invocation(cause))))
            })
            .full(ErrorClass::THROWABLE, |message, cause| {
                Ok(Self(Stored::new(message, unwrap_invocation(cause))))
            })
    }
}

stored_error!(
    /// The no-arg constructor supplies a message of its own.
    PuttingWordsInMouth
);

impl ConstructorSource for PuttingWordsInMouth {
    fn constructors() -> ConstructorTable<Self> {
        ConstructorTable::new()
            .no_arg(|| Ok(Self(Stored::message(Some("haha".into())))))
            .message(|message| Ok(Self(Stored::message(message))))
            .cause(ErrorClass::THROWABLE, |cause| Ok(Self(Stored::cause(cause))))
            .full(ErrorClass::THROWABLE, |message, cause| {
                Ok(Self(Stored::new(message, cause)))
            })
    }
}

stored_error!(
    /// Discards given messages in favour of fixed text.
    MessageReplacing
);

impl ConstructorSource for MessageReplacing {
    fn constructors() -> ConstructorTable<Self> {
        ConstructorTable::new()
            .no_arg(|| Ok(Self(Stored::default())))
            .message(|_| Ok(Self(Stored::message(Some("not what you said".into())))))
            .cause(ErrorClass::THROWABLE, |cause| Ok(Self(Stored::cause(cause))))
            .full(ErrorClass::THROWABLE, |_, cause| {
                Ok(Self(Stored::new(Some("!!".into()), cause)))
            })
    }
}

stored_error!(
    /// Stores a new error in place of the given cause.
    CauseReplacing
);

impl ConstructorSource for CauseReplacing {
    fn constructors() -> ConstructorTable<Self> {
        ConstructorTable::new()
            .no_arg(|| Ok(Self(Stored::default())))
            .message(|message| Ok(Self(Stored::message(message))))
            .cause(ErrorClass::THROWABLE, |cause| {
                let replacement = ErrorValue::new(ErrorClass::RUNTIME_EXCEPTION);
                let replacement = match cause {
                    Some(c) => replacement.with_cause(c),
                    None => replacement,
                };
                Ok(Self(Stored::cause(Some(replacement.into_cause()))))
            })
            .full(ErrorClass::THROWABLE, |message, _| {
                let replacement = ErrorValue::new(ErrorClass::RUNTIME_EXCEPTION).into_cause();
                Ok(Self(Stored::new(message, Some(replacement))))
            })
    }
}

stored_error!(
    /// Every constructor ignores its arguments.
    MessageErasing
);

impl ConstructorSource for MessageErasing {
    fn constructors() -> ConstructorTable<Self> {
        ConstructorTable::new()
            .no_arg(|| Ok(Self(Stored::default())))
            .message(|_| Ok(Self(Stored::default())))
            .cause(ErrorClass::THROWABLE, |_| Ok(Self(Stored::default())))
            .full(ErrorClass::THROWABLE, |_, _| Ok(Self(Stored::default())))
    }
}

stored_error!(
    /// Keeps messages but drops every cause.
    CauseErasing
);

impl ConstructorSource for CauseErasing {
    fn constructors() -> ConstructorTable<Self> {
        ConstructorTable::new()
            .no_arg(|| Ok(Self(Stored::default())))
            .message(|message| Ok(Self(Stored::message(message))))
            .cause(ErrorClass::THROWABLE, |_| Ok(Self(Stored::default())))
            .full(ErrorClass::THROWABLE, |message, _| Ok(Self(Stored::message(message))))
    }
}

/// Every `message()` call returns the next value of a counter.
#[derive(Debug)]
pub struct CountingMessage {
    stored: Stored,
    reads: AtomicUsize,
}

impl CountingMessage {
    fn build(stored: Stored) -> Self {
        Self {
            stored,
            reads: AtomicUsize::new(0),
        }
    }
}

impl Throwable for CountingMessage {
    fn message(&self) -> Option<String> {
        Some(self.reads.fetch_add(1, Ordering::SeqCst).to_string())
    }

    fn cause(&self) -> Option<Cause> {
        self.stored.cause.clone()
    }
}

impl ConstructorSource for CountingMessage {
    fn constructors() -> ConstructorTable<Self> {
        stored_table(ErrorClass::THROWABLE, Self::build)
    }
}

/// Every `cause()` call returns a fresh error numbered by a counter.
#[derive(Debug)]
pub struct CountingCause {
    stored: Stored,
    reads: AtomicUsize,
}

impl CountingCause {
    fn build(stored: Stored) -> Self {
        Self {
            stored,
            reads: AtomicUsize::new(0),
        }
    }
}

impl Throwable for CountingCause {
    fn message(&self) -> Option<String> {
        self.stored.message.clone()
    }

    fn cause(&self) -> Option<Cause> {
        let n = self.reads.fetch_add(1, Ordering::SeqCst);
        Some(ErrorValue::runtime(n.to_string()).into_cause())
    }
}

impl ConstructorSource for CountingCause {
    fn constructors() -> ConstructorTable<Self> {
        stored_table(ErrorClass::THROWABLE, Self::build)
    }
}

/// Reports its message on every other read and nothing in between.
#[derive(Debug)]
pub struct FlickeringMessage {
    stored: Stored,
    reads: AtomicUsize,
}

impl FlickeringMessage {
    fn build(stored: Stored) -> Self {
        Self {
            stored,
            reads: AtomicUsize::new(0),
        }
    }
}

impl Throwable for FlickeringMessage {
    fn message(&self) -> Option<String> {
        if self.reads.fetch_add(1, Ordering::SeqCst) % 2 == 0 {
            self.stored.message.clone()
        } else {
            None
        }
    }

    fn cause(&self) -> Option<Cause> {
        self.stored.cause.clone()
    }
}

impl ConstructorSource for FlickeringMessage {
    fn constructors() -> ConstructorTable<Self> {
        stored_table(ErrorClass::THROWABLE, Self::build)
    }
}

/// Reports its cause on every other read and nothing in between.
#[derive(Debug)]
pub struct FlickeringCause {
    stored: Stored,
    reads: AtomicUsize,
}

impl FlickeringCause {
    fn build(stored: Stored) -> Self {
        Self {
            stored,
            reads: AtomicUsize::new(0),
        }
    }
}

impl Throwable for FlickeringCause {
    fn message(&self) -> Option<String> {
        self.stored.message.clone()
    }

    fn cause(&self) -> Option<Cause> {
        if self.reads.fetch_add(1, Ordering::SeqCst) % 2 == 0 {
            self.stored.cause.clone()
        } else {
            None
        }
    }
}

impl ConstructorSource for FlickeringCause {
    fn constructors() -> ConstructorTable<Self> {
        stored_table(ErrorClass::THROWABLE, Self::build)
    }
}

/// `message()` panics.
#[derive(Debug)]
pub struct BadGetMessage(pub Stored);

impl Throwable for BadGetMessage {
    fn message(&self) -> Option<String> {
        panic!("illegal argument")
    }

    fn cause(&self) -> Option<Cause> {
        self.0.cause.clone()
    }
}

impl ConstructorSource for BadGetMessage {
    fn constructors() -> ConstructorTable<Self> {
        stored_table(ErrorClass::THROWABLE, Self)
    }
}

stored_error!(
    /// The message-and-cause constructor refuses a null message.
    NullMessageSensitive
);

impl ConstructorSource for NullMessageSensitive {
    fn constructors() -> ConstructorTable<Self> {
        ConstructorTable::new()
            .no_arg(|| Ok(Self(Stored::default())))
            .message(|message| Ok(Self(Stored::message(message))))
            .cause(ErrorClass::THROWABLE, |cause| Ok(Self(Stored::cause(cause))))
            .full(ErrorClass::THROWABLE, |message, cause| {
                let message = message
                    .ok_or_else(|| ErrorValue::runtime("message must not be null").into_cause())?;
                Ok(Self(Stored::new(Some(message), cause)))
            })
    }
}

stored_error!(
    /// Declares conforming constructors but cannot be instantiated.
    AbstractError
);

impl ConstructorSource for AbstractError {
    fn constructors() -> ConstructorTable<Self> {
        stored_table(ErrorClass::THROWABLE, Self).abstract_type()
    }
}

stored_error!(
    /// Conforming, with cause parameters declared as `Exception`.
    ExceptionCause
);

impl ConstructorSource for ExceptionCause {
    fn constructors() -> ConstructorTable<Self> {
        stored_table(ErrorClass::EXCEPTION, Self)
    }
}

stored_error!(
    /// Conforming, with cause parameters declared as `RuntimeException`.
    RuntimeCause
);

impl ConstructorSource for RuntimeCause {
    fn constructors() -> ConstructorTable<Self> {
        stored_table(ErrorClass::RUNTIME_EXCEPTION, Self)
    }
}
