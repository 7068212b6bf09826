//! Canonical Error Conformance Suite
//!
//! Specimen error types for exercising the canonical error verifier, one
//! conforming and the rest each breaking the four-constructor contract in
//! a single way.
//!
//! | Specimen | Breaks | STRICT | WEAK |
//! |----------|--------|--------|------|
//! | `GoodCitizen` | nothing | pass | pass |
//! | `HiddenConstructors` | constructor visibility | fail | fail |
//! | `HiddenType` | type visibility | fail | fail |
//! | `Throwing` | cause constructor fails | fail | fail |
//! | `Wrapping` | message prefixed | fail | pass |
//! | `InvocationUnwrapping` | wrapper cause unwrapped | fail | pass |
//! | `PuttingWordsInMouth` | no-arg message | fail | pass |
//! | `MessageReplacing` | message replaced | fail | fail |
//! | `CauseReplacing` | cause replaced | fail | fail |
//! | `MessageErasing` | message and cause dropped | fail | fail |
//! | `CauseErasing` | cause dropped | fail | fail |
//! | `CountingMessage` | message not repeatable | fail | fail |
//! | `CountingCause` | cause not repeatable | fail | fail |
//! | `FlickeringMessage` | message not repeatable | fail | fail |
//! | `FlickeringCause` | cause not repeatable | fail | fail |
//! | `BadGetMessage` | message accessor panics | fail | fail |
//! | `NullMessageSensitive` | rejects null message | fail | pass |
//! | `AbstractError` | not instantiable | fail | fail |
//! | `ExceptionCause` | nothing (`Exception` causes) | pass | pass |
//! | `RuntimeCause` | cannot take the invocation wrapper | fail | fail |
//!
//! `ExceptionCause` and `RuntimeCause` are listed for their own declared
//! cause type; verified against the default `Throwable` cause type both
//! report a missing cause constructor.

#![deny(unsafe_code)]

pub mod specimens;

pub use specimens::*;
