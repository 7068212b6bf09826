//! Canonical Error Types
//!
//! Data model shared by the canonical error verifier and the types it
//! verifies. An error type that follows the canonical constructor set
//! ("rule of four") can be built four ways:
//!
//! | Form | Parameters |
//! |------|------------|
//! | default | none |
//! | message | `String message` |
//! | cause | `<cause type> cause` |
//! | full | `String message, <cause type> cause` |
//!
//! Errors are observed through the [`Throwable`] trait. Causes are shared
//! as [`Cause`] (`Arc<dyn Throwable>`), so "the same cause" always means the
//! same allocation, never structural equality.

#![deny(unsafe_code)]

pub mod class;
pub mod param;
pub mod strictness;
pub mod throwable;

pub use class::ErrorClass;
pub use param::{Arguments, ParamKind, ParamType, Visibility};
pub use strictness::{Strictness, StrictnessParseError};
pub use throwable::{same_cause, Cause, ErrorValue, Throwable};
