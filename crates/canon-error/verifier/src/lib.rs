//! Canonical Error Verifier
//!
//! Checks that an error type honours the four-constructor contract: each of
//! the default, message, cause and message-plus-cause constructors exists,
//! is accessible, stores its arguments faithfully, and yields an instance
//! whose `message()` and `cause()` are repeatable.
//!
//! # Scenarios
//!
//! Eleven scenarios run in a fixed order; the run stops at the first
//! failure. Under [`Strictness::Weak`] the five scenarios that pass a null
//! argument are skipped, a no-arg constructor may supply its own message,
//! a message may be embedded in a longer one, and a wrapper cause may be
//! unwrapped.
//!
//! # Quick Start
//!
//! ```rust
//! use canon_error_types::{Cause, ErrorClass, Throwable};
//! use canon_error_verifier::{ConstructorSource, ConstructorTable, ErrorVerifier};
//!
//! #[derive(Debug)]
//! struct ConfigError {
//!     message: Option<String>,
//!     cause: Option<Cause>,
//! }
//!
//! impl Throwable for ConfigError {
//!     fn message(&self) -> Option<String> {
//!         self.message.clone()
//!     }
//!
//!     fn cause(&self) -> Option<Cause> {
//!         self.cause.clone()
//!     }
//! }
//!
//! impl ConstructorSource for ConfigError {
//!     fn constructors() -> ConstructorTable<Self> {
//!         ConstructorTable::new()
//!             .no_arg(|| Ok(ConfigError { message: None, cause: None }))
//!             .message(|message| Ok(ConfigError { message, cause: None }))
//!             .cause(ErrorClass::THROWABLE, |cause| Ok(ConfigError { message: None, cause }))
//!             .full(ErrorClass::THROWABLE, |message, cause| Ok(ConfigError { message, cause }))
//!     }
//! }
//!
//! ErrorVerifier::for_type::<ConfigError>().run().unwrap();
//! ```

#![deny(unsafe_code)]

pub mod error;
pub mod fixtures;
pub mod invoker;
pub mod locator;
pub mod policy;
pub mod report;
pub mod request;
pub mod runner;
pub mod scenario;
pub mod settings;
pub mod table;

// Re-export key types at crate root.
pub use canon_error_types::{ErrorClass, Strictness};
pub use error::{
    ConstructError, FailureKind, LocateError, Thrown, VerificationFailure, VerificationResult,
    Violation,
};
pub use fixtures::{FixtureSet, SENTINEL_MESSAGE};
pub use report::{RunReport, ScenarioEntry};
pub use request::{ErrorVerifier, TargetType, VerificationRequest, VerifierBuilder};
pub use runner::{RunState, VerificationRun};
pub use scenario::{Scenario, ScenarioId, ScenarioPlan};
pub use settings::{SettingsError, VerifierSettings};
pub use table::{CanonicalConstructors, Constructor, ConstructorSource, ConstructorTable};
