//! Verification requests and the fluent entry point.
//!
//! ```rust,ignore
//! use canon_error_verifier::ErrorVerifier;
//! use canon_error_types::{ErrorClass, Strictness};
//!
//! ErrorVerifier::for_type::<MyError>()
//!     .with_cause_type(ErrorClass::EXCEPTION)
//!     .with_strictness(Strictness::Weak)
//!     .run()?;
//! ```

use crate::error::VerificationResult;
use crate::report::{RunReport, ScenarioEntry};
use crate::runner::VerificationRun;
use crate::settings::{SettingsError, VerifierSettings};
use crate::table::{ConstructorSource, ConstructorTable};
use canon_error_types::{ErrorClass, Strictness, Throwable};
use chrono::Utc;
use uuid::Uuid;

/// The type under verification and its constructors.
#[derive(Debug)]
pub struct TargetType<E> {
    name: String,
    table: ConstructorTable<E>,
}

impl<E> TargetType<E> {
    pub fn new(name: impl Into<String>, table: ConstructorTable<E>) -> Self {
        Self {
            name: name.into(),
            table,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn table(&self) -> &ConstructorTable<E> {
        &self.table
    }
}

/// Entry point for building verification requests.
pub struct ErrorVerifier;

impl ErrorVerifier {
    /// Verify a type that publishes its own constructor table.
    pub fn for_type<E: ConstructorSource>() -> VerifierBuilder<E> {
        VerifierBuilder::new(TargetType::new(
            std::any::type_name::<E>(),
            E::constructors(),
        ))
    }

    /// Verify an explicitly supplied constructor table.
    pub fn for_table<E: Throwable>(
        name: impl Into<String>,
        table: ConstructorTable<E>,
    ) -> VerifierBuilder<E> {
        VerifierBuilder::new(TargetType::new(name, table))
    }
}

/// Fluent configuration for one verification run.
#[derive(Debug)]
pub struct VerifierBuilder<E> {
    target: TargetType<E>,
    cause_type: &'static ErrorClass,
    strictness: Strictness,
}

impl<E: Throwable> VerifierBuilder<E> {
    fn new(target: TargetType<E>) -> Self {
        Self {
            target,
            cause_type: ErrorClass::THROWABLE,
            strictness: Strictness::default(),
        }
    }

    /// Declared class of cause parameters. Commonly narrowed from
    /// `Throwable` to `Exception`.
    pub fn with_cause_type(mut self, cause_type: &'static ErrorClass) -> Self {
        self.cause_type = cause_type;
        self
    }

    pub fn with_strictness(mut self, strictness: Strictness) -> Self {
        self.strictness = strictness;
        self
    }

    /// Apply loaded settings. Only built-in cause classes can be named.
    pub fn with_settings(self, settings: &VerifierSettings) -> Result<Self, SettingsError> {
        self.with_settings_and_classes(settings, &[])
    }

    /// Apply loaded settings, resolving the cause class against the
    /// built-in classes and `extra`.
    pub fn with_settings_and_classes(
        mut self,
        settings: &VerifierSettings,
        extra: &[&'static ErrorClass],
    ) -> Result<Self, SettingsError> {
        self.cause_type = settings.resolve_cause_type(extra)?;
        self.strictness = settings.strictness;
        Ok(self)
    }

    pub fn build(self) -> VerificationRequest<E> {
        VerificationRequest {
            target: self.target,
            cause_type: self.cause_type,
            strictness: self.strictness,
        }
    }

    /// Build and run. `Ok(())` means the type conforms.
    pub fn run(self) -> VerificationResult<()> {
        self.build().run()
    }

    /// Build and run, reporting what was executed.
    pub fn run_with_report(self) -> VerificationResult<RunReport> {
        self.build().run_with_report()
    }

    /// Build and run, panicking with the failure on non-conformance.
    #[track_caller]
    pub fn assert_conformant(self) {
        self.build().assert_conformant()
    }
}

/// Immutable bundle of target type, cause parameter type and strictness.
#[derive(Debug)]
pub struct VerificationRequest<E> {
    target: TargetType<E>,
    cause_type: &'static ErrorClass,
    strictness: Strictness,
}

impl<E: Throwable> VerificationRequest<E> {
    pub fn target(&self) -> &TargetType<E> {
        &self.target
    }

    pub fn cause_type(&self) -> &'static ErrorClass {
        self.cause_type
    }

    pub fn strictness(&self) -> Strictness {
        self.strictness
    }

    pub fn run(&self) -> VerificationResult<()> {
        self.run_with_report().map(|_| ())
    }

    pub fn run_with_report(&self) -> VerificationResult<RunReport> {
        let run_id = Uuid::new_v4();
        let started_at = Utc::now();
        tracing::info!(
            %run_id,
            target_type = %self.target.name(),
            cause_type = %self.cause_type,
            strictness = %self.strictness,
            "starting error verification"
        );

        let mut run = VerificationRun::new(self);
        run.execute()?;

        let report = RunReport {
            run_id,
            target: self.target.name().to_string(),
            cause_type: self.cause_type.name().to_string(),
            strictness: self.strictness,
            scenarios: run.executed().to_vec(),
            catalogue: ScenarioEntry::catalogue(self.cause_type, run.executed()),
            started_at,
            completed_at: Utc::now(),
        };
        tracing::info!(
            %run_id,
            target_type = %self.target.name(),
            scenarios = report.scenarios.len(),
            "error verification passed"
        );
        Ok(report)
    }

    #[track_caller]
    pub fn assert_conformant(&self) {
        if let Err(failure) = self.run() {
            panic!(
                "{} does not follow the canonical constructor contract ({} mode): {}",
                self.target.name(),
                self.strictness,
                failure
            );
        }
    }
}
