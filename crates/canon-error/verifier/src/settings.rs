//! Loadable verifier settings.

use canon_error_types::{ErrorClass, Strictness};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Settings errors
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("invalid settings: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("unknown cause type: {0}")]
    UnknownCauseType(String),
}

/// Strictness and cause type, as they appear in a settings file.
///
/// ```json
/// { "strictness": "weak", "cause_type": "Exception" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VerifierSettings {
    pub strictness: Strictness,
    /// Class name of the cause parameter, matched case-insensitively.
    pub cause_type: String,
}

impl Default for VerifierSettings {
    fn default() -> Self {
        Self {
            strictness: Strictness::default(),
            cause_type: ErrorClass::THROWABLE.name().to_string(),
        }
    }
}

impl VerifierSettings {
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Resolve `cause_type` against the built-in classes and `extra`.
    pub fn resolve_cause_type(
        &self,
        extra: &[&'static ErrorClass],
    ) -> Result<&'static ErrorClass, SettingsError> {
        ErrorClass::resolve(self.cause_type.trim(), extra)
            .ok_or_else(|| SettingsError::UnknownCauseType(self.cause_type.clone()))
    }
}
