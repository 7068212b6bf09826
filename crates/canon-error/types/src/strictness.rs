//! Verification strictness.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// How tolerant verification is of constructors that adjust their inputs.
///
/// `Weak` allows, where `Strict` forbids:
/// - a message from the no-argument constructor
/// - case changes in the message
/// - extra text surrounding the message
/// - unpacking an invocation-wrapper cause to its inner cause
/// - constructors that reject null arguments (null scenarios are skipped)
///
/// `Strict` requires every value to be passed through unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strictness {
    Weak,
    #[default]
    Strict,
}

impl Strictness {
    /// Whether scenarios passing a null message or cause are executed.
    pub fn runs_null_scenarios(&self) -> bool {
        matches!(self, Strictness::Strict)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Strictness::Weak => "weak",
            Strictness::Strict => "strict",
        }
    }
}

impl fmt::Display for Strictness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown strictness level: {0} (expected \"weak\" or \"strict\")")]
pub struct StrictnessParseError(pub String);

impl FromStr for Strictness {
    type Err = StrictnessParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "weak" => Ok(Strictness::Weak),
            "strict" => Ok(Strictness::Strict),
            _ => Err(StrictnessParseError(s.to_string())),
        }
    }
}
