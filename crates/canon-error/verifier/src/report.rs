//! Report of a successful verification run.

use crate::scenario::ScenarioId;
use canon_error_types::{ErrorClass, Strictness};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One catalogue scenario as a run resolved it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioEntry {
    pub id: ScenarioId,
    /// Parameter-form label for the run's cause type.
    pub label: String,
    pub executed: bool,
}

impl ScenarioEntry {
    /// Resolve every catalogue scenario against `cause_type`, marking the
    /// ones in `executed`.
    pub fn catalogue(cause_type: &ErrorClass, executed: &[ScenarioId]) -> Vec<ScenarioEntry> {
        ScenarioId::ALL
            .into_iter()
            .map(|id| ScenarioEntry {
                id,
                label: id.label(cause_type),
                executed: executed.contains(&id),
            })
            .collect()
    }
}

/// What a passing run executed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunReport {
    /// Unique id of the run.
    pub run_id: Uuid,
    /// Display name of the verified type.
    pub target: String,
    /// Declared class of the cause parameters.
    pub cause_type: String,
    pub strictness: Strictness,
    /// Executed scenarios, in order.
    pub scenarios: Vec<ScenarioId>,
    /// The whole catalogue with labels resolved at run time.
    pub catalogue: Vec<ScenarioEntry>,
    pub started_at: DateTime<Utc>,
    pub completed_at: DateTime<Utc>,
}

impl RunReport {
    pub fn duration_ms(&self) -> i64 {
        (self.completed_at - self.started_at).num_milliseconds()
    }

    pub fn executed(&self, id: ScenarioId) -> bool {
        self.scenarios.contains(&id)
    }
}

impl std::fmt::Display for RunReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Canonical Error Constructor Report")?;
        writeln!(f, "==================================")?;
        writeln!(f, "Run: {}", self.run_id)?;
        writeln!(f, "Target: {}", self.target)?;
        writeln!(f, "Cause type: {}", self.cause_type)?;
        writeln!(f, "Strictness: {}", self.strictness)?;
        writeln!(
            f,
            "Started: {}",
            self.started_at.format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        writeln!(f, "Duration: {}ms", self.duration_ms())?;
        writeln!(f)?;

        writeln!(f, "Scenarios:")?;
        for entry in &self.catalogue {
            let status = if entry.executed { "✓" } else { "○" };
            writeln!(f, "  {} #{} {}", status, entry.id.number(), entry.label)?;
        }
        writeln!(f)?;
        writeln!(f, "Result: CONFORMANT")
    }
}
