//! Scenario runner.
//!
//! Drives locate → construct → observe → check for every planned scenario,
//! in catalogue order, and stops at the first failure.

use crate::error::{Thrown, VerificationFailure, VerificationResult};
use crate::fixtures::FixtureSet;
use crate::invoker::{construct, panic_cause};
use crate::locator::locate;
use crate::policy::{AssertionPolicy, Observation};
use crate::request::VerificationRequest;
use crate::scenario::{Scenario, ScenarioId, ScenarioPlan};
use canon_error_types::Throwable;
use std::panic::{self, AssertUnwindSafe};

/// Lifecycle of a [`VerificationRun`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    NotStarted,
    /// Executing the scenario at this index of the plan.
    Running { index: usize },
    Done,
    Aborted,
}

impl RunState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, RunState::Done | RunState::Aborted)
    }
}

/// State of a single verification call. Created per run and discarded
/// afterwards; a run executes at most once.
#[derive(Debug)]
pub struct VerificationRun<'r, E> {
    request: &'r VerificationRequest<E>,
    policy: AssertionPolicy,
    scenarios: Vec<Scenario>,
    state: RunState,
    executed: Vec<ScenarioId>,
    failure: Option<VerificationFailure>,
}

impl<'r, E: Throwable> VerificationRun<'r, E> {
    pub fn new(request: &'r VerificationRequest<E>) -> Self {
        let plan = ScenarioPlan::for_strictness(request.strictness());
        let scenarios = plan.scenarios(FixtureSet::shared(), request.cause_type());
        Self {
            request,
            policy: AssertionPolicy::for_strictness(request.strictness()),
            scenarios,
            state: RunState::NotStarted,
            executed: Vec::new(),
            failure: None,
        }
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn scenarios(&self) -> &[Scenario] {
        &self.scenarios
    }

    /// Scenarios that completed successfully, in order.
    pub fn executed(&self) -> &[ScenarioId] {
        &self.executed
    }

    /// The failure that aborted the run, once it has.
    pub fn failure(&self) -> Option<&VerificationFailure> {
        self.failure.as_ref()
    }

    /// Execute every planned scenario. Returns the first failure; a run
    /// that already reached a terminal state is not executed again and
    /// answers with its recorded outcome.
    pub fn execute(&mut self) -> VerificationResult<()> {
        match self.state {
            RunState::Done => return Ok(()),
            RunState::Aborted => {
                if let Some(failure) = &self.failure {
                    return Err(failure.clone());
                }
            }
            RunState::NotStarted | RunState::Running { .. } => {}
        }

        for index in 0..self.scenarios.len() {
            self.state = RunState::Running { index };
            let scenario = &self.scenarios[index];
            tracing::debug!(
                scenario = %scenario.id(),
                constructor = %scenario.label(),
                "running scenario"
            );

            if let Err(failure) = self.run_scenario(scenario) {
                self.state = RunState::Aborted;
                tracing::warn!(
                    target_type = %self.request.target().name(),
                    kind = ?failure.kind(),
                    error = %failure,
                    "verification aborted"
                );
                self.failure = Some(failure.clone());
                return Err(failure);
            }

            let id = scenario.id();
            self.executed.push(id);
        }

        self.state = RunState::Done;
        Ok(())
    }

    fn run_scenario(&self, scenario: &Scenario) -> VerificationResult<()> {
        let label = scenario.label();
        let table = self.request.target().table();

        let handle = locate(table, scenario.kinds(), self.request.cause_type())
            .map_err(|err| VerificationFailure::from_locate(err, label))?;

        let instance = construct(&handle, scenario.arguments().clone())
            .map_err(|err| VerificationFailure::from_construct(err, label))?;

        let observed = panic::catch_unwind(AssertUnwindSafe(|| Observation::observe(&instance)))
            .map_err(|payload| VerificationFailure::AccessorPanicked {
                label: label.to_string(),
                thrown: Thrown(panic_cause(payload)),
            })?;

        self.policy.check_scenario(scenario, &observed)
    }
}
