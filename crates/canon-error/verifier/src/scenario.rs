//! The fixed scenario catalogue.
//!
//! | # | Scenario | Runs under |
//! |---|----------|------------|
//! | 1 | no-arg | both |
//! | 2 | message | both |
//! | 3 | message = null | STRICT |
//! | 4 | cause | both |
//! | 5 | cause = wrapper | both |
//! | 6 | cause = null | STRICT |
//! | 7 | message, cause | both |
//! | 8 | message, cause = wrapper | both |
//! | 9 | message = null, cause | STRICT |
//! | 10 | message, cause = null | STRICT |
//! | 11 | message = null, cause = null | STRICT |

use crate::fixtures::FixtureSet;
use canon_error_types::{Arguments, Cause, ErrorClass, ParamKind, Strictness};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

const NO_PARAMS: &[ParamKind] = &[];
const MESSAGE_ONLY: &[ParamKind] = &[ParamKind::Message];
const CAUSE_ONLY: &[ParamKind] = &[ParamKind::Cause];
const MESSAGE_AND_CAUSE: &[ParamKind] = &[ParamKind::Message, ParamKind::Cause];

/// Identifies one scenario of the catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScenarioId {
    NoArg,
    Message,
    NullMessage,
    Cause,
    WrappedCause,
    NullCause,
    Full,
    FullWrappedCause,
    FullNullMessage,
    FullNullCause,
    FullNullEverything,
}

/// Message argument of a scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MessageArg {
    Omitted,
    Sentinel,
    Null,
}

/// Cause argument of a scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CauseArg {
    Omitted,
    Plain,
    Wrapped,
    Null,
}

impl ScenarioId {
    /// Execution order.
    pub const ALL: [ScenarioId; 11] = [
        ScenarioId::NoArg,
        ScenarioId::Message,
        ScenarioId::NullMessage,
        ScenarioId::Cause,
        ScenarioId::WrappedCause,
        ScenarioId::NullCause,
        ScenarioId::Full,
        ScenarioId::FullWrappedCause,
        ScenarioId::FullNullMessage,
        ScenarioId::FullNullCause,
        ScenarioId::FullNullEverything,
    ];

    /// Position in the catalogue, 1-based.
    pub fn number(&self) -> usize {
        Self::ALL
            .iter()
            .position(|id| id == self)
            .map_or(0, |index| index + 1)
    }

    /// Parameter kinds of the constructor this scenario exercises.
    pub fn kinds(&self) -> &'static [ParamKind] {
        match self {
            ScenarioId::NoArg => NO_PARAMS,
            ScenarioId::Message | ScenarioId::NullMessage => MESSAGE_ONLY,
            ScenarioId::Cause | ScenarioId::WrappedCause | ScenarioId::NullCause => CAUSE_ONLY,
            ScenarioId::Full
            | ScenarioId::FullWrappedCause
            | ScenarioId::FullNullMessage
            | ScenarioId::FullNullCause
            | ScenarioId::FullNullEverything => MESSAGE_AND_CAUSE,
        }
    }

    fn message_arg(&self) -> MessageArg {
        match self {
            ScenarioId::NoArg
            | ScenarioId::Cause
            | ScenarioId::WrappedCause
            | ScenarioId::NullCause => MessageArg::Omitted,
            ScenarioId::Message
            | ScenarioId::Full
            | ScenarioId::FullWrappedCause
            | ScenarioId::FullNullCause => MessageArg::Sentinel,
            ScenarioId::NullMessage
            | ScenarioId::FullNullMessage
            | ScenarioId::FullNullEverything => MessageArg::Null,
        }
    }

    fn cause_arg(&self) -> CauseArg {
        match self {
            ScenarioId::NoArg | ScenarioId::Message | ScenarioId::NullMessage => CauseArg::Omitted,
            ScenarioId::Cause | ScenarioId::Full | ScenarioId::FullNullMessage => CauseArg::Plain,
            ScenarioId::WrappedCause | ScenarioId::FullWrappedCause => CauseArg::Wrapped,
            ScenarioId::NullCause | ScenarioId::FullNullCause | ScenarioId::FullNullEverything => {
                CauseArg::Null
            }
        }
    }

    /// Whether any argument of this scenario is null.
    pub fn passes_null(&self) -> bool {
        self.message_arg() == MessageArg::Null || self.cause_arg() == CauseArg::Null
    }

    /// Parameter-form label, e.g. `(String message = null, Throwable cause)`.
    pub fn label(&self, cause_type: &ErrorClass) -> String {
        if self.kinds().is_empty() {
            return "(default; no-arg)".to_string();
        }

        let mut params = Vec::with_capacity(2);
        match self.message_arg() {
            MessageArg::Omitted => {}
            MessageArg::Sentinel => params.push("String message".to_string()),
            MessageArg::Null => params.push("String message = null".to_string()),
        }
        match self.cause_arg() {
            CauseArg::Omitted => {}
            CauseArg::Plain => params.push(format!("{} cause", cause_type)),
            CauseArg::Wrapped => params.push(format!(
                "{} cause = {}",
                cause_type,
                ErrorClass::INVOCATION_TARGET
            )),
            CauseArg::Null => params.push(format!("{} cause = null", cause_type)),
        }
        format!("({})", params.join(", "))
    }
}

impl fmt::Display for ScenarioId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {}", self.number(), self.label(ErrorClass::THROWABLE))
    }
}

/// What the message must look like after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpectedMessage {
    /// No message. `from_no_arg` marks the no-argument constructor.
    Empty { from_no_arg: bool },
    /// The given text.
    Present(&'static str),
    /// Not inspected.
    Unchecked,
}

/// What the cause must be after construction.
#[derive(Debug, Clone)]
pub enum ExpectedCause {
    Empty,
    /// This exact cause (identity, not equality).
    Present(Cause),
    Unchecked,
}

/// A fully resolved scenario: arguments and expectations bound to the
/// shared fixtures and the configured cause type.
#[derive(Debug, Clone)]
pub struct Scenario {
    id: ScenarioId,
    label: String,
    arguments: Arguments,
    expected_message: ExpectedMessage,
    expected_cause: ExpectedCause,
}

impl Scenario {
    pub fn build(id: ScenarioId, fixtures: &FixtureSet, cause_type: &'static ErrorClass) -> Self {
        let (message, expected_message) = match id.message_arg() {
            MessageArg::Sentinel => (
                Some(fixtures.message().to_string()),
                ExpectedMessage::Present(fixtures.message()),
            ),
            MessageArg::Null => (None, ExpectedMessage::Empty { from_no_arg: false }),
            MessageArg::Omitted if id.kinds().is_empty() => {
                (None, ExpectedMessage::Empty { from_no_arg: true })
            }
            MessageArg::Omitted => (None, ExpectedMessage::Unchecked),
        };

        let (cause, expected_cause) = match id.cause_arg() {
            CauseArg::Plain => {
                let cause = Arc::clone(fixtures.plain_cause());
                (Some(Arc::clone(&cause)), ExpectedCause::Present(cause))
            }
            CauseArg::Wrapped => {
                let cause = Arc::clone(fixtures.wrapped_cause());
                (Some(Arc::clone(&cause)), ExpectedCause::Present(cause))
            }
            CauseArg::Null | CauseArg::Omitted => (None, ExpectedCause::Empty),
        };

        Self {
            id,
            label: id.label(cause_type),
            arguments: Arguments::new(message, cause),
            expected_message,
            expected_cause,
        }
    }

    pub fn id(&self) -> ScenarioId {
        self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn kinds(&self) -> &'static [ParamKind] {
        self.id.kinds()
    }

    pub fn arguments(&self) -> &Arguments {
        &self.arguments
    }

    pub fn expected_message(&self) -> &ExpectedMessage {
        &self.expected_message
    }

    pub fn expected_cause(&self) -> &ExpectedCause {
        &self.expected_cause
    }
}

/// The ordered scenario subset executed at a strictness level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenarioPlan {
    strictness: Strictness,
    ids: Vec<ScenarioId>,
}

impl ScenarioPlan {
    /// STRICT runs the whole catalogue; WEAK drops every scenario that
    /// passes a null argument.
    pub fn for_strictness(strictness: Strictness) -> Self {
        let ids = ScenarioId::ALL
            .into_iter()
            .filter(|id| strictness.runs_null_scenarios() || !id.passes_null())
            .collect();
        Self { strictness, ids }
    }

    pub fn strictness(&self) -> Strictness {
        self.strictness
    }

    pub fn ids(&self) -> &[ScenarioId] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn contains(&self, id: ScenarioId) -> bool {
        self.ids.contains(&id)
    }

    /// Resolve every planned scenario against `fixtures` and `cause_type`.
    pub fn scenarios(&self, fixtures: &FixtureSet, cause_type: &'static ErrorClass) -> Vec<Scenario> {
        self.ids
            .iter()
            .map(|&id| Scenario::build(id, fixtures, cause_type))
            .collect()
    }
}
