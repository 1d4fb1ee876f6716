//! Result of a gameplay action as seen by callers.

use tank_core::{ActionReport, GameState, Rejection};

/// What an action did.
///
/// Exactly one of `report` and `rejection` is set. `state` is the session
/// snapshot after the action, unchanged when it was rejected.
#[derive(Clone, Debug, PartialEq)]
pub struct ActionOutcome {
    pub state: GameState,
    pub report: Option<ActionReport>,
    pub rejection: Option<Rejection>,
}

impl ActionOutcome {
    pub(crate) fn accepted(state: GameState, report: ActionReport) -> Self {
        Self {
            state,
            report: Some(report),
            rejection: None,
        }
    }

    pub(crate) fn rejected(state: GameState, rejection: Rejection) -> Self {
        Self {
            state,
            report: None,
            rejection: Some(rejection),
        }
    }

    pub fn is_accepted(&self) -> bool {
        self.rejection.is_none()
    }
}
