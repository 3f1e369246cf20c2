//! Actions a combatant can take and the events they produce.
//!
//! An [`Action`] pairs an acting [`Role`] with an [`ActionKind`]; the engine
//! resolves it through a single function and reports what happened as an
//! [`ActionOutcome`]. Outcomes carry everything a frontend needs to log or
//! animate the action without the engine knowing about any display.
mod kind;
mod outcome;

pub use kind::ActionKind;
pub use outcome::{ActionEffect, ActionOutcome};

use crate::state::Role;

/// A single action submitted to the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Action {
    pub actor: Role,
    pub kind: ActionKind,
}

impl Action {
    pub const fn new(actor: Role, kind: ActionKind) -> Self {
        Self { actor, kind }
    }

    /// Returns the combatant affected by this action.
    ///
    /// Attacks hit the other side; defend and heal apply to the actor.
    pub const fn target(&self) -> Role {
        match self.kind {
            ActionKind::Attack => self.actor.opponent(),
            ActionKind::Defend | ActionKind::Heal => self.actor,
        }
    }
}
