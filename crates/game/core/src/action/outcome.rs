//! Events describing resolved actions.

use super::ActionKind;
use crate::state::Role;

/// What an action did to the battle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionEffect {
    /// Damage dealt to `target`; `remaining_hp` is the target's hp afterwards.
    Damage {
        target: Role,
        amount: i32,
        remaining_hp: i32,
    },
    /// The actor braced. Nothing changed.
    Guard,
    /// Health restored to the actor; `hp` is the actor's hp afterwards.
    Heal { amount: i32, hp: i32 },
}

/// Result of resolving one action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionOutcome {
    pub actor: Role,
    pub kind: ActionKind,
    pub effect: ActionEffect,
}

impl ActionOutcome {
    /// Damage dealt or health restored; zero for a guard.
    pub fn amount(&self) -> i32 {
        match self.effect {
            ActionEffect::Damage { amount, .. } | ActionEffect::Heal { amount, .. } => amount,
            ActionEffect::Guard => 0,
        }
    }

    /// The combatant whose hp this action touched, if any.
    pub fn target(&self) -> Option<Role> {
        match self.effect {
            ActionEffect::Damage { target, .. } => Some(target),
            ActionEffect::Heal { .. } => Some(self.actor),
            ActionEffect::Guard => None,
        }
    }
}
