//! Action resolution and turn protocol.
//!
//! The [`BattleEngine`] is the only writer of [`BattleState`]. Every action,
//! whether chosen by the player or rolled for the opponent, goes through
//! [`BattleEngine::execute`], which resolves it, advances the nonce and
//! updates the battle phase. [`BattleEngine::play_turn`] layers the turn
//! protocol on top: one player action followed by the opponent's counter-turn.

mod errors;
mod turns;

pub use errors::ExecuteError;
pub use turns::TurnReport;

use crate::action::{Action, ActionEffect, ActionKind, ActionOutcome};
use crate::combat;
use crate::env::{BattleEnv, RollContext, compute_seed};
use crate::state::{BattlePhase, BattleState, Role};

/// Resolves actions against a borrowed battle state.
pub struct BattleEngine<'a> {
    state: &'a mut BattleState,
    env: BattleEnv<'a>,
}

impl<'a> BattleEngine<'a> {
    pub fn new(state: &'a mut BattleState, env: BattleEnv<'a>) -> Self {
        Self { state, env }
    }

    pub fn state(&self) -> &BattleState {
        self.state
    }

    pub fn phase(&self) -> BattlePhase {
        self.state.turn.phase
    }

    /// Resolves a single action.
    ///
    /// Fails only when the battle is already over; once `Over` is reached
    /// the state is frozen.
    pub fn execute(&mut self, action: Action) -> Result<ActionOutcome, ExecuteError> {
        if let BattlePhase::Over { winner } = self.state.turn.phase {
            return Err(ExecuteError::battle_over(
                winner,
                action.actor,
                self.state.turn.nonce,
            ));
        }

        let outcome = self.resolve(action);
        self.state.turn.nonce += 1;

        tracing::debug!(
            actor = %action.actor,
            kind = %action.kind,
            amount = outcome.amount(),
            nonce = self.state.turn.nonce,
            "action resolved"
        );

        self.update_phase(action);
        Ok(outcome)
    }

    fn resolve(&mut self, action: Action) -> ActionOutcome {
        let nonce = self.state.turn.nonce;
        let seed = self.state.turn.seed;
        let (actor, target) = self.state.pair_mut(action.actor);

        let effect = match action.kind {
            ActionKind::Attack => {
                let amount = combat::attack(actor, target);
                ActionEffect::Damage {
                    target: target.role(),
                    amount,
                    remaining_hp: target.hp(),
                }
            }
            ActionKind::Defend => {
                combat::defend(actor);
                ActionEffect::Guard
            }
            ActionKind::Heal => {
                let roll_seed = compute_seed(seed, nonce, action.actor, RollContext::Heal);
                let amount =
                    combat::heal(actor, self.env.rng(), roll_seed, self.env.heal_range());
                ActionEffect::Heal {
                    amount,
                    hp: actor.hp(),
                }
            }
        };

        ActionOutcome {
            actor: action.actor,
            kind: action.kind,
            effect,
        }
    }

    /// Moves the battle to `Over` as soon as either side is down.
    ///
    /// The surviving side wins. A single action can only drop one combatant,
    /// so the both-down arm is unreachable and credits the actor.
    fn update_phase(&mut self, action: Action) {
        let winner = match (
            combat::is_alive(&self.state.hero),
            combat::is_alive(&self.state.enemy),
        ) {
            (true, true) => return,
            (true, false) => Role::Human,
            (false, true) => Role::Opponent,
            (false, false) => action.actor,
        };

        tracing::info!(
            winner = self.state.combatant(winner).name(),
            defeated = self.state.combatant(winner.opponent()).name(),
            nonce = self.state.turn.nonce,
            "battle over"
        );

        self.state.turn.phase = BattlePhase::Over { winner };
    }
}
