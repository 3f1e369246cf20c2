use crate::action::{Action, ActionKind, ActionOutcome};
use crate::env::{RollContext, compute_seed};
use crate::state::{BattlePhase, BattleStatus, Role};

use super::{BattleEngine, ExecuteError};

/// Everything that happened during one turn pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnReport {
    /// Round number this report closes (1-based).
    pub round: u32,
    pub hero: ActionOutcome,
    /// `None` when the hero's action ended the battle.
    pub enemy: Option<ActionOutcome>,
    pub status: BattleStatus,
    pub phase: BattlePhase,
}

/// Turn protocol for BattleEngine.
impl<'a> BattleEngine<'a> {
    /// Plays one turn: the hero acts, then the opponent counters if still alive.
    ///
    /// The opponent never acts after being defeated, and the report's phase
    /// tells the caller whether to stop accepting input.
    pub fn play_turn(&mut self, hero_action: ActionKind) -> Result<TurnReport, ExecuteError> {
        let hero = self.execute(Action::new(Role::Human, hero_action))?;

        let enemy = if self.phase().is_over() {
            None
        } else {
            let kind = self.choose_action(Role::Opponent);
            Some(self.execute(Action::new(Role::Opponent, kind))?)
        };

        self.state.turn.round += 1;

        Ok(TurnReport {
            round: self.state.turn.round,
            hero,
            enemy,
            status: self.state.status(),
            phase: self.phase(),
        })
    }

    /// Picks a uniformly random action for `actor` by rolling a three-sided die.
    ///
    /// Rolls outside `1..=3` from a misbehaving oracle clamp to the nearest face.
    pub fn choose_action(&self, actor: Role) -> ActionKind {
        let seed = compute_seed(
            self.state.turn.seed,
            self.state.turn.nonce,
            actor,
            RollContext::ActionChoice,
        );
        let roll = self.env.rng().roll_die(seed, ActionKind::COUNT);
        ActionKind::from_roll(roll)
    }
}
