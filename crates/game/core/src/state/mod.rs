//! Authoritative battle state.
//!
//! The state owns both combatants plus the turn bookkeeping needed to derive
//! deterministic random rolls. Callers read it freely but mutate it only
//! through [`crate::engine::BattleEngine`].
mod combatant;

pub use combatant::{Combatant, Role};

use crate::config::GameConfig;

/// Lifecycle of a battle. `Over` is terminal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BattlePhase {
    #[default]
    InProgress,
    Over {
        winner: Role,
    },
}

impl BattlePhase {
    pub const fn is_over(&self) -> bool {
        matches!(self, BattlePhase::Over { .. })
    }

    pub const fn winner(&self) -> Option<Role> {
        match self {
            BattlePhase::InProgress => None,
            BattlePhase::Over { winner } => Some(*winner),
        }
    }
}

/// Turn bookkeeping.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnState {
    /// Seed fixed at battle creation; mixed with `nonce` for every roll.
    pub seed: u64,
    /// Number of actions resolved so far.
    pub nonce: u64,
    /// Number of completed turn pairs (human action plus counter-turn).
    pub round: u32,
    pub phase: BattlePhase,
}

/// Both combatants' health after a turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleStatus {
    pub hero_hp: i32,
    pub enemy_hp: i32,
}

/// Errors raised while building the initial state.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InitializationError {
    #[error("{role} combatant '{name}' must start with positive hp (got {hp})")]
    DefeatedAtStart { role: Role, name: String, hp: i32 },
}

/// Canonical snapshot of a battle.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleState {
    pub hero: Combatant,
    pub enemy: Combatant,
    pub turn: TurnState,
}

impl BattleState {
    /// Creates a fresh battle from the configured roster.
    ///
    /// Both combatants must start alive so the battle begins `InProgress`.
    pub fn new(config: &GameConfig, seed: u64) -> Result<Self, InitializationError> {
        let hero = Combatant::from_spec(Role::Human, &config.hero);
        let enemy = Combatant::from_spec(Role::Opponent, &config.enemy);

        for combatant in [&hero, &enemy] {
            if !combatant.is_alive() {
                return Err(InitializationError::DefeatedAtStart {
                    role: combatant.role(),
                    name: combatant.name().to_string(),
                    hp: combatant.hp(),
                });
            }
        }

        Ok(Self {
            hero,
            enemy,
            turn: TurnState {
                seed,
                ..TurnState::default()
            },
        })
    }

    pub fn combatant(&self, role: Role) -> &Combatant {
        match role {
            Role::Human => &self.hero,
            Role::Opponent => &self.enemy,
        }
    }

    /// Borrows the actor mutably together with its opponent.
    pub(crate) fn pair_mut(&mut self, actor: Role) -> (&mut Combatant, &mut Combatant) {
        match actor {
            Role::Human => (&mut self.hero, &mut self.enemy),
            Role::Opponent => (&mut self.enemy, &mut self.hero),
        }
    }

    pub fn phase(&self) -> BattlePhase {
        self.turn.phase
    }

    pub fn is_over(&self) -> bool {
        self.turn.phase.is_over()
    }

    pub fn winner(&self) -> Option<&Combatant> {
        self.turn.phase.winner().map(|role| self.combatant(role))
    }

    pub fn status(&self) -> BattleStatus {
        BattleStatus {
            hero_hp: self.hero.hp(),
            enemy_hp: self.enemy.hp(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CombatantSpec;

    #[test]
    fn new_battle_starts_in_progress_with_configured_stats() {
        let state = BattleState::new(&GameConfig::default(), 7).unwrap();

        assert_eq!(state.phase(), BattlePhase::InProgress);
        assert_eq!(state.turn.seed, 7);
        assert_eq!(state.turn.nonce, 0);
        assert_eq!(state.hero.name(), "Goku");
        assert_eq!(state.enemy.name(), "Naruto");
        assert_eq!(
            state.status(),
            BattleStatus {
                hero_hp: 200,
                enemy_hp: 200
            }
        );
        assert!(state.winner().is_none());
    }

    #[test]
    fn rejects_combatant_that_starts_defeated() {
        let config = GameConfig::with_combatants(
            CombatantSpec::new("Hero", 10, 5, 5),
            CombatantSpec::new("Ghost", 0, 5, 5),
        );

        let err = BattleState::new(&config, 0).unwrap_err();
        assert!(matches!(
            err,
            InitializationError::DefeatedAtStart {
                role: Role::Opponent,
                hp: 0,
                ..
            }
        ));
    }

    #[test]
    fn pair_mut_orders_actor_first() {
        let mut state = BattleState::new(&GameConfig::default(), 0).unwrap();

        let (actor, target) = state.pair_mut(Role::Opponent);
        assert_eq!(actor.role(), Role::Opponent);
        assert_eq!(target.role(), Role::Human);
    }
}
