//! Deterministic battle rules shared by every frontend.
//!
//! `game-core` defines the combatants, the three actions (attack, defend,
//! heal) and the turn protocol of a two-combatant duel. All state mutation
//! flows through [`engine::BattleEngine`]; randomness comes from an injected
//! [`env::RngOracle`] so battles replay identically from the same seed.
pub mod action;
pub mod combat;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod state;

pub use action::{Action, ActionEffect, ActionKind, ActionOutcome};
pub use config::{CombatantSpec, GameConfig, HealRange, HealRangeError};
pub use engine::{BattleEngine, ExecuteError, TurnReport};
pub use env::{BattleEnv, PcgRng, RngOracle, RollContext, compute_seed};
pub use error::{ErrorContext, ErrorSeverity, GameError};
pub use state::{
    BattlePhase, BattleState, BattleStatus, Combatant, InitializationError, Role, TurnState,
};
