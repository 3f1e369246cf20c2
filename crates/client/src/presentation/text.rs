//! Plain-text rendering of battle events and status.

use game_core::{ActionEffect, ActionOutcome, BattleState};

/// One log line describing a resolved action.
pub fn action_line(outcome: &ActionOutcome, state: &BattleState) -> String {
    let actor = state.combatant(outcome.actor).name();
    match outcome.effect {
        ActionEffect::Damage { target, amount, .. } => {
            let target = state.combatant(target).name();
            format!("{actor} attacks {target} for {amount} damage!")
        }
        ActionEffect::Guard => format!("{actor} defends!"),
        ActionEffect::Heal { amount, .. } => format!("{actor} heals for {amount} HP!"),
    }
}

/// Both combatants' health, one per line.
pub fn status_text(state: &BattleState) -> String {
    format!(
        "{}: {} HP\n{}: {} HP",
        state.hero.name(),
        state.hero.hp(),
        state.enemy.name(),
        state.enemy.hp()
    )
}

pub fn game_over_text(winner: &str) -> String {
    format!("Game over! {winner} wins!")
}

/// Status while the battle runs, game-over line once it ends.
pub fn banner_text(state: &BattleState) -> String {
    match state.winner() {
        Some(winner) => game_over_text(winner.name()),
        None => status_text(state),
    }
}
