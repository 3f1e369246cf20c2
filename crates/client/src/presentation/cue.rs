//! Cosmetic cues shown next to a combatant after it acts or is hit.
//!
//! Cues are a single-frame decoration, not an animation system: they last
//! until the next turn replaces them.

use game_core::{ActionKind, ActionOutcome, Role, TurnReport};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cue {
    /// Attacker stepping in.
    Lunge,
    /// Attack target recoiling.
    Flinch,
    /// Defender bracing.
    Brace,
    /// Healer glowing.
    Pulse,
}

/// Cue per combatant for the current frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CueFrame {
    pub hero: Option<Cue>,
    pub enemy: Option<Cue>,
}

impl CueFrame {
    /// Cues for a whole turn; the counter-turn overrides the hero's action
    /// where both touch the same combatant.
    pub fn from_report(report: &TurnReport) -> Self {
        let mut frame = Self::default();
        frame.apply(&report.hero);
        if let Some(enemy) = &report.enemy {
            frame.apply(enemy);
        }
        frame
    }

    pub fn apply(&mut self, outcome: &ActionOutcome) {
        match outcome.kind {
            ActionKind::Attack => {
                self.set(outcome.actor, Cue::Lunge);
                self.set(outcome.actor.opponent(), Cue::Flinch);
            }
            ActionKind::Defend => self.set(outcome.actor, Cue::Brace),
            ActionKind::Heal => self.set(outcome.actor, Cue::Pulse),
        }
    }

    pub fn get(&self, role: Role) -> Option<Cue> {
        match role {
            Role::Human => self.hero,
            Role::Opponent => self.enemy,
        }
    }

    fn set(&mut self, role: Role, cue: Cue) {
        match role {
            Role::Human => self.hero = Some(cue),
            Role::Opponent => self.enemy = Some(cue),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{ActionEffect, BattlePhase, BattleStatus};

    fn outcome(actor: Role, kind: ActionKind) -> ActionOutcome {
        let effect = match kind {
            ActionKind::Attack => ActionEffect::Damage {
                target: actor.opponent(),
                amount: 10,
                remaining_hp: 90,
            },
            ActionKind::Defend => ActionEffect::Guard,
            ActionKind::Heal => ActionEffect::Heal { amount: 15, hp: 115 },
        };
        ActionOutcome {
            actor,
            kind,
            effect,
        }
    }

    fn report(hero: ActionKind, enemy: Option<ActionKind>) -> TurnReport {
        TurnReport {
            round: 1,
            hero: outcome(Role::Human, hero),
            enemy: enemy.map(|kind| outcome(Role::Opponent, kind)),
            status: BattleStatus {
                hero_hp: 100,
                enemy_hp: 100,
            },
            phase: BattlePhase::InProgress,
        }
    }

    #[test]
    fn attack_marks_both_sides() {
        let frame = CueFrame::from_report(&report(ActionKind::Attack, None));
        assert_eq!(frame.get(Role::Human), Some(Cue::Lunge));
        assert_eq!(frame.get(Role::Opponent), Some(Cue::Flinch));
    }

    #[test]
    fn counter_turn_overrides_same_combatant() {
        let frame = CueFrame::from_report(&report(ActionKind::Attack, Some(ActionKind::Heal)));
        assert_eq!(frame.hero, Some(Cue::Lunge));
        assert_eq!(frame.enemy, Some(Cue::Pulse));
    }

    #[test]
    fn defend_only_marks_actor() {
        let frame = CueFrame::from_report(&report(ActionKind::Defend, Some(ActionKind::Defend)));
        assert_eq!(frame.hero, Some(Cue::Brace));
        assert_eq!(frame.enemy, Some(Cue::Brace));

        let mut frame = CueFrame::default();
        frame.apply(&outcome(Role::Human, ActionKind::Heal));
        assert_eq!(frame.enemy, None);
    }
}
