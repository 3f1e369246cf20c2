//! Combat resolution.
//!
//! Pure functions over [`Combatant`]s. None of them can fail: damage is
//! clamped at zero, heals always roll inside their range, and defending
//! changes nothing.
//!
//! - `attack`: `target.hp -= max(0, actor.attack - target.defense)`
//! - `defend`: no-op
//! - `heal`: `actor.hp += roll in [min, max]`
//! - `is_alive`: `hp > 0`

pub mod damage;
pub mod heal;

pub use damage::{attack, calculate_damage};
pub use heal::{heal, roll_heal};

use crate::state::Combatant;

/// Resolve a defend action. Cosmetic only.
pub fn defend(_actor: &Combatant) {}

pub fn is_alive(combatant: &Combatant) -> bool {
    combatant.is_alive()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Role;

    #[test]
    fn defend_never_changes_hp() {
        let actor = Combatant::new(Role::Human, "Goku", 17, 132, 76);
        let before = actor.clone();

        defend(&actor);

        assert_eq!(actor, before);
        assert!(is_alive(&actor));
    }
}
