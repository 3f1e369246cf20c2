//! Damage calculation and application.

use crate::state::Combatant;

/// Calculate damage from an attack.
///
/// ```text
/// damage = max(0, attack - defense)
/// ```
///
/// A defense higher than the attack blocks the hit entirely; damage is never
/// negative, so an attack can never heal its target.
pub fn calculate_damage(attack: i32, defense: i32) -> i32 {
    attack.saturating_sub(defense).max(0)
}

/// Resolve `actor` attacking `target` and return the damage dealt.
pub fn attack(actor: &Combatant, target: &mut Combatant) -> i32 {
    let damage = calculate_damage(actor.attack(), target.defense());
    target.take_damage(damage);
    damage
}
