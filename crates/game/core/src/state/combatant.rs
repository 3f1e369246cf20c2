//! Combatant record shared by both sides of a battle.

use crate::config::CombatantSpec;

/// Which side of the battle a combatant fights for.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Role {
    /// Driven by player input.
    Human,
    /// Driven by random action selection.
    Opponent,
}

impl Role {
    /// Returns the role on the other side of the battle.
    pub const fn opponent(self) -> Self {
        match self {
            Role::Human => Role::Opponent,
            Role::Opponent => Role::Human,
        }
    }

    /// Stable numeric id used when mixing RNG seeds.
    pub const fn id(self) -> u32 {
        match self {
            Role::Human => 0,
            Role::Opponent => 1,
        }
    }
}

/// A participant with health, attack and defense stats.
///
/// `hp` is readable by anyone but only writable from the combat module:
/// attacks lower it, heals raise it, nothing else touches it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Combatant {
    role: Role,
    name: String,
    hp: i32,
    attack: i32,
    defense: i32,
}

impl Combatant {
    pub fn new(role: Role, name: impl Into<String>, hp: i32, attack: i32, defense: i32) -> Self {
        Self {
            role,
            name: name.into(),
            hp,
            attack,
            defense,
        }
    }

    pub fn from_spec(role: Role, spec: &CombatantSpec) -> Self {
        Self::new(role, spec.name.clone(), spec.hp, spec.attack, spec.defense)
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn hp(&self) -> i32 {
        self.hp
    }

    pub fn attack(&self) -> i32 {
        self.attack
    }

    pub fn defense(&self) -> i32 {
        self.defense
    }

    /// A combatant is alive while its health stays above zero.
    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    pub(crate) fn take_damage(&mut self, amount: i32) {
        self.hp = self.hp.saturating_sub(amount);
    }

    pub(crate) fn restore(&mut self, amount: i32) {
        self.hp = self.hp.saturating_add(amount);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_hp(hp: i32) -> Combatant {
        Combatant::new(Role::Human, "Tester", hp, 10, 10)
    }

    #[test]
    fn liveness_requires_positive_hp() {
        assert!(with_hp(1).is_alive());
        assert!(!with_hp(0).is_alive());
        assert!(!with_hp(-5).is_alive());
    }

    #[test]
    fn opponent_role_is_symmetric() {
        assert_eq!(Role::Human.opponent(), Role::Opponent);
        assert_eq!(Role::Opponent.opponent(), Role::Human);
    }

    #[test]
    fn role_parses_case_insensitively() {
        assert_eq!("HUMAN".parse::<Role>().unwrap(), Role::Human);
        assert_eq!(Role::Opponent.to_string(), "opponent");
    }

    #[test]
    fn damage_may_push_hp_below_zero() {
        let mut combatant = with_hp(10);
        combatant.take_damage(16);
        assert_eq!(combatant.hp(), -6);
    }
}
