//! Battle configuration: starting stats and tunable rule parameters.

/// Starting stats for a single combatant.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatantSpec {
    pub name: String,
    pub hp: i32,
    pub attack: i32,
    pub defense: i32,
}

impl CombatantSpec {
    pub fn new(name: impl Into<String>, hp: i32, attack: i32, defense: i32) -> Self {
        Self {
            name: name.into(),
            hp,
            attack,
            defense,
        }
    }
}

/// Inclusive bounds for a heal roll.
///
/// Bounds are non-negative and ordered, so a heal never lowers hp.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HealRange {
    min: i32,
    max: i32,
}

/// Rejected heal bounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum HealRangeError {
    #[error("heal bounds must not be negative (got {min}..={max})")]
    Negative { min: i32, max: i32 },
    #[error("heal minimum {min} is above maximum {max}")]
    Inverted { min: i32, max: i32 },
}

impl HealRange {
    pub const DEFAULT: Self = Self { min: 15, max: 25 };

    pub const fn new(min: i32, max: i32) -> Result<Self, HealRangeError> {
        if min < 0 || max < 0 {
            return Err(HealRangeError::Negative { min, max });
        }
        if min > max {
            return Err(HealRangeError::Inverted { min, max });
        }
        Ok(Self { min, max })
    }

    pub const fn min(&self) -> i32 {
        self.min
    }

    pub const fn max(&self) -> i32 {
        self.max
    }

    /// Returns true if `amount` lies inside the inclusive range.
    pub fn contains(&self, amount: i32) -> bool {
        (self.min..=self.max).contains(&amount)
    }
}

impl Default for HealRange {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Battle configuration, fixed at battle creation.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    /// Human-controlled combatant.
    pub hero: CombatantSpec,
    /// Randomly-driven opponent.
    pub enemy: CombatantSpec,
    /// Bounds for every heal roll.
    pub heal: HealRange,
}

impl GameConfig {
    // ===== default roster =====
    pub const DEFAULT_HERO_NAME: &'static str = "Goku";
    pub const DEFAULT_HERO_HP: i32 = 200;
    pub const DEFAULT_HERO_ATTACK: i32 = 132;
    pub const DEFAULT_HERO_DEFENSE: i32 = 76;

    pub const DEFAULT_ENEMY_NAME: &'static str = "Naruto";
    pub const DEFAULT_ENEMY_HP: i32 = 200;
    pub const DEFAULT_ENEMY_ATTACK: i32 = 89;
    pub const DEFAULT_ENEMY_DEFENSE: i32 = 51;

    pub fn new() -> Self {
        Self {
            hero: CombatantSpec::new(
                Self::DEFAULT_HERO_NAME,
                Self::DEFAULT_HERO_HP,
                Self::DEFAULT_HERO_ATTACK,
                Self::DEFAULT_HERO_DEFENSE,
            ),
            enemy: CombatantSpec::new(
                Self::DEFAULT_ENEMY_NAME,
                Self::DEFAULT_ENEMY_HP,
                Self::DEFAULT_ENEMY_ATTACK,
                Self::DEFAULT_ENEMY_DEFENSE,
            ),
            heal: HealRange::DEFAULT,
        }
    }

    pub fn with_combatants(hero: CombatantSpec, enemy: CombatantSpec) -> Self {
        Self {
            hero,
            enemy,
            heal: HealRange::DEFAULT,
        }
    }

    pub fn with_heal(mut self, heal: HealRange) -> Self {
        self.heal = heal;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heal_range_rejects_negative_and_inverted_bounds() {
        assert_eq!(
            HealRange::new(-5, 10),
            Err(HealRangeError::Negative { min: -5, max: 10 })
        );
        assert_eq!(
            HealRange::new(0, -1),
            Err(HealRangeError::Negative { min: 0, max: -1 })
        );
        assert_eq!(
            HealRange::new(30, 20),
            Err(HealRangeError::Inverted { min: 30, max: 20 })
        );
    }

    #[test]
    fn heal_range_accepts_single_value_and_extremes() {
        let fixed = HealRange::new(20, 20).unwrap();
        assert!(fixed.contains(20));
        assert!(!fixed.contains(21));

        let widest = HealRange::new(0, i32::MAX).unwrap();
        assert_eq!(widest.max(), i32::MAX);
        assert_eq!(HealRange::DEFAULT, HealRange::new(15, 25).unwrap());
    }
}
