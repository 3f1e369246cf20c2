//! Action kind enumeration.

/// Types of actions a combatant can perform on its turn.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ActionKind {
    /// Strike the opponent for `attack - defense` damage, floored at zero.
    Attack,
    /// Brace. Purely cosmetic; no stats change.
    Defend,
    /// Restore a random amount of health to the actor.
    Heal,
}

impl ActionKind {
    /// Number of faces on the die used to pick a random action.
    pub const COUNT: u32 = 3;

    /// Maps a die roll in `1..=3` to an action (1 attack, 2 defend, 3 heal).
    ///
    /// Rolls below the range clamp to attack, rolls above it to heal.
    pub const fn from_roll(roll: u32) -> Self {
        match roll {
            0 | 1 => ActionKind::Attack,
            2 => ActionKind::Defend,
            _ => ActionKind::Heal,
        }
    }
}
