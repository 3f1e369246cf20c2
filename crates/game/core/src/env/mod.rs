//! Read-only collaborators injected into the engine.
//!
//! [`BattleEnv`] bundles the random source with the rule parameters so the
//! engine never reaches for an ambient generator or global configuration.
mod rng;

pub use rng::{PcgRng, RngOracle, RollContext, compute_seed};

use crate::config::{GameConfig, HealRange};

/// Oracles and rule parameters the engine needs to resolve actions.
#[derive(Clone, Copy)]
pub struct BattleEnv<'a> {
    rng: &'a dyn RngOracle,
    heal: HealRange,
}

impl<'a> BattleEnv<'a> {
    pub fn new(rng: &'a dyn RngOracle, heal: HealRange) -> Self {
        Self { rng, heal }
    }

    pub fn from_config(rng: &'a dyn RngOracle, config: &GameConfig) -> Self {
        Self::new(rng, config.heal)
    }

    pub fn rng(&self) -> &'a dyn RngOracle {
        self.rng
    }

    pub fn heal_range(&self) -> HealRange {
        self.heal
    }
}

impl core::fmt::Debug for BattleEnv<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("BattleEnv")
            .field("heal", &self.heal)
            .finish_non_exhaustive()
    }
}
