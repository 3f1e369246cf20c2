//! Healing rolls.

use crate::config::HealRange;
use crate::env::RngOracle;
use crate::state::Combatant;

/// Roll a heal amount uniformly from `range` (inclusive on both ends).
///
/// Never negative, even for bounds that bypassed [`HealRange::new`].
pub fn roll_heal(rng: &(impl RngOracle + ?Sized), seed: u64, range: HealRange) -> i32 {
    let min = range.min().max(0);
    let max = range.max().max(min);
    // both bounds fit in i32, so the roll does too
    rng.range(seed, min as u32, max as u32) as i32
}

/// Heal `actor` by a rolled amount and return it.
///
/// There is no maximum health; repeated heals can climb past the starting hp.
pub fn heal(
    actor: &mut Combatant,
    rng: &(impl RngOracle + ?Sized),
    seed: u64,
    range: HealRange,
) -> i32 {
    let amount = roll_heal(rng, seed, range);
    actor.restore(amount);
    amount
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{PcgRng, RollContext, compute_seed};
    use crate::state::Role;

    #[test]
    fn heal_amount_within_range_and_hits_both_bounds() {
        let mut seen_min = false;
        let mut seen_max = false;

        for nonce in 0..2_000 {
            let seed = compute_seed(99, nonce, Role::Human, RollContext::Heal);
            let mut actor = Combatant::new(Role::Human, "Goku", 100, 132, 76);
            let amount = heal(&mut actor, &PcgRng, seed, HealRange::DEFAULT);

            assert!(HealRange::DEFAULT.contains(amount), "rolled {amount}");
            assert_eq!(actor.hp(), 100 + amount);
            seen_min |= amount == 15;
            seen_max |= amount == 25;
        }

        assert!(seen_min, "15 never rolled");
        assert!(seen_max, "25 never rolled");
    }

    #[test]
    fn largest_heal_saturates_instead_of_wrapping() {
        let range = HealRange::new(i32::MAX, i32::MAX).unwrap();
        let mut actor = Combatant::new(Role::Human, "Goku", 200, 132, 76);

        let amount = heal(&mut actor, &PcgRng, 11, range);

        assert_eq!(amount, i32::MAX);
        assert_eq!(actor.hp(), i32::MAX);
        assert!(actor.is_alive());
    }

    #[test]
    fn heal_has_no_upper_cap() {
        let mut actor = Combatant::new(Role::Opponent, "Naruto", 200, 89, 51);
        let amount = heal(&mut actor, &PcgRng, 3, HealRange::DEFAULT);
        assert!(actor.hp() > 200);
        assert_eq!(actor.hp(), 200 + amount);
    }
}
