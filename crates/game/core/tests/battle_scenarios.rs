//! End-to-end battle scenarios driven through the public engine API.

use game_core::{
    ActionEffect, ActionKind, BattleEngine, BattleEnv, BattlePhase, BattleState, CombatantSpec,
    ErrorSeverity, ExecuteError, GameConfig, GameError, HealRange, PcgRng, RngOracle, Role,
};

/// Oracle that returns the same raw value for every seed.
///
/// With three actions, `0` rolls attack, `1` defend and `2` heal; heals roll
/// `15 + value % 11`.
struct FixedRng(u32);

impl RngOracle for FixedRng {
    fn next_u32(&self, _seed: u64) -> u32 {
        self.0
    }
}

const OPPONENT_ATTACKS: FixedRng = FixedRng(0);
const OPPONENT_DEFENDS: FixedRng = FixedRng(1);
const OPPONENT_HEALS: FixedRng = FixedRng(2);

fn battle(config: &GameConfig) -> BattleState {
    BattleState::new(config, 0xD0E1).expect("battle should initialise")
}

#[test]
fn hero_attack_then_forced_enemy_turn() {
    let config = GameConfig::default();
    let mut state = battle(&config);
    let mut engine =
        BattleEngine::new(&mut state, BattleEnv::from_config(&OPPONENT_ATTACKS, &config));

    let report = engine
        .play_turn(ActionKind::Attack)
        .expect("turn should resolve");

    // 132 attack vs 51 defense
    assert_eq!(
        report.hero.effect,
        ActionEffect::Damage {
            target: Role::Opponent,
            amount: 81,
            remaining_hp: 119,
        }
    );

    // enemy still alive, so it counters: 89 attack vs 76 defense
    let enemy = report.enemy.expect("enemy must take a turn");
    assert_eq!(enemy.actor, Role::Opponent);
    assert_eq!(enemy.kind, ActionKind::Attack);
    assert_eq!(enemy.amount(), 13);

    assert_eq!(report.status.enemy_hp, 119);
    assert_eq!(report.status.hero_hp, 187);
    assert_eq!(report.phase, BattlePhase::InProgress);
    assert_eq!(report.round, 1);
    assert_eq!(state.turn.nonce, 2);
}

#[test]
fn lethal_hero_attack_skips_enemy_turn() {
    let config = GameConfig::with_combatants(
        CombatantSpec::new("Goku", 200, 132, 76),
        CombatantSpec::new("Naruto", 50, 89, 76),
    );
    let mut state = battle(&config);
    let mut engine =
        BattleEngine::new(&mut state, BattleEnv::from_config(&OPPONENT_ATTACKS, &config));

    let report = engine.play_turn(ActionKind::Attack).unwrap();

    assert_eq!(report.hero.amount(), 56);
    assert_eq!(report.status.enemy_hp, -6);
    assert_eq!(report.enemy, None);
    assert_eq!(report.status.hero_hp, 200);
    assert_eq!(
        report.phase,
        BattlePhase::Over {
            winner: Role::Human
        }
    );
    assert_eq!(state.winner().map(|c| c.name()), Some("Goku"));
    assert_eq!(state.turn.nonce, 1);
}

#[test]
fn enemy_counter_can_win_the_battle() {
    let config = GameConfig::with_combatants(
        CombatantSpec::new("Goku", 10, 132, 76),
        CombatantSpec::new("Naruto", 200, 89, 51),
    );
    let mut state = battle(&config);
    let mut engine =
        BattleEngine::new(&mut state, BattleEnv::from_config(&OPPONENT_ATTACKS, &config));

    let report = engine.play_turn(ActionKind::Defend).unwrap();

    assert_eq!(report.hero.effect, ActionEffect::Guard);
    assert_eq!(report.status.hero_hp, -3);
    assert_eq!(
        report.phase,
        BattlePhase::Over {
            winner: Role::Opponent
        }
    );
    assert_eq!(state.winner().map(|c| c.name()), Some("Naruto"));
}

#[test]
fn actions_after_battle_over_are_rejected() {
    let config = GameConfig::with_combatants(
        CombatantSpec::new("Goku", 200, 132, 76),
        CombatantSpec::new("Naruto", 1, 89, 51),
    );
    let mut state = battle(&config);
    let mut engine = BattleEngine::new(&mut state, BattleEnv::from_config(&PcgRng, &config));

    engine.play_turn(ActionKind::Attack).unwrap();
    let frozen = engine.state().clone();

    let err = engine.play_turn(ActionKind::Heal).unwrap_err();

    assert!(matches!(
        err,
        ExecuteError::BattleOver {
            winner: Role::Human,
            ..
        }
    ));
    assert_eq!(err.error_code(), "BATTLE_OVER");
    assert_eq!(err.severity(), ErrorSeverity::Validation);
    assert_eq!(err.context().and_then(|ctx| ctx.actor), Some(Role::Human));
    assert_eq!(engine.state(), &frozen);
}

#[test]
fn defend_never_changes_health() {
    let config = GameConfig::default();
    let mut state = battle(&config);
    let mut engine =
        BattleEngine::new(&mut state, BattleEnv::from_config(&OPPONENT_DEFENDS, &config));

    let report = engine.play_turn(ActionKind::Defend).unwrap();

    assert_eq!(report.hero.effect, ActionEffect::Guard);
    assert_eq!(report.enemy.map(|o| o.effect), Some(ActionEffect::Guard));
    assert_eq!(report.status.hero_hp, 200);
    assert_eq!(report.status.enemy_hp, 200);
}

#[test]
fn heals_apply_rolled_amount_without_cap() {
    let config = GameConfig::default();
    let mut state = battle(&config);
    let mut engine =
        BattleEngine::new(&mut state, BattleEnv::from_config(&OPPONENT_HEALS, &config));

    let report = engine.play_turn(ActionKind::Heal).unwrap();

    // 15 + 2 % 11
    assert_eq!(report.hero.effect, ActionEffect::Heal { amount: 17, hp: 217 });
    let enemy = report.enemy.unwrap();
    assert_eq!(enemy.kind, ActionKind::Heal);
    assert_eq!(enemy.effect, ActionEffect::Heal { amount: 17, hp: 217 });
}

#[test]
fn widest_heal_range_only_ever_raises_hp() {
    let config = GameConfig::default().with_heal(HealRange::new(i32::MAX, i32::MAX).unwrap());
    let mut state = battle(&config);
    let mut engine =
        BattleEngine::new(&mut state, BattleEnv::from_config(&OPPONENT_DEFENDS, &config));

    let report = engine.play_turn(ActionKind::Heal).unwrap();

    assert_eq!(
        report.hero.effect,
        ActionEffect::Heal {
            amount: i32::MAX,
            hp: i32::MAX,
        }
    );
    assert_eq!(report.phase, BattlePhase::InProgress);
    assert!(report.enemy.is_some());
}

/// Oracle whose die ignores the number of sides.
struct LoadedDie(u32);

impl RngOracle for LoadedDie {
    fn next_u32(&self, _seed: u64) -> u32 {
        0
    }

    fn roll_die(&self, _seed: u64, _sides: u32) -> u32 {
        self.0
    }
}

#[test]
fn out_of_range_die_rolls_clamp_instead_of_defending() {
    let config = GameConfig::default();

    for (face, expected) in [(0, ActionKind::Attack), (7, ActionKind::Heal)] {
        let mut state = battle(&config);
        let die = LoadedDie(face);
        let mut engine = BattleEngine::new(&mut state, BattleEnv::from_config(&die, &config));

        let report = engine.play_turn(ActionKind::Defend).unwrap();

        assert_eq!(report.enemy.map(|o| o.kind), Some(expected), "face {face}");
    }
}

#[test]
fn same_seed_replays_identically() {
    let config = GameConfig::default();
    let script = [
        ActionKind::Heal,
        ActionKind::Attack,
        ActionKind::Defend,
        ActionKind::Heal,
        ActionKind::Attack,
    ];

    let play = |seed: u64| {
        let mut state = BattleState::new(&config, seed).unwrap();
        let mut engine = BattleEngine::new(&mut state, BattleEnv::from_config(&PcgRng, &config));
        script
            .iter()
            .map_while(|&kind| engine.play_turn(kind).ok())
            .collect::<Vec<_>>()
    };

    assert_eq!(play(1234), play(1234));
}

#[test]
fn heal_rolls_stay_in_range_across_seeds() {
    let config = GameConfig::default();

    for seed in 0..300 {
        let mut state = BattleState::new(&config, seed).unwrap();
        let mut engine = BattleEngine::new(&mut state, BattleEnv::from_config(&PcgRng, &config));
        let report = engine.play_turn(ActionKind::Heal).unwrap();

        assert!(config.heal.contains(report.hero.amount()));
        if let Some(ActionEffect::Heal { amount, .. }) = report.enemy.map(|o| o.effect) {
            assert!(config.heal.contains(amount));
        }
    }
}

#[test]
fn enemy_picks_every_action_over_many_battles() {
    let config = GameConfig::default();
    let mut attacks = 0;
    let mut defends = 0;
    let mut heals = 0;

    for seed in 0..600 {
        let mut state = BattleState::new(&config, seed).unwrap();
        let mut engine = BattleEngine::new(&mut state, BattleEnv::from_config(&PcgRng, &config));
        match engine.play_turn(ActionKind::Defend).unwrap().enemy.map(|o| o.kind) {
            Some(ActionKind::Attack) => attacks += 1,
            Some(ActionKind::Defend) => defends += 1,
            Some(ActionKind::Heal) => heals += 1,
            None => unreachable!("enemy cannot be defeated by a defend"),
        }
    }

    // roughly a third each
    for count in [attacks, defends, heals] {
        assert!((100..=300).contains(&count), "skewed choice: {count}");
    }
}

#[test]
fn default_battle_runs_to_completion() {
    let config = GameConfig::default();
    let mut state = battle(&config);
    let mut engine = BattleEngine::new(&mut state, BattleEnv::from_config(&PcgRng, &config));

    let mut rounds = 0;
    while !engine.phase().is_over() {
        engine.play_turn(ActionKind::Attack).unwrap();
        rounds += 1;
        assert!(rounds < 100, "battle never ended");
    }

    // 81 damage per hit against 200 hp and at most 25 healed back per round
    assert_eq!(engine.phase().winner(), Some(Role::Human));
}

#[cfg(feature = "serde")]
#[test]
fn turn_report_serializes_to_json() {
    let config = GameConfig::default();
    let mut state = battle(&config);
    let mut engine =
        BattleEngine::new(&mut state, BattleEnv::from_config(&OPPONENT_DEFENDS, &config));

    let report = engine.play_turn(ActionKind::Attack).unwrap();
    let json = serde_json::to_string(&report).unwrap();

    assert!(json.contains("\"round\":1"));
    assert!(json.contains("InProgress"));
}
