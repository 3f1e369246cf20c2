//! Frontend state: the battle plus everything the screen shows about it.

use anyhow::Result;
use game_core::{
    ActionKind, BattleEngine, BattleEnv, BattleState, GameConfig, Role, RngOracle, TurnReport,
};

use crate::message::{MessageEntry, MessageLevel, MessageLog};
use crate::presentation::cue::CueFrame;
use crate::presentation::text;

pub struct AppState {
    pub config: GameConfig,
    pub battle: BattleState,
    pub messages: MessageLog,
    pub cues: CueFrame,
    pub last_report: Option<TurnReport>,
}

impl AppState {
    pub fn new(config: GameConfig, seed: u64, message_capacity: usize) -> Result<Self> {
        let battle = BattleState::new(&config, seed)?;

        let mut messages = MessageLog::new(message_capacity);
        messages.push_text(format!(
            "{} faces {}. [a]ttack, [d]efend or [h]eal.",
            battle.hero.name(),
            battle.enemy.name()
        ));

        Ok(Self {
            config,
            battle,
            messages,
            cues: CueFrame::default(),
            last_report: None,
        })
    }

    pub fn is_over(&self) -> bool {
        self.battle.is_over()
    }

    /// Hp the combatant started the battle with.
    pub fn starting_hp(&self, role: Role) -> i32 {
        match role {
            Role::Human => self.config.hero.hp,
            Role::Opponent => self.config.enemy.hp,
        }
    }

    /// Plays one turn and records its events for display.
    ///
    /// An engine rejection is logged to the message panel rather than
    /// returned; the screen keeps running either way.
    pub fn play_turn(&mut self, action: ActionKind, rng: &dyn RngOracle) -> Option<TurnReport> {
        let env = BattleEnv::from_config(rng, &self.config);
        let result = BattleEngine::new(&mut self.battle, env).play_turn(action);

        let report = match result {
            Ok(report) => report,
            Err(err) => {
                tracing::warn!(%err, "turn rejected");
                self.messages
                    .push(MessageEntry::new(err.to_string(), None, MessageLevel::Error));
                return None;
            }
        };

        self.record(&report);
        Some(report)
    }

    fn record(&mut self, report: &TurnReport) {
        match serde_json::to_string(report) {
            Ok(json) => tracing::debug!(report = %json, "turn resolved"),
            Err(err) => tracing::warn!(%err, "failed to serialize turn report"),
        }

        let round = Some(report.round);
        for outcome in std::iter::once(&report.hero).chain(report.enemy.as_ref()) {
            let line = text::action_line(outcome, &self.battle);
            self.messages
                .push(MessageEntry::new(line, round, MessageLevel::Info));
        }

        if let Some(winner) = self.battle.winner() {
            let line = text::game_over_text(winner.name());
            tracing::info!(round = report.round, "{line}");
            self.messages
                .push(MessageEntry::new(line, round, MessageLevel::Highlight));
        }

        self.cues = CueFrame::from_report(report);
        self.last_report = Some(*report);
    }
}
