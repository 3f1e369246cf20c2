//! Glue code tying the battle engine and the terminal UI together.
use anyhow::Result;
use crossterm::event::{self, Event};
use game_core::{GameConfig, PcgRng};

use crate::config::ClientConfig;
use crate::input::{InputHandler, KeyAction};
use crate::presentation::{terminal, ui};
use crate::state::AppState;

pub struct DuelApp {
    config: ClientConfig,
    state: AppState,
    input: InputHandler,
    rng: PcgRng,
}

impl DuelApp {
    pub fn new(config: ClientConfig) -> Result<Self> {
        Self::with_game_config(config, GameConfig::default())
    }

    pub fn with_game_config(config: ClientConfig, game: GameConfig) -> Result<Self> {
        let seed = config.resolved_seed();
        let state = AppState::new(game, seed, config.messages.capacity)?;

        tracing::info!(
            seed,
            hero = state.battle.hero.name(),
            enemy = state.battle.enemy.name(),
            "battle created"
        );

        Ok(Self {
            config,
            state,
            input: InputHandler::new(),
            rng: PcgRng,
        })
    }

    /// Runs the blocking draw/input loop until the player quits.
    pub fn run(mut self) -> Result<()> {
        tracing::info!("CLI client starting...");

        let (mut terminal, _guard) = terminal::init()?;

        loop {
            terminal.draw(|frame| ui::render(frame, &self.state, &self.config.ui))?;

            let Event::Key(key) = event::read()? else {
                continue;
            };

            match self.input.handle_key(key) {
                KeyAction::Quit => break,
                KeyAction::Submit(action) => self.submit(action),
                KeyAction::None => {}
            }
        }

        tracing::info!(
            round = self.state.battle.turn.round,
            over = self.state.is_over(),
            "CLI client exiting"
        );
        Ok(())
    }

    fn submit(&mut self, action: game_core::ActionKind) {
        self.state.play_turn(action, &self.rng);

        if self.state.is_over() {
            self.input.lock();
        }
    }
}
