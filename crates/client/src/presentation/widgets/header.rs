//! Header widget displaying round and battle phase.

use game_core::BattlePhase;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::state::AppState;

pub fn render(frame: &mut Frame, area: Rect, app_state: &AppState) {
    let turn = &app_state.battle.turn;
    let phase_text = match turn.phase {
        BattlePhase::InProgress => " [IN PROGRESS]",
        BattlePhase::Over { .. } => " [GAME OVER]",
    };

    let text = vec![Line::from(vec![
        Span::raw("Round: "),
        Span::styled(turn.round.to_string(), Style::default().fg(Color::Yellow)),
        Span::raw(" | Seed: "),
        Span::styled(turn.seed.to_string(), Style::default().fg(Color::DarkGray)),
        Span::styled(
            phase_text,
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        ),
    ])];

    let paragraph =
        Paragraph::new(text).block(Block::default().borders(Borders::ALL).title("Duel"));

    frame.render_widget(paragraph, area);
}
