//! Combatant panel: portrait, health and stats.

use game_core::Role;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::presentation::theme;
use crate::state::AppState;

pub fn render(frame: &mut Frame, area: Rect, app_state: &AppState, role: Role) {
    let combatant = app_state.battle.combatant(role);
    let cue = app_state.cues.get(role);
    let is_hero = role == Role::Human;

    let portrait_style = theme::cue_style(theme::portrait_style(is_hero), cue);
    let portrait = if combatant.is_alive() {
        if is_hero { "(o_o)" } else { "(>_<)" }
    } else {
        "(x_x)"
    };

    let mut lines = vec![
        Line::from(vec![
            Span::styled(portrait, portrait_style),
            Span::raw("  "),
            Span::styled(
                cue.map(theme::cue_label).unwrap_or_default(),
                portrait_style,
            ),
        ]),
        Line::from(vec![
            Span::styled("Health: ", Style::default().fg(Color::White)),
            Span::styled(
                format!("{} / {}", combatant.hp(), app_state.starting_hp(role)),
                theme::health_style(combatant.hp(), app_state.starting_hp(role)),
            ),
        ]),
        Line::from(vec![
            Span::styled("Attack: ", Style::default().fg(Color::White)),
            Span::raw(combatant.attack().to_string()),
        ]),
        Line::from(vec![
            Span::styled("Defense: ", Style::default().fg(Color::White)),
            Span::raw(combatant.defense().to_string()),
        ]),
    ];

    if app_state.battle.phase().winner() == Some(role) {
        lines.push(Line::styled(
            "WINNER",
            theme::message_style(crate::message::MessageLevel::Highlight),
        ));
    }

    let title = format!(" {} ", combatant.name());
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Left)
        .block(Block::default().borders(Borders::ALL).title(title));

    frame.render_widget(paragraph, area);
}
