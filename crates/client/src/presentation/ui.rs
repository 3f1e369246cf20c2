//! Screen layout.

use game_core::Role;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::{text, widgets};
use crate::config::UiConfig;
use crate::state::AppState;

/// Draws the whole screen.
///
/// ```text
/// ┌ Duel ─────────────────────────┐
/// ├ Hero ─────────┬ Enemy ────────┤
/// ├ Status ───────────────────────┤
/// ├ Log ──────────────────────────┤
/// └───────────────────────────────┘
///  key help
/// ```
pub fn render(frame: &mut Frame, app_state: &AppState, ui: &UiConfig) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(7),
            Constraint::Length(4),
            Constraint::Length(ui.message_panel_height),
            Constraint::Length(1),
        ])
        .split(frame.area());

    widgets::header::render(frame, rows[0], app_state);

    let arena = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[1]);
    widgets::combatant::render(frame, arena[0], app_state, Role::Human);
    widgets::combatant::render(frame, arena[1], app_state, Role::Opponent);

    render_status(frame, rows[2], app_state);
    widgets::messages::render(frame, rows[3], &app_state.messages);
    render_help(frame, rows[4], app_state.is_over());
}

fn render_status(frame: &mut Frame, area: ratatui::layout::Rect, app_state: &AppState) {
    let style = if app_state.is_over() {
        Style::default()
            .fg(Color::Magenta)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };

    let lines: Vec<Line> = text::banner_text(&app_state.battle)
        .lines()
        .map(|line| Line::styled(line.to_string(), style))
        .collect();

    let paragraph =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(paragraph, area);
}

fn render_help(frame: &mut Frame, area: ratatui::layout::Rect, is_over: bool) {
    let key = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    // Action keys are disabled once the battle ends.
    let action = if is_over {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::CROSSED_OUT)
    } else {
        Style::default()
    };

    let help = Line::from(vec![
        Span::styled(" a", key),
        Span::styled(" attack  ", action),
        Span::styled("d", key),
        Span::styled(" defend  ", action),
        Span::styled("h", key),
        Span::styled(" heal  ", action),
        Span::styled("q", key),
        Span::raw(" quit"),
    ]);

    frame.render_widget(Paragraph::new(help), area);
}
