//! Battle log panel, newest first.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::message::MessageLog;
use crate::presentation::theme;

pub fn render(frame: &mut Frame, area: Rect, messages: &MessageLog) {
    let visible = area.height.saturating_sub(2) as usize;

    let lines: Vec<Line> = messages
        .recent(visible)
        .map(|entry| {
            let prefix = entry
                .round
                .map(|round| format!("[{round:>3}] "))
                .unwrap_or_else(|| "      ".to_string());
            Line::from(vec![
                Span::styled(prefix, Style::default().fg(Color::DarkGray)),
                Span::styled(entry.text.clone(), theme::message_style(entry.level)),
            ])
        })
        .collect();

    let paragraph =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Log"));

    frame.render_widget(paragraph, area);
}
