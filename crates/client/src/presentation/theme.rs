//! Ratatui styling for the duel screen.

use ratatui::style::{Color, Modifier, Style};

use super::cue::Cue;
use crate::message::MessageLevel;

/// Health colour relative to the combatant's starting hp.
pub fn health_style(hp: i32, starting_hp: i32) -> Style {
    if hp <= 0 {
        return Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::CROSSED_OUT);
    }

    let starting = starting_hp.max(1) as i64;
    let hp = hp as i64;
    let color = if hp * 2 > starting {
        Color::Green
    } else if hp * 4 > starting {
        Color::Yellow
    } else {
        Color::Red
    };

    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

/// Base colour of a combatant's portrait.
pub fn portrait_style(is_hero: bool) -> Style {
    let color = if is_hero {
        Color::Yellow
    } else {
        Color::LightRed
    };
    Style::default().fg(color)
}

/// Portrait style with the cue's modifier layered on top.
pub fn cue_style(base: Style, cue: Option<Cue>) -> Style {
    match cue {
        Some(Cue::Lunge) => base.add_modifier(Modifier::BOLD),
        Some(Cue::Flinch) => base.add_modifier(Modifier::DIM),
        Some(Cue::Brace) => base.add_modifier(Modifier::REVERSED),
        Some(Cue::Pulse) => base.fg(Color::LightGreen).add_modifier(Modifier::BOLD),
        None => base,
    }
}

pub fn cue_label(cue: Cue) -> &'static str {
    match cue {
        Cue::Lunge => ">> lunges",
        Cue::Flinch => "~ flinches",
        Cue::Brace => "[] braces",
        Cue::Pulse => "+ glows",
    }
}

pub fn message_style(level: MessageLevel) -> Style {
    match level {
        MessageLevel::Info => Style::default().fg(Color::White),
        MessageLevel::Highlight => Style::default()
            .fg(Color::Magenta)
            .add_modifier(Modifier::BOLD),
        MessageLevel::Error => Style::default().fg(Color::Red),
    }
}
