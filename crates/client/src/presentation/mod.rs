//! Terminal presentation: layout, styling and text for the duel screen.
pub mod cue;
pub mod terminal;
pub mod text;
pub mod theme;
pub mod ui;
pub mod widgets;
