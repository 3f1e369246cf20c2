//! Raw-mode and alternate-screen handling for the duel screen.
use std::io::{self, Stdout, Write};

use anyhow::{Context, Result};
use crossterm::{
    cursor::{Hide, Show},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Puts the terminal back into cooked mode on the main screen when dropped.
///
/// Created as soon as raw mode is on, so a failure anywhere later in
/// [`init`] or in the draw loop still restores the terminal.
#[must_use = "the terminal is restored when the guard is dropped"]
pub struct TerminalGuard(());

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = leave_screen(&mut io::stdout());
        let _ = disable_raw_mode();
    }
}

/// Switches to raw mode and the alternate screen.
pub fn init() -> Result<(Tui, TerminalGuard)> {
    enable_raw_mode().context("failed to enable raw mode")?;
    let guard = TerminalGuard(());

    let mut stdout = io::stdout();
    enter_screen(&mut stdout).context("failed to enter alternate screen")?;

    let terminal =
        Terminal::new(CrosstermBackend::new(stdout)).context("failed to create terminal")?;

    Ok((terminal, guard))
}

fn enter_screen(out: &mut impl Write) -> io::Result<()> {
    execute!(out, EnterAlternateScreen, Hide)
}

fn leave_screen(out: &mut impl Write) -> io::Result<()> {
    execute!(out, Show, LeaveAlternateScreen)
}
