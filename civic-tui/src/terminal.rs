//! Terminal lifecycle for the civic client
//!
//! Raw mode and the alternate screen must be unwound on every exit path,
//! panics included, or the user's shell is left in a broken state.

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout, Write};

use crate::error::Result;

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Enter raw mode and the alternate screen, returning the ready terminal
pub fn setup_terminal() -> Result<Tui> {
    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

/// Leave the alternate screen and hand the shell back
pub fn restore_terminal(mut terminal: Tui) -> Result<()> {
    unwind(terminal.backend_mut())?;
    Ok(())
}

/// Chain a panic hook that restores the shell before the panic message
/// prints, so the message lands on a readable screen
pub fn install_panic_hook() {
    let previous = std::panic::take_hook();

    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = unwind(&mut io::stdout());
        previous(panic_info);
    }));
}

fn unwind(out: &mut impl Write) -> io::Result<()> {
    execute!(out, LeaveAlternateScreen)?;
    disable_raw_mode()?;
    Ok(())
}
