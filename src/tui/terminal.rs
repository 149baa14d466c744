//! Terminal mode setup with restore on drop.

use crossterm::{
    cursor::Show,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use std::io::{self, Write};
use tracing::{debug, warn};

/// Holds the terminal in raw mode on the alternate screen. Restores it on drop.
pub struct TerminalGuard<W: Write> {
    out: W,
}

impl<W: Write> TerminalGuard<W> {
    /// Enables raw mode, then enters the alternate screen with mouse capture.
    ///
    /// Once raw mode is on, any later failure still restores the terminal.
    pub fn enter(out: W) -> io::Result<Self> {
        enable_raw_mode()?;
        let mut guard = Self::restoring(out);
        execute!(guard.out, EnterAlternateScreen, EnableMouseCapture)?;
        Ok(guard)
    }

    fn restoring(out: W) -> Self {
        Self { out }
    }

    /// Runs every teardown step, returning the first failure.
    fn restore(&mut self) -> io::Result<()> {
        let raw = disable_raw_mode();
        let screen = execute!(self.out, LeaveAlternateScreen, DisableMouseCapture, Show);
        raw.and(screen)
    }
}

impl<W: Write> Drop for TerminalGuard<W> {
    fn drop(&mut self) {
        debug!("Restoring terminal");
        if let Err(err) = self.restore() {
            warn!(error = %err, "Failed to restore terminal");
        }
    }
}
