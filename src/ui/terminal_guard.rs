//! Terminal state guard for guaranteed cleanup.
//!
//! Raw mode, the alternate screen and bracketed paste are switched on by
//! [`TerminalGuard::enter`] and switched off again when the guard is dropped,
//! whether the app returns normally, bails out with `?`, or panics (with
//! [`install_panic_hook`]).

use crossterm::{
    event::{DisableBracketedPaste, EnableBracketedPaste},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Write};

pub struct TerminalGuard {
    active: bool,
}

impl TerminalGuard {
    /// Put the terminal into full-screen mode and return the guard that
    /// undoes it.
    pub fn enter() -> anyhow::Result<Self> {
        enable_raw_mode()?;
        // Raw mode is on from here, so the guard must exist before anything
        // else can fail.
        let guard = Self { active: true };
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
        Ok(guard)
    }

    /// Restore the terminal now and turn Drop into a no-op.
    pub fn cleanup(&mut self) -> anyhow::Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        restore_terminal()
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if self.active {
            if let Err(e) = restore_terminal() {
                tracing::debug!(error = %e, "Terminal cleanup failed in Drop");
            }
        }
    }
}

fn restore_terminal() -> anyhow::Result<()> {
    let mut stdout = io::stdout();
    disable_raw_mode()?;
    execute!(stdout, LeaveAlternateScreen, DisableBracketedPaste)?;
    stdout.flush()?;
    Ok(())
}

/// Install a panic hook that restores terminal state before printing the
/// panic message.
///
/// Call this before the terminal is switched into raw mode.
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        if let Err(e) = restore_terminal() {
            tracing::debug!(error = %e, "Failed to restore terminal in panic hook");
        }
        original_hook(panic_info);
    }));
}
