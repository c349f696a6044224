//! Terminal management with RAII cleanup.
//!
//! [`TerminalManager`] puts the terminal into TUI mode (raw mode, alternate
//! screen, bracketed paste and optionally mouse capture) and restores it
//! when dropped. A panic hook from [`setup_panic_hook`] covers the paths
//! where `Drop` never runs.
//!
//! ```no_run
//! use flash_chat::terminal::TerminalManager;
//!
//! fn main() -> flash_chat::error::ChatResult<()> {
//!     let mut manager = TerminalManager::new(true)?;
//!     let _terminal = manager.terminal();
//!     // ... draw frames ...
//!     manager.restore()
//! }
//! ```

mod panic;
mod setup;

pub use panic::setup_panic_hook;
pub use setup::{emergency_restore, enter_tui_mode, leave_tui_mode};

use crossterm::terminal::enable_raw_mode;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};

use crate::error::{ChatError, ChatResult};

/// Terminal type the application draws to.
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

pub struct TerminalManager {
    terminal: Tui,
    mouse: bool,
    /// Set once the terminal has been handed back to the shell
    restored: bool,
}

impl TerminalManager {
    /// Enter TUI mode. With `mouse` off, clicks are left to the terminal
    /// emulator (text selection keeps working).
    pub fn new(mouse: bool) -> ChatResult<Self> {
        enable_raw_mode().map_err(ChatError::terminal)?;

        let mut stdout = io::stdout();
        if let Err(err) = enter_tui_mode(&mut stdout, mouse) {
            leave_tui_mode(&mut stdout, mouse);
            return Err(ChatError::terminal(err));
        }

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).map_err(ChatError::terminal)?;
        terminal.clear().map_err(ChatError::terminal)?;

        tracing::debug!(mouse, "terminal entered TUI mode");
        Ok(Self {
            terminal,
            mouse,
            restored: false,
        })
    }

    pub fn terminal(&mut self) -> &mut Tui {
        &mut self.terminal
    }

    /// Restore the terminal. Further calls, and the one from `Drop`, are no-ops.
    pub fn restore(&mut self) -> ChatResult<()> {
        if self.restored {
            return Ok(());
        }
        self.restored = true;

        leave_tui_mode(self.terminal.backend_mut(), self.mouse);
        self.terminal.show_cursor().map_err(ChatError::terminal)?;
        tracing::debug!("terminal restored");
        Ok(())
    }
}

impl Drop for TerminalManager {
    fn drop(&mut self) {
        let _ = self.restore();
    }
}
