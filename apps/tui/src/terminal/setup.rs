use color_eyre::eyre::eyre;
use color_eyre::Result;
use crossterm::{
    cursor, execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{stdout, Stdout, Write};
use tracing::debug;

pub type ShowroomTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Raw mode, alternate screen, hidden cursor. Each step that fails undoes
/// the ones before it.
pub fn setup_terminal() -> Result<ShowroomTerminal> {
    let (width, height) = crossterm::terminal::size().unwrap_or((80, 24));
    debug!(width, height, "setting up terminal");

    enable_raw_mode().map_err(|e| {
        eprintln!("Failed to enable raw mode: {e}");
        eyre!("Failed to enable raw mode: {e}")
    })?;

    let mut stdout = stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen) {
        let _ = disable_raw_mode();
        eprintln!("Failed to enter alternate screen: {e}");
        return Err(eyre!("Failed to enter alternate screen: {e}"));
    }

    let mut terminal = match Terminal::new(CrosstermBackend::new(stdout)) {
        Ok(terminal) => terminal,
        Err(e) => {
            cleanup_terminal_state(true, true);
            eprintln!("Failed to create terminal: {e}");
            return Err(eyre!("Failed to create terminal: {e}"));
        }
    };

    // Not fatal: the first frame redraws everything anyway.
    if let Err(e) = terminal.clear() {
        debug!(error = %e, "terminal clear failed");
    }
    if let Err(e) = execute!(std::io::stdout(), cursor::Hide) {
        debug!(error = %e, "hiding cursor failed");
    }

    debug!("terminal ready");
    Ok(terminal)
}

/// Restores whatever `setup_terminal` changed. Safe to call after a partial
/// setup.
pub fn cleanup_terminal_state(raw_mode: bool, alternate_screen: bool) {
    let mut stdout_handle = stdout();

    if let Err(e) = execute!(stdout_handle, cursor::Show) {
        eprintln!("Warning: Failed to show cursor: {e}");
    }

    if alternate_screen {
        if let Err(e) = execute!(stdout_handle, LeaveAlternateScreen) {
            eprintln!("Warning: Failed to leave alternate screen: {e}");
        }
    }

    if raw_mode {
        if let Err(e) = disable_raw_mode() {
            eprintln!("Warning: Failed to disable raw mode: {e}");
        }
    }

    let _ = stdout_handle.flush();
    debug!("terminal restored");
}
