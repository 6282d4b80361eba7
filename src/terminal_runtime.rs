use std::io;

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::error::{Result, SnekError};
use crate::game::FrameView;
use crate::renderer;

/// Concrete terminal type used by the runtime.
pub type AppTerminal = Terminal<CrosstermBackend<io::Stdout>>;

/// Owns terminal lifecycle (raw mode + alternate screen) for one game session.
///
/// Dropping the session restores the terminal, whichever way the loop exits.
pub struct TerminalSession {
    terminal: AppTerminal,
}

impl TerminalSession {
    /// Enters raw mode, switches to the alternate screen and creates a ratatui terminal.
    pub fn enter() -> Result<Self> {
        enable_raw_mode().map_err(|error| setup_failed("raw mode", &error))?;

        let mut stdout = io::stdout();
        if let Err(error) = execute!(stdout, EnterAlternateScreen, Hide) {
            let _ = disable_raw_mode();
            return Err(setup_failed("alternate screen", &error));
        }

        let backend = CrosstermBackend::new(stdout);
        match Terminal::new(backend) {
            Ok(terminal) => {
                log::info!("terminal session started");
                Ok(Self { terminal })
            }
            Err(error) => {
                let _ = cleanup_terminal_best_effort();
                Err(setup_failed("terminal backend", &error))
            }
        }
    }

    /// Draws one frame. The view is only borrowed for the duration of the draw.
    pub fn present(&mut self, view: &FrameView<'_>) -> Result<()> {
        self.terminal
            .draw(|frame| renderer::render(frame, view))?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = cleanup_terminal_best_effort();
        log::info!("terminal session restored");
    }
}

/// Restores the terminal without an owning session, e.g. from a panic hook.
pub fn cleanup_terminal_best_effort() -> io::Result<()> {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    execute!(stdout, Show, LeaveAlternateScreen)
}

fn setup_failed(stage: &str, error: &io::Error) -> SnekError {
    SnekError::InitializationFailure(format!("{stage}: {error}"))
}
