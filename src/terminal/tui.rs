//! TUI wrapper that manages the ratatui terminal with crossterm backend.
//!
//! Handles the terminal lifecycle (raw mode, alternate screen, panic
//! recovery) and delegates drawing to the `rendering` module.

use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, Stdout};
use std::panic;
use std::sync::atomic::{AtomicBool, Ordering};

use super::rendering;
use crate::app::App;

/// Set while the terminal is in raw mode, read by the panic hook.
static RAW_MODE_ACTIVE: AtomicBool = AtomicBool::new(false);

/// Full-screen terminal session.
///
/// The terminal is restored on drop, on [`Tui::restore`], or when the
/// process panics.
///
/// # Example
///
/// ```ignore
/// let mut tui = Tui::new()?;
/// tui.draw(&app)?;
/// tui.restore()?;
/// ```
pub struct Tui {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    active: bool,
}

impl Tui {
    /// Enter raw mode and the alternate screen.
    pub fn new() -> io::Result<Self> {
        install_panic_hook();

        enable_raw_mode()?;
        RAW_MODE_ACTIVE.store(true, Ordering::SeqCst);

        let mut stdout = io::stdout();
        if let Err(e) = crossterm::execute!(stdout, EnterAlternateScreen) {
            leave_raw_mode();
            return Err(e);
        }

        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(Self {
            terminal,
            active: true,
        })
    }

    pub fn terminal(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Draw one frame of the application.
    pub fn draw(&mut self, app: &App) -> io::Result<()> {
        self.terminal
            .draw(|frame| rendering::render_app(frame, app))?;
        Ok(())
    }

    /// Leave the alternate screen and raw mode. Idempotent.
    pub fn restore(&mut self) -> io::Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        crossterm::execute!(self.terminal.backend_mut(), LeaveAlternateScreen)?;
        leave_raw_mode();
        self.terminal.show_cursor()
    }
}

impl Drop for Tui {
    fn drop(&mut self) {
        if self.active {
            self.active = false;
            let _ = crossterm::execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
            leave_raw_mode();
            let _ = self.terminal.show_cursor();
        }
    }
}

fn leave_raw_mode() {
    RAW_MODE_ACTIVE.store(false, Ordering::SeqCst);
    let _ = disable_raw_mode();
}

/// Restore the terminal before the default panic message is printed.
fn install_panic_hook() {
    static HOOK_INSTALLED: AtomicBool = AtomicBool::new(false);
    if HOOK_INSTALLED.swap(true, Ordering::SeqCst) {
        return;
    }

    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        if RAW_MODE_ACTIVE.load(Ordering::SeqCst) {
            let _ = crossterm::execute!(io::stdout(), LeaveAlternateScreen);
            leave_raw_mode();
        }
        original_hook(info);
    }));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tui_new_and_restore() {
        // Needs a real TTY; skipped otherwise
        match Tui::new() {
            Ok(mut tui) => {
                assert!(tui.is_active());
                assert!(RAW_MODE_ACTIVE.load(Ordering::SeqCst));
                tui.restore().expect("Should restore terminal");
                assert!(!tui.is_active());
                tui.restore().expect("Second restore should be a no-op");
                assert!(!RAW_MODE_ACTIVE.load(Ordering::SeqCst));
            }
            Err(e) => eprintln!("Skipping test (no TTY): {}", e),
        }
    }

    #[test]
    fn test_panic_hook_installs_once() {
        install_panic_hook();
        install_panic_hook();
    }
}
