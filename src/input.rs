//! Keyboard input mapping.
//!
//! Keys mean different things depending on what is on screen:
//! - a confirmation prompt only accepts `y`, `n` and Esc
//! - an open viewer scrolls and closes with Esc
//! - otherwise arrows navigate the tree and printable keys edit the input line

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Lines scrolled per PageUp/PageDown.
pub const PAGE_LINES: u16 = 10;

/// What is currently on screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputContext {
    pub confirming: bool,
    pub viewer_open: bool,
    pub input_empty: bool,
}

/// Result of mapping a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    /// Answer to the confirmation prompt
    Confirm(bool),
    /// Esc: close viewer and confirmation
    CloseModals,
    ScrollUp(u16),
    ScrollDown(u16),
    SelectNext,
    SelectPrevious,
    OpenSelected,
    CloseSelected,
    Insert(char),
    DeleteChar,
    Submit,
    None,
}

/// Map a key event to an action.
pub fn handle_key_event(event: KeyEvent, context: InputContext) -> KeyAction {
    let KeyEvent {
        code, modifiers, ..
    } = event;

    if modifiers.contains(KeyModifiers::CONTROL) {
        return match code {
            KeyCode::Char('c') | KeyCode::Char('C') | KeyCode::Char('d') | KeyCode::Char('D') => {
                KeyAction::Quit
            }
            _ => KeyAction::None,
        };
    }

    if context.confirming {
        return match code {
            KeyCode::Char('y') | KeyCode::Char('Y') => KeyAction::Confirm(true),
            KeyCode::Char('n') | KeyCode::Char('N') => KeyAction::Confirm(false),
            KeyCode::Esc => KeyAction::CloseModals,
            _ => KeyAction::None,
        };
    }

    if context.viewer_open {
        return match code {
            KeyCode::Esc => KeyAction::CloseModals,
            KeyCode::Up => KeyAction::ScrollUp(1),
            KeyCode::Down => KeyAction::ScrollDown(1),
            KeyCode::PageUp => KeyAction::ScrollUp(PAGE_LINES),
            KeyCode::PageDown => KeyAction::ScrollDown(PAGE_LINES),
            _ => KeyAction::None,
        };
    }

    match code {
        KeyCode::Up => KeyAction::SelectPrevious,
        KeyCode::Down => KeyAction::SelectNext,
        KeyCode::Right => KeyAction::OpenSelected,
        KeyCode::Left => KeyAction::CloseSelected,
        KeyCode::PageUp => KeyAction::ScrollUp(PAGE_LINES),
        KeyCode::PageDown => KeyAction::ScrollDown(PAGE_LINES),
        KeyCode::Esc => KeyAction::CloseModals,
        KeyCode::Enter if context.input_empty => KeyAction::OpenSelected,
        KeyCode::Enter => KeyAction::Submit,
        KeyCode::Backspace if context.input_empty => KeyAction::CloseSelected,
        KeyCode::Backspace => KeyAction::DeleteChar,
        KeyCode::Char(c) if !modifiers.contains(KeyModifiers::ALT) => KeyAction::Insert(c),
        _ => KeyAction::None,
    }
}
