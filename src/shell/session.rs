//! The interactive shell: one navigator, one output buffer, one pending
//! question.

use super::command::{parse_command, ShellCommand};
use super::confirm::{ImageMode, PendingConfirmation};
use super::file_kind::FileKind;
use super::output::OutputBuffer;
use crate::fs::{Navigator, OpenOutcome};

/// Printed when `type` names something that is not a readable file.
pub const FILE_NOT_FOUND: &str = "Error: File not found or cannot be read.";

/// Column width for names in `dir` listings.
const LISTING_NAME_WIDTH: usize = 25;

const HELP_TEXT: &str = "Available commands:
  cd <folder>     - Change directory
  cd..            - Go to parent directory
  dir             - List directory contents
  type <file>     - Display file contents
  about           - Show about panel
  cls             - Clear screen
  help            - Show this help

Keyboard:
  Up/Down         - Select entry
  Right / Enter   - Open selected entry
  Left/Backspace  - Go to parent directory
  Esc             - Close viewer
  Ctrl+C          - Quit";

/// Work the shell asks its owner to perform asynchronously.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Fetch a file and show it as text
    LoadText { name: String, path: String },
    /// Fetch an image and show it
    ShowImage {
        name: String,
        path: String,
        mode: ImageMode,
    },
    /// Show the about panel
    ShowAbout,
}

/// Shell state machine.
#[derive(Debug)]
pub struct Shell {
    navigator: Navigator,
    output: OutputBuffer,
    pending: PendingConfirmation,
}

impl Shell {
    pub fn new(navigator: Navigator) -> Self {
        Self::with_output(navigator, OutputBuffer::new())
    }

    pub fn with_output(navigator: Navigator, output: OutputBuffer) -> Self {
        Self {
            navigator,
            output,
            pending: PendingConfirmation::None,
        }
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn output(&self) -> &OutputBuffer {
        &self.output
    }

    pub fn output_mut(&mut self) -> &mut OutputBuffer {
        &mut self.output
    }

    pub fn pending(&self) -> &PendingConfirmation {
        &self.pending
    }

    /// Prompt for the current directory, e.g. `C:\projects>`.
    pub fn prompt(&self) -> String {
        format!("{}>", self.navigator.dos_path())
    }

    pub fn print(&mut self, text: &str) {
        self.output.print(text);
    }

    /// Parse and run one line of input.
    pub fn handle_command(&mut self, text: &str) -> Option<Action> {
        let command = parse_command(text)?;
        let echo = format!("{} {}", self.prompt(), text.trim());
        self.output.print(&echo);
        self.execute(command)
    }

    pub fn execute(&mut self, command: ShellCommand) -> Option<Action> {
        log::debug!("Executing {:?}", command);
        match command {
            ShellCommand::Clear => {
                self.output.clear();
                None
            }
            ShellCommand::ChangeDirectory(target) => {
                if let Err(e) = self.navigator.change_directory(&target) {
                    self.output.print(&e.to_string());
                }
                None
            }
            ShellCommand::List => {
                self.list_directory();
                None
            }
            ShellCommand::ReadFile(name) => self.read_file(&name),
            ShellCommand::About => Some(Action::ShowAbout),
            ShellCommand::Help => {
                self.output.print(HELP_TEXT);
                None
            }
            ShellCommand::Unrecognized(cmd) => {
                self.output.print(&format!(
                    "'{}' is not recognized as an internal or external command.",
                    cmd
                ));
                None
            }
        }
    }

    /// Print the filtered listing of the current directory.
    pub fn list_directory(&mut self) {
        let mut text = format!("\nDirectory of {}\n", self.navigator.dos_path());
        for entry in self.navigator.list_current_directory() {
            let column = if entry.is_dir() {
                "<DIR>".to_string()
            } else {
                format!("{} B", entry.size)
            };
            text.push_str(&format!(
                "\n  {:<width$} {}",
                entry.name,
                column,
                width = LISTING_NAME_WIDTH
            ));
        }
        text.push('\n');
        self.output.print(&text);
    }

    /// Open a file of the current directory by name.
    pub fn read_file(&mut self, name: &str) -> Option<Action> {
        let path = self.navigator.file_path(name);
        match self.navigator.resolve(&path) {
            Some(node) if node.is_file() => self.open_file(name, &path),
            _ => {
                self.output.print(FILE_NOT_FOUND);
                None
            }
        }
    }

    /// Route a file by kind: text opens immediately, everything else asks.
    pub fn open_file(&mut self, name: &str, path: &str) -> Option<Action> {
        let name = name.to_string();
        let path = path.to_string();
        match FileKind::from_name(&name) {
            FileKind::Text => Some(Action::LoadText { name, path }),
            FileKind::Image => {
                self.pending = PendingConfirmation::ImageOpen { name, path };
                None
            }
            FileKind::Unknown => {
                self.pending = PendingConfirmation::TextOpen { name, path };
                None
            }
        }
    }

    /// Answer the pending question. Always clears it.
    pub fn resolve_confirmation(&mut self, confirmed: bool) -> Option<Action> {
        match std::mem::take(&mut self.pending) {
            PendingConfirmation::None => None,
            PendingConfirmation::ImageOpen { name, path } => Some(Action::ShowImage {
                name,
                path,
                mode: if confirmed {
                    ImageMode::Ascii
                } else {
                    ImageMode::Raw
                },
            }),
            PendingConfirmation::TextOpen { name, path } => {
                confirmed.then_some(Action::LoadText { name, path })
            }
        }
    }

    /// Drop the pending question without answering it.
    pub fn cancel_confirmation(&mut self) {
        self.pending = PendingConfirmation::None;
    }

    pub fn select_next(&mut self) {
        self.navigator.select_next();
    }

    pub fn select_previous(&mut self) {
        self.navigator.select_previous();
    }

    pub fn select(&mut self, index: usize) {
        self.navigator.select(index);
    }

    /// Open the highlighted entry.
    pub fn open_selected(&mut self) -> Option<Action> {
        match self.navigator.open_selected() {
            Ok(OpenOutcome::OpenFile { name, path }) => self.open_file(&name, &path),
            Ok(OpenOutcome::Entered) | Ok(OpenOutcome::Nothing) => None,
            Err(e) => {
                self.output.print(&e.to_string());
                None
            }
        }
    }

    /// Go up one directory.
    pub fn close_selected(&mut self) {
        if let Err(e) = self.navigator.close_selected() {
            self.output.print(&e.to_string());
        }
    }
}
