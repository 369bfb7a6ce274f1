//! MS-DOS style shell on top of the navigator.

mod command;
mod confirm;
mod file_kind;
mod output;
mod session;

pub use command::{parse_command, ShellCommand};
pub use confirm::{ImageMode, PendingConfirmation};
pub use file_kind::FileKind;
pub use output::{OutputBuffer, DEFAULT_SCROLLBACK};
pub use session::{Action, Shell, FILE_NOT_FOUND};
