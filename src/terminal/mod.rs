//! Terminal management module - TUI wrapper, viewer modal, status bar and
//! rendering.

mod rendering;
mod status_bar;
mod tui;
mod viewer;

pub use rendering::{centered_rect, half_block_lines, render_app};
pub use status_bar::StatusBar;
pub use tui::Tui;
pub use viewer::{AboutPanel, Viewer, ViewerBody};
