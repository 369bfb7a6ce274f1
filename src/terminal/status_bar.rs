//! Status bar at the bottom of the screen.

use crate::shell::Shell;

const KEY_HINTS: &str =
    " | \u{2191}\u{2193} select  \u{2192} open  \u{2190} back  Esc close  ^C quit ";

/// Status bar showing location and key hints.
///
/// Shows: path | item count | loading | hints
#[derive(Debug, Clone)]
pub struct StatusBar {
    pub visible: bool,
}

impl Default for StatusBar {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusBar {
    pub fn new() -> Self {
        Self { visible: true }
    }

    pub fn with_visibility(visible: bool) -> Self {
        Self { visible }
    }

    pub fn toggle(&mut self) {
        self.visible = !self.visible;
    }

    /// Format: " C:\path | N items | loading... | hints "
    pub fn format(&self, shell: &Shell, loading: bool) -> String {
        let count = shell.navigator().list_current_directory().len();
        let items = if count == 1 {
            "1 item".to_string()
        } else {
            format!("{} items", count)
        };
        let mut text = format!(" {} | {}", shell.navigator().dos_path(), items);
        if loading {
            text.push_str(" | loading...");
        }
        text.push_str(KEY_HINTS);
        text
    }
}
