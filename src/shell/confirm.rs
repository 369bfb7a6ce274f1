//! Pending yes/no confirmation before opening a file.

/// How an image should be displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageMode {
    /// Converted to ASCII art
    Ascii,
    /// True-color half-block rendering
    Raw,
}

/// A question waiting for a yes/no answer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PendingConfirmation {
    #[default]
    None,
    /// "[y] ASCII art / [n] raw image"
    ImageOpen { name: String, path: String },
    /// "[y] try opening as text / [n] cancel"
    TextOpen { name: String, path: String },
}

impl PendingConfirmation {
    pub fn is_pending(&self) -> bool {
        !matches!(self, PendingConfirmation::None)
    }

    /// Prompt text shown in the confirmation dialog.
    pub fn message(&self) -> Option<String> {
        match self {
            PendingConfirmation::None => None,
            PendingConfirmation::ImageOpen { name, .. } => Some(format!(
                "Open \"{}\" as stylized ASCII art?\n\n[y] Yes - ASCII art\n[n] No - Raw image",
                name
            )),
            PendingConfirmation::TextOpen { name, .. } => Some(format!(
                "This file type may not be fully supported as plain text.\n\
                 Open \"{}\" anyway?\n\n[y] Yes - Try opening\n[n] No - Cancel",
                name
            )),
        }
    }
}
