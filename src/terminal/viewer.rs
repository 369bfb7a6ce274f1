//! Full-screen viewer modal (text, ASCII art, raw image, about panel).

use crate::ascii::HalfBlockImage;

/// Contents of the about panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AboutPanel {
    pub art: String,
    pub about: String,
    pub contacts: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ViewerBody {
    /// Waiting for the background task tagged `request`
    Loading { request: u64 },
    Text(String),
    Ascii(String),
    Raw(HalfBlockImage),
    About(AboutPanel),
}

/// An open viewer modal.
#[derive(Debug, Clone, PartialEq)]
pub struct Viewer {
    pub title: String,
    pub body: ViewerBody,
    /// Vertical scroll offset in lines
    pub scroll: u16,
}

impl Viewer {
    pub fn loading(title: impl Into<String>, request: u64) -> Self {
        Self::with_body(title, ViewerBody::Loading { request })
    }

    pub fn with_body(title: impl Into<String>, body: ViewerBody) -> Self {
        Self {
            title: title.into(),
            body,
            scroll: 0,
        }
    }

    /// Whether this viewer still waits for `request`.
    pub fn is_waiting_for(&self, request: u64) -> bool {
        matches!(self.body, ViewerBody::Loading { request: r } if r == request)
    }

    /// Number of content lines, used to bound scrolling.
    pub fn line_count(&self) -> usize {
        match &self.body {
            ViewerBody::Loading { .. } => 1,
            ViewerBody::Text(s) | ViewerBody::Ascii(s) => s.lines().count(),
            ViewerBody::Raw(image) => image.height as usize,
            ViewerBody::About(panel) => {
                panel.art.lines().count()
                    + panel.about.lines().count()
                    + panel.contacts.lines().count()
                    + 2
            }
        }
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_sub(lines);
    }

    pub fn scroll_down(&mut self, lines: u16) {
        let max = self.line_count().saturating_sub(1).min(u16::MAX as usize) as u16;
        self.scroll = self.scroll.saturating_add(lines).min(max);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_waiting_for_matching_request_only() {
        let viewer = Viewer::loading("a.txt", 3);
        assert!(viewer.is_waiting_for(3));
        assert!(!viewer.is_waiting_for(4));

        let done = Viewer::with_body("a.txt", ViewerBody::Text("x".into()));
        assert!(!done.is_waiting_for(3));
    }

    #[test]
    fn test_scroll_is_bounded() {
        let mut viewer = Viewer::with_body("a.txt", ViewerBody::Text("1\n2\n3".into()));
        viewer.scroll_down(10);
        assert_eq!(viewer.scroll, 2);
        viewer.scroll_up(1);
        assert_eq!(viewer.scroll, 1);
        viewer.scroll_up(10);
        assert_eq!(viewer.scroll, 0);
    }
}
