//! Scrollback buffer for shell output.

use std::collections::VecDeque;

/// Default scrollback size.
pub const DEFAULT_SCROLLBACK: usize = 2_000;

/// Line-oriented output buffer.
///
/// Every `print` appends text followed by a newline, the way a console
/// would. Oldest lines are dropped once `max_lines` is exceeded.
#[derive(Debug)]
pub struct OutputBuffer {
    lines: VecDeque<String>,
    /// Scroll offset (lines from the end)
    scroll: u16,
    max_lines: usize,
}

impl Default for OutputBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputBuffer {
    pub fn new() -> Self {
        Self::with_max_lines(DEFAULT_SCROLLBACK)
    }

    /// Create a buffer with a custom scrollback limit (at least one line).
    pub fn with_max_lines(max_lines: usize) -> Self {
        Self {
            lines: VecDeque::new(),
            scroll: 0,
            max_lines: max_lines.max(1),
        }
    }

    /// Append text as one or more lines.
    pub fn print(&mut self, text: &str) {
        for line in text.split('\n') {
            self.lines.push_back(line.trim_end_matches('\r').to_string());
        }
        while self.lines.len() > self.max_lines {
            self.lines.pop_front();
        }
        self.scroll = 0;
    }

    pub fn clear(&mut self) {
        self.lines.clear();
        self.scroll = 0;
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    /// Full contents, one line per `\n`.
    pub fn content(&self) -> String {
        self.lines().collect::<Vec<_>>().join("\n")
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    pub fn scroll_up(&mut self, lines: u16) {
        let max = self.lines.len().min(u16::MAX as usize) as u16;
        self.scroll = self.scroll.saturating_add(lines).min(max);
    }

    pub fn scroll_down(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_sub(lines);
    }

    /// Lines to render in a viewport of `viewport_height`, honoring scroll.
    pub fn visible_lines(&self, viewport_height: usize) -> Vec<&str> {
        if viewport_height == 0 {
            return Vec::new();
        }
        let total = self.lines.len();
        let end = total.saturating_sub(self.scroll as usize);
        let start = end.saturating_sub(viewport_height);
        self.lines.range(start..end).map(String::as_str).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_print_splits_lines() {
        let mut buf = OutputBuffer::new();
        buf.print("one\ntwo");
        buf.print("three");
        assert_eq!(buf.line_count(), 3);
        assert_eq!(buf.content(), "one\ntwo\nthree");
    }

    #[test]
    fn test_max_lines_drops_oldest() {
        let mut buf = OutputBuffer::with_max_lines(3);
        buf.print("1\n2\n3\n4\n5");
        let lines: Vec<&str> = buf.lines().collect();
        assert_eq!(lines, vec!["3", "4", "5"]);
    }

    #[test]
    fn test_visible_lines_with_scroll() {
        let mut buf = OutputBuffer::new();
        buf.print("1\n2\n3\n4\n5");
        assert_eq!(buf.visible_lines(2), vec!["4", "5"]);
        buf.scroll_up(1);
        assert_eq!(buf.visible_lines(2), vec!["3", "4"]);
        buf.scroll_up(100);
        assert_eq!(buf.scroll(), 5);
        assert!(buf.visible_lines(2).is_empty());
        buf.scroll_down(100);
        assert_eq!(buf.scroll(), 0);
        assert!(buf.visible_lines(0).is_empty());
    }

    #[test]
    fn test_clear_resets() {
        let mut buf = OutputBuffer::new();
        buf.print("x");
        buf.scroll_up(1);
        buf.clear();
        assert!(buf.is_empty());
        assert_eq!(buf.scroll(), 0);
    }
}
