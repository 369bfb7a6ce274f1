//! UI state: the shell, the input line, the viewer modal and the status bar.
//!
//! `App` is owned by the event loop. Key actions mutate it synchronously;
//! work that needs the network is returned as a [`Request`] and comes back
//! later as a [`Completion`].

use crate::ascii::HalfBlockImage;
use crate::input::{InputContext, KeyAction};
use crate::shell::{Action, FileKind, ImageMode, Shell, FILE_NOT_FOUND};
use crate::terminal::{AboutPanel, StatusBar, Viewer, ViewerBody};

/// Printed when a file opened after confirmation cannot be fetched.
pub const READ_FAILED: &str = "Error: Could not read file.";

/// Title of the about panel.
pub const ABOUT_TITLE: &str = "About";

/// Background work tagged with the viewer it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub id: u64,
    pub action: Action,
}

/// Result of a [`Request`].
#[derive(Debug)]
pub enum Completion {
    Text {
        request: u64,
        name: String,
        result: Result<String, String>,
    },
    Ascii {
        request: u64,
        name: String,
        art: String,
    },
    Raw {
        request: u64,
        name: String,
        result: Result<HalfBlockImage, &'static str>,
    },
    About {
        request: u64,
        panel: AboutPanel,
    },
}

impl Completion {
    pub fn request(&self) -> u64 {
        match self {
            Completion::Text { request, .. }
            | Completion::Ascii { request, .. }
            | Completion::Raw { request, .. }
            | Completion::About { request, .. } => *request,
        }
    }
}

pub struct App {
    shell: Shell,
    input: String,
    viewer: Option<Viewer>,
    status_bar: StatusBar,
    next_request: u64,
    should_quit: bool,
}

impl App {
    pub fn new(shell: Shell, status_bar: StatusBar) -> Self {
        Self {
            shell,
            input: String::new(),
            viewer: None,
            status_bar,
            next_request: 0,
            should_quit: false,
        }
    }

    pub fn shell(&self) -> &Shell {
        &self.shell
    }

    pub fn shell_mut(&mut self) -> &mut Shell {
        &mut self.shell
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn viewer(&self) -> Option<&Viewer> {
        self.viewer.as_ref()
    }

    pub fn status_bar(&self) -> &StatusBar {
        &self.status_bar
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Whether a background request is still outstanding.
    pub fn is_loading(&self) -> bool {
        matches!(
            self.viewer,
            Some(Viewer {
                body: ViewerBody::Loading { .. },
                ..
            })
        )
    }

    /// State the key mapper needs.
    pub fn input_context(&self) -> InputContext {
        InputContext {
            confirming: self.shell.pending().is_pending(),
            viewer_open: self.viewer.is_some(),
            input_empty: self.input.is_empty(),
        }
    }

    /// Apply a key action. Returns background work to start, if any.
    pub fn handle_key(&mut self, action: KeyAction) -> Option<Request> {
        match action {
            KeyAction::Quit => {
                self.should_quit = true;
                None
            }
            KeyAction::Confirm(answer) => {
                let action = self.shell.resolve_confirmation(answer);
                self.dispatch(action)
            }
            KeyAction::CloseModals => {
                self.viewer = None;
                self.shell.cancel_confirmation();
                None
            }
            KeyAction::ScrollUp(lines) => {
                match self.viewer.as_mut() {
                    Some(viewer) => viewer.scroll_up(lines),
                    None => self.shell.output_mut().scroll_up(lines),
                }
                None
            }
            KeyAction::ScrollDown(lines) => {
                match self.viewer.as_mut() {
                    Some(viewer) => viewer.scroll_down(lines),
                    None => self.shell.output_mut().scroll_down(lines),
                }
                None
            }
            KeyAction::SelectNext => {
                self.shell.select_next();
                None
            }
            KeyAction::SelectPrevious => {
                self.shell.select_previous();
                None
            }
            KeyAction::OpenSelected => {
                let action = self.shell.open_selected();
                self.dispatch(action)
            }
            KeyAction::CloseSelected => {
                self.shell.close_selected();
                None
            }
            KeyAction::Insert(c) => {
                self.input.push(c);
                None
            }
            KeyAction::DeleteChar => {
                self.input.pop();
                None
            }
            KeyAction::Submit => {
                let line = std::mem::take(&mut self.input);
                let action = self.shell.handle_command(&line);
                self.dispatch(action)
            }
            KeyAction::None => None,
        }
    }

    /// Open a loading viewer for `action` and tag the request.
    pub fn dispatch(&mut self, action: Option<Action>) -> Option<Request> {
        let action = action?;
        self.next_request += 1;
        let id = self.next_request;

        let title = match &action {
            Action::LoadText { name, .. } | Action::ShowImage { name, .. } => name.clone(),
            Action::ShowAbout => ABOUT_TITLE.to_string(),
        };
        self.viewer = Some(Viewer::loading(title, id));
        log::debug!("Request {} started: {:?}", id, action);
        Some(Request { id, action })
    }

    /// Fill the viewer with a finished request. Stale results are dropped.
    pub fn apply_completion(&mut self, completion: Completion) {
        let request = completion.request();
        let waiting = self
            .viewer
            .as_ref()
            .is_some_and(|v| v.is_waiting_for(request));
        if !waiting {
            log::debug!("Dropping stale result for request {}", request);
            return;
        }

        self.viewer = match completion {
            Completion::Text {
                name,
                result: Ok(content),
                ..
            } => Some(Viewer::with_body(name, ViewerBody::Text(content))),
            Completion::Text {
                name,
                result: Err(e),
                ..
            } => {
                log::warn!("Reading {} failed: {}", name, e);
                let message = match FileKind::from_name(&name) {
                    FileKind::Unknown => READ_FAILED,
                    _ => FILE_NOT_FOUND,
                };
                self.shell.print(message);
                None
            }
            Completion::Ascii { name, art, .. } => {
                Some(Viewer::with_body(name, ViewerBody::Ascii(art)))
            }
            Completion::Raw {
                name,
                result: Ok(image),
                ..
            } => Some(Viewer::with_body(name, ViewerBody::Raw(image))),
            Completion::Raw {
                name,
                result: Err(placeholder),
                ..
            } => Some(Viewer::with_body(
                name,
                ViewerBody::Ascii(placeholder.to_string()),
            )),
            Completion::About { panel, .. } => {
                Some(Viewer::with_body(ABOUT_TITLE, ViewerBody::About(panel)))
            }
        };
    }
}

/// Image mode label for log lines and titles.
pub fn mode_name(mode: ImageMode) -> &'static str {
    match mode {
        ImageMode::Ascii => "ascii",
        ImageMode::Raw => "raw",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::{FsNode, Navigator};

    fn app() -> App {
        let root = FsNode::dir(
            "root",
            vec![FsNode::file("a.txt", 1), FsNode::file("face.png", 2)],
        );
        App::new(Shell::new(Navigator::new(root).unwrap()), StatusBar::new())
    }

    #[test]
    fn test_submit_text_file_opens_loading_viewer() {
        let mut app = app();
        for c in "type a.txt".chars() {
            app.handle_key(KeyAction::Insert(c));
        }
        let request = app.handle_key(KeyAction::Submit).unwrap();
        assert_eq!(request.id, 1);
        assert!(app.input().is_empty());
        assert!(app.is_loading());
        assert_eq!(app.viewer().unwrap().title, "a.txt");
    }

    #[test]
    fn test_stale_completion_is_dropped() {
        let mut app = app();
        let request = app.handle_key(KeyAction::OpenSelected).unwrap();
        app.handle_key(KeyAction::CloseModals);
        app.apply_completion(Completion::Text {
            request: request.id,
            name: "a.txt".into(),
            result: Ok("hello".into()),
        });
        assert!(app.viewer().is_none());
    }

    #[test]
    fn test_text_failure_prints_error() {
        let mut app = app();
        let request = app.handle_key(KeyAction::OpenSelected).unwrap();
        app.apply_completion(Completion::Text {
            request: request.id,
            name: "a.txt".into(),
            result: Err("404".into()),
        });
        assert!(app.viewer().is_none());
        assert!(app.shell().output().content().contains(FILE_NOT_FOUND));
    }

    #[test]
    fn test_image_confirmation_flow() {
        let mut app = app();
        app.handle_key(KeyAction::SelectNext);
        assert_eq!(app.handle_key(KeyAction::OpenSelected), None);
        assert!(app.input_context().confirming);

        let request = app.handle_key(KeyAction::Confirm(false)).unwrap();
        assert_eq!(
            request.action,
            Action::ShowImage {
                name: "face.png".into(),
                path: "/face.png".into(),
                mode: ImageMode::Raw,
            }
        );
        assert!(!app.input_context().confirming);
    }

    #[test]
    fn test_quit() {
        let mut app = app();
        app.handle_key(KeyAction::Quit);
        assert!(app.should_quit());
    }
}
