//! Unit tests for terminal rendering, the viewer modal, the status bar and
//! key mapping, using ratatui's `TestBackend`.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::Terminal;

use portfolio_term::app::{App, Completion};
use portfolio_term::ascii::{to_half_blocks, PixelGrid, HALF_BLOCK};
use portfolio_term::fs::{FsNode, Navigator};
use portfolio_term::input::{handle_key_event, InputContext, KeyAction, PAGE_LINES};
use portfolio_term::shell::Shell;
use portfolio_term::terminal::{
    centered_rect, half_block_lines, render_app, AboutPanel, StatusBar, Viewer, ViewerBody,
};

fn app() -> App {
    let root = FsNode::dir(
        "portfolio",
        vec![
            FsNode::file("readme.txt", 12),
            FsNode::dir("projects", vec![FsNode::file("main.rs", 30)]),
            FsNode::file("face.png", 400),
        ],
    );
    App::new(Shell::new(Navigator::new(root).unwrap()), StatusBar::new())
}

fn render(app: &App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
    terminal.draw(|frame| render_app(frame, app)).unwrap();
    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

// ==================== Rendering ====================

#[test]
fn test_render_shows_listing_and_prompt() {
    let screen = render(&app());
    assert!(screen.contains("readme.txt"));
    assert!(screen.contains("projects"));
    assert!(screen.contains("C:\\>"));
}

#[test]
fn test_render_shows_output_and_input() {
    let mut app = app();
    for c in "dir".chars() {
        app.handle_key(KeyAction::Insert(c));
    }
    let screen = render(&app);
    assert!(screen.contains("C:\\> dir"));

    app.handle_key(KeyAction::Submit);
    let screen = render(&app);
    assert!(screen.contains("Directory of C:\\"));
}

#[test]
fn test_render_confirmation_prompt() {
    let mut app = app();
    app.shell_mut().select(2);
    app.handle_key(KeyAction::OpenSelected);
    let screen = render(&app);
    assert!(screen.contains("Open \"face.png\" as stylized ASCII art?"));
    assert!(screen.contains("[y] Yes - ASCII art"));
}

#[test]
fn test_render_loading_then_text_viewer() {
    let mut app = app();
    let request = app.handle_key(KeyAction::OpenSelected).unwrap();
    assert!(render(&app).contains("Loading..."));

    app.apply_completion(Completion::Text {
        request: request.id,
        name: "readme.txt".into(),
        result: Ok("Hello from the readme".into()),
    });
    let screen = render(&app);
    assert!(screen.contains("Hello from the readme"));
    assert!(screen.contains("readme.txt"));
}

#[test]
fn test_render_without_status_bar() {
    let root = FsNode::dir("root", vec![]);
    let app = App::new(
        Shell::new(Navigator::new(root).unwrap()),
        StatusBar::with_visibility(false),
    );
    assert!(!render(&app).contains("items"));
}

#[test]
fn test_render_tiny_terminal_does_not_panic() {
    let app = app();
    let mut terminal = Terminal::new(TestBackend::new(10, 3)).unwrap();
    terminal.draw(|frame| render_app(frame, &app)).unwrap();
}

// ==================== Half Blocks ====================

#[test]
fn test_half_block_lines_colors() {
    let mut data = Vec::new();
    data.extend_from_slice(&[255, 0, 0]);
    data.extend_from_slice(&[0, 0, 255]);
    let grid = PixelGrid::new(1, 2, data).unwrap();
    let lines = half_block_lines(&to_half_blocks(&grid));

    assert_eq!(lines.len(), 1);
    let span = &lines[0].spans[0];
    assert_eq!(span.content, HALF_BLOCK.to_string());
    assert_eq!(span.style.fg, Some(Color::Rgb(255, 0, 0)));
    assert_eq!(span.style.bg, Some(Color::Rgb(0, 0, 255)));
}

// ==================== Layout Helpers ====================

#[test]
fn test_centered_rect() {
    let area = Rect::new(0, 0, 100, 40);
    let rect = centered_rect(50, 50, area);
    assert_eq!(rect, Rect::new(25, 10, 50, 20));
}

// ==================== Viewer ====================

#[test]
fn test_about_viewer_line_count() {
    let viewer = Viewer::with_body(
        "About",
        ViewerBody::About(AboutPanel {
            art: "$$\n$$\n".into(),
            about: "one".into(),
            contacts: "two\nthree".into(),
        }),
    );
    assert_eq!(viewer.line_count(), 2 + 1 + 2 + 2);
}

// ==================== Status Bar ====================

#[test]
fn test_status_bar_format() {
    let app = app();
    let text = StatusBar::new().format(app.shell(), false);
    assert!(text.starts_with(" C:\\ | 3 items | \u{2191}\u{2193} select"));
    assert!(text.ends_with("Esc close  ^C quit "));
    assert!(!text.contains("loading"));

    let text = StatusBar::new().format(app.shell(), true);
    assert!(text.contains("loading..."));
}

#[test]
fn test_status_bar_toggle() {
    let mut bar = StatusBar::default();
    assert!(bar.visible);
    bar.toggle();
    assert!(!bar.visible);
}

// ==================== Key Mapping ====================

#[test]
fn test_navigation_keys() {
    let ctx = InputContext::default();
    assert_eq!(handle_key_event(key(KeyCode::Up), ctx), KeyAction::SelectPrevious);
    assert_eq!(handle_key_event(key(KeyCode::Down), ctx), KeyAction::SelectNext);
    assert_eq!(handle_key_event(key(KeyCode::Right), ctx), KeyAction::OpenSelected);
    assert_eq!(handle_key_event(key(KeyCode::Left), ctx), KeyAction::CloseSelected);
    assert_eq!(handle_key_event(key(KeyCode::Char('x')), ctx), KeyAction::Insert('x'));
    assert_eq!(handle_key_event(key(KeyCode::Backspace), ctx), KeyAction::DeleteChar);
}

#[test]
fn test_backspace_on_empty_input_goes_up() {
    let ctx = InputContext {
        input_empty: true,
        ..Default::default()
    };
    assert_eq!(
        handle_key_event(key(KeyCode::Backspace), ctx),
        KeyAction::CloseSelected
    );
}

#[test]
fn test_navigation_ignored_while_viewer_open() {
    let ctx = InputContext {
        viewer_open: true,
        ..Default::default()
    };
    assert_eq!(handle_key_event(key(KeyCode::Right), ctx), KeyAction::None);
    assert_eq!(handle_key_event(key(KeyCode::Char('a')), ctx), KeyAction::None);
    assert_eq!(handle_key_event(key(KeyCode::Up), ctx), KeyAction::ScrollUp(1));
    assert_eq!(
        handle_key_event(key(KeyCode::PageDown), ctx),
        KeyAction::ScrollDown(PAGE_LINES)
    );
    assert_eq!(handle_key_event(key(KeyCode::Esc), ctx), KeyAction::CloseModals);
}

#[test]
fn test_confirmation_keys() {
    let ctx = InputContext {
        confirming: true,
        viewer_open: true,
        input_empty: false,
    };
    assert_eq!(handle_key_event(key(KeyCode::Char('Y')), ctx), KeyAction::Confirm(true));
    assert_eq!(handle_key_event(key(KeyCode::Char('n')), ctx), KeyAction::Confirm(false));
    assert_eq!(handle_key_event(key(KeyCode::Char('q')), ctx), KeyAction::None);
    assert_eq!(handle_key_event(key(KeyCode::Esc), ctx), KeyAction::CloseModals);
}

#[test]
fn test_ctrl_d_quits() {
    let event = KeyEvent::new(KeyCode::Char('d'), KeyModifiers::CONTROL);
    assert_eq!(
        handle_key_event(event, InputContext::default()),
        KeyAction::Quit
    );
}
