//! Rendering functions for terminal UI components.
//!
//! Pure rendering logic separated from terminal lifecycle management. All
//! functions draw onto a ratatui `Frame` without touching terminal state.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;

use super::viewer::{AboutPanel, Viewer, ViewerBody};
use super::StatusBar;
use crate::app::App;
use crate::ascii::{HalfBlockImage, HALF_BLOCK};
use crate::shell::Shell;

/// Width of the directory panel.
const TREE_PANEL_WIDTH: u16 = 32;

const BORDER_STYLE: Style = Style::new().fg(Color::DarkGray);

/// Render a complete frame.
///
/// Layers, bottom to top: directory panel and console, viewer modal,
/// confirmation prompt, status bar.
pub fn render_app(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let show_status = app.status_bar().visible;
    let main_area = if show_status {
        Rect {
            height: area.height.saturating_sub(1),
            ..area
        }
    } else {
        area
    };

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(TREE_PANEL_WIDTH), Constraint::Min(10)])
        .split(main_area);

    render_tree_panel(frame, app.shell(), columns[0]);
    render_console(frame, app, columns[1]);

    if let Some(viewer) = app.viewer() {
        render_viewer(frame, viewer, main_area);
    }
    if let Some(message) = app.shell().pending().message() {
        render_confirm(frame, &message, main_area);
    }
    if show_status {
        render_status_bar(frame, app.status_bar(), app, area);
    }
}

/// Render the current directory listing with the selection highlighted.
pub fn render_tree_panel(frame: &mut Frame, shell: &Shell, area: Rect) {
    let navigator = shell.navigator();
    let items: Vec<ListItem> = navigator
        .list_current_directory()
        .into_iter()
        .map(|node| {
            if node.is_dir() {
                ListItem::new(format!("\u{25B8} {}", node.name))
                    .style(Style::new().fg(Color::Yellow))
            } else {
                ListItem::new(format!("  {}", node.name))
            }
        })
        .collect();

    let mut state = ListState::default();
    if !items.is_empty() {
        state.select(Some(navigator.selected_index()));
    }

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(BORDER_STYLE)
                .title(navigator.dos_path()),
        )
        .highlight_style(
            Style::new()
                .fg(Color::Black)
                .bg(Color::Gray)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_stateful_widget(list, area, &mut state);
}

/// Render shell output with the input line at the bottom.
pub fn render_console(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(BORDER_STYLE);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height == 0 {
        return;
    }
    let output_height = inner.height.saturating_sub(1);
    let output_area = Rect {
        height: output_height,
        ..inner
    };
    let input_area = Rect {
        y: inner.y + output_height,
        height: 1,
        ..inner
    };

    let lines: Vec<Line> = app
        .shell()
        .output()
        .visible_lines(output_height as usize)
        .into_iter()
        .map(Line::raw)
        .collect();
    frame.render_widget(Paragraph::new(lines), output_area);

    let prompt = format!("{} ", app.shell().prompt());
    let input_line = Line::from(vec![
        Span::styled(prompt.clone(), Style::new().fg(Color::Gray)),
        Span::raw(app.input()),
    ]);
    frame.render_widget(Paragraph::new(input_line), input_area);

    if app.viewer().is_none() && !app.shell().pending().is_pending() {
        let width = (prompt.chars().count() + app.input().chars().count()) as u16;
        let x = input_area
            .x
            .saturating_add(width)
            .min(input_area.x + input_area.width.saturating_sub(1));
        frame.set_cursor_position((x, input_area.y));
    }
}

/// Render the viewer modal over most of `area`.
pub fn render_viewer(frame: &mut Frame, viewer: &Viewer, area: Rect) {
    let modal = centered_rect(90, 90, area);
    frame.render_widget(Clear, modal);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(BORDER_STYLE)
        .title(format!(" {} ", viewer.title))
        .title_bottom(" Esc to close ");
    let inner = block.inner(modal);
    frame.render_widget(block, modal);

    let scroll = (viewer.scroll, 0);
    match &viewer.body {
        ViewerBody::Loading { .. } => {
            frame.render_widget(Paragraph::new("Loading..."), inner);
        }
        ViewerBody::Text(content) => {
            let paragraph = Paragraph::new(content.as_str())
                .wrap(Wrap { trim: false })
                .scroll(scroll);
            frame.render_widget(paragraph, inner);
        }
        ViewerBody::Ascii(art) => {
            frame.render_widget(Paragraph::new(art.as_str()).scroll(scroll), inner);
        }
        ViewerBody::Raw(image) => {
            frame.render_widget(Paragraph::new(half_block_lines(image)).scroll(scroll), inner);
        }
        ViewerBody::About(panel) => render_about(frame, panel, viewer.scroll, inner),
    }
}

fn render_about(frame: &mut Frame, panel: &AboutPanel, scroll: u16, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    frame.render_widget(
        Paragraph::new(panel.art.as_str()).scroll((scroll, 0)),
        columns[0],
    );

    let text = format!("{}\n\n{}", panel.about, panel.contacts);
    frame.render_widget(
        Paragraph::new(text)
            .wrap(Wrap { trim: false })
            .scroll((scroll, 0)),
        columns[1],
    );
}

/// Render the yes/no prompt as a small centered box.
pub fn render_confirm(frame: &mut Frame, message: &str, area: Rect) {
    let text_width = message.lines().map(|l| l.chars().count()).max().unwrap_or(0) as u16;
    let text_height = message.lines().count() as u16;
    let width = text_width.saturating_add(4).min(area.width);
    let height = text_height.saturating_add(2).min(area.height);
    let rect = Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    };

    frame.render_widget(Clear, rect);
    let paragraph = Paragraph::new(message).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::new().fg(Color::Yellow))
            .title(" Confirm "),
    );
    frame.render_widget(paragraph, rect);
}

/// Render the status bar on the last row of `area`.
pub fn render_status_bar(frame: &mut Frame, status_bar: &StatusBar, app: &App, area: Rect) {
    let status_area = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };
    let status_text = status_bar.format(app.shell(), app.is_loading());
    let status_paragraph =
        Paragraph::new(status_text).style(Style::default().fg(Color::Black).bg(Color::White));
    frame.render_widget(status_paragraph, status_area);
}

/// One styled line per cell row: foreground paints the top sample,
/// background the bottom one.
pub fn half_block_lines(image: &HalfBlockImage) -> Vec<Line<'static>> {
    image
        .rows()
        .map(|row| {
            let spans: Vec<Span<'static>> = row
                .iter()
                .map(|cell| {
                    Span::styled(
                        HALF_BLOCK.to_string(),
                        Style::new()
                            .fg(Color::Rgb(cell.top.r, cell.top.g, cell.top.b))
                            .bg(Color::Rgb(cell.bottom.r, cell.bottom.g, cell.bottom.b)),
                    )
                })
                .collect();
            Line::from(spans)
        })
        .collect()
}

/// A rect of `percent_x` x `percent_y` of `area`, centered.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let width = (area.width as u32 * percent_x.min(100) as u32 / 100) as u16;
    let height = (area.height as u32 * percent_y.min(100) as u32 / 100) as u16;
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
