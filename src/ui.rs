//! The UI renders the session state into something visible and readable.
//!
//! The draw function dispatches based on the current view (file list or reader). The reader
//! shows the chapter list on the left and the selected chapter on the right, in a text column
//! whose width follows the reading size.

use crate::app_state::{AppState, View};
use crate::document::file_name;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

const READER_HELP: &str =
    "←/→: Chapter | ↑/↓: Scroll | Home/End: First/Last | +/-: Size | o: Open | q: Quit";
const FILE_LIST_HELP: &str = "↑/↓: Select | Enter: Open | q: Quit";

/// Renders the active view based on current session state.
pub fn draw(f: &mut Frame, app: &mut AppState) {
    match app.current_view {
        View::FileList => draw_file_list(f, app),
        View::Reader => draw_reader(f, app),
    }
}

fn split_status(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(4)])
        .split(area);
    (chunks[0], chunks[1])
}

fn draw_file_list(f: &mut Frame, app: &AppState) {
    let (body, status) = split_status(f.area());

    let items: Vec<ListItem> = app
        .files
        .iter()
        .map(|path| {
            let name = file_name(path);
            let style = if app.loading.as_ref() == Some(path) {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default().fg(Color::Blue)
            };
            ListItem::new(Line::from(Span::styled(format!("📄 {name}"), style)))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("Files ({})", app.files.len())),
        )
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));
    let mut state = ListState::default().with_selected(Some(app.current_file_index));
    f.render_stateful_widget(list, body, &mut state);

    draw_status(f, app, status, FILE_LIST_HELP);
}

fn draw_reader(f: &mut Frame, app: &mut AppState) {
    let (body, status) = split_status(f.area());

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(app.config.chapter_list_width),
            Constraint::Min(0),
        ])
        .split(body);

    draw_chapter_list(f, app, columns[0]);
    draw_text(f, app, columns[1]);
    draw_status(f, app, status, READER_HELP);
}

fn draw_chapter_list(f: &mut Frame, app: &AppState, area: Rect) {
    let items: Vec<ListItem> = app
        .document
        .iter()
        .flat_map(|doc| doc.chapters.iter())
        .map(|chapter| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{} ", chapter.kind.label()),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::raw(chapter.title.clone()),
            ]))
        })
        .collect();

    let title = format!("Chapters ({})", app.chapter_count());
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED),
        );
    let selected = app.document.as_ref().map(|_| app.current_chapter_index);
    let mut state = ListState::default().with_selected(selected);
    f.render_stateful_widget(list, area, &mut state);
}

fn draw_text(f: &mut Frame, app: &mut AppState, area: Rect) {
    let title = app
        .current_chapter()
        .map_or_else(|| "No document".to_string(), |c| c.title.clone());
    let block = Block::default().borders(Borders::ALL).title(title);
    let inner = block.inner(area);
    f.render_widget(block, area);

    if app.current_chapter_text().is_none() {
        let hint = if app.loading.is_some() {
            "Loading..."
        } else {
            "Nothing loaded. Press 'o' to choose a file."
        };
        f.render_widget(
            Paragraph::new(hint).style(Style::default().fg(Color::DarkGray)),
            inner,
        );
        return;
    }

    // Centre the text column inside the pane.
    let width = app.reading_width(inner.width);
    let column = Rect {
        x: inner.x + (inner.width - width) / 2,
        width,
        ..inner
    };

    // A resize or a larger reading size can leave the scroll past the end.
    app.viewport = Some((column.width, column.height));
    app.scroll = app.scroll.min(app.max_scroll());

    let Some(text) = app.current_chapter_text() else {
        return;
    };
    let paragraph = Paragraph::new(text)
        .wrap(Wrap { trim: false })
        .scroll((app.scroll, 0));
    f.render_widget(paragraph, column);
}

/// Screen rows `text` occupies when wrapped to `width` cells.
pub(crate) fn wrapped_rows(text: &str, width: u16) -> usize {
    Paragraph::new(text)
        .wrap(Wrap { trim: false })
        .line_count(width)
}

fn draw_status(f: &mut Frame, app: &AppState, area: Rect, help: &str) {
    let mut parts = Vec::new();
    if let Some(label) = app.file_label() {
        parts.push(label);
    }
    if let Some(position) = app.chapter_status() {
        parts.push(position);
    }
    if let Some(doc) = &app.document {
        parts.push(doc.encoding.to_string());
    }
    parts.push(format!("Size {}", app.font_size));
    if let Some(message) = &app.message {
        parts.push(message.clone());
    }

    let lines = vec![
        Line::from(parts.join(" | ")),
        Line::from(Span::styled(help, Style::default().fg(Color::DarkGray))),
    ];
    let status = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(app.title()),
    );
    f.render_widget(status, area);
}

#[cfg(test)]
#[path = "tests/ui.rs"]
mod tests;
