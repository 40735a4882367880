use super::{format_file_size, AppState, FileMode, View, BASE_FONT_SIZE, MIN_READING_WIDTH};
use crate::config::Config;
use crate::document::Document;
use crate::encoding::TextEncoding;
use crate::error::ReaderError;
use crate::formats::novel::NovelFormat;
use crate::segment::segment;
use std::io;
use std::path::PathBuf;
use std::time::Duration;

fn document(name: &str, text: &str) -> Document {
    Document {
        path: PathBuf::from(name),
        text: text.to_string(),
        encoding: TextEncoding::Utf8,
        chapters: segment(text, &NovelFormat),
        size_bytes: text.len() as u64,
        load_time: Duration::from_millis(7),
    }
}

fn reader_with(text: &str) -> AppState {
    let mut app = AppState::new(vec![PathBuf::from("book.txt")], Config::default());
    app.apply_load(Ok(document("book.txt", text)));
    app
}

#[test]
fn test_file_mode_follows_file_count() {
    let single = AppState::new(vec![PathBuf::from("a.txt")], Config::default());
    assert_eq!(single.file_mode, FileMode::Single);
    assert_eq!(single.current_view, View::Reader);

    let multi = AppState::new(
        vec![PathBuf::from("a.txt"), PathBuf::from("b.txt")],
        Config::default(),
    );
    assert_eq!(multi.file_mode, FileMode::Multi);
    assert_eq!(multi.current_view, View::FileList);
}

#[test]
fn test_file_selection_is_bounded() {
    let mut app = AppState::new(
        vec![PathBuf::from("a.txt"), PathBuf::from("b.txt")],
        Config::default(),
    );

    app.select_prev_file();
    assert_eq!(app.current_file_index, 0);
    app.select_next_file();
    app.select_next_file();
    assert_eq!(app.selected_file(), Some(&PathBuf::from("b.txt")));
}

#[test]
fn test_successful_load_resets_position() {
    let mut app = reader_with("Chapter 1\na\nChapter 2\nb");
    app.next_chapter();
    app.scroll = 1;

    app.begin_load(PathBuf::from("other.txt"));
    assert!(app.loading.is_some());
    app.apply_load(Ok(document("other.txt", "第一章 甲\n乙\n第二章 丙\n丁\n第三章 戊")));

    assert!(app.loading.is_none());
    assert_eq!(app.current_chapter_index, 0);
    assert_eq!(app.scroll, 0);
    assert_eq!(app.chapter_count(), 3);
    assert_eq!(app.current_view, View::Reader);
    assert_eq!(app.message.as_deref(), Some("Loaded in 7 ms"));
}

#[test]
fn test_failed_load_keeps_previous_document() {
    let mut app = reader_with("Chapter 1\na\nChapter 2\nb");
    app.next_chapter();

    app.begin_load(PathBuf::from("missing.txt"));
    app.apply_load(Err(ReaderError::Io {
        path: PathBuf::from("missing.txt"),
        source: io::Error::new(io::ErrorKind::NotFound, "not found"),
    }));

    assert!(app.loading.is_none());
    assert_eq!(app.current_chapter_index, 1);
    assert_eq!(app.current_chapter().unwrap().title, "Chapter 2");
    assert!(app
        .message
        .as_deref()
        .unwrap()
        .starts_with("Failed to load file: failed to read missing.txt"));
}

#[test]
fn test_chapter_navigation_stops_at_ends() {
    let mut app = reader_with("Chapter 1\na\nChapter 2\nb\nChapter 3\nc");

    assert!(!app.prev_chapter());
    assert!(app.next_chapter());
    assert!(app.next_chapter());
    assert!(!app.next_chapter());
    assert_eq!(app.chapter_status().as_deref(), Some("Chapter 3/3"));
    assert_eq!(app.current_chapter_text(), Some("Chapter 3\nc"));

    assert!(app.first_chapter());
    assert_eq!(app.current_chapter_index, 0);
    assert!(app.last_chapter());
    assert_eq!(app.current_chapter_index, 2);
    assert!(!app.select_chapter(3));
}

#[test]
fn test_chapter_change_resets_scroll() {
    let mut app = reader_with("Chapter 1\na\nb\nc\nChapter 2\nd");

    app.scroll_down(2);
    assert_eq!(app.scroll, 2);
    app.next_chapter();

    assert_eq!(app.scroll, 0);
}

#[test]
fn test_scroll_is_bounded_by_wrapped_rows() {
    let text = format!("Chapter 1\n{}", "a".repeat(25));
    let mut app = reader_with(&text);
    app.viewport = Some((10, 2));

    // One row for the heading and three for the wrapped paragraph
    app.scroll_down(100);
    assert_eq!(app.scroll, 2);
    app.scroll_up(1);
    assert_eq!(app.scroll, 1);
    app.scroll_up(100);
    assert_eq!(app.scroll, 0);
}

#[test]
fn test_scroll_saturates_before_first_draw() {
    let mut app = reader_with("Chapter 1\na");

    app.scroll_down(u16::MAX);
    app.scroll_down(1);

    assert_eq!(app.scroll, u16::MAX);
}

#[test]
fn test_navigation_without_document() {
    let mut app = AppState::new(vec![PathBuf::from("a.txt")], Config::default());

    assert!(!app.next_chapter());
    assert!(!app.last_chapter());
    assert!(app.current_chapter().is_none());
    assert!(app.chapter_status().is_none());
    assert_eq!(app.title(), "novella");
}

#[test]
fn test_font_size_is_clamped() {
    let mut app = reader_with("text");
    assert_eq!(app.font_size, 16);

    assert!(app.increase_font());
    assert_eq!(app.font_size, 18);
    for _ in 0..30 {
        app.increase_font();
    }
    assert_eq!(app.font_size, 48);
    assert!(!app.increase_font());

    for _ in 0..30 {
        app.decrease_font();
    }
    assert_eq!(app.font_size, 8);
    assert!(!app.decrease_font());
}

#[test]
fn test_reading_width_scales_with_font_size() {
    let mut app = reader_with("text");

    assert_eq!(app.font_size, BASE_FONT_SIZE);
    assert_eq!(app.reading_width(80), 80);

    app.font_size = 32;
    assert_eq!(app.reading_width(80), 40);

    app.font_size = 48;
    assert_eq!(app.reading_width(40), MIN_READING_WIDTH);

    app.font_size = 8;
    assert_eq!(app.reading_width(80), 80, "never wider than the pane");
    assert_eq!(app.reading_width(10), 10, "never wider than a tiny pane");
}

#[test]
fn test_labels() {
    let app = reader_with("Chapter 1\nfoo");

    assert_eq!(app.title(), "novella - book.txt");
    assert_eq!(app.file_label().as_deref(), Some("book.txt (13 B)"));
}

#[test]
fn test_format_file_size() {
    assert_eq!(format_file_size(0), "0 B");
    assert_eq!(format_file_size(512), "512 B");
    assert_eq!(format_file_size(1024), "1 KB");
    assert_eq!(format_file_size(1536), "1.5 KB");
    assert_eq!(format_file_size(5 * 1024 * 1024 + 1024 * 1024 / 4), "5.25 MB");
    assert_eq!(format_file_size(3 * 1024 * 1024 * 1024), "3 GB");
    assert_eq!(format_file_size(2048 * 1024 * 1024 * 1024), "2048 GB");
}
