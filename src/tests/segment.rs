use super::{lines, segment, Line, FULL_TEXT_TITLE};
use crate::chapter::Chapter;
use crate::formats::novel::NovelFormat;
use crate::formats::{Format, HeadingKind};

/// Treats every line as a heading, to exercise the blank-line guard.
struct EveryLine;

impl Format for EveryLine {
    fn heading_kind(&self, _line: &str) -> Option<HeadingKind> {
        Some(HeadingKind::Bracketed)
    }
}

fn slice<'a>(text: &'a str, chapter: &Chapter) -> &'a str {
    &text[chapter.byte_range()]
}

fn assert_partitions(text: &str, chapters: &[Chapter]) {
    assert!(!chapters.is_empty());
    assert_eq!(chapters[0].start_offset, 0);
    assert_eq!(chapters[0].byte_start, 0);
    for pair in chapters.windows(2) {
        assert_eq!(pair[0].end_offset, pair[1].start_offset);
        assert_eq!(pair[0].byte_end, pair[1].byte_start);
        assert!(pair[0].start_offset <= pair[1].start_offset);
    }
    let last = chapters.last().unwrap();
    assert_eq!(last.end_offset, text.chars().count());
    assert_eq!(last.byte_end, text.len());
    for chapter in chapters {
        assert_eq!(slice(text, chapter).chars().count(), chapter.char_len());
    }
}

#[test]
fn test_lines_split_on_every_convention() {
    let split: Vec<Line> = lines("a\r\nb\rc\nd").collect();

    let texts: Vec<&str> = split.iter().map(|line| line.text).collect();
    let terminators: Vec<usize> = split.iter().map(|line| line.terminator_len).collect();
    assert_eq!(texts, ["a", "b", "c", "d"]);
    assert_eq!(terminators, [2, 1, 1, 0]);
}

#[test]
fn test_lines_trailing_terminator_yields_empty_line() {
    let texts: Vec<&str> = lines("a\n").map(|line| line.text).collect();
    assert_eq!(texts, ["a", ""]);

    let texts: Vec<&str> = lines("").map(|line| line.text).collect();
    assert_eq!(texts, [""]);

    let texts: Vec<&str> = lines("\n\r\n").map(|line| line.text).collect();
    assert_eq!(texts, ["", "", ""]);
}

#[test]
fn test_chinese_chapters_slice_exactly() {
    let text = "第一章 开始\n内容A\n第二章 继续\n内容B";

    let chapters = segment(text, &NovelFormat);

    assert_eq!(chapters.len(), 2);
    assert_eq!(chapters[0].title, "第一章 开始");
    assert_eq!(chapters[1].title, "第二章 继续");
    assert_eq!(slice(text, &chapters[0]), "第一章 开始\n内容A\n");
    assert_eq!(slice(text, &chapters[1]), "第二章 继续\n内容B");
    assert_eq!(chapters[1].start_offset, 11);
    assert_eq!(chapters[1].end_offset, 21);
    assert_eq!(chapters[1].line_number, 2);
    assert_partitions(text, &chapters);
}

#[test]
fn test_latin_chapters() {
    let text = "Chapter 1\nfoo\nChapter 2\nbar";

    let chapters = segment(text, &NovelFormat);

    let titles: Vec<&str> = chapters.iter().map(|c| c.title.as_str()).collect();
    assert_eq!(titles, ["Chapter 1", "Chapter 2"]);
    assert!(chapters.iter().all(|c| c.kind == HeadingKind::Latin));
    assert_partitions(text, &chapters);
}

#[test]
fn test_crlf_offsets_are_exact() {
    let text = "第一章 开始\r\n内容A\r\n第二章 继续\r\n内容B\r\n";

    let chapters = segment(text, &NovelFormat);

    assert_eq!(chapters.len(), 2);
    assert_eq!(slice(text, &chapters[0]), "第一章 开始\r\n内容A\r\n");
    assert_eq!(slice(text, &chapters[1]), "第二章 继续\r\n内容B\r\n");
    assert_partitions(text, &chapters);
}

#[test]
fn test_mixed_line_endings() {
    let text = "Chapter 1\rone\r\nChapter 2\ntwo\rChapter 3";

    let chapters = segment(text, &NovelFormat);

    assert_eq!(chapters.len(), 3);
    assert_eq!(slice(text, &chapters[1]), "Chapter 2\ntwo\r");
    assert_eq!(slice(text, &chapters[2]), "Chapter 3");
    assert_partitions(text, &chapters);
}

#[test]
fn test_no_headings_yields_single_chapter() {
    let text = "just prose\nwith no headings\n";

    let chapters = segment(text, &NovelFormat);

    assert_eq!(chapters.len(), 1);
    assert_eq!(chapters[0].title, FULL_TEXT_TITLE);
    assert_eq!(chapters[0].kind, HeadingKind::FullText);
    assert_eq!(chapters[0].line_number, 0);
    assert_eq!(slice(text, &chapters[0]), text);
    assert_partitions(text, &chapters);
}

#[test]
fn test_empty_text_yields_single_empty_chapter() {
    let chapters = segment("", &NovelFormat);

    assert_eq!(chapters.len(), 1);
    assert_eq!(chapters[0].title, FULL_TEXT_TITLE);
    assert_eq!(chapters[0].start_offset, 0);
    assert_eq!(chapters[0].end_offset, 0);
}

#[test]
fn test_whitespace_only_lines_never_open_chapters() {
    let text = "first\n   \n\t\n\u{3000}\nsecond";

    let chapters = segment(text, &EveryLine);

    let titles: Vec<&str> = chapters.iter().map(|c| c.title.as_str()).collect();
    assert_eq!(titles, ["first", "second"]);
    assert_eq!(chapters[1].line_number, 4);
    assert_partitions(text, &chapters);
}

#[test]
fn test_titles_are_trimmed_and_offsets_start_at_line() {
    let text = "intro\n   【楔子】  \nbody";

    let chapters = segment(text, &NovelFormat);

    assert_eq!(chapters.len(), 1);
    assert_eq!(chapters[0].title, "【楔子】");
    assert_eq!(chapters[0].kind, HeadingKind::Bracketed);
    assert_eq!(chapters[0].line_number, 1);
}

#[test]
fn test_preamble_folds_into_first_chapter() {
    let text = "作者：某人\n\n第一章 开始\n正文";

    let chapters = segment(text, &NovelFormat);

    assert_eq!(chapters.len(), 1);
    assert_eq!(chapters[0].title, "第一章 开始");
    assert_eq!(chapters[0].line_number, 2);
    assert_eq!(slice(text, &chapters[0]), text);
    assert_partitions(text, &chapters);
}

#[test]
fn test_mixed_heading_shapes() {
    let text = "==== 序 ====\n引子\n第一回\n甲\n1. 附录\n乙\n---- 后记 ----\n丙";

    let chapters = segment(text, &NovelFormat);

    let kinds: Vec<HeadingKind> = chapters.iter().map(|c| c.kind).collect();
    assert_eq!(
        kinds,
        [
            HeadingKind::EqualsBanner,
            HeadingKind::Numbered,
            HeadingKind::Listed,
            HeadingKind::DashBanner,
        ]
    );
    assert_partitions(text, &chapters);
}

#[test]
fn test_segmentation_is_idempotent() {
    let text = "Chapter 1\r\nfoo\n\nChapter 2\rbar\n第三章 终\n完";

    let first = segment(text, &NovelFormat);
    let second = segment(text, &NovelFormat);

    assert_eq!(first, second);
}
