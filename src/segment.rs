//! Chapter segmentation of decoded text.
//!
//! Lines are split on `\r\n`, `\r` or `\n` and tested one at a time against a [`Format`]. Each
//! line advances the running offsets by its own length plus the terminator that actually ended
//! it, so offsets stay exact whatever line-ending convention (or mix of them) the file uses.
//! Chapter ranges always partition the text: text before the first heading belongs to the
//! first chapter, and a text with no headings becomes a single chapter.

use crate::chapter::Chapter;
use crate::formats::{Format, HeadingKind};
use std::iter;

/// Title given to the single chapter of a document without headings.
pub const FULL_TEXT_TITLE: &str = "全文";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// One line of text without its terminator.
pub struct Line<'a> {
    /// Line content, terminator excluded.
    pub text: &'a str,
    /// Length of the terminator that ended the line: 2 for `\r\n`, 1 for `\r` or `\n`, 0 at the
    /// end of the text. Terminators are ASCII, so this is both a byte and a character count.
    pub terminator_len: usize,
}

/// Iterator over the lines of a text, see [`lines`].
pub struct Lines<'a> {
    rest: Option<&'a str>,
}

impl<'a> Iterator for Lines<'a> {
    type Item = Line<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = self.rest?;
        let Some(at) = rest.find(['\r', '\n']) else {
            self.rest = None;
            return Some(Line {
                text: rest,
                terminator_len: 0,
            });
        };
        let terminator_len = if rest[at..].starts_with("\r\n") { 2 } else { 1 };
        self.rest = Some(&rest[at + terminator_len..]);
        Some(Line {
            text: &rest[..at],
            terminator_len,
        })
    }
}

#[must_use]
/// Split `text` on any of `\r\n`, `\r` and `\n`.
///
/// A trailing terminator yields a final empty line, and an empty text yields one empty line.
pub fn lines(text: &str) -> Lines<'_> {
    Lines { rest: Some(text) }
}

#[must_use]
/// Split `text` into chapters at every line `format` recognises as a heading.
///
/// Whitespace-only lines never open a chapter. The result is never empty.
pub fn segment<F: Format + ?Sized>(text: &str, format: &F) -> Vec<Chapter> {
    let mut chapters = Vec::new();
    let mut position = 0;
    let mut byte_position = 0;
    let mut line_count = 0;

    for (line_number, line) in lines(text).enumerate() {
        let trimmed = line.text.trim();
        if !trimmed.is_empty() {
            if let Some(kind) = format.heading_kind(trimmed) {
                chapters.push(Chapter {
                    title: trimmed.to_string(),
                    kind,
                    start_offset: position,
                    end_offset: position,
                    byte_start: byte_position,
                    byte_end: byte_position,
                    line_number,
                });
            }
        }
        position += line.text.chars().count() + line.terminator_len;
        byte_position += line.text.len() + line.terminator_len;
        line_count = line_number + 1;
    }

    // After the walk `position` is the character length of the whole text.
    let char_len = position;

    if chapters.is_empty() {
        log::debug!("no headings in {line_count} lines, using a single chapter");
        return vec![Chapter {
            title: FULL_TEXT_TITLE.to_string(),
            kind: HeadingKind::FullText,
            start_offset: 0,
            end_offset: char_len,
            byte_start: 0,
            byte_end: text.len(),
            line_number: 0,
        }];
    }

    let ends: Vec<(usize, usize)> = chapters
        .iter()
        .skip(1)
        .map(|next| (next.start_offset, next.byte_start))
        .chain(iter::once((char_len, text.len())))
        .collect();
    for (chapter, (end_offset, byte_end)) in chapters.iter_mut().zip(ends) {
        chapter.end_offset = end_offset;
        chapter.byte_end = byte_end;
    }

    // Preamble before the first heading
    if let Some(first) = chapters.first_mut() {
        first.start_offset = 0;
        first.byte_start = 0;
    }

    log::debug!(
        "segmented {line_count} lines into {} chapters",
        chapters.len()
    );
    chapters
}

#[cfg(test)]
#[path = "tests/segment.rs"]
mod tests;
