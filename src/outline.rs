//! The outline is the machine-readable view of a loaded document.
//!
//! This module defines what `--json` prints: the file, how it was decoded, and every chapter
//! with its coordinates, so the segmentation can be inspected or consumed by other tools
//! without starting the TUI.

use crate::document::Document;
use crate::encoding::TextEncoding;
use crate::formats::HeadingKind;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
/// Serialisable summary of one document and its chapters.
pub struct Outline {
    /// Path of the source file.
    pub file: String,
    /// Encoding the file was decoded with.
    pub encoding: TextEncoding,
    /// Size of the file on disk in bytes.
    pub size_bytes: u64,
    /// Length of the decoded text in characters.
    pub char_len: usize,
    /// Chapters in document order.
    pub chapters: Vec<OutlineEntry>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
/// Coordinates of a single chapter.
pub struct OutlineEntry {
    /// Zero-based position in the chapter list.
    pub index: usize,
    /// Trimmed heading text.
    pub title: String,
    /// Heading shape that opened the chapter.
    pub kind: HeadingKind,
    /// Zero-based line of the heading.
    pub line_number: usize,
    /// Character offset where the chapter begins.
    pub start_offset: usize,
    /// Character offset where the chapter ends (exclusive).
    pub end_offset: usize,
}

impl Outline {
    #[must_use]
    /// Summarise a loaded document.
    pub fn from_document(doc: &Document) -> Self {
        let chapters = doc
            .chapters
            .iter()
            .enumerate()
            .map(|(index, chapter)| OutlineEntry {
                index,
                title: chapter.title.clone(),
                kind: chapter.kind,
                line_number: chapter.line_number,
                start_offset: chapter.start_offset,
                end_offset: chapter.end_offset,
            })
            .collect();

        Self {
            file: doc.path.display().to_string(),
            encoding: doc.encoding,
            size_bytes: doc.size_bytes,
            char_len: doc.char_len(),
            chapters,
        }
    }

    /// Render as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialisation fails.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
#[path = "tests/outline.rs"]
mod tests;
