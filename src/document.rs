//! A decoded, segmented document.
//!
//! The document owns the full text and its chapters; chapters borrow nothing, so a chapter is
//! resolved back to text through the document that produced it.

use crate::chapter::Chapter;
use crate::encoding::TextEncoding;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Full text of a loaded file with its chapter boundaries.
pub struct Document {
    /// File the text was read from.
    pub path: PathBuf,
    /// Decoded text, without any byte-order mark.
    pub text: String,
    /// Encoding the text was decoded with.
    pub encoding: TextEncoding,
    /// Ordered chapters partitioning `text`; never empty.
    pub chapters: Vec<Chapter>,
    /// Size of the file on disk in bytes.
    pub size_bytes: u64,
    /// Time spent reading, decoding and segmenting.
    pub load_time: Duration,
}

impl Document {
    #[must_use]
    /// Text of the chapter at `index`, heading included.
    pub fn chapter_text(&self, index: usize) -> Option<&str> {
        let chapter = self.chapters.get(index)?;
        self.text.get(chapter.byte_range())
    }

    #[must_use]
    /// Number of chapters.
    pub fn chapter_count(&self) -> usize {
        self.chapters.len()
    }

    #[must_use]
    /// Length of the text in characters.
    pub fn char_len(&self) -> usize {
        self.chapters.last().map_or(0, |last| last.end_offset)
    }

    #[must_use]
    /// File name for titles and status lines.
    pub fn file_name(&self) -> String {
        file_name(&self.path)
    }
}

/// Final path component, or the whole path if it has none.
pub(crate) fn file_name(path: &Path) -> String {
    path.file_name().map_or_else(
        || path.display().to_string(),
        |name| name.to_string_lossy().into_owned(),
    )
}
