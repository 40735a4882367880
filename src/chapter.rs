//! Chapter representation for segmented plain-text documents.
//!
//! A chapter is a contiguous span of the decoded text that begins at a heading line. Spans are
//! tracked twice: as character offsets, which are what a reader counts, and as byte offsets,
//! which are what a `&str` can be sliced by.

use crate::formats::HeadingKind;
use std::ops::Range;

#[derive(Clone, Debug, PartialEq, Eq)]
/// Contiguous division of a document with precise coordinates for extraction.
pub struct Chapter {
    /// Heading line with surrounding whitespace removed.
    pub title: String,
    /// Heading shape that opened this chapter.
    pub kind: HeadingKind,
    /// Character offset where the chapter begins.
    ///
    /// This is the heading line's offset, except for the first chapter, which starts at 0 and
    /// so also holds any text before its heading. `line_number` always names the heading.
    pub start_offset: usize,
    /// Character offset where the next chapter begins or the text ends.
    pub end_offset: usize,
    /// Byte offset matching `start_offset`.
    pub byte_start: usize,
    /// Byte offset matching `end_offset`.
    pub byte_end: usize,
    /// Zero-based line of the heading in the source text.
    pub line_number: usize,
}

impl Chapter {
    #[must_use]
    /// Number of characters spanned by the chapter.
    pub fn char_len(&self) -> usize {
        self.end_offset - self.start_offset
    }

    #[must_use]
    /// Byte range for slicing the chapter out of the decoded text.
    pub fn byte_range(&self) -> Range<usize> {
        self.byte_start..self.byte_end
    }
}
