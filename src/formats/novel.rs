//! Heading patterns common to web and print novels distributed as `.txt`.
//!
//! All shapes are compiled into one `RegexSet` so each line is scanned once; the set index
//! maps back to a `HeadingKind`. Patterns are anchored to the start of the trimmed line and
//! case-sensitive.

use crate::formats::{Format, HeadingKind};
use once_cell::sync::Lazy;
use regex::RegexSet;

/// Heading patterns paired with the kind each one reports, in priority order.
const PATTERNS: [(HeadingKind, &str); 7] = [
    (
        HeadingKind::NumberedTitled,
        r"^第[零一二三四五六七八九十百千万0-9]+[章回][\s:：].+",
    ),
    (
        HeadingKind::Numbered,
        r"^第[零一二三四五六七八九十百千万0-9]+[章回]\s*$",
    ),
    (HeadingKind::Latin, r"^Chapter\s+\d+.*"),
    (HeadingKind::Listed, r"^[0-9]+[.、]\s*.+"),
    (HeadingKind::Bracketed, r"^【.+】\s*$"),
    (HeadingKind::EqualsBanner, r"^====.+====\s*$"),
    (HeadingKind::DashBanner, r"^----.+----\s*$"),
];

// Compiled once; the patterns are constants so failure is a programming error.
static HEADINGS: Lazy<RegexSet> = Lazy::new(|| {
    RegexSet::new(PATTERNS.iter().map(|(_, pattern)| *pattern))
        .expect("Invalid chapter heading pattern")
});

/// Fixed heading shapes for Chinese and English novels.
pub struct NovelFormat;

impl Format for NovelFormat {
    fn heading_kind(&self, line: &str) -> Option<HeadingKind> {
        HEADINGS
            .matches(line)
            .iter()
            .next()
            .map(|index| PATTERNS[index].0)
    }
}

#[cfg(test)]
#[path = "../tests/novel.rs"]
mod tests;
