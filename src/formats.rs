//! Format trait and heading shapes for plain-text documents.
//!
//! This module defines the `Format` trait which abstracts over how a document marks its
//! chapter headings. A format answers one question per line: is this a heading, and of which
//! shape? The segmenter does the rest.

pub mod novel;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// The shape of heading that opened a chapter.
pub enum HeadingKind {
    /// `第十二章 标题`: numbered chapter or episode with a title after a separator.
    NumberedTitled,
    /// `第十二回`: numbered chapter or episode alone on its line.
    Numbered,
    /// `Chapter 12 ...`
    Latin,
    /// `12. 标题` or `12、标题`
    Listed,
    /// `【标题】`
    Bracketed,
    /// `==== 标题 ====`
    EqualsBanner,
    /// `---- 标题 ----`
    DashBanner,
    /// Synthetic chapter covering a document with no headings.
    FullText,
}

impl HeadingKind {
    #[must_use]
    /// Short label shown beside chapter titles.
    pub fn label(self) -> &'static str {
        match self {
            Self::NumberedTitled | Self::Numbered => "第",
            Self::Latin => "Ch",
            Self::Listed => "#",
            Self::Bracketed => "【】",
            Self::EqualsBanner => "==",
            Self::DashBanner => "--",
            Self::FullText => "全",
        }
    }
}

/// Recognises chapter headings line by line.
pub trait Format {
    /// Classify an already-trimmed line, returning `None` if it is not a heading.
    fn heading_kind(&self, line: &str) -> Option<HeadingKind>;
}
