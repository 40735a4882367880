//! novella: a chapter-aware terminal reader for plain-text novels.
//!
//! The library is the load pipeline (encoding detection, heading recognition, chapter
//! segmentation) plus the session state and rendering the binary drives. The pipeline is
//! synchronous and free of I/O past the initial read, so it can be used on its own:
//!
//! ```no_run
//! use novella::formats::novel::NovelFormat;
//! use novella::input::load_document;
//!
//! let doc = load_document("book.txt".as_ref(), &NovelFormat)?;
//! for (i, chapter) in doc.chapters.iter().enumerate() {
//!     println!("{} {}", chapter.title, doc.chapter_text(i).map_or(0, str::len));
//! }
//! # Ok::<(), novella::error::ReaderError>(())
//! ```
#![allow(clippy::multiple_crate_versions)]

pub mod app_state;
pub mod chapter;
pub mod config;
pub mod document;
pub mod encoding;
pub mod error;
pub mod formats;
pub mod input;
pub mod loader;
pub mod outline;
pub mod segment;
pub mod ui;
