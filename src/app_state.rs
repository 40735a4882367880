//! The session state bridging loaded documents and the interactive reader.
//!
//! A TUI needs a single source of truth that can be interrogated and mutated as the user
//! navigates. The open document, the current chapter and the reading size all live here, so
//! rendering is a pure function of this struct and a failed load can leave the previous
//! document exactly as it was.

use crate::chapter::Chapter;
use crate::config::Config;
use crate::document::{file_name, Document};
use crate::error::Result;
use crate::ui::wrapped_rows;
use std::path::PathBuf;

/// Reading size at which the text column uses the full pane width.
pub const BASE_FONT_SIZE: u16 = 16;

/// Narrowest text column, in cells, that the reading size may shrink to.
pub const MIN_READING_WIDTH: u16 = 20;

#[derive(PartialEq, Debug)]
/// Determines navigation scope and quit behavior based on how many files were given.
pub enum FileMode {
    /// Single-file mode quits directly to shell.
    Single,
    /// Multi-file mode returns to file list before quitting.
    Multi,
}

#[derive(PartialEq, Debug)]
/// Determines which UI screen renders and how input is interpreted.
pub enum View {
    /// Displays available files to open.
    FileList,
    /// Shows the chapter list beside the current chapter's text.
    Reader,
}

/// Explicit view-model for one reading session.
pub struct AppState {
    /// File paths available for reading.
    pub files: Vec<PathBuf>,
    /// Selected file in the file list view.
    pub current_file_index: usize,
    /// Controls file list visibility and quit behaviour.
    pub file_mode: FileMode,
    /// Active UI screen determining input handling.
    pub current_view: View,
    /// The open document, replaced wholesale by each successful load.
    pub document: Option<Document>,
    /// Selected chapter in the open document.
    pub current_chapter_index: usize,
    /// Current reading size.
    pub font_size: u16,
    /// Vertical scroll of the text pane, in wrapped rows.
    pub scroll: u16,
    /// Width and height of the text column when it was last drawn.
    pub viewport: Option<(u16, u16)>,
    /// Status feedback displayed in the status bar.
    pub message: Option<String>,
    /// File currently being loaded, if any.
    pub loading: Option<PathBuf>,
    /// Preferences the session was started with.
    pub config: Config,
}

impl AppState {
    #[must_use]
    /// Initialises session state and determines file mode.
    ///
    /// Single-file sessions open straight into the reader, while multi-file sessions start at
    /// the file selector and return to it on 'q'.
    pub fn new(files: Vec<PathBuf>, config: Config) -> Self {
        let (file_mode, current_view) = if files.len() == 1 {
            (FileMode::Single, View::Reader)
        } else {
            (FileMode::Multi, View::FileList)
        };

        Self {
            files,
            current_file_index: 0,
            file_mode,
            current_view,
            document: None,
            current_chapter_index: 0,
            font_size: config.font_size,
            scroll: 0,
            viewport: None,
            message: None,
            loading: None,
            config,
        }
    }

    // --- Loading ---

    #[must_use]
    /// The file highlighted in the file list.
    pub fn selected_file(&self) -> Option<&PathBuf> {
        self.files.get(self.current_file_index)
    }

    /// Moves the file list selection down one entry.
    pub fn select_next_file(&mut self) {
        if self.current_file_index + 1 < self.files.len() {
            self.current_file_index += 1;
        }
    }

    /// Moves the file list selection up one entry.
    pub fn select_prev_file(&mut self) {
        self.current_file_index = self.current_file_index.saturating_sub(1);
    }

    /// Records that `path` is being loaded.
    pub fn begin_load(&mut self, path: PathBuf) {
        self.message = Some(format!("Loading {}...", file_name(&path)));
        self.loading = Some(path);
    }

    /// Installs the result of a load.
    ///
    /// A new document resets the chapter and scroll position and switches to the reader. A
    /// failure only sets the status message; the previous document, if any, stays open.
    pub fn apply_load(&mut self, result: Result<Document>) {
        self.loading = None;
        match result {
            Ok(doc) => {
                self.message = Some(format!("Loaded in {} ms", doc.load_time.as_millis()));
                self.document = Some(doc);
                self.current_chapter_index = 0;
                self.scroll = 0;
                self.current_view = View::Reader;
            }
            Err(e) => {
                log::error!("{e}");
                self.message = Some(format!("Failed to load file: {e}"));
            }
        }
    }

    // --- Chapter navigation ---

    #[must_use]
    /// Number of chapters in the open document.
    pub fn chapter_count(&self) -> usize {
        self.document.as_ref().map_or(0, Document::chapter_count)
    }

    #[must_use]
    /// The selected chapter.
    pub fn current_chapter(&self) -> Option<&Chapter> {
        self.document
            .as_ref()?
            .chapters
            .get(self.current_chapter_index)
    }

    #[must_use]
    /// Text of the selected chapter, heading included.
    pub fn current_chapter_text(&self) -> Option<&str> {
        self.document
            .as_ref()?
            .chapter_text(self.current_chapter_index)
    }

    /// Selects chapter `index`, resetting the scroll; returns whether the selection changed.
    pub fn select_chapter(&mut self, index: usize) -> bool {
        if index >= self.chapter_count() || index == self.current_chapter_index {
            return false;
        }
        self.current_chapter_index = index;
        self.scroll = 0;
        true
    }

    /// Advances to the following chapter, stopping at the last.
    pub fn next_chapter(&mut self) -> bool {
        self.select_chapter(self.current_chapter_index + 1)
    }

    /// Returns to the preceding chapter, stopping at the first.
    pub fn prev_chapter(&mut self) -> bool {
        match self.current_chapter_index.checked_sub(1) {
            Some(prev) => self.select_chapter(prev),
            None => false,
        }
    }

    /// Jumps to the first chapter.
    pub fn first_chapter(&mut self) -> bool {
        self.select_chapter(0)
    }

    /// Jumps to the last chapter.
    pub fn last_chapter(&mut self) -> bool {
        match self.chapter_count().checked_sub(1) {
            Some(last) => self.select_chapter(last),
            None => false,
        }
    }

    #[must_use]
    /// Position text such as `Chapter 3/12`.
    pub fn chapter_status(&self) -> Option<String> {
        self.document.as_ref().map(|doc| {
            format!(
                "Chapter {}/{}",
                self.current_chapter_index + 1,
                doc.chapter_count()
            )
        })
    }

    // --- Scrolling ---

    /// Scrolls the text pane down, stopping once the chapter's end is in view.
    pub fn scroll_down(&mut self, amount: u16) {
        self.scroll = self.scroll.saturating_add(amount).min(self.max_scroll());
    }

    #[must_use]
    /// Furthest scroll at which the text column is still full.
    ///
    /// Counts rows as wrapped at the last drawn column width; before the first draw only
    /// saturation applies.
    pub fn max_scroll(&self) -> u16 {
        let Some(text) = self.current_chapter_text() else {
            return 0;
        };
        let Some((width, height)) = self.viewport else {
            return u16::MAX;
        };
        let rows = u16::try_from(wrapped_rows(text, width)).unwrap_or(u16::MAX);
        rows.saturating_sub(height)
    }

    /// Scrolls the text pane up.
    pub fn scroll_up(&mut self, amount: u16) {
        self.scroll = self.scroll.saturating_sub(amount);
    }

    // --- Reading size ---

    /// Enlarges the reading size by one step; returns whether it changed.
    pub fn increase_font(&mut self) -> bool {
        let next = self
            .font_size
            .saturating_add(self.config.font_step)
            .min(self.config.max_font_size);
        self.set_font_size(next)
    }

    /// Shrinks the reading size by one step; returns whether it changed.
    pub fn decrease_font(&mut self) -> bool {
        let next = self
            .font_size
            .saturating_sub(self.config.font_step)
            .max(self.config.min_font_size);
        self.set_font_size(next)
    }

    fn set_font_size(&mut self, size: u16) -> bool {
        if size == self.font_size {
            return false;
        }
        self.font_size = size;
        true
    }

    #[must_use]
    /// Width of the text column for a pane `area_width` cells wide.
    ///
    /// The column narrows as the reading size grows, from the whole pane at
    /// [`BASE_FONT_SIZE`] down to [`MIN_READING_WIDTH`].
    pub fn reading_width(&self, area_width: u16) -> u16 {
        let scaled = u32::from(area_width) * u32::from(BASE_FONT_SIZE)
            / u32::from(self.font_size.max(1));
        let scaled = u16::try_from(scaled).unwrap_or(u16::MAX);
        scaled.clamp(MIN_READING_WIDTH.min(area_width), area_width)
    }

    // --- Labels ---

    #[must_use]
    /// File name and size, e.g. `book.txt (1.5 MB)`.
    pub fn file_label(&self) -> Option<String> {
        self.document.as_ref().map(|doc| {
            format!(
                "{} ({})",
                doc.file_name(),
                format_file_size(doc.size_bytes)
            )
        })
    }

    #[must_use]
    /// Window title naming the open file.
    pub fn title(&self) -> String {
        match &self.document {
            Some(doc) => format!("novella - {}", doc.file_name()),
            None => "novella".to_string(),
        }
    }
}

#[must_use]
#[allow(clippy::cast_precision_loss)]
/// Human-readable size in B, KB, MB or GB with at most two decimals.
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];
    let mut len = bytes as f64;
    let mut unit = 0;
    while len >= 1024.0 && unit < UNITS.len() - 1 {
        len /= 1024.0;
        unit += 1;
    }
    let number = format!("{len:.2}");
    let number = number.trim_end_matches('0').trim_end_matches('.');
    format!("{number} {}", UNITS[unit])
}

#[cfg(test)]
#[path = "tests/app_state.rs"]
mod tests;
