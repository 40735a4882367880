//! Configuration to acknowledge reader preferences as well as set defaults.
//!
//! Specifically, we try to find a novella.toml, and if present we load settings from there.
//! This provides the reading size range, the chapter list width and file extension preferences.

use facet::Facet;
use std::fs;

/// Name of the configuration file looked up in the working directory.
pub const CONFIG_FILE: &str = "novella.toml";

#[derive(Facet, Clone, Debug, PartialEq)]
/// User preferences loaded from novella.toml or falling back to defaults.
pub struct Config {
    #[facet(default = 16)]
    /// Reading size on startup.
    pub font_size: u16,
    #[facet(default = 8)]
    /// Smallest reading size.
    pub min_font_size: u16,
    #[facet(default = 48)]
    /// Largest reading size.
    pub max_font_size: u16,
    #[facet(default = 2)]
    /// Amount the reading size changes per keypress.
    pub font_step: u16,
    #[facet(default = 32)]
    /// Width of the chapter list column in cells.
    pub chapter_list_width: u16,
    #[facet(default = vec!["txt".to_string()])]
    /// File suffixes to match when scanning directories.
    pub file_extensions: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            font_size: 16,
            min_font_size: 8,
            max_font_size: 48,
            font_step: 2,
            chapter_list_width: 32,
            file_extensions: vec!["txt".to_string()],
        }
    }
}

impl Config {
    #[must_use]
    /// Load configuration from novella.toml if present.
    pub fn load() -> Self {
        fs::read_to_string(CONFIG_FILE)
            .ok()
            .map_or_else(Self::default, |contents| Self::parse(&contents))
    }

    #[must_use]
    /// Parse configuration text, using defaults for missing keys or unparsable input.
    pub fn parse(contents: &str) -> Self {
        match facet_toml::from_str::<Self>(contents) {
            Ok(config) => config.normalised(),
            Err(e) => {
                log::warn!("ignoring invalid {CONFIG_FILE}: {e}");
                Self::default()
            }
        }
    }

    /// Keep the reading size range ordered and the start size inside it.
    fn normalised(mut self) -> Self {
        if self.min_font_size > self.max_font_size {
            std::mem::swap(&mut self.min_font_size, &mut self.max_font_size);
        }
        self.min_font_size = self.min_font_size.max(1);
        self.max_font_size = self.max_font_size.max(self.min_font_size);
        self.font_size = self
            .font_size
            .clamp(self.min_font_size, self.max_font_size);
        self.font_step = self.font_step.max(1);
        self
    }
}

#[cfg(test)]
#[path = "tests/config.rs"]
mod tests;
