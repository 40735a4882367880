//! Turning command-line paths into loaded documents.
//!
//! Paths may name files or directories. Files are taken as given, whatever their extension;
//! directories are walked recursively for files with a matching extension. Loading a document
//! is the whole pipeline in sequence: read, decode, segment.

use crate::document::Document;
use crate::encoding;
use crate::error::Result;
use crate::formats::Format;
use crate::segment::segment;
use std::path::{Path, PathBuf};
use std::time::Instant;
use std::{fs, io};

/// Expand `paths` into the text files to offer for reading.
///
/// An empty `paths` means the current directory. Results from each directory are sorted.
///
/// # Errors
///
/// Returns an error if a path does not exist or a directory cannot be listed.
pub fn find_documents(paths: Vec<PathBuf>, extensions: &[String]) -> io::Result<Vec<PathBuf>> {
    let paths = if paths.is_empty() {
        vec![PathBuf::from(".")]
    } else {
        paths
    };

    let mut documents = Vec::new();
    for path in paths {
        if path.is_dir() {
            let mut found = Vec::new();
            walk_dir(&path, extensions, &mut found)?;
            found.sort();
            documents.extend(found);
        } else if path.is_file() {
            documents.push(path);
        } else {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("no such file or directory: {}", path.display()),
            ));
        }
    }
    Ok(documents)
}

fn walk_dir(dir: &Path, extensions: &[String], found: &mut Vec<PathBuf>) -> io::Result<()> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            walk_dir(&path, extensions, found)?;
        } else if has_extension(&path, extensions) {
            found.push(path);
        }
    }
    Ok(())
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            extensions
                .iter()
                .any(|wanted| wanted.trim_start_matches('.').eq_ignore_ascii_case(ext))
        })
}

/// Read, decode and segment the file at `path`.
///
/// # Errors
///
/// Returns [`crate::error::ReaderError::Io`] if the file cannot be read. Decoding and
/// segmentation never fail.
pub fn load_document<F: Format + ?Sized>(path: &Path, format: &F) -> Result<Document> {
    let started = Instant::now();
    let decoded = encoding::read_file(path)?;
    let chapters = segment(&decoded.text, format);
    let load_time = started.elapsed();

    log::info!(
        "loaded {} ({} bytes, {}) with {} chapters in {load_time:?}",
        path.display(),
        decoded.byte_len,
        decoded.encoding,
        chapters.len(),
    );

    Ok(Document {
        path: path.to_path_buf(),
        text: decoded.text,
        encoding: decoded.encoding,
        chapters,
        size_bytes: decoded.byte_len as u64,
        load_time,
    })
}

#[cfg(test)]
#[path = "tests/input.rs"]
mod tests;
