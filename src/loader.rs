//! Loading documents off the UI thread.
//!
//! Each request runs the whole pipeline on its own worker thread and reports back over a
//! channel of its own, tagged with the id it was issued under. Only the most recent request
//! matters: a newer request replaces the channel, so opening a second file while the first is
//! still decoding can never display the first one late. A worker that dies without reporting
//! closes its channel, which ends the request with no outcome.

use crate::document::Document;
use crate::error::Result;
use crate::formats::Format;
use crate::input::load_document;
use std::path::PathBuf;
use std::sync::mpsc::{self, TryRecvError};
use std::sync::Arc;
use std::thread;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
/// Identifies one load request; later requests have larger ids.
pub struct LoadId(u64);

/// A finished load, successful or not.
pub struct LoadOutcome {
    /// Request this outcome answers.
    pub id: LoadId,
    /// File that was requested.
    pub path: PathBuf,
    /// The loaded document, or why it could not be read.
    pub result: Result<Document>,
}

/// Runs loads on worker threads and keeps only the latest result.
pub struct Loader<F> {
    format: Arc<F>,
    rx: Option<mpsc::Receiver<LoadOutcome>>,
    next_id: u64,
    latest: Option<LoadId>,
}

impl<F: Format + Send + Sync + 'static> Loader<F> {
    #[must_use]
    /// Create a loader that segments with `format`.
    pub fn new(format: F) -> Self {
        Self {
            format: Arc::new(format),
            rx: None,
            next_id: 0,
            latest: None,
        }
    }

    /// Start loading `path`, superseding any request still in flight.
    pub fn request(&mut self, path: PathBuf) -> LoadId {
        let id = LoadId(self.next_id);
        self.next_id += 1;
        self.latest = Some(id);

        let format = Arc::clone(&self.format);
        let (tx, rx) = mpsc::channel();
        self.rx = Some(rx);
        let job = move || {
            let result = load_document(&path, format.as_ref());
            // Fails only once a newer request has dropped this receiver.
            let _ = tx.send(LoadOutcome { id, path, result });
        };

        log::debug!("load {id:?} requested");
        if let Err(e) = thread::Builder::new()
            .name("novella-loader".to_string())
            .spawn(job.clone())
        {
            log::warn!("could not spawn loader thread ({e}), loading inline");
            job();
        }
        id
    }

    /// Collect the latest outcome if it has arrived.
    pub fn poll(&mut self) -> Option<LoadOutcome> {
        let rx = self.rx.as_ref()?;
        match rx.try_recv() {
            Ok(outcome) => self.accept(outcome),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                self.abandon();
                None
            }
        }
    }

    /// Block until the latest request finishes.
    ///
    /// Returns `None` if nothing is outstanding or the worker died before reporting.
    pub fn wait(&mut self) -> Option<LoadOutcome> {
        let rx = self.rx.as_ref()?;
        match rx.recv() {
            Ok(outcome) => self.accept(outcome),
            Err(_) => {
                self.abandon();
                None
            }
        }
    }

    #[must_use]
    /// Whether the latest request is still running.
    pub fn is_loading(&self) -> bool {
        self.rx.is_some()
    }

    fn accept(&mut self, outcome: LoadOutcome) -> Option<LoadOutcome> {
        self.rx = None;
        if Some(outcome.id) == self.latest {
            Some(outcome)
        } else {
            log::debug!("discarding superseded load {:?}", outcome.id);
            None
        }
    }

    fn abandon(&mut self) {
        if let Some(id) = self.latest {
            log::warn!("load {id:?} ended without a result");
        }
        self.rx = None;
    }
}

#[cfg(test)]
#[path = "tests/loader.rs"]
mod tests;
