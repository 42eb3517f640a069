//! Process-wide diagnostic log collector.
//!
//! Created at process start, appended to by any component that can fail,
//! and flushed to a text artifact once at process end. Messages are not
//! durable before that flush. Appends are internally synchronized so that
//! concurrent workers may report without an append-owner thread.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::errors::GeonearResult;

/// An append-only, internally synchronized collection of diagnostic
/// messages.
///
/// Cheap to clone: clones share the same underlying record list.
#[derive(Debug, Clone, Default)]
pub struct DiagnosticLog {
    records: Arc<Mutex<Vec<String>>>,
}

impl DiagnosticLog {
    /// Creates an empty diagnostic log.
    pub fn new() -> DiagnosticLog {
        DiagnosticLog::default()
    }

    /// Appends one diagnostic message.
    pub fn append(&self, message: impl Into<String>) {
        let message = message.into();
        log::debug!("diagnostic: {}", message);
        self.records.lock().push(message);
    }

    /// Returns the number of recorded messages.
    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    /// Checks if no messages have been recorded.
    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }

    /// Returns a copy of all recorded messages.
    pub fn snapshot(&self) -> Vec<String> {
        self.records.lock().clone()
    }

    /// Writes all recorded messages, newline-joined, to `path`.
    ///
    /// Returns `Ok(false)` without touching the filesystem when no message
    /// has been recorded; `Ok(true)` once the artifact has been written.
    pub fn flush_to_file(&self, path: &Path) -> GeonearResult<bool> {
        let records = self.records.lock();
        if records.is_empty() {
            return Ok(false);
        }
        fs::write(path, records.join("\n"))?;
        Ok(true)
    }
}
