// LiveLog - core/buffer.rs
//
// The append-only line buffer behind the viewer.
//
// Ordering contract: insertion order equals arrival order, and the view
// renders exactly one row per element in that order. Lines are never
// removed, reordered, or mutated in place; the buffer lives and dies with
// the viewer instance and is never persisted.

use crate::core::model::LogLine;
use chrono::Utc;

/// Ordered, append-only sequence of log lines.
#[derive(Debug, Default)]
pub struct LogBuffer {
    lines: Vec<LogLine>,
}

impl LogBuffer {
    /// Create an empty buffer.
    pub fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Append `text` as the new last line, stamping it with the current
    /// arrival time.
    ///
    /// An empty incoming value is a silent no-op. There is no
    /// deduplication: the same text delivered in two separate update
    /// cycles appends twice.
    ///
    /// Returns `true` if a line was appended, so the caller can raise the
    /// scroll-to-bottom request only on real mutations.
    pub fn push(&mut self, text: &str) -> bool {
        if text.is_empty() {
            return false;
        }
        self.lines.push(LogLine {
            text: text.to_owned(),
            received_at: Utc::now(),
        });
        true
    }

    /// Number of accumulated lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// `true` when no line has been appended yet.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Iterate the lines in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &LogLine> {
        self.lines.iter()
    }

    /// The most recently appended line, if any.
    pub fn last(&self) -> Option<&LogLine> {
        self.lines.last()
    }
}
