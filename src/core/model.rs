// LiveLog - core/model.rs
//
// Core data model types. Pure data definitions with no I/O and no UI
// dependencies; the shared vocabulary between the feed, the state, and
// the view.

use chrono::{DateTime, Utc};

// =============================================================================
// Log line
// =============================================================================

/// One accumulated log line.
///
/// The text is opaque: it is never parsed, trimmed, or rewritten. The
/// arrival timestamp is display metadata recorded when the line was
/// appended, not extracted from the text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLine {
    /// The line exactly as delivered (without its trailing newline).
    pub text: String,

    /// Instant the line was appended to the buffer, in UTC.
    pub received_at: DateTime<Utc>,
}

// =============================================================================
// Feed messages
// =============================================================================

/// Where incoming lines originate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedSource {
    /// Lines piped into the process on standard input.
    Stdin,
    /// Synthetic lines generated for demonstration.
    Demo,
}

impl FeedSource {
    /// Human-readable label for status messages.
    pub fn label(self) -> &'static str {
        match self {
            Self::Stdin => "stdin",
            Self::Demo => "demo",
        }
    }
}

/// Progress messages streamed from the background feed thread to the UI.
///
/// The UI drains these once per frame; each `Line` is one update cycle for
/// the viewer and is applied fully (append, then scroll request) before
/// the next message is handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedProgress {
    /// The feed thread has started delivering lines.
    Started { source: FeedSource },

    /// One complete incoming line. May be empty; the buffer guard decides
    /// whether an empty line is a no-op, not the feed.
    Line { text: String },

    /// The input stream ended normally.
    Eof,

    /// The feed stopped because of a read error. `message` is the rendered
    /// error chain, suitable for the status bar.
    Failed { message: String },
}
