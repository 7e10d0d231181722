// LiveLog - app/state.rs
//
// Viewer state. Holds the accumulated line buffer, the pending
// scroll-to-bottom request, and display options.
// Owned by the eframe::App implementation.

use crate::core::buffer::LogBuffer;
use crate::platform::config::AppConfig;

/// Top-level viewer state.
#[derive(Debug)]
pub struct ViewerState {
    /// All accumulated log lines, in arrival order.
    pub buffer: LogBuffer,

    /// Whether a feed is currently delivering lines.
    pub feed_active: bool,

    /// Pending request to pin the view to the bottom.
    ///
    /// Raised after every successful append and consumed by the log view
    /// once it has laid out its rows, so the newest line is always scrolled
    /// into view even if the user had scrolled away.
    scroll_to_bottom: bool,

    /// Status message for the status bar.
    pub status_message: String,

    /// Non-fatal warnings surfaced at startup (config validation).
    pub warnings: Vec<String>,

    /// Whether rows carry a dim arrival-time prefix.
    pub show_timestamps: bool,

    /// Body font size in points.
    pub font_size: f32,

    /// Dark (true) or light (false) theme.
    pub dark_mode: bool,
}

impl ViewerState {
    /// Create initial state from the validated configuration.
    pub fn new(config: &AppConfig) -> Self {
        Self {
            buffer: LogBuffer::new(),
            feed_active: false,
            scroll_to_bottom: false,
            status_message: "Waiting for input.".to_string(),
            warnings: Vec::new(),
            show_timestamps: config.show_timestamps,
            font_size: config.font_size,
            dark_mode: config.dark_mode,
        }
    }

    /// Apply one incoming line: append it (empty input is a no-op) and, on
    /// a real append, raise the scroll-to-bottom request.
    ///
    /// Returns `true` if the buffer was mutated.
    pub fn push_line(&mut self, text: &str) -> bool {
        let appended = self.buffer.push(text);
        if appended {
            self.scroll_to_bottom = true;
        }
        appended
    }

    /// Consume the pending scroll-to-bottom request, if any.
    ///
    /// Called by the log view after laying out its rows; returns `true`
    /// at most once per raised request.
    pub fn take_scroll_request(&mut self) -> bool {
        std::mem::take(&mut self.scroll_to_bottom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> ViewerState {
        ViewerState::new(&AppConfig::default())
    }

    #[test]
    fn append_raises_scroll_request_once() {
        let mut s = state();
        assert!(s.push_line("hello"));
        assert!(s.take_scroll_request());
        // Consumed: a second take without a new append returns false.
        assert!(!s.take_scroll_request());
    }

    #[test]
    fn noop_does_not_raise_scroll_request() {
        let mut s = state();
        assert!(!s.push_line(""));
        assert!(!s.take_scroll_request());
        assert!(s.buffer.is_empty());
    }

    #[test]
    fn every_mutation_re_raises_the_request() {
        let mut s = state();
        s.push_line("one");
        assert!(s.take_scroll_request());
        s.push_line("two");
        assert!(s.take_scroll_request());
        assert_eq!(s.buffer.len(), 2);
    }
}
