// LiveLog - app/feed.rs
//
// The line feed: delivers incoming log lines from a background thread to
// the UI, one complete line per message.
//
// Architecture:
//   - `FeedManager` lives on the UI thread; the reader loop runs on a
//     background thread.
//   - An `Arc<AtomicBool>` cancel flag allows the UI to stop the feed.
//   - Lines are sent as `FeedProgress::Line` over an mpsc channel.
//   - The UI thread drains the channel once per frame via `poll_progress`.
//
// The stdin reader is generic over `io::Read` so tests can drive it from
// an in-memory cursor; production wires it to `std::io::stdin()`.
//
// Delivery contract: one `Line` per complete input line, in input order,
// with the trailing `\n` (and a preceding `\r`, for CRLF input) stripped.
// Empty lines are delivered too -- the buffer's guard decides that they
// are no-ops, not the feed.

use crate::core::model::{FeedProgress, FeedSource};
use crate::util::constants::{
    DEMO_LINE_COUNT, DEMO_LINE_INTERVAL_MS, FEED_CANCEL_CHECK_INTERVAL_MS,
};
use crate::util::error::FeedError;
use std::io::{BufRead, BufReader, Read};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc};
use std::time::Duration;

/// Manages a line feed running on a background thread.
///
/// The manager lives on the UI thread and exposes a start/stop/poll
/// interface; `poll_progress` never blocks.
pub struct FeedManager {
    /// Channel receiver for the UI to poll feed messages.
    progress_rx: Option<mpsc::Receiver<FeedProgress>>,
    /// Cancel flag shared with the background thread.
    cancel_flag: Option<Arc<AtomicBool>>,
}

impl FeedManager {
    pub fn new() -> Self {
        Self {
            progress_rx: None,
            cancel_flag: None,
        }
    }

    /// Start feeding lines from standard input.
    pub fn start_stdin(&mut self) {
        self.start_reader(std::io::stdin(), FeedSource::Stdin);
    }

    /// Start feeding lines from an arbitrary reader.
    ///
    /// If a feed is already running it is stopped first.
    pub fn start_reader<R>(&mut self, reader: R, source: FeedSource)
    where
        R: Read + Send + 'static,
    {
        self.stop();

        let (tx, rx) = mpsc::channel();
        let cancel = Arc::new(AtomicBool::new(false));

        self.progress_rx = Some(rx);
        self.cancel_flag = Some(Arc::clone(&cancel));

        std::thread::spawn(move || {
            run_reader_feed(reader, source, tx, cancel);
        });

        tracing::info!(source = source.label(), "Feed started");
    }

    /// Start the demo feed: synthetic numbered lines on a fixed interval.
    ///
    /// If a feed is already running it is stopped first.
    pub fn start_demo(&mut self) {
        self.stop();

        let (tx, rx) = mpsc::channel();
        let cancel = Arc::new(AtomicBool::new(false));

        self.progress_rx = Some(rx);
        self.cancel_flag = Some(Arc::clone(&cancel));

        std::thread::spawn(move || {
            run_demo_feed(tx, cancel);
        });

        tracing::info!("Demo feed started");
    }

    /// Request the background feed thread to stop.
    ///
    /// The thread observes the flag within `FEED_CANCEL_CHECK_INTERVAL_MS`
    /// at its next check; a reader blocked inside `read` exits when the
    /// read completes and the flag is seen.
    pub fn stop(&mut self) {
        if let Some(flag) = &self.cancel_flag {
            flag.store(true, Ordering::SeqCst);
        }
        self.cancel_flag = None;
        self.progress_rx = None;
    }

    /// Returns `true` if a feed background thread is currently active.
    pub fn is_active(&self) -> bool {
        self.cancel_flag.is_some()
    }

    /// Poll for pending feed messages without blocking.
    ///
    /// Drains all currently queued messages and returns them in arrival
    /// order.
    pub fn poll_progress(&self) -> Vec<FeedProgress> {
        let mut messages = Vec::new();
        if let Some(ref rx) = self.progress_rx {
            while let Ok(msg) = rx.try_recv() {
                messages.push(msg);
            }
        }
        messages
    }
}

impl Default for FeedManager {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Background reader feed
// =============================================================================

/// Reader loop: sends one `Line` per complete input line until EOF, a read
/// error, or cancellation.
fn run_reader_feed<R: Read>(
    reader: R,
    source: FeedSource,
    tx: mpsc::Sender<FeedProgress>,
    cancel: Arc<AtomicBool>,
) {
    macro_rules! send {
        ($msg:expr) => {
            if tx.send($msg).is_err() {
                // UI channel closed -- exit silently.
                return;
            }
        };
    }

    send!(FeedProgress::Started { source });

    let mut reader = BufReader::new(reader);
    let mut line = String::new();

    loop {
        if cancel.load(Ordering::SeqCst) {
            tracing::debug!(source = source.label(), "Feed cancelled");
            return;
        }

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => {
                tracing::info!(source = source.label(), "Feed reached end of input");
                send!(FeedProgress::Eof);
                return;
            }
            Ok(_) => {
                // Strip the line terminator; CRLF input loses both bytes.
                if line.ends_with('\n') {
                    line.pop();
                    if line.ends_with('\r') {
                        line.pop();
                    }
                }
                send!(FeedProgress::Line { text: line.clone() });
            }
            Err(e) => {
                let err = FeedError::Read { source: e };
                tracing::warn!(source = source.label(), error = %err, "Feed read failed");
                send!(FeedProgress::Failed {
                    message: err.to_string(),
                });
                return;
            }
        }
    }
}

// =============================================================================
// Background demo feed
// =============================================================================

/// Demo loop: emits `DEMO_LINE_COUNT` numbered lines, one every
/// `DEMO_LINE_INTERVAL_MS`, sleeping in cancel-check slices so `stop()` is
/// observed promptly.
fn run_demo_feed(tx: mpsc::Sender<FeedProgress>, cancel: Arc<AtomicBool>) {
    macro_rules! send {
        ($msg:expr) => {
            if tx.send($msg).is_err() {
                return;
            }
        };
    }

    send!(FeedProgress::Started {
        source: FeedSource::Demo,
    });

    let slices = (DEMO_LINE_INTERVAL_MS / FEED_CANCEL_CHECK_INTERVAL_MS).max(1);

    for n in 1..=DEMO_LINE_COUNT {
        for _ in 0..slices {
            std::thread::sleep(Duration::from_millis(FEED_CANCEL_CHECK_INTERVAL_MS));
            if cancel.load(Ordering::SeqCst) {
                tracing::debug!("Demo feed cancelled");
                return;
            }
        }
        send!(FeedProgress::Line {
            text: format!("demo line {n}"),
        });
    }

    send!(FeedProgress::Eof);
}
