// LiveLog - tests/e2e_feed.rs
//
// End-to-end tests for the feed-to-viewer path.
//
// These tests exercise the real background feed thread, the real mpsc
// channel, and the real viewer state -- no mocks, no stubs. A reader is
// fed from an in-memory cursor (the same code path stdin uses) and its
// messages are applied to `ViewerState` exactly the way the GUI update
// loop applies them: one at a time, in arrival order, each fully applied
// before the next.

use livelog::app::feed::FeedManager;
use livelog::app::state::ViewerState;
use livelog::core::model::{FeedProgress, FeedSource};
use livelog::platform::config::AppConfig;
use std::io::Cursor;
use std::time::{Duration, Instant};

// =============================================================================
// Helpers
// =============================================================================

/// Drain the feed until `Eof`/`Failed` arrives or the timeout elapses.
fn collect_until_end(feed: &FeedManager, timeout: Duration) -> Vec<FeedProgress> {
    let deadline = Instant::now() + timeout;
    let mut all = Vec::new();
    while Instant::now() < deadline {
        for msg in feed.poll_progress() {
            let done = matches!(msg, FeedProgress::Eof | FeedProgress::Failed { .. });
            all.push(msg);
            if done {
                return all;
            }
        }
        std::thread::sleep(Duration::from_millis(5));
    }
    all
}

/// Run `input` through a real feed thread and apply every message to a
/// fresh `ViewerState`, mirroring the GUI update loop. Returns the state
/// and whether a scroll request was pending after the final message.
fn run_feed_into_state(input: &str) -> (ViewerState, bool) {
    let mut state = ViewerState::new(&AppConfig::default());
    let mut feed = FeedManager::new();
    feed.start_reader(Cursor::new(input.to_owned()), FeedSource::Stdin);

    let messages = collect_until_end(&feed, Duration::from_secs(5));
    assert!(
        matches!(messages.last(), Some(FeedProgress::Eof)),
        "feed did not reach Eof: {messages:?}"
    );

    for msg in messages {
        match msg {
            FeedProgress::Started { .. } => state.feed_active = true,
            FeedProgress::Line { text } => {
                state.push_line(&text);
            }
            FeedProgress::Eof | FeedProgress::Failed { .. } => state.feed_active = false,
        }
    }
    let scroll_pending = state.take_scroll_request();
    (state, scroll_pending)
}

fn texts(state: &ViewerState) -> Vec<String> {
    state.buffer.iter().map(|l| l.text.clone()).collect()
}

// =============================================================================
// Scenario tests
// =============================================================================

/// "start", "step1", "step2" in sequence -> three rows in that order.
#[test]
fn e2e_three_lines_arrive_in_order() {
    let (state, scroll_pending) = run_feed_into_state("start\nstep1\nstep2\n");
    assert_eq!(texts(&state), vec!["start", "step1", "step2"]);
    assert!(scroll_pending, "append must raise the scroll request");
}

/// "", then "ready" -> a single row.
#[test]
fn e2e_empty_line_then_ready_yields_one_row() {
    let (state, _) = run_feed_into_state("\nready\n");
    assert_eq!(texts(&state), vec!["ready"]);
}

/// "a" delivered twice in two separate cycles -> two rows, no deduplication.
#[test]
fn e2e_duplicate_lines_append_twice() {
    let (state, _) = run_feed_into_state("a\na\n");
    assert_eq!(texts(&state), vec!["a", "a"]);
}

/// N non-empty lines -> buffer of exactly N elements in delivery order.
#[test]
fn e2e_n_lines_give_n_buffer_elements() {
    let n = 250;
    let input: String = (0..n).map(|i| format!("line {i}\n")).collect();
    let (state, _) = run_feed_into_state(&input);
    assert_eq!(state.buffer.len(), n);
    let expected: Vec<String> = (0..n).map(|i| format!("line {i}")).collect();
    assert_eq!(texts(&state), expected);
}

/// Empty input never mutates the buffer, no matter how often delivered.
#[test]
fn e2e_blank_input_is_idempotent() {
    let (state, scroll_pending) = run_feed_into_state("\n\n\n\n\n");
    assert!(state.buffer.is_empty());
    assert!(!scroll_pending, "no-ops must not raise the scroll request");
}

/// A burst of queued lines is processed in full, in order, within one drain.
#[test]
fn e2e_burst_is_processed_in_full() {
    let mut state = ViewerState::new(&AppConfig::default());
    let mut feed = FeedManager::new();
    let input: String = (0..50).map(|i| format!("burst {i}\n")).collect();
    feed.start_reader(Cursor::new(input), FeedSource::Stdin);

    // Wait for the whole burst to queue up, then drain once -- every line
    // must be applied, nothing coalesced.
    let messages = collect_until_end(&feed, Duration::from_secs(5));
    for msg in messages {
        if let FeedProgress::Line { text } = msg {
            state.push_line(&text);
        }
    }
    assert_eq!(state.buffer.len(), 50);
    assert_eq!(
        state.buffer.last().map(|l| l.text.clone()),
        Some("burst 49".to_string())
    );
}

// =============================================================================
// Feed lifecycle
// =============================================================================

/// The feed announces its source before the first line and Eof after the last.
#[test]
fn e2e_feed_lifecycle_messages_bracket_the_lines() {
    let feed = {
        let mut f = FeedManager::new();
        f.start_reader(Cursor::new("only\n"), FeedSource::Stdin);
        f
    };
    let messages = collect_until_end(&feed, Duration::from_secs(5));
    assert_eq!(
        messages.first(),
        Some(&FeedProgress::Started {
            source: FeedSource::Stdin
        })
    );
    assert_eq!(messages.last(), Some(&FeedProgress::Eof));
    assert_eq!(messages.len(), 3);
}

/// Arrival timestamps are monotonic non-decreasing in buffer order.
#[test]
fn e2e_arrival_timestamps_follow_insertion_order() {
    let (state, _) = run_feed_into_state("first\nsecond\nthird\n");
    let stamps: Vec<_> = state.buffer.iter().map(|l| l.received_at).collect();
    assert!(
        stamps.windows(2).all(|w| w[0] <= w[1]),
        "timestamps out of order: {stamps:?}"
    );
}
