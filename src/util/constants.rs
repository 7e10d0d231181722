// LiveLog - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "LiveLog";

/// Application identifier used for config directories.
pub const APP_ID: &str = "LiveLog";

/// Current application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Configuration
// =============================================================================

/// Name of the optional configuration file inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Default logging level when neither RUST_LOG, --debug, nor config set one.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Default body font size in points.
pub const DEFAULT_FONT_SIZE: f32 = 12.0;

/// Minimum user-configurable font size.
pub const MIN_FONT_SIZE: f32 = 8.0;

/// Maximum user-configurable font size.
pub const MAX_FONT_SIZE: f32 = 24.0;

// =============================================================================
// Feed timing
// =============================================================================

/// Repaint interval while a feed is active, in milliseconds.
///
/// The UI drains the feed channel once per frame; scheduling a repaint at
/// this interval bounds the latency between a line arriving on the channel
/// and the row appearing on screen.
pub const FEED_REPAINT_INTERVAL_MS: u64 = 100;

/// Interval between synthetic lines emitted by the demo feed, in milliseconds.
pub const DEMO_LINE_INTERVAL_MS: u64 = 500;

/// How often background feed threads check the cancel flag while sleeping,
/// in milliseconds. Bounds how long `stop()` can take to be observed.
pub const FEED_CANCEL_CHECK_INTERVAL_MS: u64 = 50;

/// Number of synthetic lines the demo feed emits before sending Eof.
pub const DEMO_LINE_COUNT: u64 = 200;
