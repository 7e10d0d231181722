// LiveLog - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// No string-based error propagation: every variant keeps its source so
// diagnostic logging can show the full causal chain.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for all LiveLog operations.
/// Errors are categorised by the subsystem that produced them.
#[derive(Debug)]
pub enum LiveLogError {
    /// Configuration loading or validation failed.
    Config(ConfigError),

    /// The line feed failed.
    Feed(FeedError),

    /// I/O error with path context.
    Io {
        path: PathBuf,
        operation: &'static str,
        source: io::Error,
    },
}

impl fmt::Display for LiveLogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "Configuration error: {e}"),
            Self::Feed(e) => write!(f, "Feed error: {e}"),
            Self::Io {
                path,
                operation,
                source,
            } => write!(
                f,
                "I/O error during {operation} on '{}': {source}",
                path.display()
            ),
        }
    }
}

impl std::error::Error for LiveLogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Feed(e) => Some(e),
            Self::Io { source, .. } => Some(source),
        }
    }
}

impl From<ConfigError> for LiveLogError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<FeedError> for LiveLogError {
    fn from(e: FeedError) -> Self {
        Self::Feed(e)
    }
}

// ---------------------------------------------------------------------------
// Configuration errors
// ---------------------------------------------------------------------------

/// Errors related to config.toml loading.
#[derive(Debug)]
pub enum ConfigError {
    /// The config file exists but could not be read.
    Read { path: PathBuf, source: io::Error },

    /// The config file could not be parsed as TOML.
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read { path, source } => {
                write!(f, "cannot read '{}': {source}", path.display())
            }
            Self::TomlParse { path, source } => {
                write!(f, "cannot parse '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Read { source, .. } => Some(source),
            Self::TomlParse { source, .. } => Some(source),
        }
    }
}

// ---------------------------------------------------------------------------
// Feed errors
// ---------------------------------------------------------------------------

/// Errors produced by the background line feed.
#[derive(Debug)]
pub enum FeedError {
    /// Reading from the input stream failed.
    Read { source: io::Error },
}

impl fmt::Display for FeedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read { source } => write!(f, "read from input stream failed: {source}"),
        }
    }
}

impl std::error::Error for FeedError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Read { source } => Some(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn display_includes_path_context() {
        let err = LiveLogError::Io {
            path: PathBuf::from("/tmp/input"),
            operation: "open",
            source: io::Error::new(io::ErrorKind::NotFound, "gone"),
        };
        let msg = err.to_string();
        assert!(msg.contains("open"), "missing operation in: {msg}");
        assert!(msg.contains("/tmp/input"), "missing path in: {msg}");
    }

    #[test]
    fn feed_error_chain_preserves_source() {
        let err: LiveLogError = FeedError::Read {
            source: io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"),
        }
        .into();
        // Walk LiveLogError -> FeedError -> io::Error.
        let feed = err.source().expect("feed source");
        let io_err = feed.source().expect("io source");
        assert!(io_err.to_string().contains("pipe closed"));
    }

    #[test]
    fn config_parse_error_names_the_file() {
        let bad: Result<toml::Value, _> = toml::from_str("not [ valid");
        let err = ConfigError::TomlParse {
            path: PathBuf::from("config.toml"),
            source: bad.unwrap_err(),
        };
        assert!(err.to_string().contains("config.toml"));
    }
}
