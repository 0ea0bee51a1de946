//! Store connection configuration.
//!
//! A `StoreConfig` is built once at startup and handed to `open_store`; no
//! connection settings live in process-wide state.

use std::path::{Path, PathBuf};
use std::time::Duration;

/// Busy timeout applied when no explicit value is configured.
pub const DEFAULT_BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Where the SQLite store lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreLocation {
    /// Database file on disk, created when missing.
    File(PathBuf),
    /// Private in-memory database, discarded when the connection drops.
    Memory,
}

/// Connection settings for the allocation store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub location: StoreLocation,
    pub busy_timeout: Duration,
}

impl StoreConfig {
    /// File-backed store at `path`.
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self {
            location: StoreLocation::File(path.into()),
            busy_timeout: DEFAULT_BUSY_TIMEOUT,
        }
    }

    /// In-memory store.
    pub fn in_memory() -> Self {
        Self {
            location: StoreLocation::Memory,
            busy_timeout: DEFAULT_BUSY_TIMEOUT,
        }
    }

    /// File store when a non-blank path is given, in-memory otherwise.
    pub fn from_optional_path(path: Option<&Path>) -> Self {
        match path {
            Some(path) if !path.as_os_str().is_empty() => Self::file(path),
            _ => Self::in_memory(),
        }
    }

    pub fn with_busy_timeout(mut self, busy_timeout: Duration) -> Self {
        self.busy_timeout = busy_timeout;
        self
    }

    /// Short label used in log lines (`file` / `memory`).
    pub fn mode(&self) -> &'static str {
        match self.location {
            StoreLocation::File(_) => "file",
            StoreLocation::Memory => "memory",
        }
    }

    pub fn is_persistent(&self) -> bool {
        matches!(self.location, StoreLocation::File(_))
    }
}

#[cfg(test)]
mod tests {
    use super::{StoreConfig, StoreLocation, DEFAULT_BUSY_TIMEOUT};
    use std::path::Path;
    use std::time::Duration;

    #[test]
    fn optional_path_falls_back_to_memory() {
        assert_eq!(
            StoreConfig::from_optional_path(None).location,
            StoreLocation::Memory
        );
        assert_eq!(
            StoreConfig::from_optional_path(Some(Path::new(""))).location,
            StoreLocation::Memory
        );
    }

    #[test]
    fn optional_path_selects_file_store() {
        let config = StoreConfig::from_optional_path(Some(Path::new("/tmp/alloc.sqlite3")));
        assert!(config.is_persistent());
        assert_eq!(config.mode(), "file");
        assert_eq!(config.busy_timeout, DEFAULT_BUSY_TIMEOUT);
    }

    #[test]
    fn busy_timeout_can_be_overridden() {
        let config = StoreConfig::in_memory().with_busy_timeout(Duration::from_millis(250));
        assert_eq!(config.busy_timeout, Duration::from_millis(250));
        assert_eq!(config.mode(), "memory");
    }
}
