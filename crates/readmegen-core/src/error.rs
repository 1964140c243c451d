//! Error types for the hosting boundaries (clipboard and export)

use thiserror::Error;

/// Result type for readmegen operations
pub type Result<T> = std::result::Result<T, ReadmeError>;

/// Errors raised by clipboard backends and download sinks.
///
/// Assembly and preview rendering never fail; only the side-effecting
/// collaborators do.
#[derive(Error, Debug)]
pub enum ReadmeError {
    /// No usable clipboard mechanism on this host
    #[error("Clipboard unavailable: {0}")]
    ClipboardUnavailable(String),

    /// The clipboard mechanism exists but the write failed
    #[error("Clipboard write failed: {0}")]
    ClipboardWrite(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
