use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Traversal root is missing or not a directory.
    #[error("{} is not a directory", .0.display())]
    InvalidRoot(PathBuf),
    /// A path vanished between enumeration and probing.
    #[error("path not found: {}", .0.display())]
    NotFound(PathBuf),
    /// Probing an existing path failed (permissions, I/O).
    #[error("failed to stat {}: {source}", .path.display())]
    Stat {
        path: PathBuf,
        source: std::io::Error,
    },
    /// A filter expression failed to compile.
    #[error("invalid filter pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        source: regex::Error,
    },
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
    /// Directory enumeration failure.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// A spawned traversal task panicked or was aborted.
    #[error("traversal task failed: {0}")]
    Task(String),
}
