use std::io::ErrorKind;
use std::path::Path;

use crate::core::errors::{Error, Result};

/// Coarse classification of a filesystem object. Anything that is not a
/// directory (regular file, symlink, socket, ...) is treated as file-like.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathKind {
    Directory,
    File,
}

/// Stats a single path and reports whether it denotes a directory.
///
/// Symlinks are not followed, so a link to a directory classifies as a file
/// and is never recursed into. Fails with [`Error::NotFound`] when the path
/// no longer exists at call time and [`Error::Stat`] on any other probe
/// failure.
pub async fn classify(path: &Path) -> Result<PathKind> {
    match tokio::fs::symlink_metadata(path).await {
        Ok(metadata) => {
            if metadata.is_dir() {
                Ok(PathKind::Directory)
            } else {
                Ok(PathKind::File)
            }
        }
        Err(err) if err.kind() == ErrorKind::NotFound => Err(Error::NotFound(path.to_path_buf())),
        Err(err) => Err(Error::Stat {
            path: path.to_path_buf(),
            source: err,
        }),
    }
}
