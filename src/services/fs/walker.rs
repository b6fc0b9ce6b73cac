use std::future::Future;
use std::path::{Path, PathBuf};
use std::pin::Pin;

use tokio::task::JoinHandle;
use tracing::debug;

use crate::core::errors::{Error, Result};
use crate::models::file_entry::FileEntry;
use crate::services::fs::probe::{classify, PathKind};

/// Handle bound to one validated directory, exposing a single traversal.
/// Created per invocation and never reused or cached.
pub struct Directory {
    path: PathBuf,
}

impl Directory {
    /// Binds a handle to `path`, failing with [`Error::InvalidRoot`] when it
    /// does not exist or is not a directory. This is the only validation of
    /// the root; nothing below re-checks it.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Directory> {
        let path = path.into();
        match classify(&path).await {
            Ok(PathKind::Directory) => Ok(Directory { path }),
            Ok(PathKind::File) | Err(Error::NotFound(_)) => Err(Error::InvalidRoot(path)),
            Err(err) => Err(err),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Walks the whole tree and returns every non-directory descendant with
    /// its path rewritten relative to this directory.
    pub async fn files(&self) -> Result<Vec<FileEntry>> {
        collect_entries(self.path.clone()).await
    }
}

/// Validates `root` and returns the flat list of all files beneath it.
///
/// Any probe or enumeration failure at any depth aborts the whole call; there
/// is no partial result and no retry.
pub async fn list_files(root: impl Into<PathBuf>) -> Result<Vec<FileEntry>> {
    let dir = Directory::open(root).await?;
    let entries = dir.files().await?;
    debug!(
        root = %dir.path().display(),
        files = entries.len(),
        "directory walk complete"
    );
    Ok(entries)
}

/// Recursively collects the files under `dir`, relative to `dir` itself.
///
/// Direct children are emitted as leaves; sibling subdirectories are walked
/// concurrently and joined in directory-read order, then each child list is
/// rewritten by prefixing the subdirectory's own name segment. Every ancestor
/// repeats that rewrite on the way up, which is what finally makes the paths
/// root-relative. Returns a boxed future because the function awaits itself.
fn collect_entries(dir: PathBuf) -> Pin<Box<dyn Future<Output = Result<Vec<FileEntry>>> + Send>> {
    Box::pin(async move {
        let mut read_dir = tokio::fs::read_dir(&dir).await?;
        let mut files = Vec::new();
        let mut subdirs: Vec<(String, JoinHandle<Result<Vec<FileEntry>>>)> = Vec::new();

        while let Some(entry) = read_dir.next_entry().await? {
            let name = entry.file_name().to_string_lossy().into_owned();
            let full_path = entry.path();
            match classify(&full_path).await? {
                PathKind::Directory => {
                    subdirs.push((name, tokio::spawn(collect_entries(full_path))));
                }
                PathKind::File => files.push(FileEntry::leaf(full_path, name)),
            }
        }

        // Per-level barrier: all sub-walks finish before this level rewrites
        // and returns. An error here leaves later siblings running; their
        // results are discarded when the handles drop.
        for (name, handle) in subdirs {
            let nested = handle.await.map_err(|err| Error::Task(err.to_string()))??;
            files.extend(nested.into_iter().map(|entry| entry.prefixed(&name)));
        }

        Ok(files)
    })
}
