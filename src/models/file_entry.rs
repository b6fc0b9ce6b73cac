use std::path::{Path, PathBuf};

use serde::Serialize;

/// One non-directory filesystem object discovered during a traversal.
///
/// `relative_path` is expressed relative to the traversal root and always
/// ends with `file_name`; `absolute_path` equals the root joined with
/// `relative_path`. Directories are consumed during recursion and never
/// appear as entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileEntry {
    pub file_name: String,
    pub relative_path: PathBuf,
    pub absolute_path: PathBuf,
}

impl FileEntry {
    /// A freshly discovered leaf: relative to its own parent directory,
    /// so the relative path is just the bare name.
    pub fn leaf(absolute_path: PathBuf, file_name: String) -> Self {
        Self {
            relative_path: PathBuf::from(&file_name),
            absolute_path,
            file_name,
        }
    }

    /// Prepends one ancestor directory segment to the relative path.
    ///
    /// Called once per recursion level on the way back up; after every
    /// ancestor has added its segment the path is relative to the
    /// traversal root.
    pub fn prefixed(mut self, parent: &str) -> Self {
        self.relative_path = Path::new(parent).join(&self.relative_path);
        self
    }
}
