use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Remembers the last file selected under each root directory.
///
/// Owned by the host layer for the lifetime of the process and used to
/// pre-seed future selections; never persisted, and never consulted by the
/// walker or the selection facade.
#[derive(Debug, Default)]
pub struct SelectionCache {
    last_selected: HashMap<PathBuf, PathBuf>,
}

impl SelectionCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has(&self, root: &Path) -> bool {
        self.last_selected.contains_key(root)
    }

    pub fn get(&self, root: &Path) -> Option<&Path> {
        self.last_selected.get(root).map(PathBuf::as_path)
    }

    pub fn set(&mut self, root: impl Into<PathBuf>, file: impl Into<PathBuf>) {
        self.last_selected.insert(root.into(), file.into());
    }

    pub fn clear(&mut self, root: &Path) {
        self.last_selected.remove(root);
    }
}
