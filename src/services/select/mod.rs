pub mod cache;
pub mod picker;

use std::path::PathBuf;

use regex::Regex;
use tracing::debug;

use crate::core::errors::{Error, Result};
use crate::models::file_entry::FileEntry;
use crate::services::fs::walker;

use self::picker::{FilePicker, PickItem};

/// Inputs of one selection run.
#[derive(Debug, Clone)]
pub struct SelectParams {
    /// Root directory to enumerate. Must be non-empty.
    pub dir_path: String,
    /// Regex sources matched against file names; a file is kept when any
    /// pattern matches.
    pub filters: Vec<String>,
    /// Prompt shown by the picker.
    pub place_holder: String,
}

fn compile_filters(filters: &[String]) -> Result<Vec<Regex>> {
    filters
        .iter()
        .map(|pattern| {
            Regex::new(pattern).map_err(|source| Error::Pattern {
                pattern: pattern.clone(),
                source,
            })
        })
        .collect()
}

/// Walks `dir_path` and keeps entries whose file name matches at least one
/// filter. Argument and pattern validation happen before any I/O; walker
/// errors pass through untouched.
pub async fn filter_files(dir_path: &str, filters: &[String]) -> Result<Vec<FileEntry>> {
    if dir_path.is_empty() {
        return Err(Error::InvalidArgument("no directory path specified"));
    }
    let compiled = compile_filters(filters)?;

    let mut entries = walker::list_files(dir_path).await?;
    entries.retain(|entry| compiled.iter().any(|filter| filter.is_match(&entry.file_name)));
    debug!(
        root = dir_path,
        candidates = entries.len(),
        "filtered file list"
    );
    Ok(entries)
}

/// Presents the filtered files to `picker` and returns the chosen absolute
/// path, or `None` when the user cancels. Labels are root-relative paths.
pub async fn select_file(params: &SelectParams, picker: &dyn FilePicker) -> Result<Option<PathBuf>> {
    let entries = filter_files(&params.dir_path, &params.filters).await?;
    let items: Vec<PickItem> = entries
        .into_iter()
        .map(|entry| PickItem {
            label: entry.relative_path.display().to_string(),
            absolute_path: entry.absolute_path,
        })
        .collect();

    let Some(choice) = picker.pick(&items, &params.place_holder) else {
        return Ok(None);
    };
    // An out-of-range index from a host picker counts as cancellation.
    Ok(items.get(choice).map(|item| item.absolute_path.clone()))
}
