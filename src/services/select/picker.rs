use std::path::PathBuf;

/// One selectable candidate: the label shown to the user (the root-relative
/// path) and the path handed back when it is chosen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickItem {
    pub label: String,
    pub absolute_path: PathBuf,
}

/// Single-choice picker implemented by the host (console, editor UI, test
/// stub). Returns the index of the chosen item, or `None` on cancellation.
pub trait FilePicker {
    fn pick(&self, items: &[PickItem], place_holder: &str) -> Option<usize>;
}
