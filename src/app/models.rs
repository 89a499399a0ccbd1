use std::path::PathBuf;

/// A single file selected by the content patterns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub path: PathBuf,
    /// Path relative to the project root, forward slashes.
    pub relative_path: String,
}
