use std::path::PathBuf;

use crate::kernel::PickerEntry;

/// Completion messages posted back to the UI thread. Messages from one batch
/// arrive in whatever order the reads finish.
#[derive(Debug)]
pub enum AppMessage {
    FileRead {
        name: String,
        path: PathBuf,
        size: u64,
        content: String,
    },
    FileReadError {
        name: String,
        path: PathBuf,
        error: String,
    },
    DirLoaded {
        path: PathBuf,
        entries: Vec<PickerEntry>,
    },
    DirLoadError {
        path: PathBuf,
        error: String,
    },
}
