use std::path::PathBuf;
use std::time::Instant;

use super::picker::PickerEntry;
use super::registry::RecordId;

#[derive(Debug, Clone)]
pub enum Action {
    /// A batch of candidate paths from a drop, the picker, or the CLI.
    SubmitPaths(Vec<PathBuf>),
    /// An asynchronous read finished.
    FileRead {
        name: String,
        size: u64,
        content: String,
    },
    /// An asynchronous read failed; no record is created.
    FileReadFailed {
        name: String,
        error: String,
    },
    Tick {
        now: Instant,
    },

    ListMoveSelection {
        delta: isize,
    },
    ListSetViewHeight {
        height: usize,
    },
    ListClickRow {
        row: usize,
    },
    ViewSelected,
    ViewRecord {
        id: RecordId,
    },
    CloseViewer,
    ViewerScroll {
        delta: isize,
        page: usize,
    },

    RequestDeleteSelected,
    RequestDelete {
        id: RecordId,
    },
    ConfirmAccept,
    ConfirmCancel,

    OpenPicker,
    PickerCancel,
    PickerMoveSelection {
        delta: isize,
    },
    PickerSetViewHeight {
        height: usize,
    },
    PickerClickRow {
        row: usize,
    },
    PickerActivate,
    PickerParent,
    PickerToggleMark,
    PickerDirLoaded {
        path: PathBuf,
        entries: Vec<PickerEntry>,
    },
    PickerDirError {
        path: PathBuf,
        error: String,
    },

    DismissNotice {
        id: u64,
    },
    DismissNewestNotice,
    FocusNext,
}
