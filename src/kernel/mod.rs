pub mod action;
pub mod confirm;
pub mod effect;
pub mod handle;
pub mod intake;
pub mod notice;
pub mod picker;
pub mod preview;
pub mod registry;
pub mod state;
pub mod store;
pub mod util;
pub mod viewer;

pub use action::Action;
pub use confirm::{ConfirmState, PendingAction};
pub use effect::Effect;
pub use handle::{ContentHandleStore, HandleId};
pub use notice::{Notice, NoticeState, Severity};
pub use picker::{PickerEntry, PickerState};
pub use preview::{BlockKind, PreviewDoc, PreviewLine};
pub use registry::{FileRecord, RecordId, Registry};
pub use state::{AppState, FocusTarget, KernelConfig, ListViewState};
pub use store::{DispatchResult, Store};
pub use viewer::{ViewerPane, ViewerState, DEFAULT_VIEWER_TITLE};
