use std::time::Duration;

use super::confirm::ConfirmState;
use super::handle::ContentHandleStore;
use super::notice::{NoticeState, DEFAULT_NOTICE_TTL};
use super::picker::PickerState;
use super::registry::Registry;
use super::viewer::ViewerState;

/// Grace period before the preview content handle is revoked after a view.
pub const DEFAULT_RELEASE_GRACE: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    List,
    Viewer,
}

/// Kernel knobs surfaced through the settings file.
#[derive(Debug, Clone, Copy)]
pub struct KernelConfig {
    pub notice_ttl: Duration,
    pub release_grace: Duration,
}

impl Default for KernelConfig {
    fn default() -> Self {
        Self {
            notice_ttl: DEFAULT_NOTICE_TTL,
            release_grace: DEFAULT_RELEASE_GRACE,
        }
    }
}

/// Selection and viewport for the staged-file list.
#[derive(Debug, Default)]
pub struct ListViewState {
    pub selected: usize,
    pub scroll: usize,
    pub view_height: usize,
}

impl ListViewState {
    pub fn clamp_to(&mut self, len: usize) {
        if len == 0 {
            self.selected = 0;
            self.scroll = 0;
            return;
        }
        self.selected = self.selected.min(len - 1);
        self.scroll_into_view();
    }

    pub fn scroll_into_view(&mut self) {
        if self.view_height == 0 {
            return;
        }
        if self.selected < self.scroll {
            self.scroll = self.selected;
        } else if self.selected >= self.scroll + self.view_height {
            self.scroll = self.selected + 1 - self.view_height;
        }
    }
}

#[derive(Debug)]
pub struct AppState {
    pub registry: Registry,
    pub handles: ContentHandleStore,
    pub viewer: ViewerState,
    pub notices: NoticeState,
    pub picker: PickerState,
    pub confirm: ConfirmState,
    pub list: ListViewState,
    pub focus: FocusTarget,
    /// Reads issued but not yet completed; display only.
    pub pending_reads: usize,
}

impl AppState {
    pub fn new(config: &KernelConfig) -> Self {
        Self {
            registry: Registry::new(),
            handles: ContentHandleStore::new(),
            viewer: ViewerState::Hidden,
            notices: NoticeState::new(config.notice_ttl),
            picker: PickerState::default(),
            confirm: ConfirmState::default(),
            list: ListViewState::default(),
            focus: FocusTarget::List,
            pending_reads: 0,
        }
    }

    /// A modal dialog swallows list/viewer input while visible.
    pub fn modal_open(&self) -> bool {
        self.confirm.visible || self.picker.visible
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(&KernelConfig::default())
    }
}
