//! Modal file-picker dialog state.
//!
//! Stands in for the native file-picker control: a directory browser whose
//! listings load asynchronously. The picker shows every entry; the intake
//! filter decides what is actually accepted on submit, so picking a non-HTML
//! file still produces the aggregate invalid-type notice.

use std::path::{Path, PathBuf};

use rustc_hash::FxHashSet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerEntry {
    pub name: String,
    pub is_dir: bool,
}

#[derive(Debug, Default)]
pub struct PickerState {
    pub visible: bool,
    pub cwd: PathBuf,
    pub entries: Vec<PickerEntry>,
    pub selected: usize,
    pub scroll: usize,
    pub view_height: usize,
    /// Names marked for a multi-file accept, scoped to the current directory.
    pub marked: FxHashSet<String>,
    pub loading: bool,
    pub error: Option<String>,
}

impl PickerState {
    pub fn open(&mut self, cwd: PathBuf) {
        self.visible = true;
        self.loading = true;
        self.error = None;
        self.cwd = cwd;
        self.entries.clear();
        self.marked.clear();
        self.selected = 0;
        self.scroll = 0;
    }

    pub fn close(&mut self) {
        self.visible = false;
        self.entries.clear();
        self.marked.clear();
        self.error = None;
        self.loading = false;
    }

    /// Applies a finished directory listing. Stale results (the user already
    /// navigated elsewhere) are ignored.
    pub fn dir_loaded(&mut self, path: &Path, mut entries: Vec<PickerEntry>) -> bool {
        if !self.visible || path != self.cwd {
            return false;
        }

        entries.sort_by(|a, b| {
            b.is_dir
                .cmp(&a.is_dir)
                .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
        });

        self.entries = entries;
        self.loading = false;
        self.selected = 0;
        self.scroll = 0;
        true
    }

    pub fn dir_error(&mut self, path: &Path, error: String) -> bool {
        if !self.visible || path != self.cwd {
            return false;
        }
        self.loading = false;
        self.error = Some(error);
        true
    }

    pub fn move_selection(&mut self, delta: isize) -> bool {
        if self.entries.is_empty() {
            return false;
        }
        let max = self.entries.len() - 1;
        let next = if delta < 0 {
            self.selected.saturating_sub(delta.unsigned_abs())
        } else {
            (self.selected + delta as usize).min(max)
        };
        let changed = next != self.selected;
        self.selected = next;
        self.scroll_into_view();
        changed
    }

    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.entries.len() || index == self.selected {
            return false;
        }
        self.selected = index;
        self.scroll_into_view();
        true
    }

    pub fn set_view_height(&mut self, height: usize) -> bool {
        if self.view_height == height {
            return false;
        }
        self.view_height = height;
        self.scroll_into_view();
        true
    }

    pub fn selected_entry(&self) -> Option<&PickerEntry> {
        self.entries.get(self.selected)
    }

    pub fn toggle_mark(&mut self) -> bool {
        let Some(entry) = self.entries.get(self.selected) else {
            return false;
        };
        if entry.is_dir {
            return false;
        }
        if !self.marked.remove(&entry.name) {
            self.marked.insert(entry.name.clone());
        }
        true
    }

    /// Paths to submit on accept: every marked file plus the selection when
    /// it is an unmarked file.
    pub fn accept_paths(&self) -> Vec<PathBuf> {
        let mut paths: Vec<PathBuf> = self
            .entries
            .iter()
            .filter(|e| !e.is_dir && self.marked.contains(&e.name))
            .map(|e| self.cwd.join(&e.name))
            .collect();

        if let Some(entry) = self.selected_entry() {
            if !entry.is_dir && !self.marked.contains(&entry.name) {
                paths.push(self.cwd.join(&entry.name));
            }
        }
        paths
    }

    fn scroll_into_view(&mut self) {
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
