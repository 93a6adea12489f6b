use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use super::confirm::PendingAction;
use super::intake;
use super::notice::Severity;
use super::preview::PreviewDoc;
use super::registry::{FileRecord, RecordId};
use super::util;
use super::viewer::{ViewerPane, ViewerState};
use super::{Action, AppState, Effect, FocusTarget, KernelConfig};

pub struct DispatchResult {
    pub effects: Vec<Effect>,
    pub state_changed: bool,
}

impl DispatchResult {
    fn changed(state_changed: bool) -> Self {
        Self {
            effects: Vec::new(),
            state_changed,
        }
    }
}

pub struct Store {
    state: AppState,
    config: KernelConfig,
    /// Directory the picker opens in the first time.
    start_dir: PathBuf,
}

impl Store {
    pub fn new(config: KernelConfig, start_dir: PathBuf) -> Self {
        Self {
            state: AppState::new(&config),
            config,
            start_dir,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn dispatch(&mut self, action: Action) -> DispatchResult {
        match action {
            Action::SubmitPaths(paths) => self.submit_paths(paths),
            Action::FileRead {
                name,
                size,
                content,
            } => self.file_read(name, size, content),
            Action::FileReadFailed { name, error } => {
                self.state.pending_reads = self.state.pending_reads.saturating_sub(1);
                self.notify(
                    format!("Error reading file \"{name}\": {error}"),
                    Severity::Error,
                );
                DispatchResult::changed(true)
            }
            Action::Tick { now } => self.tick(now),

            Action::ListMoveSelection { delta } => {
                DispatchResult::changed(self.move_list_selection(delta))
            }
            Action::ListSetViewHeight { height } => {
                let changed = self.state.list.view_height != height;
                self.state.list.view_height = height;
                self.state.list.scroll_into_view();
                DispatchResult::changed(changed)
            }
            Action::ListClickRow { row } => {
                let index = self.state.list.scroll + row;
                if index >= self.state.registry.len() || index == self.state.list.selected {
                    return DispatchResult::changed(false);
                }
                self.state.list.selected = index;
                self.state.list.scroll_into_view();
                DispatchResult::changed(true)
            }
            Action::ViewSelected => match self.selected_record_id() {
                Some(id) => self.view_record(id),
                None => DispatchResult::changed(false),
            },
            Action::ViewRecord { id } => self.view_record(id),
            Action::CloseViewer => DispatchResult::changed(self.close_viewer()),
            Action::ViewerScroll { delta, page } => {
                let changed = self
                    .state
                    .viewer
                    .pane_mut()
                    .is_some_and(|pane| pane.scroll_by(delta, page));
                DispatchResult::changed(changed)
            }

            Action::RequestDeleteSelected => match self.selected_record_id() {
                Some(id) => self.request_delete(id),
                None => DispatchResult::changed(false),
            },
            Action::RequestDelete { id } => self.request_delete(id),
            Action::ConfirmAccept => {
                let Some(pending) = self.state.confirm.dismiss() else {
                    return DispatchResult::changed(false);
                };
                match pending {
                    PendingAction::DeleteRecord { id } => self.delete_record(id),
                }
            }
            Action::ConfirmCancel => {
                let was_visible = self.state.confirm.visible;
                self.state.confirm.dismiss();
                DispatchResult::changed(was_visible)
            }

            Action::OpenPicker => {
                let cwd = if self.state.picker.cwd.as_os_str().is_empty() {
                    self.start_dir.clone()
                } else {
                    self.state.picker.cwd.clone()
                };
                self.state.picker.open(cwd.clone());
                DispatchResult {
                    effects: vec![Effect::LoadDir(cwd)],
                    state_changed: true,
                }
            }
            Action::PickerCancel => {
                let was_visible = self.state.picker.visible;
                self.state.picker.close();
                DispatchResult::changed(was_visible)
            }
            Action::PickerMoveSelection { delta } => {
                DispatchResult::changed(self.state.picker.move_selection(delta))
            }
            Action::PickerSetViewHeight { height } => {
                DispatchResult::changed(self.state.picker.set_view_height(height))
            }
            Action::PickerClickRow { row } => {
                let index = self.state.picker.scroll + row;
                DispatchResult::changed(self.state.picker.select(index))
            }
            Action::PickerActivate => self.picker_activate(),
            Action::PickerParent => {
                let Some(parent) = self.state.picker.cwd.parent().map(PathBuf::from) else {
                    return DispatchResult::changed(false);
                };
                self.state.picker.open(parent.clone());
                DispatchResult {
                    effects: vec![Effect::LoadDir(parent)],
                    state_changed: true,
                }
            }
            Action::PickerToggleMark => DispatchResult::changed(self.state.picker.toggle_mark()),
            Action::PickerDirLoaded { path, entries } => {
                DispatchResult::changed(self.state.picker.dir_loaded(&path, entries))
            }
            Action::PickerDirError { path, error } => {
                DispatchResult::changed(self.state.picker.dir_error(&path, error))
            }

            Action::DismissNotice { id } => {
                DispatchResult::changed(self.state.notices.dismiss(id))
            }
            Action::DismissNewestNotice => {
                DispatchResult::changed(self.state.notices.dismiss_newest())
            }
            Action::FocusNext => {
                if !self.state.viewer.is_showing() || self.state.modal_open() {
                    return DispatchResult::changed(false);
                }
                self.state.focus = match self.state.focus {
                    FocusTarget::List => FocusTarget::Viewer,
                    FocusTarget::Viewer => FocusTarget::List,
                };
                DispatchResult::changed(true)
            }
        }
    }

    // -----------------------------------------------------------------------
    // Intake
    // -----------------------------------------------------------------------

    fn submit_paths(&mut self, paths: Vec<PathBuf>) -> DispatchResult {
        if paths.is_empty() {
            return DispatchResult::changed(false);
        }

        let (accepted, _rejected) = intake::filter_batch(paths);
        if accepted.is_empty() {
            self.notify(
                "Please select only HTML files (.html, .htm)",
                Severity::Error,
            );
            return DispatchResult::changed(true);
        }

        let mut effects = Vec::new();
        for path in accepted {
            let Some(name) = intake::file_name(&path).map(str::to_string) else {
                continue;
            };

            if self.state.registry.find_by_name(&name).is_some() {
                self.notify(format!("File \"{name}\" already exists"), Severity::Warning);
                continue;
            }

            self.state.pending_reads += 1;
            effects.push(Effect::ReadFile { name, path });
        }

        DispatchResult {
            effects,
            state_changed: true,
        }
    }

    fn file_read(&mut self, name: String, size: u64, content: String) -> DispatchResult {
        self.state.pending_reads = self.state.pending_reads.saturating_sub(1);

        // Reads of one batch land in arbitrary order, so the dedup invariant
        // is re-checked here; the later read of a same-named pair loses.
        if self.state.registry.find_by_name(&name).is_some() {
            self.notify(format!("File \"{name}\" already exists"), Severity::Warning);
            return DispatchResult::changed(true);
        }

        let message = format!("File \"{name}\" staged successfully");
        let record = FileRecord::new(name, size, Arc::from(content), util::upload_timestamp());
        self.state.registry.append(record);
        self.state.list.clamp_to(self.state.registry.len());
        self.notify(message, Severity::Success);
        DispatchResult::changed(true)
    }

    // -----------------------------------------------------------------------
    // Viewer
    // -----------------------------------------------------------------------

    fn view_record(&mut self, id: RecordId) -> DispatchResult {
        let Some(record) = self.state.registry.get(id) else {
            self.notify("File not found", Severity::Error);
            return DispatchResult::changed(true);
        };
        let (name, content) = (record.name.clone(), record.content.clone());

        // A fresh handle per view; any previous one is released first.
        self.release_viewer_handle();

        let handle = self.state.handles.create(content);
        let doc = self
            .state
            .handles
            .get(handle)
            .map(|content| PreviewDoc::parse(&content))
            .unwrap_or_default();

        self.state.viewer = ViewerState::Showing(ViewerPane {
            record_id: id,
            title: name,
            doc,
            handle,
            release_at: Some(Instant::now() + self.config.release_grace),
            scroll: 0,
        });
        self.state.focus = FocusTarget::Viewer;
        DispatchResult::changed(true)
    }

    fn close_viewer(&mut self) -> bool {
        if !self.state.viewer.is_showing() {
            return false;
        }
        self.release_viewer_handle();
        self.state.viewer = ViewerState::Hidden;
        self.state.focus = FocusTarget::List;
        true
    }

    fn release_viewer_handle(&mut self) {
        if let ViewerState::Showing(pane) = &mut self.state.viewer {
            self.state.handles.revoke(pane.handle);
            pane.release_at = None;
        }
    }

    // -----------------------------------------------------------------------
    // Delete
    // -----------------------------------------------------------------------

    fn request_delete(&mut self, id: RecordId) -> DispatchResult {
        let Some(record) = self.state.registry.get(id) else {
            self.notify("File not found", Severity::Error);
            return DispatchResult::changed(true);
        };
        self.state.confirm.show(
            format!("Delete \"{}\"?", record.name),
            PendingAction::DeleteRecord { id },
        );
        DispatchResult::changed(true)
    }

    fn delete_record(&mut self, id: RecordId) -> DispatchResult {
        let Some(removed) = self.state.registry.remove(id) else {
            self.notify("File not found", Severity::Error);
            return DispatchResult::changed(true);
        };

        // Closing is keyed on the shown record's id, not its title, so two
        // records briefly sharing a name cannot close the wrong pane.
        if self.state.viewer.showing_record() == Some(id) {
            self.close_viewer();
        }
        self.state.list.clamp_to(self.state.registry.len());
        self.notify(format!("File \"{}\" deleted", removed.name), Severity::Success);
        DispatchResult::changed(true)
    }

    // -----------------------------------------------------------------------
    // Picker
    // -----------------------------------------------------------------------

    fn picker_activate(&mut self) -> DispatchResult {
        let Some(entry) = self.state.picker.selected_entry() else {
            return DispatchResult::changed(false);
        };

        if entry.is_dir {
            let next = self.state.picker.cwd.join(&entry.name);
            self.state.picker.open(next.clone());
            return DispatchResult {
                effects: vec![Effect::LoadDir(next)],
                state_changed: true,
            };
        }

        let paths = self.state.picker.accept_paths();
        self.state.picker.close();
        let mut result = self.submit_paths(paths);
        result.state_changed = true;
        result
    }

    // -----------------------------------------------------------------------
    // Housekeeping
    // -----------------------------------------------------------------------

    fn tick(&mut self, now: Instant) -> DispatchResult {
        let changed = self.state.notices.expire(now);

        // Grace-period release of the preview handle. The pane keeps its
        // parsed document; only the backing content reference is dropped.
        if let ViewerState::Showing(pane) = &mut self.state.viewer {
            if pane.release_at.is_some_and(|at| at <= now) {
                self.state.handles.revoke(pane.handle);
                pane.release_at = None;
            }
        }

        DispatchResult::changed(changed)
    }

    fn move_list_selection(&mut self, delta: isize) -> bool {
        let len = self.state.registry.len();
        if len == 0 {
            return false;
        }
        let max = len - 1;
        let next = if delta < 0 {
            self.state.list.selected.saturating_sub(delta.unsigned_abs())
        } else {
            (self.state.list.selected + delta as usize).min(max)
        };
        let changed = next != self.state.list.selected;
        self.state.list.selected = next;
        self.state.list.scroll_into_view();
        changed
    }

    fn selected_record_id(&self) -> Option<RecordId> {
        self.state
            .registry
            .iter()
            .nth(self.state.list.selected)
            .map(|record| record.id)
    }

    fn notify(&mut self, message: impl Into<String>, severity: Severity) {
        self.state.notices.push(message, severity);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/store.rs"]
mod tests;
