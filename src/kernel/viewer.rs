//! Preview pane state machine.
//!
//! Two states: hidden and showing one record. The pane reads the record's
//! content exclusively through a transient content handle; the handle is
//! revoked on close, on re-view, and after a short grace period once the
//! pane has loaded the document.

use std::time::Instant;

use super::handle::HandleId;
use super::preview::PreviewDoc;
use super::registry::RecordId;

pub const DEFAULT_VIEWER_TITLE: &str = "Preview";

#[derive(Debug, Default)]
pub enum ViewerState {
    #[default]
    Hidden,
    Showing(ViewerPane),
}

#[derive(Debug)]
pub struct ViewerPane {
    pub record_id: RecordId,
    pub title: String,
    pub doc: PreviewDoc,
    /// Live until revoked; kept here so close/tick can release it.
    pub handle: HandleId,
    /// Pending grace-period release; `None` once the handle is revoked.
    pub release_at: Option<Instant>,
    pub scroll: usize,
}

impl ViewerState {
    pub fn is_showing(&self) -> bool {
        matches!(self, ViewerState::Showing(_))
    }

    pub fn pane(&self) -> Option<&ViewerPane> {
        match self {
            ViewerState::Showing(pane) => Some(pane),
            ViewerState::Hidden => None,
        }
    }

    pub fn pane_mut(&mut self) -> Option<&mut ViewerPane> {
        match self {
            ViewerState::Showing(pane) => Some(pane),
            ViewerState::Hidden => None,
        }
    }

    pub fn showing_record(&self) -> Option<RecordId> {
        self.pane().map(|pane| pane.record_id)
    }

    /// Title for the pane chrome; the default when nothing is shown.
    pub fn title(&self) -> &str {
        self.pane()
            .map(|pane| pane.title.as_str())
            .unwrap_or(DEFAULT_VIEWER_TITLE)
    }
}

impl ViewerPane {
    pub fn scroll_by(&mut self, delta: isize, page: usize) -> bool {
        let max = self.doc.line_count().saturating_sub(1);
        let next = if delta < 0 {
            self.scroll
                .saturating_sub(delta.unsigned_abs().saturating_mul(page))
        } else {
            self.scroll
                .saturating_add((delta as usize).saturating_mul(page))
                .min(max)
        };
        let changed = next != self.scroll;
        self.scroll = next;
        changed
    }
}
