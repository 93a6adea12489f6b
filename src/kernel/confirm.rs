//! Confirm dialog state.

use super::registry::RecordId;

/// What to run when the user confirms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingAction {
    DeleteRecord { id: RecordId },
}

#[derive(Debug, Default)]
pub struct ConfirmState {
    pub visible: bool,
    pub message: String,
    pub pending: Option<PendingAction>,
}

impl ConfirmState {
    pub fn show(&mut self, message: String, pending: PendingAction) {
        self.visible = true;
        self.message = message;
        self.pending = Some(pending);
    }

    pub fn dismiss(&mut self) -> Option<PendingAction> {
        let pending = self.pending.take();
        self.visible = false;
        self.message.clear();
        pending
    }
}
