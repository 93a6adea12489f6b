//! Transient content handles for the preview surface.
//!
//! A handle is the object-URL analog: it grants the preview pane access to a
//! record's content without the pane holding the record itself. Handles are
//! created fresh per view and must be revoked explicitly; the store owns the
//! backing content for exactly as long as a handle is live.

use std::fmt;
use std::sync::Arc;

use rustc_hash::FxHashMap;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HandleId(Uuid);

impl fmt::Display for HandleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Default)]
pub struct ContentHandleStore {
    handles: FxHashMap<HandleId, Arc<str>>,
}

impl ContentHandleStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create(&mut self, content: Arc<str>) -> HandleId {
        let id = HandleId(Uuid::now_v7());
        self.handles.insert(id, content);
        id
    }

    pub fn get(&self, id: HandleId) -> Option<Arc<str>> {
        self.handles.get(&id).cloned()
    }

    /// Revokes a handle. Returns false when the handle was already revoked;
    /// revoking twice is a no-op.
    pub fn revoke(&mut self, id: HandleId) -> bool {
        self.handles.remove(&id).is_some()
    }

    pub fn is_live(&self, id: HandleId) -> bool {
        self.handles.contains_key(&id)
    }

    pub fn live_count(&self) -> usize {
        self.handles.len()
    }
}
