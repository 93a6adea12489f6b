//! In-memory store of staged HTML files.
//!
//! The registry is the single source of truth for what has been staged this
//! session. Insertion order is display order. Nothing here touches the
//! filesystem; records arrive fully read.

use std::fmt;
use std::sync::Arc;

use uuid::Uuid;

/// Identifier for one staged file. Time-ordered with a random component;
/// uniqueness is best-effort, never reused within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RecordId(Uuid);

impl RecordId {
    pub fn generate() -> Self {
        Self(Uuid::now_v7())
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone)]
pub struct FileRecord {
    pub id: RecordId,
    /// Original file name; the human-facing identity and the dedup key.
    pub name: String,
    /// Byte length of the content, for display only.
    pub size: u64,
    /// Full text content, read once at accept time. Immutable thereafter.
    pub content: Arc<str>,
    /// Display-formatted local timestamp captured at record creation.
    pub uploaded_at: String,
}

impl FileRecord {
    pub fn new(name: String, size: u64, content: Arc<str>, uploaded_at: String) -> Self {
        Self {
            id: RecordId::generate(),
            name,
            size,
            content,
            uploaded_at,
        }
    }
}

/// Ordered collection of [`FileRecord`]s. Append assumes the caller already
/// deduplicated by name; all mutation is synchronous on the UI thread.
#[derive(Debug, Default)]
pub struct Registry {
    records: Vec<FileRecord>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, record: FileRecord) -> RecordId {
        debug_assert!(self.find_by_name(&record.name).is_none());
        let id = record.id;
        self.records.push(record);
        id
    }

    /// Removes a record by id. No-op when the id is absent.
    pub fn remove(&mut self, id: RecordId) -> Option<FileRecord> {
        let index = self.records.iter().position(|r| r.id == id)?;
        Some(self.records.remove(index))
    }

    pub fn get(&self, id: RecordId) -> Option<&FileRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn find_by_name(&self, name: &str) -> Option<&FileRecord> {
        self.records.iter().find(|r| r.name == name)
    }

    pub fn position(&self, id: RecordId) -> Option<usize> {
        self.records.iter().position(|r| r.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FileRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn total_size(&self) -> u64 {
        self.records.iter().map(|r| r.size).sum()
    }
}
