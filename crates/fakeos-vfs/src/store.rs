//! In-memory file store with soft-delete semantics

use serde::{Deserialize, Serialize};

use crate::entry::{FileEntry, FileId, RecycleEntry};
use crate::error::FsError;

/// The session file store: active files plus the recycle bin.
///
/// Active files are ordered by recency (restored or newly added entries go
/// to the head); the recycle bin is ordered newest-deleted first. A name
/// lives in at most one of the two collections at any time.
///
/// Timestamps are injected by the caller (ms since epoch) so tests stay
/// deterministic.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct FileStore {
    /// Active files, restoration/insertion order (head = most recent)
    files: Vec<FileEntry>,
    /// Soft-deleted files, newest first
    recycle: Vec<RecycleEntry>,
    /// Next file id
    next_id: FileId,
}

impl FileStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            files: Vec::new(),
            recycle: Vec::new(),
            next_id: 1,
        }
    }

    /// Create a store with the default session contents
    pub fn with_seed() -> Self {
        let mut store = Self::new();
        for (name, size) in [
            ("project1.zip", "4.2MB"),
            ("design.sketch", "2.6MB"),
            ("notes.txt", "8KB"),
        ] {
            // Seed names are unique, so this cannot fail
            let _ = store.add(name, size);
        }
        store
    }

    /// Add a new active file at the end of the list.
    ///
    /// Rejects empty names and names already present in either collection,
    /// which is what keeps the two collections disjoint.
    pub fn add(&mut self, name: &str, size: &str) -> Result<FileId, FsError> {
        if name.is_empty() {
            return Err(FsError::EmptyName);
        }
        if self.name_in_use(name) {
            return Err(FsError::already_exists(name));
        }

        let id = self.next_id;
        self.next_id += 1;
        self.files.push(FileEntry::new(id, name, size));
        Ok(id)
    }

    /// Move an active file to the recycle bin, stamping the deletion time.
    pub fn remove(&mut self, name: &str, now_ms: i64) -> Result<FileId, FsError> {
        let index = self
            .files
            .iter()
            .position(|f| f.name == name)
            .ok_or_else(|| FsError::not_found(name))?;

        let entry = self.files.remove(index);
        let id = entry.id;
        self.recycle.insert(0, RecycleEntry::new(entry, now_ms));
        Ok(id)
    }

    /// Move an active file to the recycle bin by id.
    ///
    /// Returns the file name, or `None` when the id is unknown (the UI
    /// delete button silently ignores stale ids).
    pub fn remove_by_id(&mut self, id: FileId, now_ms: i64) -> Option<String> {
        let index = self.files.iter().position(|f| f.id == id)?;
        let entry = self.files.remove(index);
        let name = entry.name.clone();
        self.recycle.insert(0, RecycleEntry::new(entry, now_ms));
        Some(name)
    }

    /// Move a recycle bin entry back to the head of the active list,
    /// dropping the deletion stamp.
    pub fn restore(&mut self, name: &str) -> Result<FileId, FsError> {
        let index = self
            .recycle
            .iter()
            .position(|r| r.name() == name)
            .ok_or_else(|| FsError::not_in_recycle(name))?;

        let deleted = self.recycle.remove(index);
        let id = deleted.id();
        self.files.insert(0, deleted.entry);
        Ok(id)
    }

    /// Restore a recycle bin entry by id.
    ///
    /// Returns the file name, or `None` when the id is unknown.
    pub fn restore_by_id(&mut self, id: FileId) -> Option<String> {
        let index = self.recycle.iter().position(|r| r.id() == id)?;
        let deleted = self.recycle.remove(index);
        let name = deleted.name().to_string();
        self.files.insert(0, deleted.entry);
        Some(name)
    }

    /// Permanently delete a single recycle bin entry.
    ///
    /// Returns the file name, or `None` when the id is unknown.
    pub fn purge_by_id(&mut self, id: FileId) -> Option<String> {
        let index = self.recycle.iter().position(|r| r.id() == id)?;
        Some(self.recycle.remove(index).entry.name)
    }

    /// Clear the recycle bin, returning how many entries were purged.
    pub fn empty_recycle(&mut self) -> usize {
        let purged = self.recycle.len();
        self.recycle.clear();
        purged
    }

    /// Active files in order
    #[inline]
    pub fn files(&self) -> &[FileEntry] {
        &self.files
    }

    /// Recycle bin entries, newest first
    #[inline]
    pub fn recycle(&self) -> &[RecycleEntry] {
        &self.recycle
    }

    /// Find an active file by name
    pub fn find(&self, name: &str) -> Option<&FileEntry> {
        self.files.iter().find(|f| f.name == name)
    }

    /// Find a recycle bin entry by name
    pub fn find_in_recycle(&self, name: &str) -> Option<&RecycleEntry> {
        self.recycle.iter().find(|r| r.name() == name)
    }

    /// Check if a name exists among active files
    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    /// Check if there are no active files
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Number of active files
    #[inline]
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Number of recycle bin entries
    #[inline]
    pub fn recycle_count(&self) -> usize {
        self.recycle.len()
    }

    /// Check if a name exists in either collection
    fn name_in_use(&self, name: &str) -> bool {
        self.contains(name) || self.find_in_recycle(name).is_some()
    }
}
