//! File entry types

use serde::{Deserialize, Serialize};

/// Unique file identifier, stable across delete/restore
pub type FileId = u32;

/// A file in the simulated file system
///
/// `size` is a display label ("4.2MB"), not a byte count; the simulated
/// desktop never inspects it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEntry {
    /// Unique identifier
    pub id: FileId,
    /// File name, unique among active files
    pub name: String,
    /// Human-readable size label
    pub size: String,
}

impl FileEntry {
    /// Create a new file entry
    pub fn new(id: FileId, name: impl Into<String>, size: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            size: size.into(),
        }
    }
}

/// A soft-deleted file waiting in the recycle bin
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecycleEntry {
    /// The original entry, unchanged
    pub entry: FileEntry,
    /// When the file was deleted (ms since epoch)
    pub deleted_at: i64,
}

impl RecycleEntry {
    /// Wrap a file entry with a deletion timestamp
    pub fn new(entry: FileEntry, deleted_at: i64) -> Self {
        Self { entry, deleted_at }
    }

    /// Name of the deleted file
    #[inline]
    pub fn name(&self) -> &str {
        &self.entry.name
    }

    /// Id of the deleted file
    #[inline]
    pub fn id(&self) -> FileId {
        self.entry.id
    }
}
