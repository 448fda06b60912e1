//! Toy file system for the FakeOS desktop
//!
//! Models the two ordered collections the desktop operates on:
//!
//! - **Active files**: what the file explorer lists
//! - **Recycle bin**: soft-deleted entries, newest first
//!
//! A file is only ever a name and a display size; there is no content.
//! Entries move between the collections (never exist in both), and the
//! whole store is ephemeral per session.

mod entry;
mod error;
mod store;

pub use entry::{FileEntry, FileId, RecycleEntry};
pub use error::FsError;
pub use store::FileStore;
