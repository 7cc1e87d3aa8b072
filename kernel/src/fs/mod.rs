/// In-memory namespace of files and directories.
///
/// No backing storage: entries exist only while the kernel runs and carry
/// no content. The tree is formed by parent references rooted at an
/// implicit root directory.
mod entry;
mod namespace;

pub use entry::{DirRef, Entry, EntryId, EntryKind, Name};
pub use namespace::{FsError, Namespace, PathDisplay};
