/// Namespace entries and the handles that name them.
use crate::config::MAX_NAME_LEN;

use super::FsError;

/// Bounded entry name.
pub type Name = heapless::String<MAX_NAME_LEN>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
}

impl EntryKind {
    /// Tag printed in listings.
    pub fn tag(self) -> &'static str {
        match self {
            EntryKind::File => "[FILE]",
            EntryKind::Directory => "[DIR]",
        }
    }
}

/// Stable handle to a live entry.
///
/// A handle stays valid until its entry is removed. After that the slot's
/// generation moves on, so the old handle resolves to nothing even once
/// the slot has been reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntryId {
    pub(super) index: u16,
    pub(super) generation: u32,
}

impl EntryId {
    /// Slot index, for diagnostics.
    pub fn index(self) -> usize {
        self.index as usize
    }
}

/// A directory position: the implicit root, or a directory entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirRef {
    Root,
    Dir(EntryId),
}

/// One file or directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub(super) name: Name,
    pub(super) size: u32,
    pub(super) kind: EntryKind,
    pub(super) parent: DirRef,
}

impl Entry {
    pub(super) fn new(name: Name, kind: EntryKind, parent: DirRef) -> Self {
        Self {
            name,
            size: 0,
            kind,
            parent,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Always zero: entries carry no content.
    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    pub fn parent(&self) -> DirRef {
        self.parent
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }
}

/// Validate and copy a name into bounded storage.
pub(super) fn make_name(name: &str) -> Result<Name, FsError> {
    if name.is_empty() || name.contains('/') || name.chars().any(char::is_whitespace) {
        return Err(FsError::InvalidName);
    }
    let mut buf = Name::new();
    buf.push_str(name).map_err(|_| FsError::NameTooLong)?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_within_limit_are_accepted() {
        assert_eq!(make_name("docs").unwrap().as_str(), "docs");
        let longest = "a".repeat(MAX_NAME_LEN);
        assert_eq!(make_name(&longest).unwrap().len(), MAX_NAME_LEN);
    }

    #[test]
    fn long_names_are_rejected() {
        let long = "a".repeat(MAX_NAME_LEN + 1);
        assert_eq!(make_name(&long), Err(FsError::NameTooLong));
    }

    #[test]
    fn malformed_names_are_rejected() {
        assert_eq!(make_name(""), Err(FsError::InvalidName));
        assert_eq!(make_name("a/b"), Err(FsError::InvalidName));
        assert_eq!(make_name("a b"), Err(FsError::InvalidName));
    }

    #[test]
    fn kind_tags() {
        assert_eq!(EntryKind::File.tag(), "[FILE]");
        assert_eq!(EntryKind::Directory.tag(), "[DIR]");
    }
}
