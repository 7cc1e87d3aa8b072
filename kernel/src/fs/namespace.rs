/// The namespace store: a fixed pool of entry slots.
///
/// Entries live in `CAPACITY` slots, files and directories sharing the one
/// pool. Removal vacates a slot in place and bumps its generation; nothing
/// else moves, so parent references held by other entries never shift.
/// A separate index keeps live slots in insertion order for listings.
///
/// Name lookups are case-sensitive and exact. Relative operations (`rename`,
/// `remove`, `move_entry`, `sibling`) address the current directory, which
/// starts at root.
use core::fmt;

use log::debug;

use crate::config::{CAPACITY, STRICT_TOUCH};

use super::entry::{make_name, DirRef, Entry, EntryId, EntryKind};

struct Slot {
    generation: u32,
    entry: Option<Entry>,
}

impl Slot {
    const fn vacant() -> Self {
        Self {
            generation: 0,
            entry: None,
        }
    }
}

/// In-memory tree of files and directories.
pub struct Namespace {
    slots: [Slot; CAPACITY],
    /// Live slot indices, oldest first.
    order: heapless::Vec<u16, CAPACITY>,
    current: DirRef,
}

impl Namespace {
    /// Create an empty namespace addressing root.
    pub fn new() -> Self {
        Self {
            slots: [const { Slot::vacant() }; CAPACITY],
            order: heapless::Vec::new(),
            current: DirRef::Root,
        }
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn capacity(&self) -> usize {
        CAPACITY
    }

    pub fn is_full(&self) -> bool {
        self.len() == CAPACITY
    }

    /// Directory addressed by relative operations.
    pub fn current(&self) -> DirRef {
        self.current
    }

    /// Point relative operations at another directory.
    ///
    /// No shell command calls this; the command set only ever works in
    /// root.
    pub fn set_current(&mut self, dir: DirRef) -> Result<(), FsError> {
        if !self.is_live_dir(dir) {
            return Err(FsError::InvalidParent);
        }
        self.current = dir;
        Ok(())
    }

    /// Resolve a handle. Stale handles resolve to `None`.
    pub fn get(&self, id: EntryId) -> Option<&Entry> {
        let slot = self.slots.get(id.index as usize)?;
        if slot.generation != id.generation {
            return None;
        }
        slot.entry.as_ref()
    }

    fn get_mut(&mut self, id: EntryId) -> Option<&mut Entry> {
        let slot = self.slots.get_mut(id.index as usize)?;
        if slot.generation != id.generation {
            return None;
        }
        slot.entry.as_mut()
    }

    /// All live entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (EntryId, &Entry)> + '_ {
        self.order.iter().filter_map(move |&index| {
            let slot = &self.slots[index as usize];
            slot.entry.as_ref().map(|entry| {
                let id = EntryId {
                    index,
                    generation: slot.generation,
                };
                (id, entry)
            })
        })
    }

    /// Entries directly under `parent`, in insertion order.
    pub fn list(&self, parent: DirRef) -> impl Iterator<Item = (EntryId, &Entry)> + '_ {
        self.iter().filter(move |(_, entry)| entry.parent == parent)
    }

    /// First directory named `name` under `parent`.
    pub fn find(&self, name: &str, parent: DirRef) -> Option<EntryId> {
        self.list(parent)
            .find(|(_, entry)| entry.is_dir() && entry.name() == name)
            .map(|(id, _)| id)
    }

    /// First entry of any kind named `name` under the current directory.
    pub fn sibling(&self, name: &str) -> Option<EntryId> {
        self.named_under(name, self.current)
    }

    fn named_under(&self, name: &str, parent: DirRef) -> Option<EntryId> {
        self.list(parent)
            .find(|(_, entry)| entry.name() == name)
            .map(|(id, _)| id)
    }

    fn has_children(&self, dir: EntryId) -> bool {
        self.list(DirRef::Dir(dir)).next().is_some()
    }

    fn is_live_dir(&self, dir: DirRef) -> bool {
        match dir {
            DirRef::Root => true,
            DirRef::Dir(id) => self.get(id).is_some_and(Entry::is_dir),
        }
    }

    /// Absolute path of the current directory, for display.
    ///
    /// Root renders as `/`; any other directory as `/` followed by each
    /// directory name and a trailing `/`, outermost first.
    pub fn current_path(&self) -> PathDisplay<'_> {
        PathDisplay {
            ns: self,
            dir: self.current,
        }
    }

    /// Create an entry under `parent`.
    ///
    /// Directories may not share a name with any sibling. Files are only
    /// checked when built with `strict-touch`.
    pub fn create(&mut self, name: &str, kind: EntryKind, parent: DirRef) -> Result<EntryId, FsError> {
        if self.is_full() {
            return Err(FsError::CapacityExceeded);
        }
        let name = make_name(name)?;
        if !self.is_live_dir(parent) {
            return Err(FsError::InvalidParent);
        }

        let unique = kind == EntryKind::Directory || STRICT_TOUCH;
        if unique && self.named_under(&name, parent).is_some() {
            return Err(FsError::AlreadyExists);
        }

        let index = self
            .slots
            .iter()
            .position(|slot| slot.entry.is_none())
            .ok_or(FsError::CapacityExceeded)?;
        self.order
            .push(index as u16)
            .map_err(|_| FsError::CapacityExceeded)?;

        let slot = &mut self.slots[index];
        debug!("create {:?} '{}' in slot {} (gen {})", kind, name, index, slot.generation);
        slot.entry = Some(Entry::new(name, kind, parent));

        Ok(EntryId {
            index: index as u16,
            generation: slot.generation,
        })
    }

    /// Rename the first sibling named `old` to `new`.
    ///
    /// `new` is not checked against other siblings.
    pub fn rename(&mut self, old: &str, new: &str) -> Result<EntryId, FsError> {
        let id = self.sibling(old).ok_or(FsError::NotFound)?;
        let new = make_name(new)?;
        let entry = self.get_mut(id).ok_or(FsError::NotFound)?;
        debug!("rename '{}' -> '{}'", entry.name, new);
        entry.name = new;
        Ok(id)
    }

    /// Move `source` to `dest` within the current directory.
    ///
    /// Only the name changes; this is `rename` under another verb and is
    /// not offered by the command dispatcher.
    pub fn move_entry(&mut self, source: &str, dest: &str) -> Result<EntryId, FsError> {
        self.rename(source, dest)
    }

    /// Remove the first sibling named `name`.
    ///
    /// Directories must be empty. On success the removed entry is returned
    /// and every handle to it goes stale.
    pub fn remove(&mut self, name: &str) -> Result<Entry, FsError> {
        let id = self.sibling(name).ok_or(FsError::NotFound)?;
        let is_dir = self.get(id).is_some_and(Entry::is_dir);
        if is_dir && self.has_children(id) {
            return Err(FsError::NotEmpty);
        }

        let slot = &mut self.slots[id.index as usize];
        let entry = slot.entry.take().ok_or(FsError::NotFound)?;
        slot.generation = slot.generation.wrapping_add(1);
        self.order.retain(|&index| index != id.index);
        debug!("remove {:?} '{}' from slot {}", entry.kind, entry.name, id.index);
        Ok(entry)
    }
}

impl Default for Namespace {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders a directory's absolute path by walking parent links.
pub struct PathDisplay<'a> {
    ns: &'a Namespace,
    dir: DirRef,
}

impl PathDisplay<'_> {
    fn write_dir(&self, dir: DirRef, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match dir {
            DirRef::Root => f.write_str("/"),
            DirRef::Dir(id) => match self.ns.get(id) {
                Some(entry) => {
                    self.write_dir(entry.parent, f)?;
                    write!(f, "{}/", entry.name())
                }
                None => f.write_str("/"),
            },
        }
    }
}

impl fmt::Display for PathDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_dir(self.dir, f)
    }
}

/// Namespace operation failures. `Display` gives the message shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FsError {
    CapacityExceeded,
    AlreadyExists,
    NotFound,
    NotEmpty,
    InvalidName,
    NameTooLong,
    InvalidParent,
}

impl fmt::Display for FsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FsError::CapacityExceeded => write!(f, "Maximum number of entries reached"),
            FsError::AlreadyExists => write!(f, "Directory already exists"),
            FsError::NotFound => write!(f, "Entry not found"),
            FsError::NotEmpty => write!(f, "Directory is not empty"),
            FsError::InvalidName => write!(f, "Invalid name"),
            FsError::NameTooLong => write!(f, "Name too long"),
            FsError::InvalidParent => write!(f, "Parent is not a directory"),
        }
    }
}
