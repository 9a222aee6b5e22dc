//! Foundation types for the protodesc compiler front end.
//!
//! This module provides the fundamental identifiers used throughout the crate:
//! - [`FileId`] - index of a file within a [`crate::semantic::FileSet`]
//! - [`ItemId`] - index of a descriptor item within one file's arena
//! - [`ItemRef`] - cross-file handle (file + item)
//! - [`Label`] - field cardinality label
//!
//! This module has NO dependencies on other protodesc modules.

use std::fmt;

/// Unique identifier for a file in a file set.
/// Uses u32 for compact storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FileId(pub u32);

impl FileId {
    /// Create a new FileId from an index
    pub fn new(index: usize) -> Self {
        Self(index as u32)
    }

    /// Get the index into the file list
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Unique identifier for a descriptor item in a file's arena.
/// Uses u32 for compact storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(pub u32);

impl ItemId {
    /// Create a new ItemId from an index
    pub fn new(index: usize) -> Self {
        Self(index as u32)
    }

    /// Get the index into the arena
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// The file item itself always occupies slot 0 of its arena.
    pub const FILE: ItemId = ItemId(0);
}

/// A cross-file handle to a descriptor item.
///
/// Intra-file relationships (parent links, child lists) are plain [`ItemId`]s;
/// anything that can cross a file boundary — resolved custom types, namespace
/// exports, resolved default-value sources — carries an `ItemRef`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ItemRef {
    pub file: FileId,
    pub item: ItemId,
}

impl ItemRef {
    pub fn new(file: FileId, item: ItemId) -> Self {
        Self { file, item }
    }
}

/// Cardinality label on a field or group declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    Required,
    Optional,
    Repeated,
}

impl Label {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::Optional => "optional",
            Self::Repeated => "repeated",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
