//! Small directive descriptors: options, packages, imports, extends, and
//! attached annotations.

use smol_str::SmolStr;

use crate::base::FileId;

use super::raw::RawItem;
use super::types::Value;

/// An option in a file, message, or field scope. Duplicate keys within one
/// scope fail validation.
#[derive(Debug, Clone, PartialEq)]
pub struct OptionDecl {
    pub key: SmolStr,
    pub value: Value,
}

/// The package directive of a file, e.g. `package media.search;`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Package {
    /// The dotted package path as written.
    pub path: SmolStr,
}

/// An import statement. The target is unresolved until the file set is
/// assembled and the resolution pipeline wires it; set once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Import {
    /// The imported path as written, relative to the file-set root.
    pub path: SmolStr,
    pub target: Option<FileId>,
}

impl Import {
    pub fn new(path: SmolStr) -> Self {
        Self { path, target: None }
    }
}

/// An extend block. Parses like a message; the pending items are kept for
/// eventual application to the named message but are never semantically
/// merged here.
#[derive(Debug, Clone, PartialEq)]
pub struct Extend {
    /// Name of the message being extended.
    pub name: SmolStr,
    /// Structurally parsed items, unapplied.
    pub items: Vec<RawItem>,
}

/// A documentation annotation attached to a descriptor item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    /// The raw documentation text, unparsed.
    pub text: String,
}
