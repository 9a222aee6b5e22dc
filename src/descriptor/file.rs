//! The file descriptor: the root scope of one source file.

use indexmap::IndexMap;
use smol_str::SmolStr;

use crate::base::ItemId;
use crate::semantic::NamespaceId;

/// The root descriptor of one schema file. Always occupies slot 0 of its
/// arena.
///
/// Only messages, options, a single package directive, imports, and extends
/// are legal at the top level; bare fields and enums are rejected during
/// registration.
#[derive(Debug, Clone, Default)]
pub struct File {
    /// Root-relative path, assigned when the file is added to a set.
    pub path: String,
    /// Top-level messages, in declaration order.
    pub messages: Vec<ItemId>,
    /// Top-level exports by name (messages only).
    pub by_name: IndexMap<SmolStr, ItemId>,
    /// File options by key.
    pub options: IndexMap<SmolStr, ItemId>,
    /// Imports in declaration order; unresolved until the set is assembled.
    pub imports: Vec<ItemId>,
    /// The package directive, at most one.
    pub package: Option<ItemId>,
    /// Extend blocks, accepted structurally but never applied.
    pub extends: Vec<ItemId>,
    /// The resolved output namespace. None until resolution runs.
    pub out_namespace: Option<String>,
    /// The namespace-tree node this file was merged into. None until the set
    /// is assembled.
    pub namespace: Option<NamespaceId>,
}

impl File {
    pub fn new() -> Self {
        Self::default()
    }
}
