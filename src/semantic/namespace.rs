//! The cross-file namespace tree.
//!
//! A trie keyed by package-path segments. Each node holds one merged map from
//! local name to either a child namespace or an exported declaration, so
//! qualified-name lookup works independently of which file declared a name.
//! Nodes are arena slots with parent/child indices; resolution logic lives in
//! [`crate::semantic::Resolver`], keeping this a pure data structure.

use indexmap::IndexMap;
use smol_str::SmolStr;

use crate::base::ItemRef;

/// Unique identifier for a namespace node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NamespaceId(pub u32);

impl NamespaceId {
    pub fn new(index: usize) -> Self {
        Self(index as u32)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// The root node always occupies slot 0.
    pub const ROOT: NamespaceId = NamespaceId(0);
}

/// One entry of a namespace node's merged name map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NsEntry {
    /// A nested package segment.
    Child(NamespaceId),
    /// A declaration exported by some file registered at this node.
    Item(ItemRef),
}

/// A single trie node.
#[derive(Debug, Clone)]
pub struct NamespaceNode {
    /// The dotted prefix of this node, e.g. `.media.search`. Empty at the
    /// root; every non-root prefix carries a leading dot.
    pub prefix: String,
    pub parent: Option<NamespaceId>,
    /// Child namespaces and exported declarations share one map; a name can
    /// only ever be one of the two.
    pub entries: IndexMap<SmolStr, NsEntry>,
}

/// The namespace trie for a whole file set.
#[derive(Debug, Clone)]
pub struct NamespaceTree {
    nodes: Vec<NamespaceNode>,
}

impl NamespaceTree {
    pub fn new() -> Self {
        Self {
            nodes: vec![NamespaceNode {
                prefix: String::new(),
                parent: None,
                entries: IndexMap::new(),
            }],
        }
    }

    pub fn root(&self) -> NamespaceId {
        NamespaceId::ROOT
    }

    pub fn node(&self, id: NamespaceId) -> &NamespaceNode {
        &self.nodes[id.index()]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Look up a name in one node, no fallback.
    pub fn entry(&self, at: NamespaceId, name: &str) -> Option<NsEntry> {
        self.node(at).entries.get(name).copied()
    }

    /// Get the child node for `segment`, creating it if absent. Returns
    /// `None` when the segment name is already taken by an exported
    /// declaration.
    pub(crate) fn ensure_child(&mut self, at: NamespaceId, segment: &str) -> Option<NamespaceId> {
        match self.node(at).entries.get(segment) {
            Some(NsEntry::Child(child)) => Some(*child),
            Some(NsEntry::Item(_)) => None,
            None => {
                let child = NamespaceId::new(self.nodes.len());
                let prefix = format!("{}.{segment}", self.node(at).prefix);
                self.nodes.push(NamespaceNode {
                    prefix,
                    parent: Some(at),
                    entries: IndexMap::new(),
                });
                self.nodes[at.index()]
                    .entries
                    .insert(SmolStr::new(segment), NsEntry::Child(child));
                Some(child)
            }
        }
    }

    /// Merge one exported name into a node. On a collision the existing
    /// entry is returned untouched (first wins, second reports).
    pub(crate) fn insert_export(
        &mut self,
        at: NamespaceId,
        name: SmolStr,
        item: ItemRef,
    ) -> Result<(), NsEntry> {
        if let Some(existing) = self.node(at).entries.get(&name) {
            return Err(*existing);
        }
        self.nodes[at.index()].entries.insert(name, NsEntry::Item(item));
        Ok(())
    }
}

impl Default for NamespaceTree {
    fn default() -> Self {
        Self::new()
    }
}
