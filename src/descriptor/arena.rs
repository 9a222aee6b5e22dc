//! Arena storage for one file's descriptor items.

use crate::base::ItemId;

use super::directives::{Annotation, Import, OptionDecl, Package};
use super::enums::{Enum, EnumEntry};
use super::field::Field;
use super::file::File;
use super::item::{Item, ItemKind, Node};
use super::message::Message;

/// Arena of descriptor items for a single file — single source of truth.
///
/// All parent/child relationships are indices into this arena, so the
/// parent-link/child-list cycles of the descriptor graph never become
/// ownership cycles. Slot 0 always holds the [`File`] item.
#[derive(Debug, Clone)]
pub struct Arena {
    nodes: Vec<Node>,
}

impl Arena {
    /// Create an arena with an empty file descriptor in slot 0.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::new(Item::File(File::new()))],
        }
    }

    pub fn alloc(&mut self, item: Item) -> ItemId {
        let id = ItemId::new(self.nodes.len());
        self.nodes.push(Node::new(item));
        id
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ItemId, &Node)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (ItemId::new(i), n))
    }

    pub fn node(&self, id: ItemId) -> &Node {
        &self.nodes[id.index()]
    }

    pub fn node_mut(&mut self, id: ItemId) -> &mut Node {
        &mut self.nodes[id.index()]
    }

    pub fn kind(&self, id: ItemId) -> ItemKind {
        self.node(id).item.kind()
    }

    /// Diagnostic rendering of an item, e.g. `[message "Search"]`.
    pub fn display(&self, id: ItemId) -> String {
        self.node(id).item.display()
    }

    /// The file descriptor in slot 0.
    pub fn file(&self) -> &File {
        match &self.nodes[0].item {
            Item::File(f) => f,
            _ => unreachable!("arena slot 0 is always the file"),
        }
    }

    pub fn file_mut(&mut self) -> &mut File {
        match &mut self.nodes[0].item {
            Item::File(f) => f,
            _ => unreachable!("arena slot 0 is always the file"),
        }
    }

    // ============================================================
    // Kind-checked accessors. These panic on a kind mismatch, which
    // indicates a bug in registration dispatch, not user input.
    // ============================================================

    pub fn message(&self, id: ItemId) -> &Message {
        match &self.node(id).item {
            Item::Message(m) => m,
            other => panic!("expected message, got {}", other.display()),
        }
    }

    pub(crate) fn message_mut(&mut self, id: ItemId) -> &mut Message {
        match &mut self.node_mut(id).item {
            Item::Message(m) => m,
            other => panic!("expected message, got {}", other.display()),
        }
    }

    pub fn field(&self, id: ItemId) -> &Field {
        match &self.node(id).item {
            Item::Field(f) => f,
            other => panic!("expected field, got {}", other.display()),
        }
    }

    pub(crate) fn field_mut(&mut self, id: ItemId) -> &mut Field {
        match &mut self.node_mut(id).item {
            Item::Field(f) => f,
            other => panic!("expected field, got {}", other.display()),
        }
    }

    pub fn enum_decl(&self, id: ItemId) -> &Enum {
        match &self.node(id).item {
            Item::Enum(e) => e,
            other => panic!("expected enum, got {}", other.display()),
        }
    }

    pub(crate) fn enum_mut(&mut self, id: ItemId) -> &mut Enum {
        match &mut self.node_mut(id).item {
            Item::Enum(e) => e,
            other => panic!("expected enum, got {}", other.display()),
        }
    }

    pub fn enum_entry(&self, id: ItemId) -> &EnumEntry {
        match &self.node(id).item {
            Item::EnumEntry(e) => e,
            other => panic!("expected enum entry, got {}", other.display()),
        }
    }

    pub fn option_decl(&self, id: ItemId) -> &OptionDecl {
        match &self.node(id).item {
            Item::Option(o) => o,
            other => panic!("expected option, got {}", other.display()),
        }
    }

    pub fn package(&self, id: ItemId) -> &Package {
        match &self.node(id).item {
            Item::Package(p) => p,
            other => panic!("expected package, got {}", other.display()),
        }
    }

    pub fn import(&self, id: ItemId) -> &Import {
        match &self.node(id).item {
            Item::Import(i) => i,
            other => panic!("expected import, got {}", other.display()),
        }
    }

    pub(crate) fn import_mut(&mut self, id: ItemId) -> &mut Import {
        match &mut self.node_mut(id).item {
            Item::Import(i) => i,
            other => panic!("expected import, got {}", other.display()),
        }
    }

    pub fn annotation(&self, id: ItemId) -> &Annotation {
        match &self.node(id).item {
            Item::Annotation(a) => a,
            other => panic!("expected annotation, got {}", other.display()),
        }
    }

    // ============================================================
    // Output paths (consumed by code generators)
    // ============================================================

    /// The dotted output path of an item, climbing parent links up to the
    /// file. The file contributes its resolved output namespace, so call this
    /// after the resolution pipeline for namespaced output.
    ///
    /// With `ignore_namespaces`, a message at the top of its message
    /// hierarchy returns its bare name.
    pub fn qualified_path(&self, id: ItemId, ignore_namespaces: bool) -> String {
        let node = self.node(id);
        if let Item::File(f) = &node.item {
            return f.out_namespace.clone().unwrap_or_default();
        }
        if ignore_namespaces
            && matches!(node.item, Item::Message(_))
            && !node
                .parent
                .is_some_and(|p| matches!(self.node(p).item, Item::Message(_)))
        {
            return node.item.name().map(|n| n.to_string()).unwrap_or_default();
        }
        let own = node.item.name().map(|n| n.as_str()).unwrap_or("");
        match node.parent {
            Some(parent) => format!("{}.{own}", self.qualified_path(parent, ignore_namespaces)),
            None => own.to_string(),
        }
    }

    /// The dotted declaration path of an item, skipping unnamed components.
    pub fn package_path(&self, id: ItemId) -> String {
        let node = self.node(id);
        if let Item::File(f) = &node.item {
            return f
                .package
                .map(|p| self.package(p).path.to_string())
                .unwrap_or_default();
        }
        let own = node.item.name().map(|n| n.as_str()).unwrap_or("");
        match node.parent {
            Some(parent) => {
                let parent_path = self.package_path(parent);
                if parent_path.is_empty() {
                    own.to_string()
                } else {
                    format!("{parent_path}.{own}")
                }
            }
            None => own.to_string(),
        }
    }
}

impl Default for Arena {
    fn default() -> Self {
        Self::new()
    }
}
