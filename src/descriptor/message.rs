//! Message and group descriptors.

use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use smol_str::SmolStr;

use crate::base::{ItemId, Label};

/// A message declaration, or a group when `group` is set.
///
/// A group parses like a nested message but also behaves like a field: it
/// carries a label and a tag, and its internal tags live in the enclosing
/// message's tag space. When a group is registered on a message, the group's
/// tag-map entries are copied into the parent's tag map but its name map is
/// not merged — group-internal names stay local to the group. (The tag-only
/// merge mirrors the reference behavior; whether it is the intended final
/// semantics is unresolved upstream.)
#[derive(Debug, Clone)]
pub struct Message {
    pub name: SmolStr,
    /// Label and tag, present only on groups.
    pub group: Option<(Label, u32)>,
    /// Fields in declaration order.
    pub fields: Vec<ItemId>,
    /// Nested enums in declaration order.
    pub enums: Vec<ItemId>,
    /// Nested messages in declaration order. Groups appear here as well as in
    /// `groups`.
    pub messages: Vec<ItemId>,
    /// Nested groups in declaration order.
    pub groups: Vec<ItemId>,
    /// Tag number to owning field or group.
    pub by_tag: FxHashMap<u32, ItemId>,
    /// Local name scope: fields, enums, promoted enum entries, nested
    /// messages, and groups.
    pub by_name: IndexMap<SmolStr, ItemId>,
}

impl Message {
    pub fn new(name: SmolStr) -> Self {
        Self {
            name,
            group: None,
            fields: Vec::new(),
            enums: Vec::new(),
            messages: Vec::new(),
            groups: Vec::new(),
            by_tag: FxHashMap::default(),
            by_name: IndexMap::new(),
        }
    }

    pub fn group(name: SmolStr, label: Label, tag: u32) -> Self {
        let mut msg = Self::new(name);
        msg.group = Some((label, tag));
        msg
    }

    pub fn is_group(&self) -> bool {
        self.group.is_some()
    }
}
