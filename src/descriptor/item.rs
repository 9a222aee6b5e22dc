//! The descriptor item sum type and the per-item node wrapper.

use smol_str::SmolStr;

use crate::base::ItemId;

use super::directives::{Annotation, Extend, Import, OptionDecl, Package};
use super::enums::{Enum, EnumEntry};
use super::field::Field;
use super::file::File;
use super::message::Message;

/// Payload of one descriptor item. Registration and resolution dispatch on
/// this tag, so an unhandled kind is a visible match arm rather than a
/// runtime type-test chain.
#[derive(Debug, Clone)]
pub enum Item {
    File(File),
    Message(Message),
    Field(Field),
    Enum(Enum),
    EnumEntry(EnumEntry),
    Option(OptionDecl),
    Package(Package),
    Import(Import),
    Extend(Extend),
    Annotation(Annotation),
}

/// Discriminant-only view of [`Item`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemKind {
    File,
    Message,
    Group,
    Field,
    Enum,
    EnumEntry,
    Option,
    Package,
    Import,
    Extend,
    Annotation,
}

impl ItemKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::File => "file",
            Self::Message => "message",
            Self::Group => "group",
            Self::Field => "field",
            Self::Enum => "enum",
            Self::EnumEntry => "enum entry",
            Self::Option => "option",
            Self::Package => "package",
            Self::Import => "import",
            Self::Extend => "extend",
            Self::Annotation => "annotation",
        }
    }
}

impl Item {
    pub fn kind(&self) -> ItemKind {
        match self {
            Self::File(_) => ItemKind::File,
            Self::Message(m) if m.is_group() => ItemKind::Group,
            Self::Message(_) => ItemKind::Message,
            Self::Field(_) => ItemKind::Field,
            Self::Enum(_) => ItemKind::Enum,
            Self::EnumEntry(_) => ItemKind::EnumEntry,
            Self::Option(_) => ItemKind::Option,
            Self::Package(_) => ItemKind::Package,
            Self::Import(_) => ItemKind::Import,
            Self::Extend(_) => ItemKind::Extend,
            Self::Annotation(_) => ItemKind::Annotation,
        }
    }

    /// The declared name, for the kinds that have one.
    pub fn name(&self) -> Option<&SmolStr> {
        match self {
            Self::Message(m) => Some(&m.name),
            Self::Field(f) => Some(&f.name),
            Self::Enum(e) => Some(&e.name),
            Self::EnumEntry(e) => Some(&e.name),
            Self::Option(o) => Some(&o.key),
            Self::Extend(e) => Some(&e.name),
            Self::File(_) | Self::Package(_) | Self::Import(_) | Self::Annotation(_) => None,
        }
    }

    /// Diagnostic rendering, e.g. `[message "Search"]` or `[file a.proto]`.
    pub fn display(&self) -> String {
        match self {
            Self::File(f) => format!("[file {}]", f.path),
            Self::Message(m) if m.is_group() => format!("[group \"{}\"]", m.name),
            Self::Message(m) => format!("[message \"{}\"]", m.name),
            Self::Field(f) => format!("[field \"{}\"]", f.name),
            Self::Enum(e) => format!("[enum {}]", e.name),
            Self::EnumEntry(e) => format!("[enum {} = {}]", e.name, e.tag),
            Self::Option(o) => format!("[option {} = {}]", o.key, o.value),
            Self::Package(p) => format!("[package {}]", p.path),
            Self::Import(i) => format!("[import {}]", i.path),
            Self::Extend(e) => format!("[extend {}]", e.name),
            Self::Annotation(_) => "[annotation]".to_string(),
        }
    }
}

/// One slot of a descriptor arena: the shared descriptor-item contract (a
/// non-owning parent back-reference plus the ordered annotation list) around
/// the kind-specific payload.
#[derive(Debug, Clone)]
pub struct Node {
    /// The enclosing item. The enclosing item owns its children; this link is
    /// non-owning. None for the file root and for unregistered items.
    pub parent: Option<ItemId>,
    /// Annotations attached to this item, in declaration order.
    pub annotations: Vec<ItemId>,
    pub item: Item,
}

impl Node {
    pub fn new(item: Item) -> Self {
        Self {
            parent: None,
            annotations: Vec::new(),
            item,
        }
    }
}
