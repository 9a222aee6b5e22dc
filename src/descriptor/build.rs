//! Building a descriptor arena from raw grammar records.

use tracing::trace;

use crate::base::ItemId;
use crate::semantic::SemanticResult;

use super::arena::Arena;
use super::directives::{Annotation, Extend, Import, OptionDecl, Package};
use super::enums::{Enum, EnumEntry};
use super::field::{DefaultValue, Field};
use super::file::File;
use super::item::Item;
use super::message::Message;
use super::raw::{RawDefault, RawItem};

impl File {
    /// Build a validated descriptor arena from the raw item records of one
    /// source file. Children are constructed depth-first and registered into
    /// their parent as they are built, so every structural validation rule
    /// fires at the declaration site.
    ///
    /// The file's path is not known to the grammar; assign it on the arena's
    /// file descriptor before adding the arena to a
    /// [`crate::semantic::FileSet`].
    pub fn build(items: Vec<RawItem>) -> SemanticResult<Arena> {
        let mut arena = Arena::new();
        for raw in items {
            let child = build_item(&mut arena, raw)?;
            arena.register(ItemId::FILE, child)?;
        }
        Ok(arena)
    }
}

fn build_item(arena: &mut Arena, raw: RawItem) -> SemanticResult<ItemId> {
    match raw {
        RawItem::Message { name, items } => {
            trace!(message = %name, "building message");
            let id = arena.alloc(Item::Message(Message::new(name)));
            build_children(arena, id, items)?;
            Ok(id)
        }
        RawItem::Group {
            label,
            name,
            tag,
            items,
        } => {
            let id = arena.alloc(Item::Message(Message::group(name, label, tag)));
            build_children(arena, id, items)?;
            Ok(id)
        }
        RawItem::Field {
            label,
            ty,
            name,
            tag,
            default,
            items,
        } => {
            let mut field = Field::new(label, ty, name, tag);
            field.default = default.map(|d| match d {
                RawDefault::Literal(value) => DefaultValue::Literal(value),
                RawDefault::Reference(path) => DefaultValue::Reference { path, src: None },
            });
            let id = arena.alloc(Item::Field(field));
            build_children(arena, id, items)?;
            Ok(id)
        }
        RawItem::Enum { name, items } => {
            let id = arena.alloc(Item::Enum(Enum::new(name)));
            build_children(arena, id, items)?;
            Ok(id)
        }
        RawItem::EnumEntry { name, tag, items } => {
            let id = arena.alloc(Item::EnumEntry(EnumEntry::new(name, tag)));
            build_children(arena, id, items)?;
            Ok(id)
        }
        RawItem::Option { key, value } => Ok(arena.alloc(Item::Option(OptionDecl { key, value }))),
        RawItem::Package { path } => Ok(arena.alloc(Item::Package(Package { path }))),
        RawItem::Import { path } => Ok(arena.alloc(Item::Import(Import::new(path)))),
        RawItem::Extend { name, items } => {
            // Stored structurally; never applied to the target message.
            Ok(arena.alloc(Item::Extend(Extend { name, items })))
        }
        RawItem::Annotation { text } => Ok(arena.alloc(Item::Annotation(Annotation { text }))),
    }
}

fn build_children(arena: &mut Arena, parent: ItemId, items: Vec<RawItem>) -> SemanticResult<()> {
    for raw in items {
        let child = build_item(arena, raw)?;
        arena.register(parent, child)?;
    }
    Ok(())
}
