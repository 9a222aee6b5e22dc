//! # Descriptor Graph
//!
//! The parsed-schema tree: one [`Arena`] per source file holding every
//! descriptor item (file, messages, fields, enums, ...) with parent links and
//! per-scope name/tag registries.
//!
//! [`Arena::register`] is the single mutation point for building the tree; it
//! dispatches on the (parent kind, child kind) pair and performs the
//! kind-specific duplicate/legality validation before bucketing the child.
//! Trees are built once from [`RawItem`] records and are immutable in shape
//! afterwards; resolution only fills in the single-assignment slots
//! (`Field::ty`, `Import::target`, `File::path`/`out_namespace`/`namespace`).

mod arena;
mod build;
mod directives;
mod enums;
mod field;
mod file;
mod item;
mod message;
mod raw;
mod register;
mod types;

pub use arena::Arena;
pub use directives::{Annotation, Extend, Import, OptionDecl, Package};
pub use enums::{Enum, EnumEntry};
pub use field::{DefaultValue, Field};
pub use file::File;
pub use item::{Item, ItemKind, Node};
pub use message::Message;
pub use raw::{RawDefault, RawItem};
pub use types::{ScalarType, Type, Value};

#[cfg(test)]
mod tests;
