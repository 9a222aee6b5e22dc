//! Raw input records.
//!
//! The grammar layer is an external collaborator: it hands this crate one
//! [`RawItem`] list per source file, each record tagged by syntactic construct
//! and carrying the attributes as written (names, tags, labels, raw type
//! strings, nested items, attached doc text). [`crate::descriptor::File::build`]
//! turns a record list into a validated descriptor arena.

use smol_str::SmolStr;

use crate::base::Label;

use super::types::Value;

/// A raw default-value clause on a field: either a literal, or a dotted
/// reference to another named constant (typically an enum entry).
#[derive(Debug, Clone, PartialEq)]
pub enum RawDefault {
    Literal(Value),
    Reference(SmolStr),
}

/// One parsed syntactic construct, before semantic validation.
#[derive(Debug, Clone, PartialEq)]
pub enum RawItem {
    Message {
        name: SmolStr,
        items: Vec<RawItem>,
    },
    Group {
        label: Label,
        name: SmolStr,
        tag: u32,
        items: Vec<RawItem>,
    },
    Field {
        label: Label,
        ty: SmolStr,
        name: SmolStr,
        tag: u32,
        default: Option<RawDefault>,
        /// Attached annotations, if any.
        items: Vec<RawItem>,
    },
    Enum {
        name: SmolStr,
        items: Vec<RawItem>,
    },
    EnumEntry {
        name: SmolStr,
        tag: i32,
        /// Attached annotations, if any.
        items: Vec<RawItem>,
    },
    Option {
        key: SmolStr,
        value: Value,
    },
    Package {
        path: SmolStr,
    },
    Import {
        path: SmolStr,
    },
    Extend {
        name: SmolStr,
        items: Vec<RawItem>,
    },
    Annotation {
        text: String,
    },
}

impl RawItem {
    /// Convenience constructor for a field without a default clause.
    pub fn field(
        label: Label,
        ty: impl Into<SmolStr>,
        name: impl Into<SmolStr>,
        tag: u32,
    ) -> Self {
        Self::Field {
            label,
            ty: ty.into(),
            name: name.into(),
            tag,
            default: None,
            items: Vec::new(),
        }
    }

    /// Convenience constructor for an enum entry.
    pub fn entry(name: impl Into<SmolStr>, tag: i32) -> Self {
        Self::EnumEntry {
            name: name.into(),
            tag,
            items: Vec::new(),
        }
    }
}
