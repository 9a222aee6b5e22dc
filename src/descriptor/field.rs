//! Field descriptors and default-value clauses.

use smol_str::SmolStr;

use crate::base::{ItemRef, Label};

use super::types::{Type, Value};

/// A default-value clause on a field.
#[derive(Debug, Clone, PartialEq)]
pub enum DefaultValue {
    /// A literal default, e.g. `[default = 5]`.
    Literal(Value),
    /// A reference to another named constant, e.g. `[default = BLUE]`.
    Reference {
        /// The dotted reference string as written.
        path: SmolStr,
        /// The declaration the reference resolved to. None until the
        /// resolution pipeline has run; set once.
        src: Option<ItemRef>,
    },
}

/// A message field.
#[derive(Debug, Clone)]
pub struct Field {
    pub label: Label,
    /// The type string as written, e.g. `int32` or `Outer.Inner`.
    pub raw_type: SmolStr,
    pub name: SmolStr,
    pub tag: u32,
    pub default: Option<DefaultValue>,
    /// The resolved type. None until the resolution pipeline has run; set
    /// once.
    pub ty: Option<Type>,
}

impl Field {
    pub fn new(label: Label, raw_type: SmolStr, name: SmolStr, tag: u32) -> Self {
        Self {
            label,
            raw_type,
            name,
            tag,
            default: None,
            ty: None,
        }
    }
}
