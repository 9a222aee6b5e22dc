//! Enum and enum-entry descriptors.

use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use smol_str::SmolStr;

use crate::base::ItemId;

/// An enum declaration. Entry names and entry tags are each unique within one
/// enum; entries are additionally promoted into the enclosing message's name
/// scope, reflecting the flat scoping of IDL enum values.
#[derive(Debug, Clone)]
pub struct Enum {
    pub name: SmolStr,
    /// Entries in declaration order.
    pub entries: Vec<ItemId>,
    pub by_tag: FxHashMap<i32, ItemId>,
    pub by_name: IndexMap<SmolStr, ItemId>,
}

impl Enum {
    pub fn new(name: SmolStr) -> Self {
        Self {
            name,
            entries: Vec::new(),
            by_tag: FxHashMap::default(),
            by_name: IndexMap::new(),
        }
    }
}

/// One entry of an enum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumEntry {
    pub name: SmolStr,
    pub tag: i32,
}

impl EnumEntry {
    pub fn new(name: SmolStr, tag: i32) -> Self {
        Self { name, tag }
    }
}
