#![allow(clippy::unwrap_used)]
//! Shared fixtures for the semantic tests.

use crate::base::Label;
use crate::descriptor::{Arena, File, RawItem};

pub fn message(name: &str, items: Vec<RawItem>) -> RawItem {
    RawItem::Message {
        name: name.into(),
        items,
    }
}

pub fn package(path: &str) -> RawItem {
    RawItem::Package { path: path.into() }
}

pub fn field(ty: &str, name: &str, tag: u32) -> RawItem {
    RawItem::field(Label::Optional, ty, name, tag)
}

/// Build a file arena and stamp its path.
pub fn file_at(path: &str, items: Vec<RawItem>) -> Arena {
    let mut arena = File::build(items).unwrap();
    arena.file_mut().path = path.to_string();
    arena
}
