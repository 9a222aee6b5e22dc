//! Documentation enforcement.
//!
//! An optional validation pass asserting that configured descriptor kinds
//! carry at least one attached annotation. Runs on a single built file,
//! independent of cross-file resolution.

use rustc_hash::FxHashSet;

use crate::base::ItemId;
use crate::descriptor::Arena;

use super::error::{SemanticError, SemanticResult};
use super::file_set::FileSet;

/// Descriptor kinds the enforcer can be configured to check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocTarget {
    File,
    Message,
    Field,
    Enum,
    EnumEntry,
}

/// Walks a descriptor tree and fails on any enforced item with zero
/// annotations.
#[derive(Debug, Clone, Default)]
pub struct Enforcer {
    targets: FxHashSet<DocTarget>,
}

impl Enforcer {
    pub fn new(targets: impl IntoIterator<Item = DocTarget>) -> Self {
        Self {
            targets: targets.into_iter().collect(),
        }
    }

    /// Check one file: file → messages → {nested messages, fields, enums →
    /// entries}, in structural order.
    pub fn enforce(&self, arena: &Arena) -> SemanticResult<()> {
        if self.targets.is_empty() {
            return Ok(());
        }
        self.check(arena, ItemId::FILE, DocTarget::File)?;
        for &message in &arena.file().messages {
            self.enforce_message(arena, message)?;
        }
        Ok(())
    }

    /// Check every file in a set.
    pub fn enforce_set(&self, set: &FileSet) -> SemanticResult<()> {
        for id in set.file_ids() {
            self.enforce(set.file(id))?;
        }
        Ok(())
    }

    fn enforce_message(&self, arena: &Arena, message: ItemId) -> SemanticResult<()> {
        self.check(arena, message, DocTarget::Message)?;
        for &nested in &arena.message(message).messages {
            self.enforce_message(arena, nested)?;
        }
        for &field in &arena.message(message).fields {
            self.check(arena, field, DocTarget::Field)?;
        }
        for &decl in &arena.message(message).enums {
            self.check(arena, decl, DocTarget::Enum)?;
            for &entry in &arena.enum_decl(decl).entries {
                self.check(arena, entry, DocTarget::EnumEntry)?;
            }
        }
        Ok(())
    }

    fn check(&self, arena: &Arena, id: ItemId, target: DocTarget) -> SemanticResult<()> {
        if !self.targets.contains(&target) {
            return Ok(());
        }
        if !arena.node(id).annotations.is_empty() {
            return Ok(());
        }
        Err(SemanticError::MissingDoc {
            item: arena.display(id),
            chain: parent_chain(arena, id),
        })
    }
}

/// Render the chain of enclosing parents, innermost first, e.g.
/// `, of [message "M"], of [file a.proto]`.
fn parent_chain(arena: &Arena, id: ItemId) -> String {
    let mut chain = String::new();
    let mut current = arena.node(id).parent;
    while let Some(parent) = current {
        chain.push_str(", of ");
        chain.push_str(&arena.display(parent));
        current = arena.node(parent).parent;
    }
    chain
}
