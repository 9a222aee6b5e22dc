//! # Semantic Analysis
//!
//! Cross-file analysis over built descriptor trees: the package namespace
//! tree, file-set assembly, the three-stage resolution pipeline, and
//! documentation enforcement.
//!
//! The phases are strictly ordered: build every file (descriptor layer),
//! [`FileSet::assemble`] them (merging exports into the namespace tree), then
//! [`resolve_set`]. Enforcement ([`Enforcer`]) is independent of resolution
//! and may run as soon as a single file is built.

pub mod enforcer;
pub mod error;
pub mod file_set;
pub mod namespace;
pub mod resolver;

pub use enforcer::{DocTarget, Enforcer};
pub use error::{SemanticError, SemanticResult};
pub use file_set::FileSet;
pub use namespace::{NamespaceId, NamespaceNode, NamespaceTree, NsEntry};
pub use resolver::{OUTPUT_NAMESPACE_OPTION, Resolved, Resolver, resolve_file, resolve_set};

#[cfg(test)]
mod tests;
