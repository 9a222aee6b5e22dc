//! # protodesc
//!
//! Descriptor model and semantic analysis for protobuf-style IDL schemas.
//!
//! Turns the raw item records produced by a schema grammar into a validated,
//! fully cross-referenced descriptor graph: resolved imports, a package
//! namespace tree, and a resolved type handle on every field — ready for code
//! generation.
//!
//! ## Module Structure
//!
//! ```text
//! semantic   → errors, namespace tree, file set, resolver pipeline, doc enforcer
//! descriptor → arena, entity sum type, registration & local validation
//! base       → primitives (FileId, ItemId, ItemRef, Label)
//! ```
//!
//! `base` stands alone. `descriptor` builds on it and shares the error type
//! and namespace ids declared in `semantic`; everything else in `semantic`
//! sits on top of built descriptor trees.
//!
//! Pipeline ordering is strict: build every file's descriptor tree, assemble
//! them into a [`semantic::FileSet`] (which merges all exported names into the
//! namespace tree), and only then run [`semantic::resolve_set`]. Resolution
//! escalates through imported files and enclosing namespaces, so it is unsound
//! before the whole set is merged.

/// Foundation types: FileId, ItemId, ItemRef, Label
pub mod base;

/// Descriptor graph: arena, entity kinds, registration rules
pub mod descriptor;

/// Semantic analysis: namespace tree, file set, resolution, enforcement
pub mod semantic;

// Re-export foundation types
pub use base::{FileId, ItemId, ItemRef, Label};

// Re-export the descriptor surface most callers need
pub use descriptor::{Arena, Item, ItemKind, RawItem, ScalarType, Type, Value};

// Re-export the semantic surface
pub use semantic::{Enforcer, FileSet, Resolver, SemanticError, SemanticResult};
