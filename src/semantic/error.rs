//! Error types for semantic analysis.
//!
//! Every failure mode carries enough structured context (scope, conflicting
//! key, both colliding items, known import paths, parent chain) for a caller
//! to render a message without re-walking the descriptor tree. Nothing is
//! retried; a failed stage aborts the remaining stages for its file.

use smol_str::SmolStr;
use thiserror::Error;

/// Result alias used throughout the crate.
pub type SemanticResult<T> = Result<T, SemanticError>;

/// Errors raised during registration, file-set assembly, resolution, or
/// documentation enforcement.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SemanticError {
    /// Two children of one scope share a name.
    #[error("duplicate name \"{name}\" in {scope}: {existing} collides with {incoming}")]
    DuplicateName {
        name: SmolStr,
        scope: String,
        existing: String,
        incoming: String,
    },

    /// Two tag-bearing children of one scope share a tag.
    #[error("duplicate tag {tag} in {scope}: {existing} collides with {incoming}")]
    DuplicateTag {
        tag: i64,
        scope: String,
        existing: String,
        incoming: String,
    },

    /// A child kind that is never legal at this scope, e.g. a bare field at
    /// the top level of a file.
    #[error("cannot have a {kind} at the top level of {scope}")]
    IllegalChild { kind: &'static str, scope: String },

    /// The same option key declared twice in one scope.
    #[error("duplicate option \"{key}\" in {scope}")]
    DuplicateOption { key: SmolStr, scope: String },

    /// More than one package directive in one file.
    #[error("duplicate package directive in {scope}")]
    DuplicatePackage { scope: String },

    /// Two files added to a set under the same root-relative path.
    #[error("multiple files at the same path: {path}")]
    DuplicateFilePath { path: String },

    /// Two files export the same name into the same namespace node.
    #[error(
        "namespace conflict on \"{name}\" in [namespace {prefix}]: \
         existing {existing}, incoming {incoming}"
    )]
    NamespaceConflict {
        name: SmolStr,
        prefix: String,
        existing: String,
        incoming: String,
    },

    /// An import path with no matching file in the set.
    #[error("unresolved import: {path}; known paths = {known:?}")]
    UnresolvedImport { path: SmolStr, known: Vec<String> },

    /// A raw type string or default-value reference that resolves to nothing
    /// reachable from its scope.
    #[error("could not resolve \"{path}\" for {context}")]
    UnresolvedPath { path: SmolStr, context: String },

    /// A file used as the terminal of a type reference.
    #[error("illegally tried to resolve {file} as a type")]
    ResolvedFile { file: String },

    /// A namespace node used as the terminal of a type reference.
    #[error("cannot resolve [namespace {prefix}] as a pathed object")]
    ResolvedNamespace { prefix: String },

    /// An enforced item with no attached documentation. `chain` lists the
    /// enclosing parents, outermost last.
    #[error("no documentation on mandatory item: {item}{chain}")]
    MissingDoc { item: String, chain: String },

    /// A (parent, child) kind pair the registration table does not know.
    /// This is a defect in the upstream grammar, not user input.
    #[error("unknown item {item} ({child}) registered in {scope} ({parent})")]
    Unregisterable {
        parent: &'static str,
        child: &'static str,
        scope: String,
        item: String,
    },
}

impl SemanticError {
    /// True for errors that indicate a front-end defect rather than invalid
    /// user input. These should be propagated, never swallowed.
    pub fn is_internal(&self) -> bool {
        matches!(self, Self::Unregisterable { .. })
    }
}
