//! Symbolic resolution and the per-file resolution pipeline.
//!
//! All resolution logic lives here, keeping the descriptor arena and the
//! namespace tree pure data structures. The walking rules:
//!
//! - Generic items: empty path resolves to the item itself; a name-map hit
//!   descends with the path tail; otherwise the **full** path escalates to
//!   the enclosing item. Siblings do not see each other, but outer scopes see
//!   everything beneath them once escalated.
//! - Files: an empty path is illegal (a file is never a type). A non-empty
//!   path checks the file's own exports, then each resolved import's target
//!   file in reverse-registration order, then the namespace node the file was
//!   merged into.
//! - Namespace nodes: a miss (or a child miss) retries the full original
//!   path at the parent node; a miss at the root is "not found", not an
//!   error. Callers decide whether that is fatal.

use smol_str::SmolStr;
use tracing::{debug, trace};

use crate::base::{FileId, ItemId, ItemRef};
use crate::descriptor::{DefaultValue, Item, ScalarType, Type};

use super::error::{SemanticError, SemanticResult};
use super::file_set::FileSet;
use super::namespace::{NamespaceId, NsEntry};

/// Option key that overrides a file's output namespace.
pub const OUTPUT_NAMESPACE_OPTION: &str = "javascript_package";

/// A successful resolution target. Namespace terminals only occur with the
/// file set's unsafe-resolution override; normal resolution either yields an
/// item or fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolved {
    Item(ItemRef),
    Namespace(NamespaceId),
}

impl Resolved {
    pub fn item(self) -> Option<ItemRef> {
        match self {
            Self::Item(r) => Some(r),
            Self::Namespace(_) => None,
        }
    }

    pub fn namespace(self) -> Option<NamespaceId> {
        match self {
            Self::Namespace(n) => Some(n),
            Self::Item(_) => None,
        }
    }
}

/// Read-only resolution over an assembled [`FileSet`].
pub struct Resolver<'a> {
    set: &'a FileSet,
}

impl<'a> Resolver<'a> {
    pub fn new(set: &'a FileSet) -> Self {
        Self { set }
    }

    pub fn set(&self) -> &FileSet {
        self.set
    }

    /// Resolve a dotted reference string from an item's scope.
    pub fn resolve_str(&self, at: ItemRef, path: &str) -> SemanticResult<Option<Resolved>> {
        let segments: Vec<&str> = path.split('.').collect();
        self.resolve_from(at, &segments)
    }

    /// Resolve a path starting at `at`, escalating through enclosing scopes.
    pub fn resolve_from(&self, at: ItemRef, path: &[&str]) -> SemanticResult<Option<Resolved>> {
        let arena = self.set.file(at.file);
        let node = arena.node(at.item);
        trace!(item = %node.item.display(), ?path, "resolve");

        if path.is_empty() {
            if let Item::File(_) = node.item {
                if !self.set.unsafe_resolution() {
                    return Err(SemanticError::ResolvedFile {
                        file: node.item.display(),
                    });
                }
            }
            return Ok(Some(Resolved::Item(at)));
        }

        match &node.item {
            Item::File(file) => {
                // Own exports first.
                if let Some(&child) = file.by_name.get(path[0]) {
                    return self.resolve_from(ItemRef::new(at.file, child), &path[1..]);
                }
                // Then imports, latest registration first.
                for &import in file.imports.iter().rev() {
                    let Some(target) = arena.import(import).target else {
                        continue;
                    };
                    if let Some(found) = self.resolve_in_file(target, path)? {
                        return Ok(Some(found));
                    }
                }
                // Finally the namespace the file was merged into.
                if let Some(ns) = file.namespace {
                    return self.resolve_in_namespace(ns, path);
                }
                Ok(None)
            }
            Item::Message(message) => {
                if let Some(&child) = message.by_name.get(path[0]) {
                    return self.resolve_from(ItemRef::new(at.file, child), &path[1..]);
                }
                self.escalate(at, path)
            }
            Item::Enum(decl) => {
                if let Some(&child) = decl.by_name.get(path[0]) {
                    return self.resolve_from(ItemRef::new(at.file, child), &path[1..]);
                }
                self.escalate(at, path)
            }
            // Kinds with no name scope delegate straight upward.
            _ => self.escalate(at, path),
        }
    }

    /// Resolve a path within a file's scope, as imports do.
    pub fn resolve_in_file(&self, file: FileId, path: &[&str]) -> SemanticResult<Option<Resolved>> {
        self.resolve_from(ItemRef::new(file, ItemId::FILE), path)
    }

    /// Resolve a path at a namespace node, retrying the full path at each
    /// enclosing node on a miss.
    pub fn resolve_in_namespace(
        &self,
        ns: NamespaceId,
        path: &[&str],
    ) -> SemanticResult<Option<Resolved>> {
        let tree = self.set.namespace();
        trace!(prefix = %tree.node(ns).prefix, ?path, "resolve in namespace");

        if path.is_empty() {
            if self.set.unsafe_resolution() {
                return Ok(Some(Resolved::Namespace(ns)));
            }
            return Err(SemanticError::ResolvedNamespace {
                prefix: tree.node(ns).prefix.clone(),
            });
        }

        let mut result = None;
        match tree.entry(ns, path[0]) {
            Some(NsEntry::Child(child)) => {
                result = self.resolve_in_namespace(child, &path[1..])?;
            }
            Some(NsEntry::Item(item)) => {
                result = self.resolve_from(item, &path[1..])?;
            }
            None => {}
        }
        if result.is_none() {
            if let Some(parent) = tree.node(ns).parent {
                return self.resolve_in_namespace(parent, path);
            }
        }
        Ok(result)
    }

    fn escalate(&self, at: ItemRef, path: &[&str]) -> SemanticResult<Option<Resolved>> {
        match self.set.file(at.file).node(at.item).parent {
            Some(parent) => self.resolve_from(ItemRef::new(at.file, parent), path),
            None => Ok(None),
        }
    }
}

impl FileSet {
    /// Resolve an absolute path against the root namespace.
    pub fn resolve(&self, path: &[&str]) -> SemanticResult<Option<Resolved>> {
        Resolver::new(self).resolve_in_namespace(self.namespace().root(), path)
    }
}

// ============================================================
// Resolution pipeline
// ============================================================

/// Run the resolution pipeline over every file of an assembled set, in
/// registration order. Fails fast on the first erroring file.
pub fn resolve_set(set: &mut FileSet) -> SemanticResult<()> {
    for id in set.file_ids().collect::<Vec<_>>() {
        resolve_file(set, id)?;
    }
    Ok(())
}

/// Run the three pipeline stages for one file: wire imports, compute the
/// output namespace, dereference every field type. Each stage aborts the
/// rest on failure.
pub fn resolve_file(set: &mut FileSet, file: FileId) -> SemanticResult<()> {
    debug!(path = %set.file(file).file().path, "resolving types");
    resolve_imports(set, file)?;
    resolve_out_namespace(set, file)?;
    dereference_types(set, file)
}

/// Stage 1: point every import at its target file.
fn resolve_imports(set: &mut FileSet, file: FileId) -> SemanticResult<()> {
    let arena = set.file(file);
    let mut wired = Vec::new();
    for &import in &arena.file().imports {
        let path = &arena.import(import).path;
        match set.by_path(path) {
            Some(target) => wired.push((import, target)),
            None => {
                return Err(SemanticError::UnresolvedImport {
                    path: path.clone(),
                    known: set.known_paths(),
                });
            }
        }
    }
    let arena = set.file_mut(file);
    for (import, target) in wired {
        arena.import_mut(import).target = Some(target);
    }
    Ok(())
}

/// Stage 2: derive where generated output for this file lives. Priority:
/// explicit option, package directive, namespace-tree prefix, empty.
fn resolve_out_namespace(set: &mut FileSet, file: FileId) -> SemanticResult<()> {
    let arena = set.file(file);
    let desc = arena.file();
    let out = if let Some(&opt) = desc.options.get(OUTPUT_NAMESPACE_OPTION) {
        arena.option_decl(opt).value.to_string()
    } else if let Some(pkg) = desc.package {
        arena.package(pkg).path.to_string()
    } else if let Some(ns) = desc.namespace {
        set.namespace().node(ns).prefix.clone()
    } else {
        String::new()
    };
    set.file_mut(file).file_mut().out_namespace = Some(out);
    Ok(())
}

/// A computed type assignment, applied after the read-only walk.
struct TypeFix {
    field: ItemId,
    ty: Type,
    default_src: Option<ItemRef>,
}

/// Stage 3: walk every message depth-first and dereference every field's raw
/// type string, plus any reference default value.
fn dereference_types(set: &mut FileSet, file: FileId) -> SemanticResult<()> {
    let mut fixes = Vec::new();
    {
        let resolver = Resolver::new(set);
        let arena = set.file(file);
        for &message in &arena.file().messages {
            dereference_message(&resolver, file, message, &mut fixes)?;
        }
    }
    let arena = set.file_mut(file);
    for fix in fixes {
        let field = arena.field_mut(fix.field);
        field.ty = Some(fix.ty);
        if let (Some(src), Some(DefaultValue::Reference { src: slot, .. })) =
            (fix.default_src, field.default.as_mut())
        {
            *slot = Some(src);
        }
    }
    Ok(())
}

fn dereference_message(
    resolver: &Resolver<'_>,
    file: FileId,
    message: ItemId,
    fixes: &mut Vec<TypeFix>,
) -> SemanticResult<()> {
    let arena = resolver.set().file(file);
    for &field in &arena.message(message).fields {
        fixes.push(dereference_field(resolver, file, field)?);
    }
    for &nested in &arena.message(message).messages {
        dereference_message(resolver, file, nested, fixes)?;
    }
    Ok(())
}

fn dereference_field(
    resolver: &Resolver<'_>,
    file: FileId,
    field: ItemId,
) -> SemanticResult<TypeFix> {
    let arena = resolver.set().file(file);
    let desc = arena.field(field);
    let at = ItemRef::new(file, field);

    // Builtins need no lookup.
    if let Some(scalar) = ScalarType::from_name(&desc.raw_type) {
        return Ok(TypeFix {
            field,
            ty: Type::Scalar(scalar),
            default_src: None,
        });
    }

    let source = resolver
        .resolve_str(at, &desc.raw_type)?
        .and_then(Resolved::item)
        .ok_or_else(|| SemanticError::UnresolvedPath {
            path: desc.raw_type.clone(),
            context: arena.display(field),
        })?;

    let default_src = match &desc.default {
        Some(DefaultValue::Reference { path, .. }) => {
            Some(resolve_default_reference(resolver, at, path)?)
        }
        _ => None,
    };

    Ok(TypeFix {
        field,
        ty: Type::Custom(source),
        default_src,
    })
}

/// A reference default resolves from the field itself, so it can name
/// sibling enum entries promoted into the enclosing message scope.
fn resolve_default_reference(
    resolver: &Resolver<'_>,
    at: ItemRef,
    path: &SmolStr,
) -> SemanticResult<ItemRef> {
    resolver
        .resolve_str(at, path)?
        .and_then(Resolved::item)
        .ok_or_else(|| SemanticError::UnresolvedPath {
            path: path.clone(),
            context: resolver.set().file(at.file).display(at.item),
        })
}
