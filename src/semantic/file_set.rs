//! File-set assembly: merging per-file descriptor trees into one namespace.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use smol_str::SmolStr;
use tracing::debug;

use crate::base::{FileId, ItemId, ItemRef};
use crate::descriptor::Arena;

use super::error::{SemanticError, SemanticResult};
use super::namespace::{NamespaceId, NamespaceTree, NsEntry};

/// Extension stripped when deriving namespace segments from a file path.
const FILE_EXTENSION: &str = ".proto";

/// A set of descriptor files rooted at one directory, sharing a namespace
/// tree.
///
/// Assembly is phase two of the pipeline: every file must be fully built
/// (single-owner, phase one) before it is added, and every file must be added
/// before resolution (phase three) runs, because resolution escalates through
/// the merged tree and through import targets.
#[derive(Debug)]
pub struct FileSet {
    root: PathBuf,
    files: Vec<Arena>,
    /// Files keyed by their path relative to the root, '/'-separated.
    by_path: IndexMap<String, FileId>,
    namespace: NamespaceTree,
    /// Debug/testing escape hatch: allow resolving a file or namespace node
    /// itself as a terminal. Never enable for production resolution.
    unsafe_resolution: bool,
}

impl FileSet {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            files: Vec::new(),
            by_path: IndexMap::new(),
            namespace: NamespaceTree::new(),
            unsafe_resolution: false,
        }
    }

    /// Build a set from fully-constructed file arenas. Each arena's file
    /// descriptor must already carry its path.
    pub fn assemble(root: impl Into<PathBuf>, files: Vec<Arena>) -> SemanticResult<Self> {
        let mut set = Self::new(root);
        for arena in files {
            set.add_file(arena)?;
        }
        Ok(set)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn file(&self, id: FileId) -> &Arena {
        &self.files[id.index()]
    }

    pub fn file_mut(&mut self, id: FileId) -> &mut Arena {
        &mut self.files[id.index()]
    }

    pub fn file_ids(&self) -> impl Iterator<Item = FileId> {
        (0..self.files.len()).map(FileId::new)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Look up a file by its root-relative path.
    pub fn by_path(&self, rel_path: &str) -> Option<FileId> {
        self.by_path.get(rel_path).copied()
    }

    /// Every root-relative path in the set, in registration order. Used for
    /// import-error diagnostics.
    pub fn known_paths(&self) -> Vec<String> {
        self.by_path.keys().cloned().collect()
    }

    pub fn namespace(&self) -> &NamespaceTree {
        &self.namespace
    }

    pub fn unsafe_resolution(&self) -> bool {
        self.unsafe_resolution
    }

    pub fn set_unsafe_resolution(&mut self, enabled: bool) {
        self.unsafe_resolution = enabled;
    }

    /// Register a built file: key it by relative path and merge its exports
    /// into the namespace tree at its package path.
    pub fn add_file(&mut self, arena: Arena) -> SemanticResult<FileId> {
        let rel = self.rel_path(&arena.file().path);
        if self.by_path.contains_key(&rel) {
            return Err(SemanticError::DuplicateFilePath { path: rel });
        }
        let segments = namespace_segments(&arena, &rel);
        debug!(path = %rel, segments = ?segments, "registering file");

        let id = FileId::new(self.files.len());
        self.files.push(arena);

        let mut node = self.namespace.root();
        for segment in &segments {
            node = self
                .namespace
                .ensure_child(node, segment)
                .ok_or_else(|| self.segment_conflict(node, segment, id))?;
        }

        let exports: Vec<(SmolStr, ItemId)> = self.files[id.index()]
            .file()
            .by_name
            .iter()
            .map(|(name, &item)| (name.clone(), item))
            .collect();
        for (name, item) in exports {
            if let Err(existing) =
                self.namespace
                    .insert_export(node, name.clone(), ItemRef::new(id, item))
            {
                return Err(self.export_conflict(node, name, existing, id));
            }
        }

        self.files[id.index()].file_mut().namespace = Some(node);
        self.by_path.insert(rel, id);
        Ok(id)
    }

    fn rel_path(&self, path: &str) -> String {
        let rel = Path::new(path)
            .strip_prefix(&self.root)
            .unwrap_or_else(|_| Path::new(path));
        let mut out = String::new();
        for component in rel.components() {
            if !out.is_empty() {
                out.push('/');
            }
            out.push_str(&component.as_os_str().to_string_lossy());
        }
        out
    }

    fn segment_conflict(
        &self,
        node: NamespaceId,
        segment: &str,
        incoming: FileId,
    ) -> SemanticError {
        let existing = match self.namespace.entry(node, segment) {
            Some(NsEntry::Item(r)) => self.file(r.file).file().path.clone(),
            _ => self.namespace.node(node).prefix.clone(),
        };
        SemanticError::NamespaceConflict {
            name: SmolStr::new(segment),
            prefix: self.namespace.node(node).prefix.clone(),
            existing,
            incoming: self.file(incoming).file().path.clone(),
        }
    }

    fn export_conflict(
        &self,
        node: NamespaceId,
        name: SmolStr,
        existing: NsEntry,
        incoming: FileId,
    ) -> SemanticError {
        let existing = match existing {
            NsEntry::Item(r) => self.file(r.file).file().path.clone(),
            NsEntry::Child(c) => format!("[namespace {}]", self.namespace.node(c).prefix),
        };
        SemanticError::NamespaceConflict {
            name,
            prefix: self.namespace.node(node).prefix.clone(),
            existing,
            incoming: self.file(incoming).file().path.clone(),
        }
    }
}

/// The package path a file merges under: the package directive's segments if
/// one was declared, otherwise the relative path with the schema extension
/// stripped, one segment per path component.
fn namespace_segments(arena: &Arena, rel_path: &str) -> Vec<String> {
    if let Some(pkg) = arena.file().package {
        return arena
            .package(pkg)
            .path
            .split('.')
            .map(str::to_string)
            .collect();
    }
    let trimmed = rel_path.strip_suffix(FILE_EXTENSION).unwrap_or(rel_path);
    trimmed.split('/').map(str::to_string).collect()
}
