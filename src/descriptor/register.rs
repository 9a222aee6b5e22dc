//! Registration: the single mutation point for building a descriptor tree.
//!
//! `Arena::register` dispatches on the (parent kind, child kind) pair. On
//! acceptance the child's parent back-reference is set and the child is
//! appended to the parent's ordered collection and name/tag maps. Duplicate
//! detection is first-wins-reports-second: the first registration of a key
//! succeeds silently, the second fails naming the key, the scope, and both
//! colliding items.

use crate::base::ItemId;
use crate::semantic::{SemanticError, SemanticResult};

use super::arena::Arena;
use super::item::ItemKind;

impl Arena {
    /// Register `child` into `parent`, validating per the kind pair.
    ///
    /// An unrecognized pair is a defect in the upstream grammar, not user
    /// input, and surfaces as [`SemanticError::Unregisterable`].
    pub fn register(&mut self, parent: ItemId, child: ItemId) -> SemanticResult<()> {
        let parent_kind = self.kind(parent);
        let child_kind = self.kind(child);

        // Any item can carry annotations.
        if child_kind == ItemKind::Annotation {
            self.node_mut(parent).annotations.push(child);
            self.node_mut(child).parent = Some(parent);
            return Ok(());
        }

        match (parent_kind, child_kind) {
            (ItemKind::File, ItemKind::Message | ItemKind::Group) => {
                self.register_file_message(parent, child)
            }
            (ItemKind::File, ItemKind::Option) => self.register_file_option(parent, child),
            (ItemKind::File, ItemKind::Package) => self.register_file_package(parent, child),
            (ItemKind::File, ItemKind::Import) => {
                self.file_mut().imports.push(child);
                self.node_mut(child).parent = Some(parent);
                Ok(())
            }
            // Extends are accepted structurally; application to the target
            // message is out of scope.
            (ItemKind::File, ItemKind::Extend) => {
                self.file_mut().extends.push(child);
                self.node_mut(child).parent = Some(parent);
                Ok(())
            }
            (ItemKind::File, ItemKind::Field) => Err(SemanticError::IllegalChild {
                kind: "field",
                scope: self.display(parent),
            }),
            (ItemKind::File, ItemKind::Enum) => Err(SemanticError::IllegalChild {
                kind: "enum",
                scope: self.display(parent),
            }),

            (ItemKind::Message | ItemKind::Group, ItemKind::Field) => {
                self.register_message_field(parent, child)
            }
            (ItemKind::Message | ItemKind::Group, ItemKind::Enum) => {
                self.register_message_enum(parent, child)
            }
            (ItemKind::Message | ItemKind::Group, ItemKind::Group) => {
                self.register_message_group(parent, child)
            }
            (ItemKind::Message | ItemKind::Group, ItemKind::Message) => {
                self.register_message_message(parent, child)
            }
            // Message options and extends are accepted and dropped, matching
            // the reference front end.
            (ItemKind::Message | ItemKind::Group, ItemKind::Option | ItemKind::Extend) => Ok(()),

            (ItemKind::Enum, ItemKind::EnumEntry) => self.register_enum_entry(parent, child),

            (p, c) => Err(SemanticError::Unregisterable {
                parent: p.as_str(),
                child: c.as_str(),
                scope: self.display(parent),
                item: self.display(child),
            }),
        }
    }

    /// Register every id in `children` into `parent`, in order.
    pub fn register_all(&mut self, parent: ItemId, children: &[ItemId]) -> SemanticResult<()> {
        for &child in children {
            self.register(parent, child)?;
        }
        Ok(())
    }

    fn register_file_message(&mut self, parent: ItemId, child: ItemId) -> SemanticResult<()> {
        let name = self.message(child).name.clone();
        if let Some(&existing) = self.file().by_name.get(&name) {
            return Err(SemanticError::DuplicateName {
                name,
                scope: self.display(parent),
                existing: self.display(existing),
                incoming: self.display(child),
            });
        }
        let file = self.file_mut();
        file.by_name.insert(name, child);
        file.messages.push(child);
        self.node_mut(child).parent = Some(parent);
        Ok(())
    }

    fn register_file_option(&mut self, parent: ItemId, child: ItemId) -> SemanticResult<()> {
        let key = self.option_decl(child).key.clone();
        if self.file().options.contains_key(&key) {
            return Err(SemanticError::DuplicateOption {
                key,
                scope: self.display(parent),
            });
        }
        self.file_mut().options.insert(key, child);
        self.node_mut(child).parent = Some(parent);
        Ok(())
    }

    fn register_file_package(&mut self, parent: ItemId, child: ItemId) -> SemanticResult<()> {
        if self.file().package.is_some() {
            return Err(SemanticError::DuplicatePackage {
                scope: self.display(parent),
            });
        }
        self.file_mut().package = Some(child);
        self.node_mut(child).parent = Some(parent);
        Ok(())
    }

    fn register_message_field(&mut self, parent: ItemId, child: ItemId) -> SemanticResult<()> {
        let (name, tag) = {
            let field = self.field(child);
            (field.name.clone(), field.tag)
        };
        let scope = self.message(parent);
        if let Some(&existing) = scope.by_name.get(&name) {
            return Err(SemanticError::DuplicateName {
                name,
                scope: self.display(parent),
                existing: self.display(existing),
                incoming: self.display(child),
            });
        }
        if let Some(&existing) = scope.by_tag.get(&tag) {
            return Err(SemanticError::DuplicateTag {
                tag: tag.into(),
                scope: self.display(parent),
                existing: self.display(existing),
                incoming: self.display(child),
            });
        }
        let scope = self.message_mut(parent);
        scope.by_name.insert(name, child);
        scope.by_tag.insert(tag, child);
        scope.fields.push(child);
        self.node_mut(child).parent = Some(parent);
        Ok(())
    }

    /// Enum entries are promoted into the enclosing message's flat name
    /// scope in addition to living on the enum itself.
    fn register_message_enum(&mut self, parent: ItemId, child: ItemId) -> SemanticResult<()> {
        let name = self.enum_decl(child).name.clone();
        if let Some(&existing) = self.message(parent).by_name.get(&name) {
            return Err(SemanticError::DuplicateName {
                name,
                scope: self.display(parent),
                existing: self.display(existing),
                incoming: self.display(child),
            });
        }
        let entries = self.enum_decl(child).entries.clone();
        for &entry in &entries {
            let entry_name = self.enum_entry(entry).name.clone();
            if let Some(&existing) = self.message(parent).by_name.get(&entry_name) {
                return Err(SemanticError::DuplicateName {
                    name: entry_name,
                    scope: self.display(parent),
                    existing: self.display(existing),
                    incoming: self.display(entry),
                });
            }
        }
        let scope = self.message_mut(parent);
        scope.by_name.insert(name, child);
        scope.enums.push(child);
        for &entry in &entries {
            let entry_name = self.enum_entry(entry).name.clone();
            self.message_mut(parent).by_name.insert(entry_name, entry);
        }
        self.node_mut(child).parent = Some(parent);
        Ok(())
    }

    /// Groups do not define an isolated tag context: the group's own tag and
    /// every tag inside it must be free on the parent, and all of them merge
    /// into the parent's tag map. Group-internal names stay local.
    fn register_message_group(&mut self, parent: ItemId, child: ItemId) -> SemanticResult<()> {
        let group = self.message(child);
        let name = group.name.clone();
        let (_, tag) = group
            .group
            .unwrap_or_else(|| panic!("group {} without label/tag", group.name));
        if let Some(&existing) = self.message(parent).by_name.get(&name) {
            return Err(SemanticError::DuplicateName {
                name,
                scope: self.display(parent),
                existing: self.display(existing),
                incoming: self.display(child),
            });
        }
        if let Some(&existing) = self.message(parent).by_tag.get(&tag) {
            return Err(SemanticError::DuplicateTag {
                tag: tag.into(),
                scope: self.display(parent),
                existing: self.display(existing),
                incoming: self.display(child),
            });
        }
        let inner_tags: Vec<(u32, ItemId)> = self
            .message(child)
            .by_tag
            .iter()
            .map(|(&t, &i)| (t, i))
            .collect();
        for &(inner_tag, inner_item) in &inner_tags {
            if let Some(&existing) = self.message(parent).by_tag.get(&inner_tag) {
                return Err(SemanticError::DuplicateTag {
                    tag: inner_tag.into(),
                    scope: self.display(parent),
                    existing: self.display(existing),
                    incoming: self.display(inner_item),
                });
            }
        }
        let scope = self.message_mut(parent);
        scope.by_name.insert(name, child);
        scope.by_tag.insert(tag, child);
        scope.messages.push(child);
        scope.groups.push(child);
        for (inner_tag, inner_item) in inner_tags {
            scope.by_tag.insert(inner_tag, inner_item);
        }
        self.node_mut(child).parent = Some(parent);
        Ok(())
    }

    fn register_message_message(&mut self, parent: ItemId, child: ItemId) -> SemanticResult<()> {
        let name = self.message(child).name.clone();
        if let Some(&existing) = self.message(parent).by_name.get(&name) {
            return Err(SemanticError::DuplicateName {
                name,
                scope: self.display(parent),
                existing: self.display(existing),
                incoming: self.display(child),
            });
        }
        let scope = self.message_mut(parent);
        scope.by_name.insert(name, child);
        scope.messages.push(child);
        self.node_mut(child).parent = Some(parent);
        Ok(())
    }

    fn register_enum_entry(&mut self, parent: ItemId, child: ItemId) -> SemanticResult<()> {
        let (name, tag) = {
            let entry = self.enum_entry(child);
            (entry.name.clone(), entry.tag)
        };
        let scope = self.enum_decl(parent);
        if let Some(&existing) = scope.by_name.get(&name) {
            return Err(SemanticError::DuplicateName {
                name,
                scope: self.display(parent),
                existing: self.display(existing),
                incoming: self.display(child),
            });
        }
        if let Some(&existing) = scope.by_tag.get(&tag) {
            return Err(SemanticError::DuplicateTag {
                tag: tag.into(),
                scope: self.display(parent),
                existing: self.display(existing),
                incoming: self.display(child),
            });
        }
        let scope = self.enum_mut(parent);
        scope.by_name.insert(name, child);
        scope.by_tag.insert(tag, child);
        scope.entries.push(child);
        self.node_mut(child).parent = Some(parent);
        Ok(())
    }
}
