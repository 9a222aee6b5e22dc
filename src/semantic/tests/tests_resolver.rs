#![allow(clippy::unwrap_used)]
use super::helpers::{field, file_at, message, package};
use crate::base::ItemRef;
use crate::descriptor::{RawItem, ScalarType, Type, Value};
use crate::semantic::{
    FileSet, OUTPUT_NAMESPACE_OPTION, Resolved, Resolver, SemanticError, resolve_file, resolve_set,
};

#[test]
fn test_round_trip_register_then_resolve() {
    let mut set = FileSet::new("proto");
    let id = set
        .add_file(file_at(
            "proto/a.proto",
            vec![message("Outer", vec![message("Inner", vec![])])],
        ))
        .unwrap();
    let arena = set.file(id);
    let outer = arena.file().messages[0];
    let inner = arena.message(outer).by_name["Inner"];

    let resolver = Resolver::new(&set);
    // From the scope that registered it, the same entity comes back.
    let found = resolver
        .resolve_from(ItemRef::new(id, outer), &["Inner"])
        .unwrap();
    assert_eq!(found, Some(Resolved::Item(ItemRef::new(id, inner))));
    // Dotted form from the file scope.
    let found = resolver.resolve_in_file(id, &["Outer", "Inner"]).unwrap();
    assert_eq!(found, Some(Resolved::Item(ItemRef::new(id, inner))));
}

#[test]
fn test_resolution_escalates_through_enclosing_scopes() {
    // Sibling of the parent is visible from a nested message.
    let mut set = FileSet::new("proto");
    let id = set
        .add_file(file_at(
            "proto/a.proto",
            vec![message(
                "Outer",
                vec![
                    message("Sibling", vec![]),
                    message("Nested", vec![field("Sibling", "s", 1)]),
                ],
            )],
        ))
        .unwrap();
    resolve_set(&mut set).unwrap();

    let arena = set.file(id);
    let outer = arena.file().messages[0];
    let sibling = arena.message(outer).by_name["Sibling"];
    let nested = arena.message(outer).by_name["Nested"];
    let s = arena.message(nested).fields[0];
    assert_eq!(
        arena.field(s).ty,
        Some(Type::Custom(ItemRef::new(id, sibling)))
    );
}

#[test]
fn test_builtin_types_skip_resolution() {
    let mut set = FileSet::new("proto");
    let id = set
        .add_file(file_at(
            "proto/a.proto",
            vec![message("M", vec![field("int32", "n", 1)])],
        ))
        .unwrap();
    resolve_set(&mut set).unwrap();
    let arena = set.file(id);
    let m = arena.file().messages[0];
    let n = arena.message(m).fields[0];
    assert_eq!(arena.field(n).ty, Some(Type::Scalar(ScalarType::Int32)));
}

#[test]
fn test_unresolved_type_names_the_field() {
    let mut set = FileSet::new("proto");
    set.add_file(file_at(
        "proto/a.proto",
        vec![message("M", vec![field("Missing", "m", 1)])],
    ))
    .unwrap();
    let err = resolve_set(&mut set).unwrap_err();
    match err {
        SemanticError::UnresolvedPath { path, context } => {
            assert_eq!(path, "Missing");
            assert_eq!(context, "[field \"m\"]");
        }
        other => panic!("expected UnresolvedPath, got {other:?}"),
    }
}

#[test]
fn test_out_namespace_prefers_option_over_package() {
    let mut set = FileSet::new("proto");
    let id = set
        .add_file(file_at(
            "proto/a.proto",
            vec![
                RawItem::Option {
                    key: OUTPUT_NAMESPACE_OPTION.into(),
                    value: Value::Str("com.example.gen".into()),
                },
                package("p"),
            ],
        ))
        .unwrap();
    resolve_file(&mut set, id).unwrap();
    assert_eq!(
        set.file(id).file().out_namespace.as_deref(),
        Some("com.example.gen")
    );
}

#[test]
fn test_out_namespace_falls_back_to_package_then_prefix() {
    let mut set = FileSet::new("proto");
    let with_package = set
        .add_file(file_at("proto/a.proto", vec![package("p.q")]))
        .unwrap();
    let bare = set.add_file(file_at("proto/lib/b.proto", vec![])).unwrap();
    resolve_set(&mut set).unwrap();

    assert_eq!(
        set.file(with_package).file().out_namespace.as_deref(),
        Some("p.q")
    );
    // No package, no option: the file's position in the tree.
    assert_eq!(
        set.file(bare).file().out_namespace.as_deref(),
        Some(".lib.b")
    );
}

#[test]
fn test_unresolved_import_lists_known_paths() {
    let mut set = FileSet::new("proto");
    set.add_file(file_at("proto/a.proto", vec![])).unwrap();
    set.add_file(file_at(
        "proto/b.proto",
        vec![RawItem::Import {
            path: "missing.proto".into(),
        }],
    ))
    .unwrap();
    let err = resolve_set(&mut set).unwrap_err();
    match err {
        SemanticError::UnresolvedImport { path, known } => {
            assert_eq!(path, "missing.proto");
            assert_eq!(known, vec!["a.proto".to_string(), "b.proto".to_string()]);
        }
        other => panic!("expected UnresolvedImport, got {other:?}"),
    }
}

#[test]
fn test_imports_wire_to_their_target_file() {
    let mut set = FileSet::new("proto");
    let a = set
        .add_file(file_at("proto/a.proto", vec![message("Widget", vec![])]))
        .unwrap();
    let b = set
        .add_file(file_at(
            "proto/b.proto",
            vec![RawItem::Import {
                path: "a.proto".into(),
            }],
        ))
        .unwrap();
    resolve_set(&mut set).unwrap();

    let arena = set.file(b);
    let import = arena.file().imports[0];
    assert_eq!(arena.import(import).target, Some(a));
}

#[test]
fn test_fileset_resolve_walks_from_the_root() {
    let mut set = FileSet::new("proto");
    let id = set
        .add_file(file_at(
            "proto/a.proto",
            vec![package("p"), message("Widget", vec![])],
        ))
        .unwrap();
    let widget = set.file(id).file().messages[0];
    let found = set.resolve(&["p", "Widget"]).unwrap();
    assert_eq!(found, Some(Resolved::Item(ItemRef::new(id, widget))));
    assert_eq!(set.resolve(&["p", "Gadget"]).unwrap(), None);
}
