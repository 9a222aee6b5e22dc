#![allow(clippy::unwrap_used)]
//! End-to-end pipeline runs: default-value references and doc enforcement.

use protodesc::base::{ItemRef, Label};
use protodesc::descriptor::{DefaultValue, File, RawDefault, RawItem, Value};
use protodesc::semantic::{DocTarget, Enforcer, FileSet, SemanticError, resolve_set};

fn file_at(path: &str, items: Vec<RawItem>) -> protodesc::Arena {
    let mut arena = File::build(items).unwrap();
    arena.file_mut().path = path.to_string();
    arena
}

fn color_enum() -> RawItem {
    RawItem::Enum {
        name: "Color".into(),
        items: vec![RawItem::entry("RED", 0), RawItem::entry("BLUE", 1)],
    }
}

#[test]
fn test_reference_default_resolves_to_enum_entry() {
    // message M { enum Color { RED = 0; BLUE = 1; }
    //             optional Color c = 1 [default = BLUE]; }
    let id_items = vec![RawItem::Message {
        name: "M".into(),
        items: vec![
            color_enum(),
            RawItem::Field {
                label: Label::Optional,
                ty: "Color".into(),
                name: "c".into(),
                tag: 1,
                default: Some(RawDefault::Reference("BLUE".into())),
                items: vec![],
            },
        ],
    }];
    let mut set = FileSet::new("proto");
    let id = set.add_file(file_at("proto/a.proto", id_items)).unwrap();
    resolve_set(&mut set).unwrap();

    let arena = set.file(id);
    let m = arena.file().messages[0];
    let color = arena.message(m).enums[0];
    let blue = arena.enum_decl(color).by_name["BLUE"];
    let c = arena.message(m).fields[0];

    match &arena.field(c).default {
        Some(DefaultValue::Reference { path, src }) => {
            assert_eq!(path, "BLUE");
            assert_eq!(*src, Some(ItemRef::new(id, blue)));
        }
        other => panic!("expected a resolved reference default, got {other:?}"),
    }
}

#[test]
fn test_unresolvable_reference_default_is_an_error() {
    let items = vec![RawItem::Message {
        name: "M".into(),
        items: vec![
            color_enum(),
            RawItem::Field {
                label: Label::Optional,
                ty: "Color".into(),
                name: "c".into(),
                tag: 1,
                default: Some(RawDefault::Reference("CHARTREUSE".into())),
                items: vec![],
            },
        ],
    }];
    let mut set = FileSet::new("proto");
    set.add_file(file_at("proto/a.proto", items)).unwrap();
    let err = resolve_set(&mut set).unwrap_err();
    assert!(matches!(
        err,
        SemanticError::UnresolvedPath { path, .. } if path == "CHARTREUSE"
    ));
}

#[test]
fn test_literal_defaults_survive_resolution_untouched() {
    let items = vec![RawItem::Message {
        name: "M".into(),
        items: vec![RawItem::Field {
            label: Label::Optional,
            ty: "int32".into(),
            name: "n".into(),
            tag: 1,
            default: Some(RawDefault::Literal(Value::Int(42))),
            items: vec![],
        }],
    }];
    let mut set = FileSet::new("proto");
    let id = set.add_file(file_at("proto/a.proto", items)).unwrap();
    resolve_set(&mut set).unwrap();

    let arena = set.file(id);
    let n = arena.message(arena.file().messages[0]).fields[0];
    assert_eq!(
        arena.field(n).default,
        Some(DefaultValue::Literal(Value::Int(42)))
    );
}

#[test]
fn test_enforcement_runs_across_the_whole_set() {
    let documented = file_at(
        "proto/a.proto",
        vec![RawItem::Message {
            name: "Ok".into(),
            items: vec![RawItem::Annotation {
                text: "Fine.".into(),
            }],
        }],
    );
    let undocumented = file_at(
        "proto/b.proto",
        vec![RawItem::Message {
            name: "Bad".into(),
            items: vec![],
        }],
    );
    let mut set = FileSet::new("proto");
    set.add_file(documented).unwrap();
    set.add_file(undocumented).unwrap();

    let err = Enforcer::new([DocTarget::Message])
        .enforce_set(&set)
        .unwrap_err();
    match err {
        SemanticError::MissingDoc { item, chain } => {
            assert_eq!(item, "[message \"Bad\"]");
            assert_eq!(chain, ", of [file proto/b.proto]");
        }
        other => panic!("expected MissingDoc, got {other:?}"),
    }

    Enforcer::new([]).enforce_set(&set).unwrap();
}
