#![allow(clippy::unwrap_used)]
use crate::base::Label;
use crate::descriptor::{File, RawItem};

fn build_nested() -> crate::descriptor::Arena {
    let mut arena = File::build(vec![
        RawItem::Package {
            path: "media.search".into(),
        },
        RawItem::Message {
            name: "Outer".into(),
            items: vec![RawItem::Message {
                name: "Inner".into(),
                items: vec![RawItem::field(Label::Optional, "string", "x", 1)],
            }],
        },
    ])
    .unwrap();
    arena.file_mut().out_namespace = Some("media.search".into());
    arena
}

#[test]
fn test_qualified_path_climbs_to_the_file_namespace() {
    let arena = build_nested();
    let outer = arena.file().messages[0];
    let inner = arena.message(outer).by_name["Inner"];
    assert_eq!(arena.qualified_path(outer, false), "media.search.Outer");
    assert_eq!(
        arena.qualified_path(inner, false),
        "media.search.Outer.Inner"
    );
}

#[test]
fn test_qualified_path_ignoring_namespaces_bares_top_messages() {
    let arena = build_nested();
    let outer = arena.file().messages[0];
    let inner = arena.message(outer).by_name["Inner"];
    // Top of the message hierarchy: bare name.
    assert_eq!(arena.qualified_path(outer, true), "Outer");
    // Nested messages still carry their message chain.
    assert_eq!(arena.qualified_path(inner, true), "Outer.Inner");
}

#[test]
fn test_package_path_skips_empty_components() {
    let arena = build_nested();
    let outer = arena.file().messages[0];
    assert_eq!(arena.package_path(outer), "media.search.Outer");

    let plain = File::build(vec![RawItem::Message {
        name: "Solo".into(),
        items: vec![],
    }])
    .unwrap();
    let solo = plain.file().messages[0];
    assert_eq!(plain.package_path(solo), "Solo");
}
