#![allow(clippy::unwrap_used)]
use super::helpers::{field, file_at, message};
use crate::base::Label;
use crate::descriptor::RawItem;
use crate::semantic::{DocTarget, Enforcer, SemanticError};

fn annotated_field(ty: &str, name: &str, tag: u32, doc: &str) -> RawItem {
    RawItem::Field {
        label: Label::Optional,
        ty: ty.into(),
        name: name.into(),
        tag,
        default: None,
        items: vec![RawItem::Annotation { text: doc.into() }],
    }
}

#[test]
fn test_undocumented_field_fails_when_fields_enforced() {
    let arena = file_at(
        "proto/a.proto",
        vec![message("M", vec![field("string", "bare", 1)])],
    );
    let err = Enforcer::new([DocTarget::Field]).enforce(&arena).unwrap_err();
    match err {
        SemanticError::MissingDoc { item, chain } => {
            assert_eq!(item, "[field \"bare\"]");
            assert_eq!(chain, ", of [message \"M\"], of [file proto/a.proto]");
        }
        other => panic!("expected MissingDoc, got {other:?}"),
    }
}

#[test]
fn test_empty_target_set_always_passes() {
    let arena = file_at(
        "proto/a.proto",
        vec![message("M", vec![field("string", "bare", 1)])],
    );
    Enforcer::new([]).enforce(&arena).unwrap();
}

#[test]
fn test_documented_field_passes() {
    let arena = file_at(
        "proto/a.proto",
        vec![message("M", vec![annotated_field("string", "x", 1, "The x.")])],
    );
    Enforcer::new([DocTarget::Field]).enforce(&arena).unwrap();
}

#[test]
fn test_enum_entries_are_checked_through_their_enum() {
    let arena = file_at(
        "proto/a.proto",
        vec![message(
            "M",
            vec![RawItem::Enum {
                name: "Color".into(),
                items: vec![RawItem::entry("RED", 0)],
            }],
        )],
    );
    // The enum itself is fine, its entry is not documented.
    let err = Enforcer::new([DocTarget::EnumEntry])
        .enforce(&arena)
        .unwrap_err();
    assert!(matches!(
        err,
        SemanticError::MissingDoc { item, .. } if item == "[enum RED = 0]"
    ));
}

#[test]
fn test_file_level_enforcement() {
    let undocumented = file_at("proto/a.proto", vec![]);
    assert!(Enforcer::new([DocTarget::File]).enforce(&undocumented).is_err());

    let documented = file_at(
        "proto/b.proto",
        vec![RawItem::Annotation {
            text: "Top of file.".into(),
        }],
    );
    Enforcer::new([DocTarget::File]).enforce(&documented).unwrap();
}

#[test]
fn test_nested_messages_are_walked() {
    let arena = file_at(
        "proto/a.proto",
        vec![message("Outer", vec![message("Inner", vec![])])],
    );
    let err = Enforcer::new([DocTarget::Message]).enforce(&arena).unwrap_err();
    // Outer is hit first, in structural order.
    assert!(matches!(
        err,
        SemanticError::MissingDoc { item, .. } if item == "[message \"Outer\"]"
    ));
}
