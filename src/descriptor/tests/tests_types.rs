#![allow(clippy::unwrap_used)]
use rstest::rstest;

use crate::base::Label;
use crate::descriptor::{ScalarType, Type, Value};

#[rstest]
#[case("bool", ScalarType::Bool)]
#[case("bytes", ScalarType::Bytes)]
#[case("double", ScalarType::Double)]
#[case("fixed32", ScalarType::Fixed32)]
#[case("fixed64", ScalarType::Fixed64)]
#[case("float", ScalarType::Float)]
#[case("int32", ScalarType::Int32)]
#[case("int64", ScalarType::Int64)]
#[case("sfixed32", ScalarType::Sfixed32)]
#[case("sfixed64", ScalarType::Sfixed64)]
#[case("sint32", ScalarType::Sint32)]
#[case("sint64", ScalarType::Sint64)]
#[case("string", ScalarType::String)]
#[case("uint32", ScalarType::Uint32)]
#[case("uint64", ScalarType::Uint64)]
fn test_scalar_round_trips_its_name(#[case] name: &str, #[case] expected: ScalarType) {
    assert_eq!(ScalarType::from_name(name), Some(expected));
    assert_eq!(expected.as_str(), name);
}

#[rstest]
#[case("Widget")]
#[case("Outer.Inner")]
#[case("Int32")] // case sensitive
#[case("")]
fn test_non_builtin_names_do_not_parse(#[case] name: &str) {
    assert_eq!(ScalarType::from_name(name), None);
}

#[test]
fn test_type_custom_accessor() {
    let scalar = Type::Scalar(ScalarType::Bool);
    assert!(scalar.is_scalar());
    assert_eq!(scalar.custom(), None);
}

#[rstest]
#[case(Label::Required, "required")]
#[case(Label::Optional, "optional")]
#[case(Label::Repeated, "repeated")]
fn test_label_display(#[case] label: Label, #[case] expected: &str) {
    assert_eq!(label.to_string(), expected);
}

#[test]
fn test_value_display() {
    assert_eq!(Value::Bool(true).to_string(), "true");
    assert_eq!(Value::Int(-3).to_string(), "-3");
    assert_eq!(Value::Str("okay".into()).to_string(), "okay");
}
