use alloc::string::String;

use crate::{object, parse, AccessError, Value, ValueKind};

fn nested_literal() -> Value {
    object! {
        "test" => 9999.0,
        "value" => object! {
            "test" => 100.0,
            "test_object" => object! {
                "nested" => "Some deeply nested string",
            },
        },
    }
}

#[test]
fn nested_path_lookup_on_a_literal() {
    let doc = nested_literal();
    assert_eq!(
        doc.get_str(&["value", "test_object", "nested"]),
        Ok("Some deeply nested string")
    );
    assert_eq!(doc.get_f64(&["test"]), Ok(9999.0));
    assert_eq!(doc.get_f64(&["value", "test"]), Ok(100.0));
}

#[test]
fn nested_path_lookup_on_a_parsed_tree() {
    let doc = parse(r#"{"value": {"test_object": {"nested": "x"}}}"#).unwrap();
    assert_eq!(doc.get_str(&["value", "test_object", "nested"]), Ok("x"));
}

#[test]
fn missing_key_is_not_found_not_a_crash() {
    let doc = nested_literal();
    assert_eq!(
        doc.get_path(&["value", "missing"]),
        Err(AccessError::NotFound {
            key: String::from("missing")
        })
    );
    assert!(!doc.exists(&["value", "missing"]));
}

#[test]
fn descending_through_a_scalar_is_a_type_error() {
    let doc = nested_literal();
    assert_eq!(
        doc.get_path(&["test", "anything"]),
        Err(AccessError::WrongType {
            expected: ValueKind::Object,
            actual: ValueKind::Number,
        })
    );
}

#[test]
fn typed_get_distinguishes_wrong_type_from_not_found() {
    let doc = nested_literal();
    assert_eq!(
        doc.get_str(&["value"]),
        Err(AccessError::WrongType {
            expected: ValueKind::String,
            actual: ValueKind::Object,
        })
    );
    assert_eq!(
        doc.get_f64(&["nope"]),
        Err(AccessError::NotFound {
            key: String::from("nope")
        })
    );
}

#[test]
fn empty_path_returns_the_receiver() {
    let doc = nested_literal();
    assert_eq!(doc.get_path(&[]), Ok(&doc));
}

#[test]
fn kind_queries() {
    let doc = nested_literal();
    assert_eq!(doc.kind_of("test"), Some(ValueKind::Number));
    assert_eq!(doc.kind_of("value"), Some(ValueKind::Object));
    assert_eq!(doc.kind_of("missing"), None);
    assert_eq!(Value::Null.kind_of("anything"), None);
}

#[test]
fn checked_array_indexing() {
    let doc = parse("[10, 20]").unwrap();
    assert_eq!(doc.at(0), Ok(&Value::Number(10.0)));
    assert_eq!(doc.at(1), Ok(&Value::Number(20.0)));
    assert_eq!(
        doc.at(5),
        Err(AccessError::IndexOutOfBounds { index: 5, len: 2 })
    );
    assert_eq!(
        Value::Null.at(0),
        Err(AccessError::WrongType {
            expected: ValueKind::Array,
            actual: ValueKind::Null,
        })
    );
}

#[test]
fn checked_variant_accessors() {
    let doc = nested_literal();
    assert!(doc.is_object());
    assert!(doc.as_array().is_none());
    assert_eq!(doc.as_object().unwrap().len(), 2);

    let number = Value::Number(1.5);
    assert!(number.is_number());
    assert!(!number.is_bool() && !number.is_string() && !number.is_array());
    assert_eq!(number.as_f64(), Some(1.5));
    assert_eq!(number.as_str(), None);
    assert_eq!(number.as_bool(), None);
}

#[test]
fn object_key_enumeration_is_derived_from_the_properties() {
    let doc = nested_literal();
    let object = doc.as_object().unwrap();
    assert!(object.keys().eq(["test", "value"]));
    assert!(object.contains_key("test"));
    assert!(!object.contains_key("nested"));
    assert!(object.into_iter().all(|property| !property.key.is_empty()));
}
