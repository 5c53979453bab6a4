use alloc::{format, string::String, vec::Vec};

use rstest::rstest;

use crate::{parse, Value, ValueKind};

#[test]
fn parses_a_mixed_scalar_document() {
    let doc = parse(
        r#"{ "ciao": 1234.1234,
            "name": "roberto",
            "truthy": true,
            "falsey": false,
            "nully": null,
            "stuff_here": [1, 2, 3, 4, 5, { "more": 12 }]
        }"#,
    )
    .unwrap();

    let object = doc.as_object().unwrap();
    let keys: Vec<&str> = object.keys().collect();
    assert_eq!(
        keys,
        ["ciao", "name", "truthy", "falsey", "nully", "stuff_here"]
    );

    assert!((doc.get_f64(&["ciao"]).unwrap() - 1234.1234).abs() < 1e-9);
    assert_eq!(doc.get_str(&["name"]), Ok("roberto"));
    assert_eq!(doc.get_bool(&["truthy"]), Ok(true));
    assert_eq!(doc.get_bool(&["falsey"]), Ok(false));
    assert!(doc.get_path(&["nully"]).unwrap().is_null());

    let stuff = doc.get_path(&["stuff_here"]).unwrap();
    assert_eq!(stuff.kind(), ValueKind::Array);
    assert_eq!(stuff.at(0), Ok(&Value::Number(1.0)));
    assert_eq!(stuff.at(4), Ok(&Value::Number(5.0)));
    assert_eq!(stuff.at(5).unwrap().get_f64(&["more"]), Ok(12.0));
}

#[rstest]
#[case::object("{}", ValueKind::Object)]
#[case::array("[]", ValueKind::Array)]
#[case::nonempty_object(r#"{"a": 1}"#, ValueKind::Object)]
#[case::nonempty_array("[1, 2]", ValueKind::Array)]
fn top_level_tag_matches_the_opening_delimiter(#[case] input: &str, #[case] kind: ValueKind) {
    assert_eq!(parse(input).unwrap().kind(), kind);
}

#[rstest]
#[case::zero("0", 0.0)]
#[case::integer("42", 42.0)]
#[case::negative_integer("-7", -7.0)]
#[case::fraction("2.5", 2.5)]
#[case::negative_fraction("-3.5", -3.5)]
#[case::no_fraction_digits("1.", 1.0)]
#[case::negative_zero("-0", 0.0)]
fn parses_numbers(#[case] lexeme: &str, #[case] expected: f64) {
    let doc = parse(&format!("[{lexeme}]")).unwrap();
    assert_eq!(doc.at(0), Ok(&Value::Number(expected)));
}

#[test]
fn array_growth_past_the_initial_capacity() {
    let elements: Vec<String> = (1..=41).map(|i| format!("{i}")).collect();
    let input = format!("[{}]", elements.join(", "));

    let doc = parse(&input).unwrap();
    let values = doc.as_array().unwrap();
    assert_eq!(values.len(), 41);
    for (i, value) in values.iter().enumerate() {
        assert_eq!(value, &Value::Number((i + 1) as f64));
    }
}

#[test]
fn object_growth_past_the_initial_capacity() {
    let properties: Vec<String> = (0..40).map(|i| format!("\"k{i}\": {i}")).collect();
    let input = format!("{{{}}}", properties.join(", "));

    let doc = parse(&input).unwrap();
    let object = doc.as_object().unwrap();
    assert_eq!(object.len(), 40);
    assert_eq!(object.get("k0"), Some(&Value::Number(0.0)));
    assert_eq!(object.get("k39"), Some(&Value::Number(39.0)));
}

#[test]
fn escaped_quote_does_not_terminate_the_string() {
    // The escape is skipped, not decoded: the backslash stays in the content.
    let doc = parse(r#"["a\"b"]"#).unwrap();
    assert_eq!(doc.at(0), Ok(&Value::String(String::from(r#"a\"b"#))));
}

#[test]
fn multibyte_string_content_passes_through() {
    let doc = parse(r#"{"greeting": "héllo, wörld"}"#).unwrap();
    assert_eq!(doc.get_str(&["greeting"]), Ok("héllo, wörld"));
}

#[test]
fn whitespace_between_tokens_is_skipped() {
    let doc = parse("{\n\t\"a\" :\n [ 1 ,\t2 ]\n}").unwrap();
    assert_eq!(doc.get_path(&["a"]).unwrap().at(1), Ok(&Value::Number(2.0)));
}

#[test]
fn duplicate_keys_are_kept_and_the_first_match_wins() {
    let doc = parse(r#"{"a": 1, "a": 2}"#).unwrap();
    let object = doc.as_object().unwrap();
    assert_eq!(object.len(), 2);
    assert_eq!(doc.get_f64(&["a"]), Ok(1.0));
    assert_eq!(object.properties()[1].value, Value::Number(2.0));
}

#[test]
fn deeply_nested_containers() {
    let doc = parse(r#"[[[{"a": [null]}]]]"#).unwrap();
    let inner = doc.at(0).unwrap().at(0).unwrap().at(0).unwrap();
    assert!(inner.get_path(&["a"]).unwrap().at(0).unwrap().is_null());
}
