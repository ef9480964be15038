use pretty_assertions::assert_eq;

use pcc_core::Parsed;

use super::*;

fn object(members: &[(&str, JsonValue)]) -> JsonValue {
    JsonValue::Object(
        members
            .iter()
            .map(|(key, value)| ((*key).to_owned(), value.clone()))
            .collect(),
    )
}

fn text(value: &str) -> JsonValue {
    JsonValue::String(value.to_owned())
}

// === Scalars ===

#[test]
fn scalar_values() {
    let value = json_value();
    assert_eq!(value.parse("null").unwrap().value, JsonValue::Null);
    assert_eq!(value.parse("true").unwrap().value, JsonValue::Bool(true));
    assert_eq!(value.parse(" false ").unwrap().value, JsonValue::Bool(false));
    assert_eq!(value.parse("-1.5e1").unwrap().value, JsonValue::Number(-15.0));
    assert_eq!(value.parse("\"hi\"").unwrap().value, text("hi"));
}

#[test]
fn numbers_follow_json_syntax() {
    let value = json_value();
    assert_eq!(value.parse("0").unwrap().value, JsonValue::Number(0.0));
    assert_eq!(value.parse("-0.5e+2").unwrap().value, JsonValue::Number(-50.0));
    assert_eq!(value.parse("12E-1").unwrap().value, JsonValue::Number(1.2));
    for rejected in ["nan", "NaN", "Infinity", "inf", "+1", ".5", "-"] {
        assert!(value.parse(rejected).is_err(), "{rejected} should not parse");
    }
}

#[test]
fn malformed_numbers_leave_input_behind() {
    let done = json_value().parse("01").unwrap();
    assert_eq!(done, Parsed::new(JsonValue::Number(0.0), "1"));
    let done = json_value().parse("1.").unwrap();
    assert_eq!(done, Parsed::new(JsonValue::Number(1.0), "."));
    let done = json_value().parse("1e").unwrap();
    assert_eq!(done, Parsed::new(JsonValue::Number(1.0), "e"));

    assert!(matches!(parse_json("[01]"), Err(DocumentError::Parse(_))));
    assert!(matches!(parse_json("[1.]"), Err(DocumentError::Parse(_))));
    assert!(matches!(parse_json("[nan]"), Err(DocumentError::Parse(_))));
}

#[test]
fn value_leaves_following_input() {
    let done = json_value().parse("1 ,2").unwrap();
    assert_eq!(done.value, JsonValue::Number(1.0));
    assert_eq!(done.rest, ",2");
}

// === Strings ===

#[test]
fn empty_string() {
    assert_eq!(string().parse("\"\"").unwrap().value, "");
}

#[test]
fn strings_keep_spaces_and_punctuation() {
    assert_eq!(string().parse("\"a b, c!\"").unwrap().value, "a b, c!");
}

#[test]
fn simple_escapes_are_decoded() {
    let done = string().parse(r#""say \"hi\"\n\tdone\\/\/""#).unwrap();
    assert_eq!(done.value, "say \"hi\"\n\tdone\\//");
    assert_eq!(done.rest, "");
}

#[test]
fn unicode_escapes_are_decoded() {
    assert_eq!(string().parse(r#""caf\u00e9""#).unwrap().value, "café");
    assert_eq!(string().parse(r#""\ud83d\ude00!""#).unwrap().value, "😀!");
    assert_eq!(string().parse(r#""\ud83d""#).unwrap().value, "\u{fffd}");
}

#[test]
fn bad_escapes_fail() {
    assert!(string().parse(r#""\q""#).is_err());
    assert!(string().parse(r#""\u12g4""#).is_err());
    assert!(string().parse(r#""\u12""#).is_err());
    assert!(string().parse(r#""open"#).is_err());
}

// === Collections ===

#[test]
fn arrays() {
    let value = json_value();
    assert_eq!(
        value.parse("[ 1,  2 , 3 ]").unwrap().value,
        JsonValue::Array(vec![1.0.into(), 2.0.into(), 3.0.into()])
    );
    assert_eq!(value.parse("[]").unwrap().value, JsonValue::Array(vec![]));
    assert_eq!(value.parse("[ ]").unwrap().value, JsonValue::Array(vec![]));
    assert!(value.parse("[1,]").is_err());
}

#[test]
fn objects() {
    let value = json_value();
    assert_eq!(
        value.parse(r#"{"b": true, "a": [null]}"#).unwrap().value,
        object(&[
            ("a", JsonValue::Array(vec![JsonValue::Null])),
            ("b", JsonValue::Bool(true)),
        ])
    );
    assert_eq!(value.parse("{ }").unwrap().value, object(&[]));
    assert!(value.parse(r#"{"a" 1}"#).is_err());
}

#[test]
fn duplicate_keys_keep_the_last_value() {
    assert_eq!(
        json_value().parse(r#"{"k": 1, "k": 2}"#).unwrap().value,
        object(&[("k", 2.0.into())])
    );
}

#[test]
fn nested_document() {
    let source = r#"
    {
        "key1": "value1",
        "key2": 2,
        "key3": [ 1,  2 , 3 ] ,
        "key4": {
            "key5": "value5" ,
            "key6": 6
        }
    }"#;
    let expected = object(&[
        ("key1", text("value1")),
        ("key2", 2.0.into()),
        (
            "key3",
            JsonValue::Array(vec![1.0.into(), 2.0.into(), 3.0.into()]),
        ),
        ("key4", object(&[("key5", text("value5")), ("key6", 6.0.into())])),
    ]);
    assert_eq!(parse_json(source).unwrap(), expected);
}

// === Roots ===

#[test]
fn root_must_be_object_array_or_null() {
    assert_eq!(json().parse("null").unwrap().value, JsonValue::Null);
    assert_eq!(json().parse("[true]").unwrap().value, JsonValue::Array(vec![true.into()]));
    assert_eq!(json().parse("1").unwrap_err().message(), "tag not found");
    assert!(json().parse("\"text\"").is_err());
}

#[test]
fn whole_document_errors() {
    assert_eq!(
        parse_json("[1] x"),
        Err(DocumentError::TrailingInput { offset: 4 })
    );
    assert!(matches!(parse_json(""), Err(DocumentError::Parse(_))));
}
