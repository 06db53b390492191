//! Integration tests for JSON encoding of values.

#![cfg(feature = "serde")]

use functional::prelude::*;
use rstest::rstest;
use serde_json::json;

#[rstest]
#[case(Value::Nil, json!(null))]
#[case(Value::from(true), json!(true))]
#[case(Value::from(-7), json!(-7))]
#[case(Value::from(1.5), json!(1.5))]
#[case(Value::from("text"), json!("text"))]
#[case(Value::from(array![1, array!["a"]]), json!([1, ["a"]]))]
#[case(Value::from(OrderedPair::new(3.0, 4.0)), json!({"first": 3.0, "second": 4.0}))]
fn values_encode_as_json(#[case] value: Value, #[case] expected: serde_json::Value) {
    assert_eq!(serde_json::to_value(&value).unwrap(), expected);
}

#[rstest]
fn dictionary_scalar_keys_become_strings() {
    let dictionary = Dictionary::new().insert("name", "x").insert(1, true);
    let encoded = serde_json::to_value(Value::from(dictionary)).unwrap();
    assert_eq!(encoded, json!({"name": "x", "1": true}));
}

#[rstest]
fn json_string_preserves_insertion_order() {
    let dictionary = Dictionary::new().insert("b", 1).insert("a", 2);
    assert_eq!(Value::from(dictionary).json_string().unwrap(), r#"{"b":1,"a":2}"#);
}

#[rstest]
fn json_string_reports_unencodable_keys() {
    let dictionary = Dictionary::new().insert(array![1], "nested key");
    let result = Value::from(dictionary).json_string();
    assert!(matches!(result, Err(FunctionalError::Json(_))));
}

#[rstest]
fn group_by_result_encodes() {
    let groups = array!["a", "bb", "c"]
        .group_by(|word| Ok(Value::from(word.require_text()?.len() as i64)))
        .unwrap();
    assert_eq!(
        Value::from(groups).json_string().unwrap(),
        r#"{"1":["a","c"],"2":["bb"]}"#
    );
}
