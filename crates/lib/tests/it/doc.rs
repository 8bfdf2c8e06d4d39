//! Value and path integration tests

use std::str::FromStr;

use confluence::{
    doc::{Map, PathBuf, Segment, Value, deep_clone, deep_equal, path_overlaps},
    path,
};
use serde_json::json;

use crate::helpers::doc;

#[test]
fn test_path_overlaps() {
    assert!(path_overlaps(&path!("a", "b", "c"), &path!("a", "b", "c", "d")));
    assert!(path_overlaps(&path!("a", "b", "c", "d"), &path!("a", "b", "c")));
    assert!(path_overlaps(&path!("a", "b"), &path!("a", "b")));
    assert!(path_overlaps(&path!(), &path!("anything")));
    assert!(!path_overlaps(&path!("a", "b", "c"), &path!("a", "b", "d", "e")));
    assert!(!path_overlaps(&path!("x", 0), &path!("x", 1)));
}

#[test]
fn test_path_string_form() {
    let path = PathBuf::from_str("user.tags[2].name").unwrap();
    assert_eq!(path, path!("user", "tags", 2, "name"));
    assert_eq!(path.to_string(), "user.tags[2].name");

    let err = PathBuf::from_str("tags[-1]").unwrap_err();
    assert!(err.to_string().contains("non-negative"));
    assert!(PathBuf::from_str("tags[3").is_err());
}

#[test]
fn test_path_serializes_as_array() {
    let path = path!("x", 0, "y");
    assert_eq!(serde_json::to_value(&path).unwrap(), json!(["x", 0, "y"]));
    let back: PathBuf = serde_json::from_value(json!(["x", 0, "y"])).unwrap();
    assert_eq!(back, path);
    assert_eq!(back.segments()[1], Segment::Index(0));
}

#[test]
fn test_deep_equal_ignores_key_order() {
    let a = doc(json!({"a": 1, "b": [1, 2]}));
    let b = doc(json!({"b": [1, 2], "a": 1}));
    assert!(deep_equal(&a, &b));
    assert!(deep_equal(&b, &a));
}

#[test]
fn test_deep_equal_respects_element_order() {
    assert!(!deep_equal(&doc(json!([1, 2])), &doc(json!([2, 1]))));
}

#[test]
fn test_deep_equal_trailing_hole() {
    let with_hole = Value::List(vec![
        Value::Int(1),
        Value::Int(2),
        doc(json!({"x": 7})),
        Value::Int(4),
        Value::Int(5),
        Value::Absent,
    ]);
    let without = doc(json!([1, 2, {"x": 7}, 4, 5]));
    assert!(!deep_equal(&with_hole, &without));
}

#[test]
fn test_absent_key_is_not_present() {
    let mut map = Map::new();
    map.insert("k", Value::Null);
    assert!(map.contains_key("k"));

    map.insert("k", Value::Absent);
    assert!(!map.contains_key("k"));
    assert_eq!(Value::Map(map), doc(json!({})));
}

#[test]
fn test_clone_shares_nothing() {
    let original = doc(json!({"x": 5, "nested": {"list": [1, 2]}}));
    let mut copy = deep_clone(&original).unwrap();
    assert!(deep_equal(&original, &copy));

    copy.as_map_mut()
        .and_then(|m| m.get_mut("nested"))
        .and_then(Value::as_map_mut)
        .unwrap()
        .insert("list", Value::Null);

    assert_eq!(
        original.get_path(&path!("nested", "list", 1)),
        Some(&Value::Int(2))
    );
    assert!(!deep_equal(&original, &copy));
}

#[test]
fn test_clone_rejects_non_finite_float() {
    let value = doc(json!({"x": [1]}));
    assert!(deep_clone(&value).is_ok());

    let mut bad = Map::new();
    bad.insert("inner", Value::List(vec![Value::Float(f64::NAN)]));
    let err = deep_clone(&Value::Map(bad)).unwrap_err();
    assert!(err.is_unsupported());
    assert_eq!(err.path(), Some("inner[0]"));
}

#[test]
fn test_value_json_round_trip() {
    let json = json!({"b": [true, null, 1.5, "s"], "a": {"n": -3}});
    let value = Value::from(json.clone());
    assert_eq!(value.to_json().unwrap(), json);

    let parsed: Value = serde_json::from_str(r#"{"x": [1, 2]}"#).unwrap();
    assert_eq!(parsed, doc(json!({"x": [1, 2]})));
}

#[test]
fn test_from_serialize() {
    #[derive(serde::Serialize)]
    struct Settings {
        name: String,
        retries: u32,
    }

    let value = Value::from_serialize(&Settings {
        name: "sync".to_string(),
        retries: 3,
    })
    .unwrap();
    assert_eq!(value, doc(json!({"name": "sync", "retries": 3})));
}
