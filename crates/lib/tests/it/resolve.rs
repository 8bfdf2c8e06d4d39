//! Three-way merge integration tests

use confluence::{
    diff::{Change, diff},
    doc::Value,
    path,
    resolve::{Conflict, FirstWins, Overlap, TextMerge, merge, resolve},
};
use serde_json::json;

use crate::helpers::{doc, merge_via_diffs};

#[test]
fn test_non_conflicting_merge() {
    let o = doc(json!({"x": [], "y": {}, "z": "pew"}));
    let a = doc(json!({"x": ["a"], "y": {"a": 5}, "z": "bang"}));
    let b = doc(json!({"x": ["b"], "y": {"a": 7}, "z": "bam!"}));

    let (merged, _) = merge_via_diffs(&o, &a, &b, &mut FirstWins);
    assert_eq!(merged, doc(json!({"x": ["a", "b"], "y": {"a": 5}, "z": "bang"})));
    assert_eq!(merge(&o, &a, &b, &mut FirstWins).unwrap(), merged);
}

#[test]
fn test_text_merge_with_resolver() {
    let o = doc(json!(["pewpew"]));
    let a = doc(json!(["pewpew bang"]));
    let b = doc(json!(["powpow"]));

    let (merged, rebased) = merge_via_diffs(&o, &a, &b, &mut TextMerge);
    assert_eq!(merged, doc(json!(["powpow bang"])));
    assert_eq!(
        rebased.changes(),
        &[Change::Replace {
            path: path!(0),
            prev: Value::from("pewpew bang"),
            value: Value::from("powpow bang"),
        }]
    );
}

#[test]
fn test_sibling_keys_both_kept() {
    let o = doc(json!({"settings": {}}));
    let a = doc(json!({"settings": {"theme": "dark"}}));
    let b = doc(json!({"settings": {"lang": "en"}}));

    let (merged, _) = merge_via_diffs(&o, &a, &b, &mut FirstWins);
    assert_eq!(merged, doc(json!({"settings": {"theme": "dark", "lang": "en"}})));
}

#[test]
fn test_resolve_is_pure() {
    let o = doc(json!({"v": {"x": []}}));
    let a = doc(json!({}));
    let b = doc(json!({"b": 19}));
    let (o_before, a_before, b_before) = (o.clone(), a.clone(), b.clone());

    let da = diff(&o, &a);
    let db = diff(&o, &b);
    let (da_before, db_before) = (da.clone(), db.clone());

    let rebased = resolve(&da, &db);
    let merged = merge(&o, &a, &b, &mut FirstWins).unwrap();

    assert_eq!(da, da_before);
    assert_eq!(db, db_before);
    assert_eq!((o, a, b.clone()), (o_before, a_before, b_before));
    assert_eq!(rebased.len(), 1);
    assert_eq!(merged, b);
}

#[test]
fn test_whole_subtree_replace_beats_nested_edit() {
    let o = doc(json!({"profile": {"name": "x", "tags": ["t"]}}));
    let nested = doc(json!({"profile": {"name": "y", "tags": ["t", "u"]}}));
    let replaced = doc(json!({"profile": null}));

    // Shallower edit wins whichever side made it
    let (merged, _) = merge_via_diffs(&o, &replaced, &nested, &mut FirstWins);
    assert_eq!(merged, replaced);
    let (merged, _) = merge_via_diffs(&o, &nested, &replaced, &mut FirstWins);
    assert_eq!(merged, replaced);
}

#[test]
fn test_deep_conflict_shapes() {
    let o = doc(json!({"a": {"b": {"c": 1, "d": 1}, "e": [1, 2]}}));
    let a = doc(json!({"a": {"b": {"c": 2, "d": 1}, "e": [1, 2, 3]}}));
    let b = doc(json!({"a": {"b": {"c": 3, "d": 4}, "e": [0, 2, 4]}}));

    let (merged, _) = merge_via_diffs(&o, &a, &b, &mut FirstWins);
    assert_eq!(
        merged,
        doc(json!({"a": {"b": {"c": 2, "d": 4}, "e": [0, 2, 3, 4]}}))
    );
}

#[test]
fn test_custom_resolver_sees_every_conflict() {
    let o = doc(json!({"a": "1", "b": "1", "c": "1"}));
    let a = doc(json!({"a": "2", "b": "2", "c": "1"}));
    let b = doc(json!({"a": "3", "b": "3", "c": "3"}));

    let mut seen = Vec::new();
    let (merged, _) = merge_via_diffs(&o, &a, &b, &mut |c: &mut Conflict| {
        seen.push(c.theirs().path().to_string());
        assert_eq!(c.overlap(), Overlap::Same);
        // Concatenate both sides
        if let (Value::Text(ours), Value::Text(theirs)) = (c.ours().value(), c.theirs().value()) {
            c.merged = Value::from(format!("{ours}{theirs}"));
        }
        true
    });

    assert_eq!(seen, vec!["a", "b"]);
    assert_eq!(merged, doc(json!({"a": "23", "b": "23", "c": "3"})));
}

#[test]
fn test_self_merge_is_empty() {
    let o = doc(json!({"x": [1, 2], "y": {"k": "v"}}));
    let a = doc(json!({"x": [2], "y": {"k": "w", "n": 1}}));
    let da = diff(&o, &a);

    assert!(resolve(&da, &da).is_empty());
    assert_eq!(merge(&o, &a, &a, &mut FirstWins).unwrap(), a);
}
