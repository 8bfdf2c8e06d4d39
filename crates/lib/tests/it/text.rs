//! Text merge integration tests

use confluence::text::{self, TextOp, apply_all, transform};

#[test]
fn test_merge_keeps_both_intents() {
    assert_eq!(text::merge("pewpew", "pewpew bang", "powpow").unwrap(), "powpow bang");
}

#[test]
fn test_merge_multibyte_text() {
    let merged = text::merge("café au lait", "café au lait ☕", "le café au lait").unwrap();
    assert_eq!(merged, "le café au lait ☕");
}

#[test]
fn test_transform_converges_in_both_orders() {
    let base = "the quick brown fox";
    let ours = text::diff(base, "the quick red fox jumps");
    let theirs = text::diff(base, "a quick brown dog");

    let via_ours = apply_all(
        &apply_all(base, &ours).unwrap(),
        &transform(&theirs, &ours, base),
    )
    .unwrap();
    let via_theirs = apply_all(
        &apply_all(base, &theirs).unwrap(),
        &transform(&ours, &theirs, base),
    )
    .unwrap();

    assert_eq!(via_ours, via_theirs);
    assert_eq!(via_ours, "a quick red dog jumps");
}

#[test]
fn test_overlapping_deletions_are_not_repeated() {
    let base = "0123456789";
    let ours = vec![TextOp::delete(2, 4)];
    let theirs = vec![TextOp::delete(4, 4)];

    let rebased = transform(&theirs, &ours, base);
    let result = apply_all(&apply_all(base, &ours).unwrap(), &rebased).unwrap();
    assert_eq!(result, "0189");
}

#[test]
fn test_text_op_serde_shape() {
    let op = TextOp::insert(3, "abc");
    assert_eq!(
        serde_json::to_value(&op).unwrap(),
        serde_json::json!({"offset": 3, "to_remove": 0, "to_insert": "abc"})
    );
}
