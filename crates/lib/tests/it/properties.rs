//! Property-based tests over generated documents and strings

use confluence::{
    diff::{Diff, diff, patched},
    doc::{Map, Value},
    resolve::{FirstWins, merge, resolve},
    text,
};
use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;

const KEYS: &[&str] = &["a", "b", "c", "d"];
const WORDS: &[&str] = &["", "pew", "bang", "bam!"];
const MAX_DEPTH: usize = 3;

/// A small document with bounded depth and a narrow key space, so that
/// independently generated documents share structure often enough to
/// produce nested diffs.
#[derive(Debug, Clone)]
struct Doc(Value);

impl Arbitrary for Doc {
    fn arbitrary(g: &mut Gen) -> Self {
        Doc(Value::Map(gen_map(g, MAX_DEPTH)))
    }
}

fn gen_map(g: &mut Gen, depth: usize) -> Map {
    let len = usize::arbitrary(g) % (KEYS.len() + 1);
    (0..len)
        .map(|_| {
            let key = *g.choose(KEYS).unwrap_or(&"a");
            (key, gen_value(g, depth.saturating_sub(1)))
        })
        .collect()
}

fn gen_value(g: &mut Gen, depth: usize) -> Value {
    let kinds = if depth == 0 { 5 } else { 7 };
    match u8::arbitrary(g) % kinds {
        0 => Value::Null,
        1 => Value::Bool(bool::arbitrary(g)),
        2 => Value::Int(i64::from(i8::arbitrary(g))),
        3 => Value::Float(f64::from(i8::arbitrary(g)) / 4.0),
        4 => Value::from(*g.choose(WORDS).unwrap_or(&"")),
        5 => {
            let len = usize::arbitrary(g) % 4;
            Value::List(
                (0..len)
                    .map(|_| {
                        // Occasional hole
                        if u8::arbitrary(g) % 8 == 0 {
                            Value::Absent
                        } else {
                            gen_value(g, depth - 1)
                        }
                    })
                    .collect(),
            )
        }
        _ => Value::Map(gen_map(g, depth)),
    }
}

/// A short string over a tiny alphabet, so concurrent edits collide.
#[derive(Debug, Clone)]
struct Text(String);

impl Arbitrary for Text {
    fn arbitrary(g: &mut Gen) -> Self {
        let len = usize::arbitrary(g) % 8;
        Text((0..len).map(|_| *g.choose(&['a', 'b', ' ', 'é']).unwrap_or(&'a')).collect())
    }
}

#[quickcheck]
fn prop_patch_of_diff_round_trips(o: Doc, a: Doc) -> bool {
    patched(&o.0, &diff(&o.0, &a.0)).is_ok_and(|result| result == a.0)
}

#[quickcheck]
fn prop_diff_of_self_is_empty(o: Doc) -> bool {
    diff(&o.0, &o.0).is_empty() && patched(&o.0, &Diff::new()).is_ok_and(|r| r == o.0)
}

#[quickcheck]
fn prop_inverse_restores_original(o: Doc, a: Doc) -> bool {
    let changes = diff(&o.0, &a.0);
    patched(&a.0, &changes.inverse()).is_ok_and(|result| result == o.0)
}

#[quickcheck]
fn prop_self_merge_is_empty(o: Doc, a: Doc) -> bool {
    let changes = diff(&o.0, &a.0);
    resolve(&changes, &changes).is_empty()
}

#[quickcheck]
fn prop_empty_side_merges(o: Doc, a: Doc) -> bool {
    let changes = diff(&o.0, &a.0);
    resolve(&Diff::new(), &changes) == changes && resolve(&changes, &Diff::new()).is_empty()
}

#[quickcheck]
fn prop_merge_with_unchanged_side(o: Doc, a: Doc) -> bool {
    let left = merge(&o.0, &a.0, &o.0, &mut FirstWins).is_ok_and(|m| m == a.0);
    let right = merge(&o.0, &o.0, &a.0, &mut FirstWins).is_ok_and(|m| m == a.0);
    left && right
}

#[quickcheck]
fn prop_merge_never_loses_our_side_on_disjoint_keys(o: Doc, a: Doc, b: Doc) -> bool {
    // Nest the two sides under different keys so nothing overlaps
    let wrap = |left: &Value, right: &Value| {
        let mut map = Map::new();
        map.insert("left", left.clone());
        map.insert("right", right.clone());
        Value::Map(map)
    };
    let ancestor = wrap(&o.0, &o.0);
    let ours = wrap(&a.0, &o.0);
    let theirs = wrap(&o.0, &b.0);

    merge(&ancestor, &ours, &theirs, &mut FirstWins).is_ok_and(|m| m == wrap(&a.0, &b.0))
}

#[quickcheck]
fn prop_text_merge_is_order_independent(ancestor: Text, ours: Text, theirs: Text) -> bool {
    let forward = text::merge(&ancestor.0, &ours.0, &theirs.0);
    let backward = text::merge(&ancestor.0, &theirs.0, &ours.0);
    matches!((forward, backward), (Ok(f), Ok(b)) if f == b)
}

#[quickcheck]
fn prop_text_merge_with_unchanged_side(ancestor: Text, edited: Text) -> bool {
    text::merge(&ancestor.0, &ancestor.0, &edited.0).is_ok_and(|m| m == edited.0)
        && text::merge(&ancestor.0, &edited.0, &ancestor.0).is_ok_and(|m| m == edited.0)
}
