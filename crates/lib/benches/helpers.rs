//! Shared helpers for benchmark tests

use confluence::doc::{Map, Value};

/// Builds a document with `records` entries under `items`, each holding a
/// few scalars, a short list and a text field.
pub fn generate_document(records: usize) -> Value {
    let items: Map = (0..records)
        .map(|i| {
            let mut record = Map::new();
            record.insert("id", Value::Int(i as i64));
            record.insert("title", format!("record number {i}"));
            record.insert("done", i % 3 == 0);
            record.insert(
                "tags",
                Value::from(vec![format!("t{}", i % 5), format!("t{}", i % 7)]),
            );
            (format!("item_{i}"), Value::Map(record))
        })
        .collect();

    let mut root = Map::new();
    root.insert("items", Value::Map(items));
    root.insert("order", Value::from((0..records as i64).collect::<Vec<_>>()));
    Value::Map(root)
}

/// Returns a copy of `doc` with every `stride`-th record edited, starting
/// at `offset`. Different offsets give concurrent, mostly disjoint edits.
pub fn edit_document(doc: &Value, stride: usize, offset: usize) -> Value {
    let mut edited = doc.clone();
    let Some(root) = edited.as_map_mut() else {
        return edited;
    };

    if let Some(items) = root.get_mut("items").and_then(Value::as_map_mut) {
        let keys: Vec<String> = items.keys().map(str::to_string).collect();
        for key in keys.iter().skip(offset).step_by(stride.max(1)) {
            if let Some(record) = items.get_mut(key).and_then(Value::as_map_mut) {
                record.insert("title", format!("{key} edited at {offset}"));
                record.insert("done", true);
            }
        }
    }
    if let Some(order) = root.get_mut("order").and_then(Value::as_list_mut) {
        order.push(Value::Int(-(offset as i64)));
    }
    edited
}
