use serde_json::{Map, Value, json};

use crate::{FieldKind, FieldNode, FieldTree};

/// Root document produced by [`derive_example`]: field name → example value.
pub type ExampleDoc = Map<String, Value>;

pub const STRING_PLACEHOLDER: &str = "example string";
pub const NUMBER_PLACEHOLDER: i64 = 42;
pub const BOOLEAN_PLACEHOLDER: bool = true;

/// Derive a concrete example payload for the whole forest.
///
/// Keys keep first-insertion order; a duplicated name keeps the value of
/// its last field.
///
/// ```rust
/// use promptshape_schema::{FieldKind, FieldPatch, FieldTree, derive_example};
///
/// let mut tree = FieldTree::new();
/// tree.insert_with(None, FieldPatch::new().name("ok").kind(FieldKind::Boolean));
///
/// assert_eq!(serde_json::Value::Object(derive_example(&tree)), serde_json::json!({ "ok": true }));
/// ```
pub fn derive_example(tree: &FieldTree) -> ExampleDoc {
    derive_entries(tree.roots())
}

/// Example value of one field.
///
/// A non-empty `example` override is returned verbatim as a string, whatever
/// the declared kind: a `number` field with example `"n/a"` yields `"n/a"`.
pub fn derive_field_example(field: &FieldNode) -> Value {
    if let Some(example) = field.example_override() {
        return Value::String(example.to_owned());
    }

    match field.kind {
        FieldKind::String => Value::from(STRING_PLACEHOLDER),
        FieldKind::Number => Value::from(NUMBER_PLACEHOLDER),
        FieldKind::Boolean => Value::from(BOOLEAN_PLACEHOLDER),
        FieldKind::Array => match field.first_child() {
            Some(item) => Value::Array(vec![derive_field_example(item)]),
            None => json!(["item1", "item2"]),
        },
        FieldKind::Object if field.has_children() => Value::Object(derive_entries(field.children())),
        FieldKind::Object => json!({ "key": "value" }),
        FieldKind::Null => Value::Null,
    }
}

fn derive_entries<'a>(fields: impl Iterator<Item = &'a FieldNode>) -> ExampleDoc {
    fields
        .map(|field| (field.name.clone(), derive_field_example(field)))
        .collect()
}
