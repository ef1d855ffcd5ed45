use serde::{Serialize, Serializer, ser::SerializeMap};

use crate::{FieldKind, FieldNode, FieldTree};

/// Root document produced by [`derive_schema`]:
/// `{ "type": "object", "properties": { … }, "required": [ … ] }`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SchemaDoc {
    #[serde(rename = "type")]
    pub kind: FieldKind,
    pub properties: Properties,
    pub required: Vec<String>,
}

/// Schema of a single field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldSchema {
    #[serde(rename = "type")]
    pub kind: FieldKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<FieldSchema>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<Properties>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<Vec<String>>,
}

impl FieldSchema {
    /// Bare `{ "type": kind }`, used as the item type of an array without
    /// children.
    pub fn of_kind(kind: FieldKind) -> Self {
        Self {
            kind,
            description: None,
            example: None,
            items: None,
            properties: None,
            required: None,
        }
    }
}

/// Name-keyed field schemas in first-insertion order.
///
/// Inserting a name that is already present replaces its schema in place,
/// so with duplicate field names the last one wins while keeping the
/// position of the first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Properties(Vec<(String, FieldSchema)>);

impl Properties {
    pub fn insert(&mut self, name: impl Into<String>, schema: FieldSchema) {
        let name = name.into();
        match self.0.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = schema,
            None => self.0.push((name, schema)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&FieldSchema> {
        self.0
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, schema)| schema)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldSchema)> {
        self.0.iter().map(|(name, schema)| (name.as_str(), schema))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for Properties {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, schema) in &self.0 {
            map.serialize_entry(name, schema)?;
        }
        map.end()
    }
}

/// Derive the JSON-Schema-like description of the whole forest.
///
/// Every root field becomes a property keyed by its name; the names of
/// required fields are listed in `required`, in field order.
///
/// ```rust
/// use promptshape_schema::{FieldKind, FieldPatch, FieldTree, derive_schema};
///
/// let mut tree = FieldTree::new();
/// tree.insert_with(None, FieldPatch::new().name("age").kind(FieldKind::Number).required(true));
///
/// let schema = derive_schema(&tree);
/// assert_eq!(schema.required, ["age"]);
/// assert_eq!(schema.properties.get("age").unwrap().kind, FieldKind::Number);
/// ```
pub fn derive_schema(tree: &FieldTree) -> SchemaDoc {
    let (properties, required) = derive_properties(tree.roots());
    SchemaDoc {
        kind: FieldKind::Object,
        properties,
        required,
    }
}

/// Derive the schema of one field and, recursively, of its children.
///
/// * `array` – `items` is the schema of the first child only; further
///   children are ignored. Without children, items default to `string`.
/// * `object` – `properties`/`required` from every child, present only when
///   the field has children.
pub fn derive_field_schema(field: &FieldNode) -> FieldSchema {
    let mut schema = FieldSchema::of_kind(field.kind);
    schema.description = Some(field.description.clone());
    schema.example = field.example_override().map(str::to_owned);

    match field.kind {
        FieldKind::Array => {
            let items = field
                .first_child()
                .map(derive_field_schema)
                .unwrap_or_else(|| FieldSchema::of_kind(FieldKind::String));
            schema.items = Some(Box::new(items));
        }
        FieldKind::Object if field.has_children() => {
            let (properties, required) = derive_properties(field.children());
            schema.properties = Some(properties);
            schema.required = Some(required);
        }
        _ => {}
    }

    schema
}

fn derive_properties<'a>(fields: impl Iterator<Item = &'a FieldNode>) -> (Properties, Vec<String>) {
    let mut properties = Properties::default();
    let mut required = Vec::new();

    for field in fields {
        if field.required {
            required.push(field.name.clone());
        }
        properties.insert(field.name.clone(), derive_field_schema(field));
    }

    (properties, required)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::FieldPatch;

    #[test]
    fn empty_forest_yields_empty_object_schema() {
        let schema = derive_schema(&FieldTree::new());
        assert_eq!(
            serde_json::to_value(&schema).unwrap(),
            json!({ "type": "object", "properties": {}, "required": [] })
        );
    }

    #[test]
    fn one_property_per_root_field() {
        let mut tree = FieldTree::new();
        for name in ["a", "b", "c"] {
            tree.insert_with(None, FieldPatch::new().name(name));
        }
        let schema = derive_schema(&tree);
        assert_eq!(schema.properties.keys().collect::<Vec<_>>(), ["a", "b", "c"]);
        assert!(schema.required.is_empty());
    }

    #[test]
    fn duplicate_names_last_wins_at_first_position() {
        let mut tree = FieldTree::new();
        tree.insert_with(None, FieldPatch::new().name("x").kind(FieldKind::String));
        tree.insert_with(None, FieldPatch::new().name("y"));
        tree.insert_with(
            None,
            FieldPatch::new().name("x").kind(FieldKind::Boolean).required(true),
        );

        let schema = derive_schema(&tree);
        assert_eq!(schema.properties.len(), 2);
        assert_eq!(schema.properties.keys().collect::<Vec<_>>(), ["x", "y"]);
        assert_eq!(schema.properties.get("x").unwrap().kind, FieldKind::Boolean);
        assert_eq!(schema.required, ["x"]);
    }

    #[test]
    fn required_follows_flag_at_every_level() {
        let mut tree = FieldTree::new();
        let user = tree
            .insert_with(
                None,
                FieldPatch::new().name("user").kind(FieldKind::Object).required(true),
            )
            .unwrap();
        tree.insert_with(Some(user), FieldPatch::new().name("id").required(true));
        tree.insert_with(Some(user), FieldPatch::new().name("nickname"));
        tree.insert_with(None, FieldPatch::new().name("note"));

        let schema = derive_schema(&tree);
        assert_eq!(schema.required, ["user"]);

        let user = schema.properties.get("user").unwrap();
        assert_eq!(user.required.as_deref(), Some(&["id".to_string()][..]));
        assert_eq!(user.properties.as_ref().unwrap().len(), 2);
    }

    #[test]
    fn field_schema_carries_description_and_non_empty_example() {
        let mut tree = FieldTree::new();
        tree.insert_with(
            None,
            FieldPatch::new().name("city").description("Where").example("Oslo"),
        );
        tree.insert_with(None, FieldPatch::new().name("blank").example(""));

        let schema = derive_schema(&tree);
        assert_eq!(
            serde_json::to_value(schema.properties.get("city").unwrap()).unwrap(),
            json!({ "type": "string", "description": "Where", "example": "Oslo" })
        );
        assert_eq!(
            serde_json::to_value(schema.properties.get("blank").unwrap()).unwrap(),
            json!({ "type": "string", "description": "" })
        );
    }

    #[test]
    fn array_uses_only_first_child_as_items() {
        let mut tree = FieldTree::new();
        let list = tree
            .insert_with(None, FieldPatch::new().name("list").kind(FieldKind::Array))
            .unwrap();
        tree.insert_with(Some(list), FieldPatch::new().name("first").kind(FieldKind::Number));
        tree.insert_with(Some(list), FieldPatch::new().name("second").kind(FieldKind::Boolean));

        let schema = derive_schema(&tree);
        let items = schema.properties.get("list").unwrap().items.as_deref().unwrap();
        assert_eq!(items.kind, FieldKind::Number);
        assert_eq!(items.properties, None);
    }

    #[test]
    fn childless_array_defaults_to_string_items() {
        let mut tree = FieldTree::new();
        tree.insert_with(None, FieldPatch::new().name("tags").kind(FieldKind::Array));

        let value = serde_json::to_value(derive_schema(&tree)).unwrap();
        assert_eq!(value["properties"]["tags"]["items"], json!({ "type": "string" }));
    }

    #[test]
    fn childless_object_has_no_nested_structure() {
        let mut tree = FieldTree::new();
        tree.insert_with(None, FieldPatch::new().name("meta").kind(FieldKind::Object));

        let value = serde_json::to_value(derive_schema(&tree)).unwrap();
        assert_eq!(
            value["properties"]["meta"],
            json!({ "type": "object", "description": "" })
        );
    }

    #[test]
    fn scalar_kinds_ignore_children() {
        let mut tree = FieldTree::new();
        let name = tree
            .insert_with(None, FieldPatch::new().name("name").kind(FieldKind::Object))
            .unwrap();
        tree.insert_with(Some(name), FieldPatch::new().name("first"));
        tree.update(name, FieldPatch::new().kind(FieldKind::String));

        let field = derive_schema(&tree).properties.get("name").cloned().unwrap();
        assert_eq!(field.properties, None);
        assert_eq!(field.items, None);
    }
}
