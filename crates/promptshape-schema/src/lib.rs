//! # `promptshape-schema` – response structure builder
//!
//! Describe the JSON shape a model should answer with as a tree of fields,
//! then derive two documents from it:
//!
//! * a JSON-Schema-like description ([`derive_schema`]), and
//! * a concrete example payload ([`derive_example`]) that gets embedded in
//!   the instructions sent to the model.
//!
//! ```rust
//! use promptshape_schema::{FieldKind, FieldPatch, FieldTree};
//!
//! let mut tree = FieldTree::new();
//! let meals = tree
//!     .insert_with(None, FieldPatch::new().name("meals").kind(FieldKind::Array))
//!     .unwrap();
//! tree.insert_with(Some(meals), FieldPatch::new().name("meal").example("Chicken"));
//!
//! assert_eq!(tree.example_preview(), "{\n  \"meals\": [\n    \"Chicken\"\n  ]\n}");
//! ```
pub mod derive;
pub mod kind;
pub mod node;
pub mod tree;

pub use derive::{
    ExampleDoc, FieldSchema, Properties, SchemaDoc, derive_example, derive_field_example,
    derive_field_schema, derive_schema,
};
pub use kind::{FieldKind, ParseFieldKindError};
pub use node::{FieldId, FieldNode, FieldPatch};
pub use tree::FieldTree;
