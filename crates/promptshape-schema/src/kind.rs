use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

/// Declared JSON type of a field.
///
/// Serialises to the lowercase JSON Schema type name (`"string"`,
/// `"object"`, …). Only [`FieldKind::Array`] and [`FieldKind::Object`] give
/// meaning to a field's children.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    #[default]
    String,
    Number,
    Boolean,
    Array,
    Object,
    Null,
}

impl FieldKind {
    /// Every kind, in the order a type picker lists them.
    pub const ALL: [FieldKind; 6] = [
        FieldKind::String,
        FieldKind::Number,
        FieldKind::Boolean,
        FieldKind::Array,
        FieldKind::Object,
        FieldKind::Null,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FieldKind::String => "string",
            FieldKind::Number => "number",
            FieldKind::Boolean => "boolean",
            FieldKind::Array => "array",
            FieldKind::Object => "object",
            FieldKind::Null => "null",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FieldKind::String => "String",
            FieldKind::Number => "Number",
            FieldKind::Boolean => "Boolean",
            FieldKind::Array => "Array",
            FieldKind::Object => "Object",
            FieldKind::Null => "Null",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            FieldKind::String => "Text value",
            FieldKind::Number => "Numeric value",
            FieldKind::Boolean => "True or false",
            FieldKind::Array => "List of values",
            FieldKind::Object => "Key-value pairs",
            FieldKind::Null => "Empty value",
        }
    }

    /// Whether children of a field with this kind take part in derivation.
    pub fn is_container(self) -> bool {
        matches!(self, FieldKind::Array | FieldKind::Object)
    }
}

impl Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown field kind `{0}`")]
pub struct ParseFieldKindError(String);

impl FromStr for FieldKind {
    type Err = ParseFieldKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ParseFieldKindError(s.to_string()))
    }
}
