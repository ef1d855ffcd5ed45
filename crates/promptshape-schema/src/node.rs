use std::{fmt::Display, sync::Arc};

use serde::Serialize;

use crate::kind::FieldKind;

/// Opaque identifier of a [`FieldNode`].
///
/// Ids are handed out by the owning [`FieldTree`](crate::FieldTree) and are
/// never reused within it, not even after the node has been removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct FieldId(u64);

impl FieldId {
    pub(crate) fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl Display for FieldId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "field-{}", self.0)
    }
}

/// One schema field.
///
/// Children are held behind `Arc`s so cloning a tree shares every subtree;
/// mutations copy only the nodes on the path to the edited one. The child
/// list is private: a node can only gain children through
/// [`FieldTree::insert`](crate::FieldTree::insert), which always creates a
/// fresh node, so no node can end up with two parents or under itself.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldNode {
    id: FieldId,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: FieldKind,
    pub description: String,
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub(crate) children: Vec<Arc<FieldNode>>,
}

impl FieldNode {
    /// A blank `string` field: empty name and description, optional, no
    /// example, no children.
    pub(crate) fn new(id: FieldId) -> Self {
        Self {
            id,
            name: String::new(),
            kind: FieldKind::default(),
            description: String::new(),
            required: false,
            example: None,
            children: Vec::new(),
        }
    }

    pub fn id(&self) -> FieldId {
        self.id
    }

    /// The example override, if one is set and non-empty.
    pub fn example_override(&self) -> Option<&str> {
        self.example.as_deref().filter(|example| !example.is_empty())
    }

    pub fn children(&self) -> impl ExactSizeIterator<Item = &FieldNode> {
        self.children.iter().map(Arc::as_ref)
    }

    pub fn first_child(&self) -> Option<&FieldNode> {
        self.children.first().map(Arc::as_ref)
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Number of nodes in the subtree rooted here, this node included.
    pub fn subtree_size(&self) -> usize {
        1 + self.children().map(FieldNode::subtree_size).sum::<usize>()
    }
}

/// Partial update for a [`FieldNode`].
///
/// Only attributes set to `Some` are overwritten. The id is not
/// part of the patch. Setting `example` to an empty string clears the
/// override for derivation purposes.
///
/// ```rust
/// use promptshape_schema::{FieldKind, FieldPatch};
///
/// let patch = FieldPatch::new().name("calories").kind(FieldKind::Number).required(true);
/// assert!(!patch.is_empty());
/// assert!(FieldPatch::new().is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldPatch {
    pub name: Option<String>,
    pub kind: Option<FieldKind>,
    pub description: Option<String>,
    pub required: Option<bool>,
    pub example: Option<String>,
}

impl FieldPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn kind(mut self, kind: FieldKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = Some(required);
        self
    }

    pub fn example(mut self, example: impl Into<String>) -> Self {
        self.example = Some(example.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.kind.is_none()
            && self.description.is_none()
            && self.required.is_none()
            && self.example.is_none()
    }

    pub(crate) fn apply(self, node: &mut FieldNode) {
        if let Some(name) = self.name {
            node.name = name;
        }
        if let Some(kind) = self.kind {
            node.kind = kind;
        }
        if let Some(description) = self.description {
            node.description = description;
        }
        if let Some(required) = self.required {
            node.required = required;
        }
        if let Some(example) = self.example {
            node.example = Some(example);
        }
    }
}
