//! The editable **field tree**: an ordered forest of [`FieldNode`]s.
//!
//! All three mutations address nodes by [`FieldId`] at any depth and treat an
//! unknown id as a no-op rather than an error. Each mutation first locates
//! the index path to its target and only then copies the nodes along that
//! path (`Arc::make_mut`), so a missed lookup touches nothing and a cloned
//! tree keeps sharing every untouched subtree with its origin.
//!
//! ```rust
//! use promptshape_schema::{FieldKind, FieldPatch, FieldTree};
//!
//! let mut tree = FieldTree::new();
//! let meals = tree.insert(None).unwrap();
//! tree.update(meals, FieldPatch::new().name("meals").kind(FieldKind::Array));
//! let meal = tree.insert(Some(meals)).unwrap();
//! tree.update(meal, FieldPatch::new().name("meal").kind(FieldKind::Object));
//!
//! assert_eq!(tree.len(), 2);
//! tree.remove(meals);
//! assert!(tree.is_empty());
//! ```
use std::sync::Arc;

use serde::{Serialize, Serializer};

use crate::{
    derive::{ExampleDoc, SchemaDoc, derive_example, derive_schema},
    node::{FieldId, FieldNode, FieldPatch},
};

#[derive(Debug, Clone, Default)]
pub struct FieldTree {
    roots: Vec<Arc<FieldNode>>,
    next_id: u64,
}

impl PartialEq for FieldTree {
    /// Trees are equal when their forests are; the id counter is bookkeeping.
    fn eq(&self, other: &Self) -> bool {
        self.roots == other.roots
    }
}

impl Serialize for FieldTree {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.roots())
    }
}

impl FieldTree {
    /// An empty forest.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new default node under `parent`, or to the root forest when
    /// `parent` is `None`.
    ///
    /// Returns `None`, leaving the tree untouched, if `parent` does not
    /// resolve to a node. The parent's kind is not checked: children attached
    /// to a non-container field are kept but ignored by derivation.
    pub fn insert(&mut self, parent: Option<FieldId>) -> Option<FieldId> {
        let Some(parent) = parent else {
            let id = self.allocate_id();
            self.roots.push(Arc::new(FieldNode::new(id)));
            return Some(id);
        };

        let Some(path) = self.locate(parent) else {
            #[cfg(feature = "tracing")]
            tracing::debug!(%parent, "insert skipped, parent not found");
            return None;
        };

        let id = self.allocate_id();
        self.node_mut(&path)
            .children
            .push(Arc::new(FieldNode::new(id)));
        Some(id)
    }

    /// [`Self::insert`] followed by [`Self::update`] on the new node.
    pub fn insert_with(&mut self, parent: Option<FieldId>, patch: FieldPatch) -> Option<FieldId> {
        let id = self.insert(parent)?;
        self.update(id, patch);
        Some(id)
    }

    /// Merge `patch` into the node with `id`. Returns whether the node was
    /// found; an empty patch never modifies anything.
    pub fn update(&mut self, id: FieldId, patch: FieldPatch) -> bool {
        let Some(path) = self.locate(id) else {
            #[cfg(feature = "tracing")]
            tracing::debug!(%id, "update skipped, field not found");
            return false;
        };

        if !patch.is_empty() {
            patch.apply(self.node_mut(&path));
        }
        true
    }

    /// Detach the node with `id` together with its whole subtree. Returns
    /// the detached node, or `None` if no node matched.
    pub fn remove(&mut self, id: FieldId) -> Option<Arc<FieldNode>> {
        let Some(mut path) = self.locate(id) else {
            #[cfg(feature = "tracing")]
            tracing::debug!(%id, "remove skipped, field not found");
            return None;
        };

        let index = path.pop()?;
        let siblings = if path.is_empty() {
            &mut self.roots
        } else {
            &mut self.node_mut(&path).children
        };
        Some(siblings.remove(index))
    }

    /// Find a node anywhere in the forest.
    pub fn get(&self, id: FieldId) -> Option<&FieldNode> {
        let path = self.locate(id)?;
        let (first, rest) = path.split_first()?;
        let mut node = self.roots[*first].as_ref();
        for &index in rest {
            node = node.children[index].as_ref();
        }
        Some(node)
    }

    pub fn contains(&self, id: FieldId) -> bool {
        self.locate(id).is_some()
    }

    /// Top-level fields in order.
    pub fn roots(&self) -> impl ExactSizeIterator<Item = &FieldNode> {
        self.roots.iter().map(Arc::as_ref)
    }

    /// Every node, depth-first, parents before their children.
    pub fn iter(&self) -> impl Iterator<Item = &FieldNode> {
        let mut stack: Vec<&FieldNode> = self.roots.iter().rev().map(Arc::as_ref).collect();
        std::iter::from_fn(move || {
            let node = stack.pop()?;
            stack.extend(node.children.iter().rev().map(Arc::as_ref));
            Some(node)
        })
    }

    /// Total number of nodes at every depth.
    pub fn len(&self) -> usize {
        self.roots().map(FieldNode::subtree_size).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Whether any node, at any depth, carries a non-empty name.
    pub fn has_named_field(&self) -> bool {
        self.iter().any(|node| !node.name.is_empty())
    }

    /// See [`derive_schema`].
    pub fn schema(&self) -> SchemaDoc {
        derive_schema(self)
    }

    /// See [`derive_example`].
    pub fn example(&self) -> ExampleDoc {
        derive_example(self)
    }

    /// The derived schema, pretty-printed with two-space indentation.
    pub fn schema_preview(&self) -> String {
        // Only strings, bools, sequences and string-keyed maps: serialising
        // into a `String` cannot fail.
        serde_json::to_string_pretty(&self.schema()).expect("derived schema should be serialisable")
    }

    /// The derived example payload, pretty-printed with two-space indentation.
    pub fn example_preview(&self) -> String {
        // A `Map<String, Value>` built from integer, bool and string values
        // always serialises.
        serde_json::to_string_pretty(&self.example())
            .expect("derived example should be serialisable")
    }

    fn allocate_id(&mut self) -> FieldId {
        self.next_id += 1;
        FieldId::new(self.next_id)
    }

    /// Index path from the root forest to the node with `id`.
    fn locate(&self, id: FieldId) -> Option<Vec<usize>> {
        fn walk(nodes: &[Arc<FieldNode>], id: FieldId, path: &mut Vec<usize>) -> bool {
            for (index, node) in nodes.iter().enumerate() {
                path.push(index);
                if node.id() == id || walk(&node.children, id, path) {
                    return true;
                }
                path.pop();
            }
            false
        }

        let mut path = Vec::new();
        walk(&self.roots, id, &mut path).then_some(path)
    }

    /// Unshare and return the node at a non-empty `path` produced by
    /// [`Self::locate`].
    fn node_mut(&mut self, path: &[usize]) -> &mut FieldNode {
        let (first, rest) = path.split_first().expect("located path is never empty");
        let mut node = Arc::make_mut(&mut self.roots[*first]);
        for &index in rest {
            node = Arc::make_mut(&mut node.children[index]);
        }
        node
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::FieldKind;

    fn ids(tree: &FieldTree) -> Vec<FieldId> {
        tree.iter().map(FieldNode::id).collect()
    }

    /// `a { b { c }, d }`, `e`
    fn sample() -> (FieldTree, [FieldId; 5]) {
        let mut tree = FieldTree::new();
        let a = tree
            .insert_with(None, FieldPatch::new().name("a").kind(FieldKind::Object))
            .unwrap();
        let b = tree
            .insert_with(Some(a), FieldPatch::new().name("b").kind(FieldKind::Object))
            .unwrap();
        let c = tree.insert_with(Some(b), FieldPatch::new().name("c")).unwrap();
        let d = tree.insert_with(Some(a), FieldPatch::new().name("d")).unwrap();
        let e = tree.insert_with(None, FieldPatch::new().name("e")).unwrap();
        (tree, [a, b, c, d, e])
    }

    #[test]
    fn insert_appends_in_order_with_fresh_ids() {
        let (tree, [a, b, c, d, e]) = sample();
        assert_eq!(ids(&tree), vec![a, b, c, d, e]);
        assert_eq!(tree.roots().len(), 2);

        let a_node = tree.get(a).unwrap();
        let children: Vec<_> = a_node.children().map(|n| n.name.as_str()).collect();
        assert_eq!(children, ["b", "d"]);
    }

    #[test]
    fn inserted_node_has_default_attributes() {
        let mut tree = FieldTree::new();
        let id = tree.insert(None).unwrap();
        let node = tree.get(id).unwrap();
        assert_eq!(node.kind, FieldKind::String);
        assert_eq!(node.name, "");
        assert!(!node.required);
        assert!(!node.has_children());
    }

    #[test]
    fn insert_under_unknown_parent_is_a_no_op() {
        let (mut tree, _) = sample();
        let before = tree.clone();
        let bogus = FieldId::new(999);

        assert_eq!(tree.insert(Some(bogus)), None);
        assert_eq!(tree, before);
        assert_eq!(ids(&tree), ids(&before));
    }

    #[test]
    fn insert_accepts_children_under_scalar_kinds() {
        let (mut tree, [.., e]) = sample();
        let child = tree.insert(Some(e)).unwrap();
        assert_eq!(tree.get(e).unwrap().first_child().unwrap().id(), child);
    }

    #[test]
    fn ids_are_never_reused() {
        let (mut tree, [.., e]) = sample();
        tree.remove(e).unwrap();
        let fresh = tree.insert(None).unwrap();
        assert_ne!(fresh, e);
        assert!(fresh > e);
    }

    #[test]
    fn update_reaches_any_depth() {
        let (mut tree, [_, _, c, ..]) = sample();
        assert!(tree.update(
            c,
            FieldPatch::new().kind(FieldKind::Number).required(true).example("7")
        ));

        let node = tree.get(c).unwrap();
        assert_eq!(node.name, "c");
        assert_eq!(node.kind, FieldKind::Number);
        assert!(node.required);
        assert_eq!(node.example_override(), Some("7"));
    }

    #[test]
    fn update_with_unknown_id_changes_nothing() {
        let (mut tree, _) = sample();
        let before = tree.clone();
        assert!(!tree.update(FieldId::new(404), FieldPatch::new().name("x")));
        assert_eq!(tree, before);
    }

    #[test]
    fn empty_patch_is_idempotent() {
        let (mut tree, all) = sample();
        let before = tree.clone();
        for id in all {
            assert!(tree.update(id, FieldPatch::new()));
        }
        assert_eq!(tree, before);
        assert_eq!(tree.schema(), before.schema());
    }

    #[test]
    fn remove_drops_whole_subtree() {
        let (mut tree, [a, b, c, d, e]) = sample();
        let size = tree.get(b).unwrap().subtree_size();
        let before = tree.len();

        let removed = tree.remove(b).unwrap();

        assert_eq!(removed.id(), b);
        assert_eq!(tree.len(), before - size);
        assert!(!tree.contains(b));
        assert!(!tree.contains(c));
        assert_eq!(ids(&tree), vec![a, d, e]);
    }

    #[test]
    fn remove_root_and_unknown() {
        let (mut tree, [a, .., e]) = sample();
        assert!(tree.remove(FieldId::new(77)).is_none());
        assert_eq!(tree.len(), 5);

        tree.remove(a).unwrap();
        assert_eq!(ids(&tree), vec![e]);
        assert!(tree.remove(a).is_none());
    }

    #[test]
    fn clones_share_untouched_subtrees() {
        let (tree, [_, b, .., e]) = sample();
        let mut edited = tree.clone();
        edited.update(e, FieldPatch::new().name("renamed"));

        assert_eq!(tree.get(e).unwrap().name, "e");
        assert_eq!(edited.get(e).unwrap().name, "renamed");
        assert!(Arc::ptr_eq(&tree.roots[0], &edited.roots[0]));
        assert!(std::ptr::eq(tree.get(b).unwrap(), edited.get(b).unwrap()));
    }

    #[test]
    fn has_named_field_looks_at_every_depth() {
        let mut tree = FieldTree::new();
        assert!(!tree.has_named_field());

        let root = tree.insert(None).unwrap();
        assert!(!tree.has_named_field());

        let child = tree.insert(Some(root)).unwrap();
        tree.update(child, FieldPatch::new().name("inner"));
        assert!(tree.has_named_field());
    }

    #[test]
    fn serialises_as_nested_sequence() {
        let mut tree = FieldTree::new();
        let list = tree
            .insert_with(None, FieldPatch::new().name("tags").kind(FieldKind::Array))
            .unwrap();
        tree.insert_with(Some(list), FieldPatch::new().name("tag"));

        assert_eq!(
            serde_json::to_value(&tree).unwrap(),
            serde_json::json!([{
                "id": 1,
                "name": "tags",
                "type": "array",
                "description": "",
                "required": false,
                "children": [{
                    "id": 2,
                    "name": "tag",
                    "type": "string",
                    "description": "",
                    "required": false
                }]
            }])
        );
    }

    #[test]
    fn previews_parse_back_to_the_derived_documents() {
        let (mut tree, [_, _, c, ..]) = sample();
        tree.update(
            c,
            FieldPatch::new()
                .name("ünïcode \"quoted\"\n")
                .description("tab\there")
                .example("\u{0}"),
        );

        let schema: serde_json::Value = serde_json::from_str(&tree.schema_preview()).unwrap();
        assert_eq!(schema, serde_json::to_value(tree.schema()).unwrap());

        let example: serde_json::Value = serde_json::from_str(&tree.example_preview()).unwrap();
        assert_eq!(example, serde_json::Value::Object(tree.example()));
        assert_eq!(example["a"]["b"]["ünïcode \"quoted\"\n"], "\u{0}");
    }
}
