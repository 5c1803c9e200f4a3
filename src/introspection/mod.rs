//! Depth-limited, cycle-safe introspection of object graphs.
//!
//! Two entry points are provided:
//!
//! - [`to_dict`] serializes one object and everything reachable from it into
//!   an ordered JSON mapping, bounded by a depth budget and narrowed by
//!   optional field paths. Failures of individual accessors become error
//!   stubs in the output; the call itself fails only for a malformed field
//!   path.
//! - [`get_tree`] builds a lightweight discovery tree whose nodes carry
//!   access paths. A path can later be fed to [`resolve_path`] to fetch the
//!   object for a full [`to_dict`] call.
//!
//! # Example
//!
//! ```rust
//! use pptx_introspect::introspection::{Fields, Introspect, IntrospectionOptions, to_dict};
//! use pptx_introspect::Result;
//!
//! struct Note {
//!     text: String,
//! }
//!
//! impl Introspect for Note {
//!     fn type_name(&self) -> &'static str {
//!         "Note"
//!     }
//!
//!     fn properties(&self) -> Result<Fields<'_>> {
//!         Ok(Fields::new().with("text", self.text.as_str()))
//!     }
//! }
//!
//! let note = Note { text: "hello".into() };
//! let output = to_dict(&note, &IntrospectionOptions::default())?;
//! assert_eq!(output["properties"]["text"], "hello");
//! # Ok::<(), pptx_introspect::Error>(())
//! ```

mod context;
pub mod extract;
pub mod fields;
mod format;
pub mod node;
pub mod options;
pub mod path;
mod serialize;
pub mod tree;

pub use context::WalkStats;
pub use extract::{AiSummary, EnumValue, Field, Fields, Introspect, PropertyValue, TreeChild};
pub use fields::{FieldSelector, SelectorNode};
pub use node::{CollectionKind, CollectionSummary, SerializedNode};
pub use options::{IntrospectionOptions, TreeOptions};
pub use path::PathSegment;
pub use tree::{Geometry, TreeNode, build_tree};

use tracing::debug;

use crate::common::Result;

use context::SerializationContext;
use serialize::{Selection, serialize_object};

/// Serialize `object` under `options`.
///
/// # Errors
///
/// Returns [`Error::MalformedFieldPath`](crate::Error::MalformedFieldPath)
/// when `options.fields` holds a malformed path. Nothing else fails.
pub fn to_dict(object: &dyn Introspect, options: &IntrospectionOptions) -> Result<SerializedNode> {
    let selector = options
        .fields
        .as_deref()
        .map(|paths| FieldSelector::parse(paths))
        .transpose()?;

    let mut ctx = SerializationContext::new(options);
    let selection = Selection::top_level(selector.as_ref().map(FieldSelector::root));
    let node = serialize_object(object, &mut ctx, options.include_relationships, selection);

    let stats = ctx.stats();
    debug!(
        object_type = object.type_name(),
        objects = stats.objects,
        truncated = stats.truncated,
        circular = stats.circular,
        errors = stats.errors,
        "introspection finished"
    );
    Ok(node)
}

/// [`to_dict`] rendered as pretty-printed JSON text.
pub fn to_json_string(object: &dyn Introspect, options: &IntrospectionOptions) -> Result<String> {
    Ok(serde_json::to_string_pretty(&to_dict(object, options)?)?)
}

/// Build the discovery tree of `object`, rooted at its own access path.
pub fn get_tree(object: &dyn Introspect, options: &TreeOptions) -> TreeNode {
    let max_depth = options
        .max_depth
        .unwrap_or_else(|| object.default_tree_depth());
    build_tree(object, max_depth, &object.root_access_path())
}

/// Locate the object an access path names below `root`.
///
/// Returns `Ok(None)` when the path is well formed but leads nowhere.
pub fn resolve_path<'a>(root: &'a dyn Introspect, path: &str) -> Result<Option<&'a dyn Introspect>> {
    path::resolve(root, path)
}

/// Method-call sugar over the free functions of this module.
pub trait IntrospectExt: Introspect + Sized {
    fn to_dict(&self, options: &IntrospectionOptions) -> Result<SerializedNode> {
        to_dict(self, options)
    }

    fn to_json_string(&self, options: &IntrospectionOptions) -> Result<String> {
        to_json_string(self, options)
    }

    /// Discovery tree; `None` uses the object's default depth.
    fn get_tree(&self, max_depth: Option<usize>) -> TreeNode {
        get_tree(self, &TreeOptions { max_depth })
    }

    fn resolve_path(&self, path: &str) -> Result<Option<&dyn Introspect>> {
        resolve_path(self, path)
    }
}

impl<T: Introspect> IntrospectExt for T {}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::common::{Error, Length};
    use proptest::prelude::*;
    use serde_json::{Value, json};

    /// Node of a synthetic graph that may point back at another node.
    struct Node<'a> {
        name: &'static str,
        next: Cell<Option<&'a Node<'a>>>,
    }

    impl<'a> Node<'a> {
        fn new(name: &'static str) -> Self {
            Self {
                name,
                next: Cell::new(None),
            }
        }
    }

    impl Introspect for Node<'_> {
        fn type_name(&self) -> &'static str {
            "Node"
        }

        fn properties(&self) -> Result<Fields<'_>> {
            Ok(Fields::new()
                .with("name", self.name)
                .with("next", self.next.get().map(|n| n as &dyn Introspect)))
        }
    }

    struct Flaky;

    impl Introspect for Flaky {
        fn type_name(&self) -> &'static str {
            "Flaky"
        }

        fn properties(&self) -> Result<Fields<'_>> {
            Ok(Fields::new().with("a", 1).with_result::<i64>(
                "b",
                Err(Error::unavailable("b", "accessor raised")),
            ))
        }
    }

    struct Item {
        index: usize,
        width: Length,
    }

    impl Introspect for Item {
        fn type_name(&self) -> &'static str {
            "Item"
        }

        fn properties(&self) -> Result<Fields<'_>> {
            Ok(Fields::new()
                .with("index", self.index)
                .with("width", self.width)
                .with_private("_cache_key", format!("item-{}", self.index)))
        }
    }

    struct Bag {
        items: Vec<Item>,
        label: &'static str,
    }

    impl Bag {
        fn with_items(count: usize) -> Self {
            Self {
                items: (0..count)
                    .map(|index| Item {
                        index,
                        width: Length::from_inches(index as f64),
                    })
                    .collect(),
                label: "bag",
            }
        }
    }

    impl Introspect for Bag {
        fn type_name(&self) -> &'static str {
            "Bag"
        }

        fn properties(&self) -> Result<Fields<'_>> {
            Ok(Fields::new()
                .with("label", self.label)
                .with("items", PropertyValue::objects(&self.items)))
        }

        fn tree_children(&self) -> Vec<TreeChild<'_>> {
            self.items
                .iter()
                .enumerate()
                .map(|(i, item)| TreeChild::indexed("items", i, item))
                .collect()
        }

        fn root_access_path(&self) -> String {
            "bag".to_string()
        }
    }

    /// Number of nested object levels below `value`.
    fn object_depth(value: &Value) -> usize {
        match value {
            Value::Object(map) => {
                let below = map.values().map(object_depth).max().unwrap_or(0);
                if map.contains_key("_object_type") && map.contains_key("properties") {
                    below + 1
                } else {
                    below
                }
            },
            Value::Array(items) => items.iter().map(object_depth).max().unwrap_or(0),
            _ => 0,
        }
    }

    fn count_key(value: &Value, key: &str) -> usize {
        match value {
            Value::Object(map) => {
                usize::from(map.contains_key(key)) + map.values().map(|v| count_key(v, key)).sum::<usize>()
            },
            Value::Array(items) => items.iter().map(|v| count_key(v, key)).sum(),
            _ => 0,
        }
    }

    fn chain<'a>(len: usize) -> Vec<Node<'a>> {
        (0..len).map(|_| Node::new("link")).collect()
    }

    fn link<'a>(nodes: &'a [Node<'a>]) {
        for pair in nodes.windows(2) {
            pair[0].next.set(Some(&pair[1]));
        }
    }

    #[test]
    fn test_serialization_is_idempotent() {
        let bag = Bag::with_items(3);
        let options = IntrospectionOptions::default();
        let first = to_json_string(&bag, &options).unwrap();
        let second = to_json_string(&bag, &options).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_mutual_reference_yields_one_circular_stub() {
        let a = Node::new("a");
        let b = Node::new("b");
        a.next.set(Some(&b));
        b.next.set(Some(&a));

        let out = Value::Object(to_dict(&a, &IntrospectionOptions::new().with_max_depth(10)).unwrap());
        assert_eq!(count_key(&out, "circular_reference"), 1);
        assert_eq!(
            out["properties"]["next"]["properties"]["next"],
            json!({
                "circular_reference": true,
                "description": "Circular reference to Node (object #0)",
            })
        );
    }

    #[test]
    fn test_self_reference_terminates() {
        let a = Node::new("a");
        a.next.set(Some(&a));
        let out = to_dict(&a, &IntrospectionOptions::default()).unwrap();
        assert_eq!(out["properties"]["next"]["circular_reference"], json!(true));
    }

    #[test]
    fn test_truncation_stub_at_depth_limit() {
        let nodes = chain(4);
        link(&nodes);
        let out = to_dict(&nodes[0], &IntrospectionOptions::new().with_max_depth(2)).unwrap();
        assert_eq!(
            out["properties"]["next"]["properties"]["next"],
            json!({"truncated": true, "reason": "Max depth reached for Node"})
        );
    }

    #[test]
    fn test_failing_property_becomes_error_stub() {
        let out = to_dict(&Flaky, &IntrospectionOptions::default()).unwrap();
        assert_eq!(out["properties"]["a"], json!(1));
        assert_eq!(out["properties"]["b"]["error_in"], json!("b"));
        assert!(
            out["properties"]["b"]["message"]
                .as_str()
                .unwrap()
                .contains("accessor raised")
        );
    }

    #[test]
    fn test_depth_zero_returns_single_stub() {
        let out = to_dict(&Bag::with_items(2), &IntrospectionOptions::new().with_max_depth(0)).unwrap();
        assert_eq!(
            Value::Object(out),
            json!({"truncated": true, "reason": "Max depth reached for Bag"})
        );
    }

    #[test]
    fn test_unknown_field_path_selects_nothing() {
        let bag = Bag::with_items(2);
        let out = to_dict(&bag, &IntrospectionOptions::new().with_fields(["nonexistent.path"])).unwrap();
        assert_eq!(out.keys().collect::<Vec<_>>(), vec!["_object_type"]);

        let out = to_dict(&bag, &IntrospectionOptions::new().with_fields(["properties.nonexistent"]))
            .unwrap();
        assert_eq!(out["properties"], json!({}));
    }

    #[test]
    fn test_field_selection() {
        let bag = Bag::with_items(2);

        let only_label = to_dict(&bag, &IntrospectionOptions::new().with_fields(["properties.label"]))
            .unwrap();
        assert_eq!(only_label["properties"], json!({"label": "bag"}));

        let all_props = to_dict(&bag, &IntrospectionOptions::new().with_fields(["properties.*"])).unwrap();
        let unrestricted = to_dict(&bag, &IntrospectionOptions::default()).unwrap();
        assert_eq!(all_props["properties"], unrestricted["properties"]);

        let empty = to_dict(&bag, &IntrospectionOptions::new().with_fields(Vec::<String>::new())).unwrap();
        assert_eq!(empty, unrestricted);
    }

    #[test]
    fn test_malformed_field_path_is_the_only_failure() {
        let result = to_dict(&Flaky, &IntrospectionOptions::new().with_fields(["properties..a"]));
        assert!(matches!(result, Err(Error::MalformedFieldPath { .. })));
    }

    #[test]
    fn test_private_fields_follow_option() {
        let bag = Bag::with_items(1);
        let public = to_dict(&bag, &IntrospectionOptions::default()).unwrap();
        assert!(public["properties"]["items"][0]["properties"].get("_cache_key").is_none());

        let private = to_dict(&bag, &IntrospectionOptions::new().with_private(true)).unwrap();
        assert_eq!(
            private["properties"]["items"][0]["properties"]["_cache_key"],
            json!("item-0")
        );
    }

    #[test]
    fn test_collection_summary_and_expansion() {
        let bag = Bag::with_items(5);

        let collapsed =
            to_dict(&bag, &IntrospectionOptions::new().with_expand_collections(false)).unwrap();
        assert_eq!(
            collapsed["properties"]["items"],
            json!({"_collection_summary": {"count": 5, "item_type": "Item", "collection_type": "list"}})
        );

        let expanded = to_dict(&bag, &IntrospectionOptions::default()).unwrap();
        let items = expanded["properties"]["items"].as_array().unwrap();
        assert_eq!(items.len(), 5);
        for (i, item) in items.iter().enumerate() {
            assert_eq!(item["_object_type"], json!("Item"));
            assert_eq!(item["properties"]["index"], json!(i));
            assert_eq!(item["properties"]["width"]["_object_type"], json!("Length"));
        }
    }

    #[test]
    fn test_relationships_only_at_top_level() {
        let bag = Bag::with_items(1);
        let out = to_dict(&bag, &IntrospectionOptions::default()).unwrap();
        assert_eq!(out["relationships"], json!({}));
        assert!(out["properties"]["items"][0].get("relationships").is_none());

        let without = to_dict(&bag, &IntrospectionOptions::new().with_relationships(false)).unwrap();
        assert!(without.get("relationships").is_none());
    }

    #[test]
    fn test_tree_paths_are_stable_and_resolvable() {
        let bag = Bag::with_items(3);
        let first = get_tree(&bag, &TreeOptions::default());
        let second = bag.get_tree(None);
        let paths: Vec<_> = first.iter().map(|n| n.access_path.clone()).collect();
        let again: Vec<_> = second.iter().map(|n| n.access_path.clone()).collect();
        assert_eq!(paths, again);
        assert_eq!(paths[2], "bag.items[1]");

        let resolved = resolve_path(&bag, &paths[2]).unwrap().unwrap();
        let out = to_dict(resolved, &IntrospectionOptions::default()).unwrap();
        assert_eq!(out["properties"]["index"], json!(1));

        assert!(resolve_path(&bag, "bag.items[9]").unwrap().is_none());
        assert!(resolve_path(&bag, "bag.items[x]").is_err());
    }

    proptest! {
        #[test]
        fn prop_depth_bound(len in 1usize..8, depth in 0usize..8) {
            let nodes = chain(len);
            link(&nodes);
            let out = Value::Object(
                to_dict(&nodes[0], &IntrospectionOptions::new().with_max_depth(depth)).unwrap(),
            );
            prop_assert!(object_depth(&out) <= depth);
            let truncated = count_key(&out, "truncated");
            prop_assert_eq!(truncated, usize::from(len > depth));
        }
    }
}
