//! Discovery-mode tree building.
//!
//! A tree node is a lightweight view of an object: its identity, the access
//! path that leads to it, its bounding box and a one-line content summary.
//! No property extraction happens here.

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use crate::common::Length;

use super::extract::Introspect;
use super::path::join;

/// Bounding box and rotation of a positioned object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    pub left: Length,
    pub top: Length,
    pub width: Length,
    pub height: Length,
    /// Clockwise rotation in degrees
    pub rotation: f64,
}

impl Geometry {
    pub fn new(left: Length, top: Length, width: Length, height: Length) -> Self {
        Self {
            left,
            top,
            width,
            height,
            rotation: 0.0,
        }
    }

    pub fn with_rotation(mut self, rotation: f64) -> Self {
        self.rotation = rotation;
        self
    }

    /// Rotation rendered for display, e.g. `45.0°`.
    pub fn rotation_label(&self) -> String {
        if self.rotation == 0.0 {
            "0°".to_string()
        } else {
            format!("{:.1}°", self.rotation)
        }
    }
}

impl Serialize for Geometry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Geometry", 5)?;
        state.serialize_field("left", &self.left.to_string())?;
        state.serialize_field("top", &self.top.to_string())?;
        state.serialize_field("width", &self.width.to_string())?;
        state.serialize_field("height", &self.height.to_string())?;
        state.serialize_field("rotation", &self.rotation_label())?;
        state.end()
    }
}

/// One node of a discovery tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TreeNode {
    #[serde(rename = "_object_type")]
    pub object_type: &'static str,
    #[serde(rename = "_identity")]
    pub identity: Map<String, Value>,
    pub access_path: String,
    pub geometry: Option<Geometry>,
    pub content_summary: String,
    /// `None` when the depth limit was reached or the object has no children
    pub children: Option<Vec<TreeNode>>,
}

impl TreeNode {
    /// Number of nodes in this subtree, including this one.
    pub fn node_count(&self) -> usize {
        1 + self
            .children
            .iter()
            .flatten()
            .map(TreeNode::node_count)
            .sum::<usize>()
    }

    /// Depth-first iterator over this subtree.
    pub fn iter(&self) -> impl Iterator<Item = &TreeNode> {
        let mut stack = vec![self];
        std::iter::from_fn(move || {
            let node = stack.pop()?;
            if let Some(children) = &node.children {
                stack.extend(children.iter().rev());
            }
            Some(node)
        })
    }

    /// Render as a JSON value.
    pub fn to_value(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

/// Build the discovery tree of `object`.
///
/// `access_path` is the root's own path; children extend it with their
/// segments. Children are listed only while the depth is below `max_depth`,
/// so `max_depth == 0` yields the root node alone.
pub fn build_tree(object: &dyn Introspect, max_depth: usize, access_path: &str) -> TreeNode {
    build_node(object, access_path.to_string(), 0, max_depth)
}

fn build_node(
    object: &dyn Introspect,
    access_path: String,
    depth: usize,
    max_depth: usize,
) -> TreeNode {
    let children = if depth < max_depth {
        let nodes: Vec<TreeNode> = object
            .tree_children()
            .into_iter()
            .map(|child| {
                let path = join(&access_path, &child.segment);
                build_node(child.object, path, depth + 1, max_depth)
            })
            .collect();
        (!nodes.is_empty()).then_some(nodes)
    } else {
        None
    };

    TreeNode {
        object_type: object.type_name(),
        identity: object.tree_identity(),
        access_path,
        geometry: object.tree_geometry(),
        content_summary: object.content_summary(),
        children,
    }
}
