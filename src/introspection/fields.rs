//! Field-path selection.
//!
//! Callers narrow an introspection call with dotted paths such as
//! `properties.fill.fore_color` or `properties.line.*`. The paths are merged
//! into a prefix tree once per call and the serializer consults it at every
//! descent, so unselected branches are never extracted at all.

use std::collections::BTreeMap;

use smallvec::SmallVec;

use crate::common::{Error, Result};

/// Segment that selects every child at its level.
pub const WILDCARD: &str = "*";

/// A node of the selector prefix tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectorNode {
    /// A path ended here: the whole subtree is included.
    Include,
    /// `*`: every child at this level is included.
    Wildcard,
    /// Only the named children are included.
    Branch(BTreeMap<String, SelectorNode>),
}

impl SelectorNode {
    /// Whether everything below this node is selected.
    #[inline]
    pub fn is_total(&self) -> bool {
        matches!(self, SelectorNode::Include | SelectorNode::Wildcard)
    }

    /// Selector governing the child `key`, or `None` when the child is
    /// excluded.
    pub fn child(&self, key: &str) -> Option<&SelectorNode> {
        match self {
            SelectorNode::Include | SelectorNode::Wildcard => Some(self),
            SelectorNode::Branch(children) => children.get(key),
        }
    }

    fn insert(&mut self, segments: &[&str]) {
        let Some((first, rest)) = segments.split_first() else {
            // A terminal inclusion subsumes any more specific path.
            *self = SelectorNode::Include;
            return;
        };

        match self {
            SelectorNode::Include | SelectorNode::Wildcard => {},
            SelectorNode::Branch(_) if *first == WILDCARD => {
                // Wildcard wins over any specific sibling.
                *self = SelectorNode::Wildcard;
            },
            SelectorNode::Branch(children) => {
                children
                    .entry((*first).to_string())
                    .or_insert_with(|| SelectorNode::Branch(BTreeMap::new()))
                    .insert(rest);
            },
        }
    }
}

/// Parsed set of field paths restricting an introspection call.
///
/// # Examples
///
/// ```rust
/// use pptx_introspect::introspection::FieldSelector;
///
/// let selector = FieldSelector::parse(["properties.fill.type", "properties.line.*"]).unwrap();
/// let props = selector.root().child("properties").unwrap();
/// assert!(props.child("fill").is_some());
/// assert!(props.child("name").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSelector {
    root: SelectorNode,
}

impl FieldSelector {
    /// Parse dotted paths into a selector.
    ///
    /// An empty list places no restriction on the output. Any malformed path
    /// rejects the whole selector.
    pub fn parse<I, S>(paths: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut root = SelectorNode::Branch(BTreeMap::new());
        let mut any = false;

        for path in paths {
            let path = path.as_ref();
            let segments = split_path(path)?;
            root.insert(&segments);
            any = true;
        }

        if !any {
            root = SelectorNode::Include;
        }
        Ok(Self { root })
    }

    /// Selector that includes everything.
    pub fn all() -> Self {
        Self {
            root: SelectorNode::Include,
        }
    }

    #[inline]
    pub fn root(&self) -> &SelectorNode {
        &self.root
    }

    /// Whether the selector places no restriction at all.
    #[inline]
    pub fn is_unrestricted(&self) -> bool {
        self.root.is_total()
    }

    /// Whether a full dotted path is selected.
    pub fn matches(&self, path: &str) -> bool {
        let mut node = &self.root;
        for segment in path.split('.') {
            if node.is_total() {
                return true;
            }
            match node.child(segment) {
                Some(next) => node = next,
                None => return false,
            }
        }
        true
    }
}

fn split_path(path: &str) -> Result<SmallVec<[&str; 4]>> {
    let malformed = |reason: &str| Error::MalformedFieldPath {
        path: path.to_string(),
        reason: reason.to_string(),
    };

    let segments: SmallVec<[&str; 4]> = path.split('.').collect();
    let last = segments.len() - 1;

    for (i, segment) in segments.iter().enumerate() {
        if segment.is_empty() {
            return Err(malformed("empty segment"));
        }
        if *segment == WILDCARD {
            if i != last {
                return Err(malformed("'*' is only allowed as the final segment"));
            }
            continue;
        }
        if !segment
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            return Err(malformed("segment contains disallowed characters"));
        }
    }

    Ok(segments)
}
